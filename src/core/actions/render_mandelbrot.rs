use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::{BandedColourMap, BandedColourMapError};
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderMandelbrotError {
    #[error("fractal generation failed: {0}")]
    Algorithm(#[from] PixelToComplexCoordsError),
    #[error(transparent)]
    PixelBuffer(#[from] GeneratePixelBufferError<BandedColourMapError>),
}

/// A rendered frame together with the wall-clock time the render took.
#[derive(Debug)]
pub struct TimedFrame {
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}

/// Renders one complete frame of the viewport.
#[tracing::instrument(
    skip_all,
    fields(
        center_x = viewport.center_x(),
        center_y = viewport.center_y(),
        size = viewport.size(),
        resolution = config.resolution(),
    )
)]
pub fn render_mandelbrot(
    viewport: Viewport,
    config: RenderConfig,
) -> Result<PixelBuffer, RenderMandelbrotError> {
    let algorithm = MandelbrotAlgorithm::new(viewport, config);
    let escape_times = generate_fractal(&algorithm)?;

    let colour_map = BandedColourMap::new(config.max_iterations());
    let pixel_buffer = generate_pixel_buffer(escape_times, &colour_map, config.resolution())?;

    Ok(pixel_buffer)
}

/// Same as [`render_mandelbrot`], also reporting how long the render took.
pub fn render_mandelbrot_timed(
    viewport: Viewport,
    config: RenderConfig,
) -> Result<TimedFrame, RenderMandelbrotError> {
    let start = Instant::now();
    let pixel_buffer = render_mandelbrot(viewport, config)?;

    Ok(TimedFrame {
        pixel_buffer,
        render_duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    const ESCAPED_AFTER_ONE: Colour = Colour { r: 175, g: 2, b: 0 };

    #[test]
    fn test_small_render_matches_escape_grid() {
        let config = RenderConfig::new(8, 255, 2.0).unwrap();

        let frame = render_mandelbrot(Viewport::default(), config).unwrap();

        assert_eq!(frame.resolution(), 8);
        assert_eq!(frame.buffer_size(), 8 * 8 * 3);
        // top buffer row is plane row j = 7: escape times 3, 4, 4, 11, 10, 21, 14, max
        let top_row: Vec<Colour> = (0..8)
            .map(|x| frame.pixel(Point { x, y: 0 }).unwrap())
            .collect();
        assert_eq!(top_row[0], Colour { r: 175, g: 6, b: 0 });
        assert_eq!(top_row[3], Colour { r: 175, g: 22, b: 0 });
        assert_eq!(top_row[7], Colour::BLACK);
    }

    #[test]
    fn test_default_render_has_escaping_border_and_black_interior() {
        let config = RenderConfig::default();
        let resolution = config.resolution();

        let frame = render_mandelbrot(Viewport::default(), config).unwrap();

        assert_eq!(frame.buffer_size(), (resolution * resolution * 3) as usize);

        // bottom edge (im = -1.45) and left edge of the lower half escape at once
        for x in 0..resolution {
            assert_eq!(
                frame.pixel(Point { x, y: resolution - 1 }).unwrap(),
                ESCAPED_AFTER_ONE
            );
        }
        for y in (resolution - 100)..resolution {
            assert_eq!(frame.pixel(Point { x: 0, y }).unwrap(), ESCAPED_AFTER_ONE);
        }

        // upper-right corner lies inside the set
        assert_eq!(
            frame.pixel(Point { x: resolution - 1, y: 0 }).unwrap(),
            Colour::BLACK
        );

        let black_pixels = frame
            .buffer()
            .chunks_exact(3)
            .filter(|rgb| rgb.iter().all(|&channel| channel == 0))
            .count();
        assert!(black_pixels > 1000, "expected a bounded region, got {black_pixels}");
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = RenderConfig::new(16, 64, 2.0).unwrap();
        let viewport = Viewport::new(-0.75, 0.1, 0.5).unwrap();

        let first = render_mandelbrot(viewport, config).unwrap();
        let second = render_mandelbrot(viewport, config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_timed_render_returns_the_same_frame() {
        let config = RenderConfig::new(16, 64, 2.0).unwrap();
        let viewport = Viewport::default();

        let timed = render_mandelbrot_timed(viewport, config).unwrap();

        assert_eq!(timed.pixel_buffer, render_mandelbrot(viewport, config).unwrap());
        assert!(timed.render_duration < Duration::from_secs(5));
    }
}
