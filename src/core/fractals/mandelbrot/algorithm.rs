use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Number of iterations before the orbit of `c0` leaves the escape radius.
///
/// The orbit starts at `z = c0` and follows `z = z² + c0`. Returns
/// `max_iterations` when the orbit stays bounded, so the result is always
/// in `0..=max_iterations`. A point exactly on the radius has not escaped.
#[must_use]
pub fn escape_time(c0: Complex, max_iterations: u32, escape_radius: f64) -> u32 {
    let mut z = c0;

    for iteration in 0..max_iterations {
        if z.magnitude() > escape_radius {
            return iteration;
        }
        z = z * z + c0;
    }

    max_iterations
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    config: RenderConfig,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, config: RenderConfig) -> Self {
        Self { viewport, config }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> RenderConfig {
        self.config
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn resolution(&self) -> u32 {
        self.config.resolution()
    }

    // Buffer rows run top to bottom while the plane index `j` runs bottom
    // to top, so row `y` samples plane index `resolution - 1 - y`.
    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let resolution = self.config.resolution();
        let j = resolution
            .checked_sub(1)
            .and_then(|last| last.checked_sub(pixel.y))
            .ok_or(PixelToComplexCoordsError::PointOutsideViewport {
                i: pixel.x,
                j: pixel.y,
                resolution,
            })?;

        let c0 = pixel_to_complex_coords(pixel.x, j, self.viewport, resolution)?;

        Ok(escape_time(
            c0,
            self.config.max_iterations(),
            self.config.escape_radius(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        for max in [1, 10, 255, 1000] {
            assert_eq!(escape_time(Complex::new(0.0, 0.0), max, 2.0), max);
        }
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        for max in [1, 2, 255] {
            assert!(escape_time(Complex::new(5.0, 5.0), max, 2.0) <= 1);
        }
    }

    #[test]
    fn test_point_on_radius_does_not_escape() {
        // -2 maps to 2 and stays there; |z| == 2 is not outside the radius
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 255, 2.0), 255);
    }

    #[test]
    fn test_known_escape_times() {
        // 1 -> 2 -> 5
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 255, 2.0), 2);
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), 255, 2.0), 255);
        assert_eq!(escape_time(Complex::new(-0.95, -1.45), 255, 2.0), 1);
    }

    #[test]
    fn test_escape_time_stays_within_bounds() {
        let max = 50;
        for step_re in -12..=12 {
            for step_im in -12..=12 {
                let c = Complex::new(f64::from(step_re) * 0.2, f64::from(step_im) * 0.2);
                let t = escape_time(c, max, 2.0);
                assert!(t <= max, "{c:?} gave {t}");
            }
        }
    }

    #[test]
    fn test_compute_flips_rows() {
        let config = RenderConfig::new(8, 255, 2.0).unwrap();
        let algorithm = MandelbrotAlgorithm::new(Viewport::default(), config);

        // bottom buffer row samples the lowest plane row (im = -1.45)
        for x in 0..8 {
            assert_eq!(algorithm.compute(Point { x, y: 7 }), Ok(1));
        }
        // top-right buffer pixel sits inside the set
        assert_eq!(algorithm.compute(Point { x: 7, y: 0 }), Ok(255));
    }

    #[test]
    fn test_compute_outside_grid_fails() {
        let config = RenderConfig::new(8, 10, 2.0).unwrap();
        let algorithm = MandelbrotAlgorithm::new(Viewport::default(), config);

        assert!(algorithm.compute(Point { x: 8, y: 0 }).is_err());
        assert!(algorithm.compute(Point { x: 0, y: 8 }).is_err());
    }
}
