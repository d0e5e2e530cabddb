use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelToComplexCoordsError {
    #[error("plane index ({i}, {j}) is outside the {resolution}x{resolution} sample grid")]
    PointOutsideViewport { i: u32, j: u32, resolution: u32 },
}

/// Maps plane indices to a point in the viewport's square region.
///
/// `i` grows towards `+re` and `j` towards `+im`; (0, 0) is the corner at
/// `(center_x - size/2, center_y - size/2)`. The opposite edge is never
/// sampled, so index `resolution - 1` lands one pixel step short of it.
pub fn pixel_to_complex_coords(
    i: u32,
    j: u32,
    viewport: Viewport,
    resolution: u32,
) -> Result<Complex, PixelToComplexCoordsError> {
    if i >= resolution || j >= resolution {
        return Err(PixelToComplexCoordsError::PointOutsideViewport { i, j, resolution });
    }

    let size = viewport.size();
    let n = f64::from(resolution);
    let real = viewport.center_x() - size / 2.0 + size * f64::from(i) / n;
    let imag = viewport.center_y() - size / 2.0 + size * f64::from(j) / n;

    Ok(Complex { real, imag })
}
