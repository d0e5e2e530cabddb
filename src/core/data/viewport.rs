use thiserror::Error;

pub const DEFAULT_CENTER_X: f64 = -0.5;
pub const DEFAULT_CENTER_Y: f64 = -1.0;
pub const DEFAULT_SIZE: f64 = 0.9;

/// Smallest plane width a zoom can shrink the viewport to.
pub const MIN_VIEWPORT_SIZE: f64 = 1e-6;

/// Plane-space change applied per zoom unit.
pub const ZOOM_STEP: f64 = 0.01;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport center must be finite: ({center_x}, {center_y})")]
    InvalidCenter { center_x: f64, center_y: f64 },
    #[error("viewport size must be finite and positive: {size}")]
    InvalidSize { size: f64 },
}

/// The square region of the complex plane currently rendered.
///
/// `size` is the plane width (and height) spanned by the image. It stays
/// strictly positive: construction rejects anything else and zooming is
/// clamped at [`MIN_VIEWPORT_SIZE`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center_x: f64,
    center_y: f64,
    size: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center_x: DEFAULT_CENTER_X,
            center_y: DEFAULT_CENTER_Y,
            size: DEFAULT_SIZE,
        }
    }
}

impl Viewport {
    pub fn new(center_x: f64, center_y: f64, size: f64) -> Result<Self, ViewportError> {
        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(ViewportError::InvalidCenter { center_x, center_y });
        }

        if !size.is_finite() || size <= 0.0 {
            return Err(ViewportError::InvalidSize { size });
        }

        Ok(Self {
            center_x,
            center_y,
            size,
        })
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center_x += dx;
        self.center_y += dy;
    }

    /// Grows the viewport by `ZOOM_STEP` per unit; negative units shrink it.
    pub fn zoom(&mut self, units: i32) {
        let size = self.size + ZOOM_STEP * f64::from(units);
        self.size = size.max(MIN_VIEWPORT_SIZE);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport() {
        let viewport = Viewport::default();

        assert_eq!(viewport.center_x(), -0.5);
        assert_eq!(viewport.center_y(), -1.0);
        assert_eq!(viewport.size(), 0.9);
    }

    #[test]
    fn test_new_valid() {
        let viewport = Viewport::new(0.25, 0.5, 2.0).unwrap();

        assert_eq!(viewport.center_x(), 0.25);
        assert_eq!(viewport.center_y(), 0.5);
        assert_eq!(viewport.size(), 2.0);
    }

    #[test]
    fn test_new_rejects_non_positive_size() {
        assert_eq!(
            Viewport::new(0.0, 0.0, 0.0),
            Err(ViewportError::InvalidSize { size: 0.0 })
        );
        assert_eq!(
            Viewport::new(0.0, 0.0, -1.0),
            Err(ViewportError::InvalidSize { size: -1.0 })
        );
    }

    #[test]
    fn test_new_rejects_non_finite_values() {
        assert!(matches!(
            Viewport::new(f64::NAN, 0.0, 1.0),
            Err(ViewportError::InvalidCenter { .. })
        ));
        assert!(matches!(
            Viewport::new(0.0, f64::INFINITY, 1.0),
            Err(ViewportError::InvalidCenter { .. })
        ));
        assert!(matches!(
            Viewport::new(0.0, 0.0, f64::INFINITY),
            Err(ViewportError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_translate_and_back_restores_center() {
        let mut viewport = Viewport::default();

        viewport.translate(0.0, 0.01);
        assert_ne!(viewport.center_y(), -1.0);

        viewport.translate(0.0, -0.01);
        assert_eq!(viewport.center_y(), -1.0);
        assert_eq!(viewport.center_x(), -0.5);
    }

    #[test]
    fn test_zoom_out_grows_size() {
        let mut viewport = Viewport::default();

        viewport.zoom(3);

        assert!((viewport.size() - 0.93).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_in_then_out_restores_size() {
        let mut viewport = Viewport::default();

        viewport.zoom(-3);
        viewport.zoom(3);

        assert_eq!(viewport.size(), 0.9);
    }

    #[test]
    fn test_zoom_is_clamped_at_minimum_size() {
        let mut viewport = Viewport::default();

        viewport.zoom(-1000);

        assert_eq!(viewport.size(), MIN_VIEWPORT_SIZE);

        for _ in 0..10 {
            viewport.zoom(-1);
        }

        assert_eq!(viewport.size(), MIN_VIEWPORT_SIZE);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut viewport = Viewport::new(1.0, 2.0, 3.0).unwrap();
        viewport.translate(0.5, -0.5);
        viewport.zoom(-7);

        viewport.reset();

        assert_eq!(viewport, Viewport::default());
    }
}
