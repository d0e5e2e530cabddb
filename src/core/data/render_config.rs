use thiserror::Error;

pub const DEFAULT_RESOLUTION: u32 = 512;
pub const DEFAULT_MAX_ITERATIONS: u32 = 255;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum RenderConfigError {
    #[error("resolution must be greater than zero")]
    ZeroResolution,
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("escape radius must be finite and positive: {0}")]
    InvalidEscapeRadius(f64),
}

/// Fixed rendering parameters for the lifetime of the process.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
    resolution: u32,
    max_iterations: u32,
    escape_radius: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
        }
    }
}

impl RenderConfig {
    pub fn new(
        resolution: u32,
        max_iterations: u32,
        escape_radius: f64,
    ) -> Result<Self, RenderConfigError> {
        if resolution == 0 {
            return Err(RenderConfigError::ZeroResolution);
        }

        if max_iterations == 0 {
            return Err(RenderConfigError::ZeroMaxIterations);
        }

        if !escape_radius.is_finite() || escape_radius <= 0.0 {
            return Err(RenderConfigError::InvalidEscapeRadius(escape_radius));
        }

        Ok(Self {
            resolution,
            max_iterations,
            escape_radius,
        })
    }

    /// Width and height of the square image in pixels.
    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }
}
