use crate::core::data::viewport::Viewport;

/// Plane-space distance moved by one pan step.
pub const PAN_STEP: f64 = 0.01;

/// A discrete user intent produced by the display and consumed exactly
/// once by the render thread.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    /// Positive units zoom out, negative units zoom in.
    Zoom(i32),
    Reset,
}

impl InputEvent {
    pub fn apply(self, viewport: &mut Viewport) {
        match self {
            Self::PanUp => viewport.translate(0.0, PAN_STEP),
            Self::PanDown => viewport.translate(0.0, -PAN_STEP),
            Self::PanRight => viewport.translate(PAN_STEP, 0.0),
            Self::PanLeft => viewport.translate(-PAN_STEP, 0.0),
            Self::Zoom(units) => viewport.zoom(units),
            Self::Reset => viewport.reset(),
        }
    }
}
