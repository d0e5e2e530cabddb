use crate::controllers::interactive::events::render::RenderEvent;

/// Receives every completed render pass from the render thread.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
