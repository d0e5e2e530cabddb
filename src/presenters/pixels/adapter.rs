use crate::controllers::interactive::{InteractiveControllerPresenterPort, RenderEvent};
use crate::input::gui::events::GuiEvent;
use std::sync::{Mutex, PoisonError};
use winit::event_loop::EventLoopProxy;

/// Thread-safe mailbox between the render thread and the UI thread.
///
/// Only the newest event is kept; the UI thread is woken through the
/// event loop proxy and takes it on its next pass.
pub struct PixelsAdapter {
    render_event: Mutex<Option<RenderEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl InteractiveControllerPresenterPort for PixelsAdapter {
    fn present(&self, event: RenderEvent) {
        *self
            .render_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(event);

        if self.event_loop_proxy.send_event(GuiEvent::Wake).is_err() {
            tracing::debug!("event loop closed, dropping wake-up");
        }
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            render_event: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn take_render_event(&self) -> Option<RenderEvent> {
        self.render_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
