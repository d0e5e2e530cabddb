use crate::controllers::interactive::{FrameData, InteractiveControllerPresenterPort};
use egui::Context as EguiContext;
use pixels::TextureError;
use std::sync::Arc;

pub trait GuiPresenterPort {
    /// The sink handed to the interactive controller.
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;

    /// Takes the newest render event, returning whether the display changed.
    fn poll(&mut self) -> bool;

    fn current_frame(&self) -> Option<&FrameData>;
    fn last_error(&self) -> Option<&str>;

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError>;
}
