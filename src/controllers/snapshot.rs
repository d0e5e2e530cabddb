use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_mandelbrot::{
    RenderMandelbrotError, render_mandelbrot_timed,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;
use std::error::Error as StdError;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WriteSnapshotError<E: StdError + 'static> {
    #[error("no frame has been rendered yet")]
    NothingRendered,
    #[error("failed to save frame: {0}")]
    Present(#[source] E),
}

/// Renders a single frame without a window and hands it to a file
/// presenter.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(
        &mut self,
        viewport: Viewport,
        config: RenderConfig,
    ) -> Result<&PixelBuffer, RenderMandelbrotError> {
        tracing::info!(
            center_x = viewport.center_x(),
            center_y = viewport.center_y(),
            size = viewport.size(),
            resolution = config.resolution(),
            max_iterations = config.max_iterations(),
            "rendering Mandelbrot set"
        );

        let frame = render_mandelbrot_timed(viewport, config)?;

        tracing::info!(duration = ?frame.render_duration, "render complete");

        Ok(self.buffer.insert(frame.pixel_buffer))
    }

    pub fn write(&self, filepath: &Path) -> Result<(), WriteSnapshotError<P::Failure>> {
        let buffer = self
            .buffer
            .as_ref()
            .ok_or(WriteSnapshotError::NothingRendered)?;

        self.presenter
            .present(buffer, filepath)
            .map_err(WriteSnapshotError::Present)?;

        tracing::info!(path = %filepath.display(), "saved frame");

        Ok(())
    }
}
