//! Interactive Mandelbrot set renderer.
//!
//! `core` holds the escape-time computation and viewport mapping,
//! `controllers` drive it headless or from a render thread, and
//! `presenters`/`input` adapt it to image files, the command line and a
//! window.

pub mod controllers;
pub mod core;
pub mod input;
mod logging;
pub mod presenters;

pub use controllers::interactive::{InputEvent, InteractiveController, RenderEvent};
pub use controllers::snapshot::SnapshotController;
pub use crate::core::actions::render_mandelbrot::render_mandelbrot;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::render_config::RenderConfig;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::algorithm::escape_time;
pub use input::cli::args::{GuiArgs, SnapshotArgs};
pub use logging::init_logging;
pub use presenters::file::image_file::ImageFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
