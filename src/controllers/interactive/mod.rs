//! Interactive controller for re-rendering the fractal on user input.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `InputEvent`s pushed through an `InputSender`
//! - **Output**: `InteractiveControllerPresenterPort` receiving rendered frames
//! - **Core**: `render_mandelbrot` from `core/` for the actual computation

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::{InputSender, InteractiveController};
pub use data::frame_data::FrameData;
pub use errors::controller::ControllerError;
pub use events::input::InputEvent;
pub use events::render::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
