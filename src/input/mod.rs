//! Input adapters.
//!
//! These receive input from the command line or a window and translate it
//! into viewports and `InputEvent`s for the controllers.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
