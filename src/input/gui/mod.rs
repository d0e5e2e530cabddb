//! Windowed explorer.
//!
//! winit owns the window and event loop, `pixels` shows the rendered frame
//! and egui draws the File menu on top.

pub mod app;
pub mod commands;
pub mod errors;
pub mod events;
