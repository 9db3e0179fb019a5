//! Runtime module - terminal integration
//!
//! - `terminal` - raw mode and alternate screen session
//! - `input` - key event to message mapping
//! - `view` - drawing a frame from the model
//! - `app` - event loop and command execution

pub mod app;
pub mod input;
pub mod terminal;
pub mod view;

pub use app::App;
