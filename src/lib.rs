//! linepad - a small modal line editor
//!
//! This crate provides the core types and logic for the editor, following
//! the Elm Architecture pattern: `Msg` in, `update` the `AppModel`, `Cmd` out.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod file;
pub mod messages;
pub mod model;
pub mod syntax;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
