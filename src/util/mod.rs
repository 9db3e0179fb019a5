//! Utility modules

pub mod text;

pub use text::{display_to_logical, is_separator, logical_to_display, render, TAB_WIDTH};
