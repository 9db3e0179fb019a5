//! Syntax highlighting module
//!
//! Provides a regex-free, single-pass lexical classifier with:
//! - Language selection from file names (`languages`)
//! - Per-line classification into highlight categories (`engine`)
//! - Block-comment state carried from one line to the next
//!
//! ## Architecture
//!
//! ```text
//! LineStore edit → re-render line → highlight_line(rule, rendered, prev.open_comment)
//!               → open_comment changed? → reclassify next line → ... (until unchanged)
//! ```

mod engine;
mod highlights;
mod languages;

pub use engine::{highlight_line, LineHighlights};
pub use highlights::Highlight;
pub use languages::{
    rule_by_filetype, select_rule, select_rule_for_path, HighlightFlags, SyntaxRule,
    HIGHLIGHT_DATABASE, SECONDARY_KEYWORD_MARKER,
};
