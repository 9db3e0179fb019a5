//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::PathBuf;

use linepad::messages::Msg;
use linepad::model::{AppModel, Cursor, LineStore};
use linepad::syntax::rule_by_filetype;
use linepad::update::update;
use linepad::Cmd;

/// Create a test model with given text and cursor position
///
/// Lines are split on `\n`; a trailing newline does not add an empty line.
pub fn test_model(text: &str, line: usize, column: usize) -> AppModel {
    let mut model = AppModel::new(25, 80);
    model.buffer = LineStore::from_lines(linepad::file::split_lines(text.as_bytes()), None);
    model.editor.cursor = Cursor::at(line, column);
    model
}

/// Like [`test_model`], highlighted with the rule for `filetype`
pub fn test_model_with_syntax(text: &str, filetype: &str) -> AppModel {
    let mut model = test_model(text, 0, 0);
    model.buffer.set_syntax(rule_by_filetype(filetype));
    model
}

/// Test model backed by a named file path (not written to disk)
pub fn test_model_named(text: &str, name: &str) -> AppModel {
    let mut model = test_model(text, 0, 0);
    model.set_file_path(PathBuf::from(name));
    model.buffer.mark_clean();
    model
}

/// Raw text of a buffer line
pub fn line_text(model: &AppModel, line: usize) -> String {
    model
        .buffer
        .get(line)
        .map(|l| String::from_utf8_lossy(l.raw()).into_owned())
        .unwrap_or_default()
}

/// Whole buffer joined with `\n`
pub fn buffer_text(model: &AppModel) -> String {
    model
        .buffer
        .iter()
        .map(|l| String::from_utf8_lossy(l.raw()).into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Send several messages in order, returning the last command
pub fn send_all(model: &mut AppModel, msgs: impl IntoIterator<Item = Msg>) -> Option<Cmd> {
    let mut last = None;
    for msg in msgs {
        last = update(model, msg);
    }
    last
}

/// Assert every line's stored index matches its position
pub fn assert_indices(model: &AppModel) {
    for (i, line) in model.buffer.iter().enumerate() {
        assert_eq!(line.index(), i, "line {} has index {}", i, line.index());
    }
}

/// Current message line text, if any
pub fn status_text(model: &AppModel) -> Option<String> {
    linepad::model::message_line(model)
}
