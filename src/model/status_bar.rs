//! Status bar model - the status line and the message line below it

use super::ui::EditorMode;
use super::AppModel;

/// Longest file name shown before it is cut off
const MAX_NAME_CHARS: usize = 20;

/// Left segment: file name, line count, modified flag
pub fn left_segment(model: &AppModel) -> String {
    let name: String = model.display_name().chars().take(MAX_NAME_CHARS).collect();
    let modified = if model.buffer.is_dirty() {
        " (modified)"
    } else {
        ""
    };
    format!("{} - {} lines{}", name, model.buffer.len(), modified)
}

/// Right segment: file type and cursor position
pub fn right_segment(model: &AppModel) -> String {
    format!(
        "{} | {}/{}",
        model.filetype().unwrap_or("plaintext"),
        model.editor.cursor.line + 1,
        model.buffer.len()
    )
}

/// Lay out the status line to exactly `width` characters
///
/// The left segment is truncated to fit; the right segment is only shown
/// when it fits flush against the right edge.
pub fn status_line(model: &AppModel, width: usize) -> String {
    let left = left_segment(model);
    let right = right_segment(model);

    let mut line: String = left.chars().take(width).collect();
    let used = line.chars().count();
    let right_len = right.chars().count();

    if used + right_len <= width {
        line.extend(std::iter::repeat(' ').take(width - used - right_len));
        line.push_str(&right);
    } else {
        line.extend(std::iter::repeat(' ').take(width - used));
    }
    line
}

/// Text for the message line, in priority order: insert mode marker,
/// active prompt, unexpired transient message
pub fn message_line(model: &AppModel) -> Option<String> {
    if model.ui.mode == EditorMode::Insert && !model.ui.prompt.is_active() {
        return Some("-- INSERT --".to_string());
    }
    if let Some(text) = model.ui.prompt.display_text() {
        return Some(text);
    }
    model.ui.active_message().map(str::to_string)
}
