//! Editor update functions for cursor movement and viewport scrolling.

use crate::commands::Cmd;
use crate::messages::{Direction, EditorMsg};
use crate::model::AppModel;

/// Handle editor messages (cursor movement, viewport scrolling)
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::MoveCursor(direction) => move_cursor(model, direction),

        EditorMsg::MoveCursorLineStart => {
            model.editor.cursor.column = 0;
        }

        EditorMsg::MoveCursorLineEnd => {
            model.editor.cursor.column = model.buffer.line_len(model.editor.cursor.line);
        }

        EditorMsg::MoveCursorDocumentStart => {
            model.editor.cursor.line = 0;
            model.editor.cursor.column = 0;
        }

        EditorMsg::MoveCursorDocumentEnd => {
            model.editor.cursor.line = model.buffer.len().saturating_sub(1);
            model.editor.cursor.column = 0;
        }

        EditorMsg::PageUp => {
            let page = model.editor.viewport.visible_lines.max(1);
            let top = model.editor.viewport.top_line;
            model.editor.cursor.line = top.saturating_sub(page);
            model.editor.clamp_column(&model.buffer);
        }

        EditorMsg::PageDown => {
            let page = model.editor.viewport.visible_lines.max(1);
            let last = model.buffer.len().saturating_sub(1);
            let bottom = (model.editor.viewport.top_line + page - 1).min(last);
            model.editor.cursor.line = (bottom + page).min(last);
            model.editor.clamp_column(&model.buffer);
        }

        EditorMsg::GotoLine(line) => {
            model.editor.cursor.line = line.min(model.buffer.len().saturating_sub(1));
            model.editor.cursor.column = 0;
        }

        EditorMsg::Resize { lines, columns } => {
            tracing::debug!(lines, columns, "viewport resized");
            model.editor.resize_viewport(lines, columns);
        }
    }

    Some(Cmd::Redraw)
}

/// Left and right wrap across line boundaries; up and down keep the column
/// where the target line allows it.
fn move_cursor(model: &mut AppModel, direction: Direction) {
    let buffer = &model.buffer;
    let cursor = &mut model.editor.cursor;

    match direction {
        Direction::Left => {
            if cursor.column > 0 {
                cursor.column -= 1;
            } else if cursor.line > 0 {
                cursor.line -= 1;
                cursor.column = buffer.line_len(cursor.line);
            }
        }
        Direction::Right => {
            if let Some(line) = buffer.get(cursor.line) {
                if cursor.column < line.len() {
                    cursor.column += 1;
                } else {
                    // Past the last line is the virtual line
                    cursor.line += 1;
                    cursor.column = 0;
                }
            }
        }
        Direction::Up => {
            cursor.line = cursor.line.saturating_sub(1);
        }
        Direction::Down => {
            if cursor.line + 1 < buffer.len() {
                cursor.line += 1;
            }
        }
    }

    model.editor.clamp_column(&model.buffer);
}
