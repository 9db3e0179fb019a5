//! Document update functions for text editing at the cursor

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

use super::clear_search_overlay;

/// Handle document messages (text editing)
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    clear_search_overlay(model);

    match msg {
        DocumentMsg::InsertChar(ch) => insert_char(model, ch),
        DocumentMsg::InsertNewline => insert_newline(model),
        DocumentMsg::DeleteBackward => delete_backward(model),
        DocumentMsg::DeleteForward => {
            let cursor = model.editor.cursor;
            model.buffer.delete_char(cursor.line, cursor.column);
        }
    }

    Some(Cmd::Redraw)
}

/// Insert at the cursor; typing on the virtual line creates it first
pub(crate) fn insert_char(model: &mut AppModel, ch: u8) {
    let cursor = &mut model.editor.cursor;
    if cursor.line >= model.buffer.len() {
        cursor.line = model.buffer.len();
        model.buffer.insert(cursor.line, b"");
    }
    model.buffer.insert_char(cursor.line, cursor.column, ch);
    cursor.column += 1;
}

fn insert_newline(model: &mut AppModel) {
    let cursor = &mut model.editor.cursor;
    if cursor.column == 0 {
        model.buffer.insert(cursor.line.min(model.buffer.len()), b"");
    } else {
        model.buffer.split_at(cursor.line, cursor.column);
    }
    cursor.line += 1;
    cursor.column = 0;
}

/// Delete before the cursor, joining with the previous line at column 0.
/// Does nothing on the virtual line or at the very start of the buffer.
fn delete_backward(model: &mut AppModel) {
    let cursor = &mut model.editor.cursor;
    if cursor.line >= model.buffer.len() {
        return;
    }

    if cursor.column > 0 {
        model.buffer.delete_char(cursor.line, cursor.column - 1);
        cursor.column -= 1;
    } else if let Some(column) = model.buffer.join_with_previous(cursor.line) {
        cursor.line -= 1;
        cursor.column = column;
    }
}
