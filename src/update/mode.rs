//! Mode switches between Normal and Insert

use crate::commands::Cmd;
use crate::messages::ModeMsg;
use crate::model::{AppModel, Cursor, EditorMode};

use super::clear_search_overlay;

/// Handle mode messages
pub fn update_mode(model: &mut AppModel, msg: ModeMsg) -> Option<Cmd> {
    match msg {
        ModeMsg::EnterInsert => {}

        ModeMsg::AppendAfterCursor => {
            let cursor = &mut model.editor.cursor;
            if cursor.column < model.buffer.line_len(cursor.line) {
                cursor.column += 1;
            }
        }

        ModeMsg::AppendAtLineEnd => {
            let cursor = &mut model.editor.cursor;
            cursor.column = model.buffer.line_len(cursor.line);
        }

        ModeMsg::OpenLineBelow => {
            let line = model.editor.cursor.line;
            let at = if line < model.buffer.len() {
                line + 1
            } else {
                model.buffer.len()
            };
            open_line(model, at);
        }

        ModeMsg::OpenLineAbove => {
            let at = model.editor.cursor.line.min(model.buffer.len());
            open_line(model, at);
        }

        ModeMsg::ExitInsert => {
            model.ui.mode = EditorMode::Normal;
            return Some(Cmd::Redraw);
        }
    }

    model.ui.mode = EditorMode::Insert;
    Some(Cmd::Redraw)
}

fn open_line(model: &mut AppModel, at: usize) {
    clear_search_overlay(model);
    model.buffer.insert(at, b"");
    model.editor.cursor = Cursor::at(at, 0);
}
