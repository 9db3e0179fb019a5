//! Keyboard input handling
//!
//! Maps crossterm key events to messages. Routing depends on the model:
//! an active prompt captures all keys, otherwise the editing mode decides.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use linepad::messages::{AppMsg, Direction, DocumentMsg, EditorMsg, ModeMsg, Msg, PromptMsg};
use linepad::model::{AppModel, EditorMode, PromptPurpose};

/// Translate a key press into a message, if it means anything here
pub fn map_key(model: &AppModel, key: KeyEvent) -> Option<Msg> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if let Some(purpose) = model.ui.prompt.purpose() {
        return map_prompt_key(purpose, key.code, ctrl);
    }

    // Global bindings
    match key.code {
        KeyCode::Char('s') if ctrl => return Some(Msg::App(AppMsg::SaveFile)),
        KeyCode::Char('q') if ctrl => return Some(Msg::App(AppMsg::Quit)),
        _ => {}
    }

    if let Some(msg) = map_navigation_key(key.code, ctrl) {
        return Some(msg);
    }

    match model.ui.mode {
        EditorMode::Insert => map_insert_key(key.code, ctrl),
        EditorMode::Normal => map_normal_key(key.code, ctrl),
    }
}

fn map_prompt_key(purpose: &PromptPurpose, code: KeyCode, ctrl: bool) -> Option<Msg> {
    let searching = matches!(purpose, PromptPurpose::Search(_));
    let msg = match code {
        KeyCode::Esc => PromptMsg::Cancel,
        KeyCode::Enter => PromptMsg::Submit,
        KeyCode::Backspace => PromptMsg::DeleteBackward,
        KeyCode::Up | KeyCode::Left if searching => PromptMsg::SearchPrevious,
        KeyCode::Down | KeyCode::Right if searching => PromptMsg::SearchNext,
        KeyCode::Char('h') if ctrl => PromptMsg::DeleteBackward,
        KeyCode::Char(ch) if !ctrl && !ch.is_control() => PromptMsg::InsertChar(ch),
        _ => return None,
    };
    Some(Msg::Prompt(msg))
}

/// Keys that move the cursor the same way in every mode
fn map_navigation_key(code: KeyCode, ctrl: bool) -> Option<Msg> {
    let msg = match code {
        KeyCode::Up => EditorMsg::MoveCursor(Direction::Up),
        KeyCode::Down => EditorMsg::MoveCursor(Direction::Down),
        KeyCode::Left => EditorMsg::MoveCursor(Direction::Left),
        KeyCode::Right => EditorMsg::MoveCursor(Direction::Right),
        KeyCode::Home if ctrl => EditorMsg::MoveCursorDocumentStart,
        KeyCode::End if ctrl => EditorMsg::MoveCursorDocumentEnd,
        KeyCode::Home => EditorMsg::MoveCursorLineStart,
        KeyCode::End => EditorMsg::MoveCursorLineEnd,
        KeyCode::PageUp => EditorMsg::PageUp,
        KeyCode::PageDown => EditorMsg::PageDown,
        _ => return None,
    };
    Some(Msg::Editor(msg))
}

fn map_insert_key(code: KeyCode, ctrl: bool) -> Option<Msg> {
    match code {
        KeyCode::Esc => Some(Msg::Mode(ModeMsg::ExitInsert)),
        KeyCode::Enter => Some(Msg::Document(DocumentMsg::InsertNewline)),
        KeyCode::Tab => Some(Msg::insert_char(b'\t')),
        KeyCode::Backspace => Some(Msg::Document(DocumentMsg::DeleteBackward)),
        KeyCode::Char('h') if ctrl => Some(Msg::Document(DocumentMsg::DeleteBackward)),
        KeyCode::Delete => Some(Msg::Document(DocumentMsg::DeleteForward)),
        KeyCode::Char(ch) if !ctrl && ch.is_ascii() && !ch.is_ascii_control() => {
            Some(Msg::insert_char(ch as u8))
        }
        KeyCode::Char(ch) => {
            tracing::trace!(?ch, "ignoring key in insert mode");
            None
        }
        _ => None,
    }
}

fn map_normal_key(code: KeyCode, ctrl: bool) -> Option<Msg> {
    let msg = match code {
        KeyCode::Char('f') if ctrl => Msg::Editor(EditorMsg::PageDown),
        KeyCode::Char('b') if ctrl => Msg::Editor(EditorMsg::PageUp),
        _ if ctrl => return None,

        KeyCode::Char('h') | KeyCode::Backspace => Msg::move_cursor(Direction::Left),
        KeyCode::Char('j') => Msg::move_cursor(Direction::Down),
        KeyCode::Char('k') => Msg::move_cursor(Direction::Up),
        KeyCode::Char('l') | KeyCode::Char(' ') => Msg::move_cursor(Direction::Right),
        KeyCode::Char('0') => Msg::Editor(EditorMsg::MoveCursorLineStart),
        KeyCode::Char('$') => Msg::Editor(EditorMsg::MoveCursorLineEnd),
        KeyCode::Char('g') => Msg::Editor(EditorMsg::MoveCursorDocumentStart),
        KeyCode::Char('G') => Msg::Editor(EditorMsg::MoveCursorDocumentEnd),

        KeyCode::Char('i') => Msg::Mode(ModeMsg::EnterInsert),
        KeyCode::Char('a') => Msg::Mode(ModeMsg::AppendAfterCursor),
        KeyCode::Char('A') => Msg::Mode(ModeMsg::AppendAtLineEnd),
        KeyCode::Char('o') => Msg::Mode(ModeMsg::OpenLineBelow),
        KeyCode::Char('O') => Msg::Mode(ModeMsg::OpenLineAbove),

        KeyCode::Char('x') | KeyCode::Delete => Msg::Document(DocumentMsg::DeleteForward),
        KeyCode::Char('X') => Msg::Document(DocumentMsg::DeleteBackward),

        KeyCode::Char('/') => Msg::Prompt(PromptMsg::BeginSearch),
        KeyCode::Char(':') => Msg::Prompt(PromptMsg::BeginCommand),

        _ => return None,
    };
    Some(msg)
}
