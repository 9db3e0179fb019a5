//! Prompt handling: the `:` command line, incremental search, and save-as
//!
//! Input accumulates in `Prompt::AwaitingInput`. Submitting takes the prompt
//! out of the model and resumes its purpose with the finished input.

use std::path::PathBuf;

use crate::commands::Cmd;
use crate::messages::{AppMsg, EditorMsg, PromptMsg};
use crate::model::{
    AppModel, EditorState, LineStore, Prompt, PromptPurpose, SearchDirection, SearchSession,
    SearchState,
};
use crate::syntax::rule_by_filetype;

use super::{app::update_app, editor::update_editor};

/// Handle prompt messages
pub fn update_prompt(model: &mut AppModel, msg: PromptMsg) -> Option<Cmd> {
    match msg {
        PromptMsg::BeginSearch => {
            let state = SearchState {
                session: SearchSession::new(),
                saved_cursor: model.editor.cursor,
                saved_viewport: model.editor.viewport,
            };
            model.ui.prompt = Prompt::begin(PromptPurpose::Search(state));
        }

        PromptMsg::BeginCommand => {
            model.ui.prompt = Prompt::begin(PromptPurpose::Command);
        }

        PromptMsg::BeginSaveAs => {
            model.ui.prompt = Prompt::begin(PromptPurpose::SaveAs);
        }

        PromptMsg::InsertChar(ch) => edit_input(model, |input| input.push(ch)),

        PromptMsg::DeleteBackward => edit_input(model, |input| {
            input.pop();
        }),

        PromptMsg::SearchNext => step_in_direction(model, SearchDirection::Forward),

        PromptMsg::SearchPrevious => step_in_direction(model, SearchDirection::Backward),

        PromptMsg::Submit => {
            let Prompt::AwaitingInput { purpose, input } = std::mem::take(&mut model.ui.prompt)
            else {
                return None;
            };
            return resume(model, purpose, input);
        }

        PromptMsg::Cancel => {
            let Prompt::AwaitingInput { purpose, .. } = std::mem::take(&mut model.ui.prompt)
            else {
                return None;
            };
            cancel(model, purpose);
        }
    }

    Some(Cmd::Redraw)
}

/// Change the input; a search query change restarts the search from the top
fn edit_input(model: &mut AppModel, edit: impl FnOnce(&mut String)) {
    let Prompt::AwaitingInput { purpose, input } = &mut model.ui.prompt else {
        return;
    };
    edit(input);

    if let PromptPurpose::Search(state) = purpose {
        state.session.reset();
        search_step(&mut model.buffer, &mut model.editor, &mut state.session, input);
    }
}

fn step_in_direction(model: &mut AppModel, direction: SearchDirection) {
    if let Prompt::AwaitingInput {
        purpose: PromptPurpose::Search(state),
        input,
    } = &mut model.ui.prompt
    {
        state.session.set_direction(direction);
        search_step(&mut model.buffer, &mut model.editor, &mut state.session, input);
    }
}

/// Advance the search and move the cursor onto the match. The viewport is
/// pushed past the end so the scroll pass settles with the match line on top.
fn search_step(
    buffer: &mut LineStore,
    editor: &mut EditorState,
    session: &mut SearchSession,
    query: &str,
) {
    if let Some(found) = session.step(buffer, query.as_bytes()) {
        editor.cursor.line = found.line;
        editor.cursor.column = found.column;
        editor.viewport.top_line = buffer.len();
    }
}

/// Resume a submitted prompt with its finished input
fn resume(model: &mut AppModel, purpose: PromptPurpose, input: String) -> Option<Cmd> {
    match purpose {
        PromptPurpose::Command => run_command(model, &input),

        PromptPurpose::Search(mut state) => {
            state.session.clear_overlay(&mut model.buffer);
            Some(Cmd::Redraw)
        }

        PromptPurpose::SaveAs => {
            let name = input.trim();
            if name.is_empty() {
                model.ui.quit_after_save = false;
                model.set_status("Save aborted");
                return Some(Cmd::Redraw);
            }
            model.set_file_path(PathBuf::from(name));
            update_app(model, AppMsg::SaveFile)
        }
    }
}

fn cancel(model: &mut AppModel, purpose: PromptPurpose) {
    match purpose {
        PromptPurpose::Command => {}

        PromptPurpose::Search(mut state) => {
            state.session.clear_overlay(&mut model.buffer);
            model.editor.cursor = state.saved_cursor;
            model.editor.viewport = state.saved_viewport;
        }

        PromptPurpose::SaveAs => {
            model.ui.quit_after_save = false;
            model.set_status("Save aborted");
        }
    }
}

/// Execute a `:` command line
pub fn run_command(model: &mut AppModel, line: &str) -> Option<Cmd> {
    let line = line.trim();
    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (line, ""),
    };
    tracing::debug!(command = name, arg, "running command");

    match (name, arg) {
        ("", _) => Some(Cmd::Redraw),

        ("w", "") => update_app(model, AppMsg::SaveFile),

        ("w", path) => {
            model.set_file_path(PathBuf::from(path));
            update_app(model, AppMsg::SaveFile)
        }

        ("q", "") => update_app(model, AppMsg::Quit),

        ("q!", "") => update_app(model, AppMsg::ForceQuit),

        ("wq" | "x", "") => {
            model.ui.quit_after_save = true;
            update_app(model, AppMsg::SaveFile)
        }

        ("syntax", "off") => {
            model.buffer.set_syntax(None);
            model.set_status("Syntax highlighting off");
            Some(Cmd::Redraw)
        }

        ("syntax", filetype) if !filetype.is_empty() => {
            match rule_by_filetype(filetype) {
                Some(rule) => {
                    model.buffer.set_syntax(Some(rule));
                    model.set_status(format!("Syntax: {}", rule.filetype));
                }
                None => model.set_status(format!("Unknown filetype: {}", filetype)),
            }
            Some(Cmd::Redraw)
        }

        (number, "") if number.bytes().all(|b| b.is_ascii_digit()) => match number.parse::<usize>()
        {
            Ok(n) => update_editor(model, EditorMsg::GotoLine(n.saturating_sub(1))),
            Err(_) => {
                model.set_status(format!("Invalid line number: {}", number));
                Some(Cmd::Redraw)
            }
        },

        _ => {
            model.set_status(format!("Unknown command: {}", line));
            Some(Cmd::Redraw)
        }
    }
}
