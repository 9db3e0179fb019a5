//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod editor;
mod mode;
mod prompt;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{AppModel, Prompt, PromptPurpose};

use tracing::{span, Level};

pub use app::update_app;
pub use document::update_document;
pub use editor::update_editor;
pub use mode::update_mode;
pub use prompt::{run_command, update_prompt};

/// Main update function - dispatches to sub-handlers
///
/// The scroll pass runs after every message, so the viewport always shows
/// the cursor when the model is drawn or inspected.
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let _span = span!(Level::TRACE, "update", msg = ?msg).entered();

    let result = match msg {
        Msg::Editor(m) => editor::update_editor(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::Mode(m) => mode::update_mode(model, m),
        Msg::Prompt(m) => prompt::update_prompt(model, m),
        Msg::App(m) => app::update_app(model, m),
    };

    model.scroll();
    result
}

/// Drop a pending search match overlay before the buffer changes under it
pub(crate) fn clear_search_overlay(model: &mut AppModel) {
    if let Prompt::AwaitingInput {
        purpose: PromptPurpose::Search(state),
        ..
    } = &mut model.ui.prompt
    {
        state.session.clear_overlay(&mut model.buffer);
    }
}
