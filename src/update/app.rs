//! App message handlers (file operations, exit)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, Prompt, PromptPurpose};

/// Handle app messages (file operations, exit)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::SaveFile => match model.file_path.clone() {
            Some(path) => {
                let contents = model.buffer.to_bytes();
                tracing::debug!("Saving {} bytes to {}", contents.len(), path.display());
                Some(Cmd::SaveFile { path, contents })
            }
            None => {
                model.ui.prompt = Prompt::begin(PromptPurpose::SaveAs);
                Some(Cmd::Redraw)
            }
        },

        AppMsg::SaveCompleted(result) => match result {
            Ok(bytes) => {
                model.buffer.mark_clean();
                model.set_status(format!("{} bytes written to disk", bytes));
                if std::mem::take(&mut model.ui.quit_after_save) {
                    Some(Cmd::Quit)
                } else {
                    Some(Cmd::Redraw)
                }
            }
            Err(e) => {
                tracing::warn!("Save failed: {}", e);
                model.ui.quit_after_save = false;
                model.set_status(format!("Failed to write to disk: {}", e));
                Some(Cmd::Redraw)
            }
        },

        AppMsg::Quit => {
            if model.buffer.is_dirty() {
                model.set_status("Unsaved changes! Use :wq to save or :q! to discard");
                Some(Cmd::Redraw)
            } else {
                Some(Cmd::Quit)
            }
        }

        AppMsg::ForceQuit => Some(Cmd::Quit),
    }
}
