//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod buffer;
pub mod editor;
pub mod line;
pub mod search;
pub mod status_bar;
pub mod ui;

pub use buffer::LineStore;
pub use editor::{Cursor, EditorState, Viewport};
pub use line::Line;
pub use search::{SearchDirection, SearchMatch, SearchSession};
pub use status_bar::{message_line, status_line};
pub use ui::{EditorMode, Prompt, PromptPurpose, SearchState, TransientMessage, UiState};

use std::path::{Path, PathBuf};

use crate::config::EditorConfig;
use crate::file;
use crate::syntax::select_rule_for_path;
use crate::theme::Theme;

/// Shown on the message line at startup
pub const HELP_MESSAGE: &str = "HELP: :w save | :q quit | / search | i insert";

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// The lines being edited
    pub buffer: LineStore,
    /// Cursor and viewport
    pub editor: EditorState,
    /// Mode, prompt and message line
    pub ui: UiState,
    /// Persisted editor configuration
    pub config: EditorConfig,
    /// Theme for colors and styling
    pub theme: Theme,
    /// File the buffer is saved to, if any
    pub file_path: Option<PathBuf>,
}

impl AppModel {
    /// Create an empty model with default configuration
    pub fn new(visible_lines: usize, visible_columns: usize) -> Self {
        Self::with_config(
            EditorConfig::default(),
            Theme::default(),
            visible_lines,
            visible_columns,
        )
    }

    pub fn with_config(
        config: EditorConfig,
        theme: Theme,
        visible_lines: usize,
        visible_columns: usize,
    ) -> Self {
        Self {
            buffer: LineStore::new(),
            editor: EditorState::with_viewport(visible_lines, visible_columns),
            ui: UiState::new(),
            config,
            theme,
            file_path: None,
        }
    }

    /// Load `path` into the buffer
    ///
    /// A missing file starts an empty buffer under that name. Any other
    /// failure is reported on the message line and leaves the model as it was.
    pub fn open(&mut self, path: &Path) {
        let syntax = select_rule_for_path(path);
        match file::load_lines(path) {
            Ok(Some(lines)) => {
                tracing::info!("Opened {} ({} lines)", path.display(), lines.len());
                self.buffer = LineStore::from_lines(lines, syntax);
            }
            Ok(None) => {
                tracing::info!("{} does not exist yet, starting new file", path.display());
                self.buffer = LineStore::from_lines(Vec::<Vec<u8>>::new(), syntax);
            }
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", path.display(), e);
                self.set_status(format!("Failed to open {}: {}", path.display(), e));
                return;
            }
        }
        self.file_path = Some(path.to_path_buf());
        self.editor.cursor = Cursor::new();
        self.editor.viewport.top_line = 0;
        self.editor.viewport.left_column = 0;
    }

    /// Name the buffer, re-selecting the highlight rule from the new name
    pub fn set_file_path(&mut self, path: PathBuf) {
        self.buffer.set_syntax(select_rule_for_path(&path));
        self.file_path = Some(path);
    }

    /// Show a message on the message line until it times out
    pub fn set_status(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!("Status: {}", text);
        self.ui.transient_message = Some(TransientMessage::new(text, self.config.message_timeout()));
    }

    /// Bring the cursor on screen; call before drawing
    pub fn scroll(&mut self) {
        self.editor.scroll(&self.buffer);
    }

    /// File type of the active highlight rule
    pub fn filetype(&self) -> Option<&'static str> {
        self.buffer.syntax().map(|rule| rule.filetype)
    }

    /// File name as shown in the status line
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "[No Name]".to_string())
    }

    /// Whether the welcome banner should be drawn
    pub fn shows_welcome(&self) -> bool {
        self.config.show_welcome && self.buffer.is_empty()
    }
}
