//! UI state - editing mode, the input prompt, and transient status messages

use std::time::{Duration, Instant};

use super::editor::{Cursor, Viewport};
use super::search::SearchSession;

/// Modal editing state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Keys move the cursor and issue commands
    #[default]
    Normal,
    /// Keys insert text
    Insert,
}

/// Search context kept while the search prompt is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub session: SearchSession,
    /// Cursor to restore if the search is cancelled
    pub saved_cursor: Cursor,
    /// Viewport to restore if the search is cancelled
    pub saved_viewport: Viewport,
}

/// What a prompt's input will be used for once submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPurpose {
    /// `:` command line
    Command,
    /// Incremental search
    Search(SearchState),
    /// File name for saving an unnamed buffer
    SaveAs,
}

impl PromptPurpose {
    pub fn label(&self) -> &'static str {
        match self {
            PromptPurpose::Command => ":",
            PromptPurpose::Search(_) => "Search (Up/Down: prev/next, Esc: cancel): ",
            PromptPurpose::SaveAs => "Save as (Esc to cancel): ",
        }
    }
}

/// Prompt state machine: idle, or collecting input for a purpose
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Prompt {
    #[default]
    Idle,
    AwaitingInput {
        purpose: PromptPurpose,
        input: String,
    },
}

impl Prompt {
    pub fn begin(purpose: PromptPurpose) -> Self {
        Prompt::AwaitingInput {
            purpose,
            input: String::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Prompt::AwaitingInput { .. })
    }

    pub fn input(&self) -> Option<&str> {
        match self {
            Prompt::AwaitingInput { input, .. } => Some(input),
            Prompt::Idle => None,
        }
    }

    pub fn purpose(&self) -> Option<&PromptPurpose> {
        match self {
            Prompt::AwaitingInput { purpose, .. } => Some(purpose),
            Prompt::Idle => None,
        }
    }

    /// Label followed by the current input, for the message line
    pub fn display_text(&self) -> Option<String> {
        match self {
            Prompt::AwaitingInput { purpose, input } => Some(format!("{}{}", purpose.label(), input)),
            Prompt::Idle => None,
        }
    }
}

/// Status message with auto-expiry
#[derive(Debug, Clone)]
pub struct TransientMessage {
    pub text: String,
    pub expires_at: Instant,
}

impl TransientMessage {
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI state - mode, prompt, message line
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub mode: EditorMode,
    pub prompt: Prompt,
    pub transient_message: Option<TransientMessage>,
    /// Quit once the pending save succeeds
    pub quit_after_save: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the current message, if it has not expired
    pub fn active_message(&self) -> Option<&str> {
        self.transient_message
            .as_ref()
            .filter(|message| !message.is_expired())
            .map(|message| message.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lifecycle() {
        let mut prompt = Prompt::default();
        assert!(!prompt.is_active());
        assert_eq!(prompt.display_text(), None);

        prompt = Prompt::begin(PromptPurpose::Command);
        assert!(prompt.is_active());
        if let Prompt::AwaitingInput { input, .. } = &mut prompt {
            input.push('w');
        }
        assert_eq!(prompt.input(), Some("w"));
        assert_eq!(prompt.display_text().as_deref(), Some(":w"));
    }

    #[test]
    fn test_transient_message_expiry() {
        let fresh = TransientMessage::new("hello", Duration::from_secs(60));
        assert!(!fresh.is_expired());
        let stale = TransientMessage::new("old", Duration::ZERO);
        assert!(stale.is_expired());

        let mut ui = UiState::new();
        ui.transient_message = Some(fresh);
        assert_eq!(ui.active_message(), Some("hello"));
        ui.transient_message = Some(stale);
        assert_eq!(ui.active_message(), None);
    }
}
