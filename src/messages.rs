//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editor-specific messages (cursor movement, viewport scrolling)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    /// Move cursor in a direction, wrapping across line ends horizontally
    MoveCursor(Direction),
    /// Move cursor to start of line (Home key)
    MoveCursorLineStart,
    /// Move cursor to end of line (End key)
    MoveCursorLineEnd,
    /// Move cursor to the first line
    MoveCursorDocumentStart,
    /// Move cursor to the last line
    MoveCursorDocumentEnd,
    PageUp,
    PageDown,
    /// Jump to a 0-indexed line, clamped to the buffer
    GotoLine(usize),
    /// Terminal resized to the given number of text rows and columns
    Resize { lines: usize, columns: usize },
}

/// Document messages (text editing)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Insert a byte at the cursor
    InsertChar(u8),
    /// Split the line at the cursor
    InsertNewline,
    /// Delete the byte before the cursor, joining lines at column 0
    DeleteBackward,
    /// Delete the byte under the cursor
    DeleteForward,
}

/// Mode switches (Normal <-> Insert)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeMsg {
    /// `i`
    EnterInsert,
    /// `a`
    AppendAfterCursor,
    /// `A`
    AppendAtLineEnd,
    /// `o`
    OpenLineBelow,
    /// `O`
    OpenLineAbove,
    /// Esc in insert mode
    ExitInsert,
}

/// Prompt messages (command line, search, save-as)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptMsg {
    /// `/`
    BeginSearch,
    /// `:`
    BeginCommand,
    /// Ask for a file name, then save
    BeginSaveAs,
    InsertChar(char),
    DeleteBackward,
    /// Next match (Down/Right while searching)
    SearchNext,
    /// Previous match (Up/Left while searching)
    SearchPrevious,
    /// Enter
    Submit,
    /// Esc
    Cancel,
}

/// Application-level messages (file operations, exit)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Save to the current file, prompting for a name if there is none
    SaveFile,
    /// Save finished with the number of bytes written or an error message
    SaveCompleted(Result<usize, String>),
    /// Quit, refused while there are unsaved changes
    Quit,
    /// Quit without saving
    ForceQuit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Editor messages (cursor, viewport)
    Editor(EditorMsg),
    /// Document messages (text editing)
    Document(DocumentMsg),
    /// Mode switches
    Mode(ModeMsg),
    /// Prompt input
    Prompt(PromptMsg),
    /// App messages (file I/O, exit)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a cursor movement message
    pub fn move_cursor(direction: Direction) -> Self {
        Msg::Editor(EditorMsg::MoveCursor(direction))
    }

    /// Create an insert character message
    pub fn insert_char(ch: u8) -> Self {
        Msg::Document(DocumentMsg::InsertChar(ch))
    }

    /// Create a resize message
    pub fn resize(lines: usize, columns: usize) -> Self {
        Msg::Editor(EditorMsg::Resize { lines, columns })
    }
}
