//! Editor state - cursor and viewport

use std::ops::Range;

use super::buffer::LineStore;

/// Cursor position in logical coordinates.
///
/// `line` may equal the line count: the virtual line after the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub const fn new() -> Self {
        Self { line: 0, column: 0 }
    }

    pub const fn at(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Viewport state - what portion of the buffer is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line (0-indexed)
    pub top_line: usize,
    /// First visible display column (for horizontal scrolling)
    pub left_column: usize,
    /// Number of text rows on screen
    pub visible_lines: usize,
    /// Number of text columns on screen
    pub visible_columns: usize,
}

impl Viewport {
    /// Create a new viewport with the given dimensions
    pub fn new(visible_lines: usize, visible_columns: usize) -> Self {
        Self {
            top_line: 0,
            left_column: 0,
            visible_lines,
            visible_columns,
        }
    }

    /// Scroll just far enough that `line` and `display_column` are on screen
    pub fn reveal(&mut self, line: usize, display_column: usize) {
        if line < self.top_line {
            self.top_line = line;
        }
        if self.visible_lines > 0 && line >= self.top_line + self.visible_lines {
            self.top_line = line + 1 - self.visible_lines;
        }

        if display_column < self.left_column {
            self.left_column = display_column;
        }
        if self.visible_columns > 0 && display_column >= self.left_column + self.visible_columns {
            self.left_column = display_column + 1 - self.visible_columns;
        }
    }

    /// Buffer lines covered by the viewport, clipped to `total_lines`
    pub fn visible_range(&self, total_lines: usize) -> Range<usize> {
        let start = self.top_line.min(total_lines);
        let end = (self.top_line + self.visible_lines).min(total_lines);
        start..end
    }

    /// Whether a buffer position is inside the visible window
    #[cfg(test)]
    pub(crate) fn contains(&self, line: usize, display_column: usize) -> bool {
        line >= self.top_line
            && line < self.top_line + self.visible_lines
            && display_column >= self.left_column
            && display_column < self.left_column + self.visible_columns
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(24, 80)
    }
}

/// Editor state - cursor plus the scroll window it lives in
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub cursor: Cursor,
    pub viewport: Viewport,
    /// Cursor display column computed by the last scroll pass
    pub cursor_display_column: usize,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor state with specific viewport dimensions
    pub fn with_viewport(visible_lines: usize, visible_columns: usize) -> Self {
        Self {
            viewport: Viewport::new(visible_lines, visible_columns),
            ..Self::default()
        }
    }

    /// Update viewport dimensions (e.g., on terminal resize)
    pub fn resize_viewport(&mut self, visible_lines: usize, visible_columns: usize) {
        self.viewport.visible_lines = visible_lines;
        self.viewport.visible_columns = visible_columns;
    }

    /// Recompute scroll offsets for the current cursor. Run once per redraw,
    /// before drawing.
    pub fn scroll(&mut self, buffer: &LineStore) {
        self.cursor_display_column = buffer
            .get(self.cursor.line)
            .map(|line| line.display_column(self.cursor.column))
            .unwrap_or(0);
        self.viewport
            .reveal(self.cursor.line, self.cursor_display_column);
    }

    /// Cursor position relative to the top-left of the viewport
    pub fn screen_cursor(&self) -> (usize, usize) {
        (
            self.cursor.line.saturating_sub(self.viewport.top_line),
            self.cursor_display_column
                .saturating_sub(self.viewport.left_column),
        )
    }

    /// Clamp the cursor column to the length of its line
    pub fn clamp_column(&mut self, buffer: &LineStore) {
        let len = buffer.line_len(self.cursor.line);
        if self.cursor.column > len {
            self.cursor.column = len;
        }
    }
}
