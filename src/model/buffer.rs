//! Line store - the ordered sequence of lines owned by the editor
//!
//! Every structural edit leaves the store fully consistent before returning:
//! the touched line is re-rendered and reclassified, and any change to its
//! block-comment state is swept forward line by line until a line's
//! `open_comment` flag comes out unchanged. A single edit can therefore cost
//! O(lines) in files with long unbalanced block comments.
//!
//! Out-of-range line indices are ignored.

use super::line::Line;
use crate::syntax::{Highlight, SyntaxRule};

#[derive(Debug, Clone, Default)]
pub struct LineStore {
    lines: Vec<Line>,
    syntax: Option<&'static SyntaxRule>,
    dirty: bool,
}

impl LineStore {
    /// Create an empty store with no syntax rule
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from raw line contents (newline-stripped), classifying
    /// every line under `syntax`. The store starts clean.
    pub fn from_lines<I, L>(lines: I, syntax: Option<&'static SyntaxRule>) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let lines = lines
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let mut line = Line::new(index, raw.into(), false);
                line.rerender();
                line
            })
            .collect();

        let mut store = Self {
            lines,
            syntax,
            dirty: false,
        };
        store.rehighlight_all();
        store
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, at: usize) -> Option<&Line> {
        self.lines.get(at)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Raw length of line `at`, or 0 when out of range
    pub fn line_len(&self, at: usize) -> usize {
        self.lines.get(at).map(Line::len).unwrap_or(0)
    }

    pub fn syntax(&self) -> Option<&'static SyntaxRule> {
        self.syntax
    }

    /// Replace the active rule and reclassify every line
    pub fn set_syntax(&mut self, syntax: Option<&'static SyntaxRule>) {
        tracing::debug!(
            filetype = syntax.map(|rule| rule.filetype).unwrap_or("none"),
            lines = self.lines.len(),
            "syntax rule selected"
        );
        self.syntax = syntax;
        self.rehighlight_all();
    }

    /// Whether the store changed since it was seeded or last marked clean
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Insert a new line with `text` at position `at` (`0..=len`)
    pub fn insert(&mut self, at: usize, text: &[u8]) {
        if at > self.lines.len() {
            return;
        }

        // The new line starts out claiming the flag its successor was
        // classified with, so the cascade runs only if it differs.
        let inherited = at > 0 && self.lines[at - 1].open_comment();
        self.lines.insert(at, Line::new(at, text.to_vec(), inherited));
        self.reindex_from(at + 1);
        self.refresh(at);
        self.dirty = true;
    }

    /// Remove the line at `at`
    pub fn delete(&mut self, at: usize) {
        if at >= self.lines.len() {
            return;
        }

        let removed = self.lines.remove(at);
        self.reindex_from(at);
        self.dirty = true;

        if at < self.lines.len() {
            let inherited = at > 0 && self.lines[at - 1].open_comment();
            if inherited != removed.open_comment() {
                self.rehighlight_from(at);
            }
        }
    }

    /// Insert one byte at logical `column`, clamped to the line length
    pub fn insert_char(&mut self, at: usize, column: usize, ch: u8) {
        let Some(line) = self.lines.get_mut(at) else {
            return;
        };

        let column = column.min(line.len());
        line.raw_mut().insert(column, ch);
        self.refresh(at);
        self.dirty = true;
    }

    /// Remove the byte at logical `column` if it exists
    pub fn delete_char(&mut self, at: usize, column: usize) {
        let Some(line) = self.lines.get_mut(at) else {
            return;
        };
        if column >= line.len() {
            return;
        }

        line.raw_mut().remove(column);
        self.refresh(at);
        self.dirty = true;
    }

    /// Append raw bytes to the end of line `at`
    pub fn append_raw(&mut self, at: usize, text: &[u8]) {
        let Some(line) = self.lines.get_mut(at) else {
            return;
        };

        line.raw_mut().extend_from_slice(text);
        self.refresh(at);
        self.dirty = true;
    }

    /// Move everything from `column` onward into a new line after `at`
    pub fn split_at(&mut self, at: usize, column: usize) {
        let Some(line) = self.lines.get(at) else {
            return;
        };

        let column = column.min(line.len());
        let suffix = line.raw()[column..].to_vec();
        self.insert(at + 1, &suffix);

        self.lines[at].raw_mut().truncate(column);
        self.refresh(at);
    }

    /// Append line `at` onto line `at - 1` and remove it.
    ///
    /// Returns the column on the previous line where the joined text begins.
    pub fn join_with_previous(&mut self, at: usize) -> Option<usize> {
        if at == 0 || at >= self.lines.len() {
            return None;
        }

        let column = self.lines[at - 1].len();
        let content = self.lines[at].raw().to_vec();
        self.append_raw(at - 1, &content);
        self.delete(at);
        Some(column)
    }

    /// Overlay `Highlight::Match` on a rendered range of line `at`.
    ///
    /// The caller saves the original highlight beforehand and restores it
    /// with [`restore_highlight`](Self::restore_highlight).
    pub fn match_highlight(&mut self, at: usize, start: usize, len: usize) {
        let Some(line) = self.lines.get_mut(at) else {
            return;
        };

        let highlight = line.highlight_mut();
        let end = start.saturating_add(len).min(highlight.len());
        if start < end {
            highlight[start..end].fill(Highlight::Match);
        }
    }

    /// Put back a saved highlight slice verbatim. Returns false (and leaves
    /// the line untouched) when the line no longer has that shape.
    pub fn restore_highlight(&mut self, at: usize, saved: &[Highlight]) -> bool {
        let Some(line) = self.lines.get_mut(at) else {
            return false;
        };

        let highlight = line.highlight_mut();
        if highlight.len() != saved.len() {
            return false;
        }
        highlight.copy_from_slice(saved);
        true
    }

    /// All raw content joined, each line terminated by `\n`
    pub fn to_bytes(&self) -> Vec<u8> {
        let total = self.lines.iter().map(|line| line.len() + 1).sum();
        let mut bytes = Vec::with_capacity(total);
        for line in &self.lines {
            bytes.extend_from_slice(line.raw());
            bytes.push(b'\n');
        }
        bytes
    }

    fn reindex_from(&mut self, start: usize) {
        for (index, line) in self.lines.iter_mut().enumerate().skip(start) {
            line.set_index(index);
        }
    }

    /// Re-render line `at` after a content change and reclassify onward
    fn refresh(&mut self, at: usize) {
        if let Some(line) = self.lines.get_mut(at) {
            line.rerender();
            self.rehighlight_from(at);
        }
    }

    /// Reclassify `start` unconditionally, then each following line while
    /// the previous line's `open_comment` flag keeps changing.
    fn rehighlight_from(&mut self, start: usize) {
        let mut at = start;
        while at < self.lines.len() {
            let starts_in_comment = at > 0 && self.lines[at - 1].open_comment();
            if !self.lines[at].rehighlight(self.syntax, starts_in_comment) {
                break;
            }
            at += 1;
        }

        if at > start + 1 {
            tracing::trace!(start, end = at, "block comment state cascaded");
        }
    }

    fn rehighlight_all(&mut self) {
        for at in 0..self.lines.len() {
            let starts_in_comment = at > 0 && self.lines[at - 1].open_comment();
            self.lines[at].rehighlight(self.syntax, starts_in_comment);
        }
    }
}
