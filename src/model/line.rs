//! Line record - raw content plus its render and highlight caches

use std::borrow::Cow;

use crate::syntax::{highlight_line, Highlight, LineHighlights, SyntaxRule};
use crate::util::{display_to_logical, logical_to_display, render};

/// One logical row of text.
///
/// `rendered` is `raw` with tabs expanded, `highlight` classifies each byte of
/// `rendered`, and `open_comment` records whether a block comment is still
/// open at the end of the line. The caches are only written by [`LineStore`].
///
/// [`LineStore`]: super::LineStore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    index: usize,
    raw: Vec<u8>,
    rendered: Vec<u8>,
    highlight: Vec<Highlight>,
    open_comment: bool,
}

impl Line {
    /// Create an unrendered line. `open_comment` seeds the flag that the next
    /// classification compares against.
    pub(crate) fn new(index: usize, raw: Vec<u8>, open_comment: bool) -> Self {
        Self {
            index,
            raw,
            rendered: Vec::new(),
            highlight: Vec::new(),
            open_comment,
        }
    }

    /// Position of this line in its store
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn rendered(&self) -> &[u8] {
        &self.rendered
    }

    pub fn highlight(&self) -> &[Highlight] {
        &self.highlight
    }

    pub fn open_comment(&self) -> bool {
        self.open_comment
    }

    /// Length of the raw content in bytes
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Rendered text for drawing, with invalid UTF-8 replaced
    pub fn rendered_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.rendered)
    }

    /// Display column of a logical offset
    pub fn display_column(&self, logical: usize) -> usize {
        logical_to_display(&self.raw, logical)
    }

    /// Logical offset covering a display column
    pub fn logical_column(&self, display: usize) -> usize {
        display_to_logical(&self.raw, display)
    }

    /// Display offset of the first occurrence of `query` in the rendered text
    pub fn find_rendered(&self, query: &[u8]) -> Option<usize> {
        if query.is_empty() || query.len() > self.rendered.len() {
            return None;
        }
        self.rendered
            .windows(query.len())
            .position(|window| window == query)
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub(crate) fn raw_mut(&mut self) -> &mut Vec<u8> {
        &mut self.raw
    }

    pub(crate) fn highlight_mut(&mut self) -> &mut [Highlight] {
        &mut self.highlight
    }

    /// Rebuild `rendered` from `raw`
    pub(crate) fn rerender(&mut self) {
        self.rendered = render(&self.raw);
    }

    /// Reclassify the rendered text. Returns whether `open_comment` changed.
    pub(crate) fn rehighlight(&mut self, rule: Option<&SyntaxRule>, starts_in_comment: bool) -> bool {
        let LineHighlights {
            highlight,
            open_comment,
        } = highlight_line(rule, &self.rendered, starts_in_comment);

        self.highlight = highlight;
        let changed = self.open_comment != open_comment;
        self.open_comment = open_comment;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_line(raw: &str) -> Line {
        let mut line = Line::new(0, raw.as_bytes().to_vec(), false);
        line.rerender();
        line.rehighlight(None, false);
        line
    }

    #[test]
    fn test_tab_line_renders_and_maps_columns() {
        let line = rendered_line("a\tb");
        assert_eq!(line.rendered(), b"a   b");
        assert_eq!(line.rendered().len(), 5);
        assert_eq!(line.highlight().len(), 5);
        assert_eq!(line.display_column(2), 4);
        assert_eq!(line.logical_column(4), 2);
    }

    #[test]
    fn test_find_rendered_reports_display_offset() {
        let line = rendered_line("\tfoo bar");
        assert_eq!(line.find_rendered(b"bar"), Some(8));
        assert_eq!(line.find_rendered(b"baz"), None);
        assert_eq!(line.find_rendered(b""), None);
    }

    #[test]
    fn test_rehighlight_reports_flag_change() {
        let rule = crate::syntax::rule_by_filetype("c");
        let mut line = Line::new(0, b"/* open".to_vec(), false);
        line.rerender();
        assert!(line.rehighlight(rule, false));
        assert!(line.open_comment());
        assert!(!line.rehighlight(rule, false));
    }
}
