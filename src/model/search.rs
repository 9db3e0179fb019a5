//! Incremental search over rendered text
//!
//! A `SearchSession` is owned by whoever drives the search and is passed the
//! buffer explicitly on every step. It remembers the last matched line, the
//! search direction, and the highlight the match overlay replaced.

use super::buffer::LineStore;
use crate::syntax::Highlight;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

/// A located match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    pub line: usize,
    /// Logical column of the match start
    pub column: usize,
    /// Display column of the match start
    pub display_column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SavedHighlight {
    line: usize,
    highlight: Vec<Highlight>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSession {
    last_match: Option<usize>,
    direction: SearchDirection,
    saved: Option<SavedHighlight>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that continues as if `line` had just matched
    #[cfg(test)]
    pub(crate) fn starting_after(line: usize, direction: SearchDirection) -> Self {
        Self {
            last_match: Some(line),
            direction,
            saved: None,
        }
    }

    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    pub fn direction(&self) -> SearchDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: SearchDirection) {
        self.direction = direction;
    }

    /// Whether a match overlay is currently applied to the buffer
    pub fn has_overlay(&self) -> bool {
        self.saved.is_some()
    }

    /// Forget the last match so the next step starts again from the top
    pub fn reset(&mut self) {
        self.last_match = None;
        self.direction = SearchDirection::Forward;
    }

    /// Put the overlaid line's original highlight back
    pub fn clear_overlay(&mut self, buffer: &mut LineStore) {
        if let Some(saved) = self.saved.take() {
            if !buffer.restore_highlight(saved.line, &saved.highlight) {
                tracing::trace!(line = saved.line, "stale search overlay dropped");
            }
        }
    }

    /// Find the next line containing `query`, wrapping at either end.
    ///
    /// Clears the previous overlay first. A session with no last match always
    /// searches forward from line 0.
    pub fn step(&mut self, buffer: &mut LineStore, query: &[u8]) -> Option<SearchMatch> {
        self.clear_overlay(buffer);

        let total = buffer.len();
        if query.is_empty() || total == 0 {
            return None;
        }
        if self.last_match.is_none() {
            self.direction = SearchDirection::Forward;
        }

        let mut current = self.last_match.map(|line| line.min(total - 1));
        for _ in 0..total {
            let next = match (current, self.direction) {
                (None, _) => 0,
                (Some(line), SearchDirection::Forward) => {
                    if line + 1 >= total {
                        0
                    } else {
                        line + 1
                    }
                }
                (Some(line), SearchDirection::Backward) => {
                    if line == 0 {
                        total - 1
                    } else {
                        line - 1
                    }
                }
            };
            current = Some(next);

            let Some(line) = buffer.get(next) else {
                break;
            };
            if let Some(display_column) = line.find_rendered(query) {
                let found = SearchMatch {
                    line: next,
                    column: line.logical_column(display_column),
                    display_column,
                };
                self.saved = Some(SavedHighlight {
                    line: next,
                    highlight: line.highlight().to_vec(),
                });
                self.last_match = Some(next);
                buffer.match_highlight(next, display_column, query.len());

                tracing::trace!(line = next, column = found.column, "search match");
                return Some(found);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(lines: &[&str]) -> LineStore {
        LineStore::from_lines(lines.iter().map(|l| l.as_bytes()), None)
    }

    #[test]
    fn test_first_step_starts_at_top() {
        let mut buf = buffer(&["zero", "one foo", "two foo"]);
        let mut session = SearchSession::new();
        let found = session.step(&mut buf, b"foo").unwrap();
        assert_eq!((found.line, found.column), (1, 4));
        assert_eq!(session.last_match(), Some(1));
    }

    #[test]
    fn test_forward_steps_advance_and_wrap() {
        let mut buf = buffer(&["foo", "bar", "foo"]);
        let mut session = SearchSession::new();
        assert_eq!(session.step(&mut buf, b"foo").unwrap().line, 0);
        assert_eq!(session.step(&mut buf, b"foo").unwrap().line, 2);
        assert_eq!(session.step(&mut buf, b"foo").unwrap().line, 0);
    }

    #[test]
    fn test_forward_from_last_line_wraps_to_first() {
        let mut buf = buffer(&["needle", "hay", "hay"]);
        let mut session = SearchSession::starting_after(2, SearchDirection::Forward);
        assert_eq!(session.step(&mut buf, b"needle").unwrap().line, 0);
    }

    #[test]
    fn test_backward_from_first_line_wraps_to_last() {
        let mut buf = buffer(&["hay", "hay", "needle"]);
        let mut session = SearchSession::starting_after(0, SearchDirection::Backward);
        assert_eq!(session.step(&mut buf, b"needle").unwrap().line, 2);
    }

    #[test]
    fn test_single_match_is_found_again() {
        let mut buf = buffer(&["a", "needle", "b"]);
        let mut session = SearchSession::new();
        assert_eq!(session.step(&mut buf, b"needle").unwrap().line, 1);
        assert_eq!(session.step(&mut buf, b"needle").unwrap().line, 1);
    }

    #[test]
    fn test_no_match_returns_none() {
        let mut buf = buffer(&["a", "b"]);
        let mut session = SearchSession::new();
        assert!(session.step(&mut buf, b"zzz").is_none());
        assert!(session.step(&mut buf, b"").is_none());
        assert!(session.step(&mut LineStore::new(), b"a").is_none());
    }

    #[test]
    fn test_match_overlay_is_restored_on_next_step() {
        let mut buf = LineStore::from_lines(["int foo;", "foo"], crate::syntax::rule_by_filetype("c"));
        let original = buf.get(0).unwrap().highlight().to_vec();

        let mut session = SearchSession::new();
        session.step(&mut buf, b"foo");
        assert_eq!(buf.get(0).unwrap().highlight()[4..7], [Highlight::Match; 3]);
        assert!(session.has_overlay());

        session.step(&mut buf, b"foo");
        assert_eq!(buf.get(0).unwrap().highlight(), original.as_slice());
        assert_eq!(buf.get(1).unwrap().highlight(), &[Highlight::Match; 3]);

        session.clear_overlay(&mut buf);
        assert!(!session.has_overlay());
        assert_eq!(buf.get(1).unwrap().highlight(), &[Highlight::Normal; 3]);
    }

    #[test]
    fn test_match_after_tab_reports_logical_column() {
        let mut buf = buffer(&["\tkey = 1"]);
        let mut session = SearchSession::new();
        let found = session.step(&mut buf, b"key").unwrap();
        assert_eq!(found.display_column, 4);
        assert_eq!(found.column, 1);
    }

    #[test]
    fn test_reset_forces_forward() {
        let mut session = SearchSession::starting_after(3, SearchDirection::Backward);
        session.reset();
        assert_eq!(session.last_match(), None);
        assert_eq!(session.direction(), SearchDirection::Forward);
    }
}
