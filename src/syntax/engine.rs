//! Single-pass lexical classifier for one rendered line
//!
//! The scan is a small state machine (`Normal`, `InString`, `InBlockComment`,
//! with single-line comments terminating the scan). A line's initial state is
//! `InBlockComment` when the previous line ended inside a block comment; the
//! resulting `open_comment` flag is what the next line starts from.

use super::highlights::Highlight;
use super::languages::{SyntaxRule, SECONDARY_KEYWORD_MARKER};
use crate::util::is_separator;

/// Classification result for one line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineHighlights {
    /// One category per rendered byte
    pub highlight: Vec<Highlight>,
    /// Whether an unterminated block comment is open at the end of the line
    pub open_comment: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InString(u8),
    InBlockComment,
}

#[inline]
fn fill(highlight: &mut [Highlight], start: usize, len: usize, category: Highlight) {
    let end = (start + len).min(highlight.len());
    highlight[start..end].fill(category);
}

/// Classify `rendered` under `rule`.
///
/// With no rule every byte is `Normal` and no comment is left open.
pub fn highlight_line(
    rule: Option<&SyntaxRule>,
    rendered: &[u8],
    starts_in_comment: bool,
) -> LineHighlights {
    let mut highlight = vec![Highlight::Normal; rendered.len()];

    let Some(rule) = rule else {
        return LineHighlights {
            highlight,
            open_comment: false,
        };
    };

    let line_comment = rule
        .single_line_comment
        .filter(|marker| !marker.is_empty())
        .map(str::as_bytes);
    let block_comment = rule
        .block_comment
        .filter(|(start, end)| !start.is_empty() && !end.is_empty())
        .map(|(start, end)| (start.as_bytes(), end.as_bytes()));

    let mut state = if starts_in_comment && block_comment.is_some() {
        ScanState::InBlockComment
    } else {
        ScanState::Normal
    };
    let mut previous_separator = true;
    let mut i = 0;

    while i < rendered.len() {
        let c = rendered[i];
        let rest = &rendered[i..];
        let previous = if i > 0 {
            highlight[i - 1]
        } else {
            Highlight::Normal
        };

        if state == ScanState::Normal {
            if let Some(marker) = line_comment {
                if rest.starts_with(marker) {
                    highlight[i..].fill(Highlight::Comment);
                    break;
                }
            }
        }

        if let Some((start, end)) = block_comment {
            match state {
                ScanState::InBlockComment => {
                    if rest.starts_with(end) {
                        fill(&mut highlight, i, end.len(), Highlight::BlockComment);
                        i += end.len();
                        state = ScanState::Normal;
                        previous_separator = true;
                    } else {
                        highlight[i] = Highlight::BlockComment;
                        i += 1;
                    }
                    continue;
                }
                ScanState::Normal if rest.starts_with(start) => {
                    fill(&mut highlight, i, start.len(), Highlight::BlockComment);
                    i += start.len();
                    state = ScanState::InBlockComment;
                    continue;
                }
                _ => {}
            }
        }

        if rule.flags.strings {
            match state {
                ScanState::InString(delimiter) => {
                    highlight[i] = Highlight::String;
                    if c == b'\\' && i + 1 < rendered.len() {
                        highlight[i + 1] = Highlight::String;
                        i += 2;
                        continue;
                    }
                    if c == delimiter {
                        state = ScanState::Normal;
                    }
                    i += 1;
                    previous_separator = true;
                    continue;
                }
                ScanState::Normal if c == b'"' || c == b'\'' => {
                    state = ScanState::InString(c);
                    highlight[i] = Highlight::String;
                    i += 1;
                    continue;
                }
                _ => {}
            }
        }

        if rule.flags.numbers {
            let digit = c.is_ascii_digit() && (previous_separator || previous == Highlight::Number);
            let decimal = c == b'.' && previous == Highlight::Number;
            if digit || decimal {
                highlight[i] = Highlight::Number;
                i += 1;
                previous_separator = false;
                continue;
            }
        }

        if previous_separator {
            if let Some((len, category)) = match_keyword(rule, rendered, i) {
                fill(&mut highlight, i, len, category);
                i += len;
                previous_separator = false;
                continue;
            }
        }

        previous_separator = is_separator(c);
        i += 1;
    }

    LineHighlights {
        highlight,
        open_comment: state == ScanState::InBlockComment,
    }
}

/// First keyword in declaration order that starts at `at` and is followed by a separator
fn match_keyword(rule: &SyntaxRule, rendered: &[u8], at: usize) -> Option<(usize, Highlight)> {
    let rest = &rendered[at..];

    rule.keywords.iter().find_map(|keyword| {
        let keyword = keyword.as_bytes();
        let (word, category) = match keyword.split_last() {
            Some((&SECONDARY_KEYWORD_MARKER, word)) => (word, Highlight::KeywordSecondary),
            _ => (keyword, Highlight::Keyword),
        };
        if word.is_empty() || !rest.starts_with(word) {
            return None;
        }
        let following = rest.get(word.len()).copied().unwrap_or(b'\0');
        is_separator(following).then_some((word.len(), category))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::languages::{rule_by_filetype, HighlightFlags};

    fn c_rule() -> &'static SyntaxRule {
        rule_by_filetype("c").unwrap()
    }

    fn classify(text: &str) -> LineHighlights {
        highlight_line(Some(c_rule()), text.as_bytes(), false)
    }

    #[test]
    fn test_no_rule_is_all_normal() {
        let result = highlight_line(None, b"int x = 1; /* c", false);
        assert!(result.highlight.iter().all(|&h| h == Highlight::Normal));
        assert!(!result.open_comment);
    }

    #[test]
    fn test_highlight_length_matches_rendered() {
        for text in ["", "x", "int main(void) {", "\"unterminated", "/* open"] {
            assert_eq!(classify(text).highlight.len(), text.len());
        }
    }

    #[test]
    fn test_single_line_comment_runs_to_end() {
        let result = classify("x = 1; // note");
        assert_eq!(result.highlight[7..], [Highlight::Comment; 7]);
        assert_eq!(result.highlight[0], Highlight::Normal);
        assert!(!result.open_comment);
    }

    #[test]
    fn test_comment_marker_inside_string_is_string() {
        let result = classify("\"a // b\"");
        assert!(result.highlight.iter().all(|&h| h == Highlight::String));
    }

    #[test]
    fn test_block_comment_opens_and_closes() {
        let result = classify("a /* b */ c");
        assert_eq!(result.highlight[0], Highlight::Normal);
        assert_eq!(result.highlight[2..9], [Highlight::BlockComment; 7]);
        assert_eq!(result.highlight[10], Highlight::Normal);
        assert!(!result.open_comment);
    }

    #[test]
    fn test_unterminated_block_comment_stays_open() {
        let result = classify("/* start");
        assert!(result.open_comment);
        assert!(result.highlight.iter().all(|&h| h == Highlight::BlockComment));
    }

    #[test]
    fn test_line_starting_in_comment() {
        let result = highlight_line(Some(c_rule()), b"end */ x", true);
        assert_eq!(result.highlight[..6], [Highlight::BlockComment; 6]);
        assert_eq!(result.highlight[7], Highlight::Normal);
        assert!(!result.open_comment);
    }

    #[test]
    fn test_single_line_marker_ignored_inside_block_comment() {
        let result = highlight_line(Some(c_rule()), b"// still block", true);
        assert!(result.highlight.iter().all(|&h| h == Highlight::BlockComment));
        assert!(result.open_comment);
    }

    #[test]
    fn test_string_escape_skips_delimiter() {
        let result = classify(r#"s = "a\"b"; x"#);
        assert_eq!(result.highlight[4..10], [Highlight::String; 6]);
        assert_eq!(result.highlight[10], Highlight::Normal);
    }

    #[test]
    fn test_single_quote_string() {
        let result = classify("c = 'x';");
        assert_eq!(result.highlight[4..7], [Highlight::String; 3]);
        assert_eq!(result.highlight[7], Highlight::Normal);
    }

    #[test]
    fn test_numbers_need_leading_separator() {
        let result = classify("x1 = 42");
        assert_eq!(result.highlight[1], Highlight::Normal);
        assert_eq!(result.highlight[5..7], [Highlight::Number; 2]);
    }

    #[test]
    fn test_decimal_point_follows_number() {
        let result = classify("3.14 .5");
        assert_eq!(result.highlight[..4], [Highlight::Number; 4]);
        // `.` is a separator, so the `5` after it is still a number
        assert_eq!(result.highlight[5], Highlight::Normal);
        assert_eq!(result.highlight[6], Highlight::Number);
    }

    #[test]
    fn test_keyword_requires_trailing_separator() {
        let intx = classify("intx");
        assert!(intx.highlight.iter().all(|&h| h == Highlight::Normal));

        let int_x = classify("int x");
        assert_eq!(int_x.highlight[..3], [Highlight::KeywordSecondary; 3]);
        assert_eq!(int_x.highlight[4], Highlight::Normal);
    }

    #[test]
    fn test_keyword_requires_leading_separator() {
        let result = classify("xif (a)");
        assert!(result.highlight[..3].iter().all(|&h| h == Highlight::Normal));
    }

    #[test]
    fn test_primary_keyword_at_end_of_line() {
        let result = classify("return");
        assert_eq!(result.highlight, vec![Highlight::Keyword; 6]);
    }

    #[test]
    fn test_keyword_after_punctuation() {
        let result = classify("(void)");
        assert_eq!(result.highlight[1..5], [Highlight::KeywordSecondary; 4]);
    }

    #[test]
    fn test_preprocessor_keyword() {
        let result = classify("#include <stdio.h>");
        assert_eq!(result.highlight[..8], [Highlight::Keyword; 8]);
    }

    #[test]
    fn test_flags_disable_numbers_and_strings() {
        const PLAIN: SyntaxRule = SyntaxRule {
            filetype: "plain",
            filename_patterns: &[],
            keywords: &["if"],
            single_line_comment: None,
            block_comment: None,
            flags: HighlightFlags::NONE,
        };
        let result = highlight_line(Some(&PLAIN), b"if \"1\" 2", false);
        assert_eq!(result.highlight[..2], [Highlight::Keyword; 2]);
        assert!(result.highlight[2..].iter().all(|&h| h == Highlight::Normal));
    }

    #[test]
    fn test_open_flag_ignored_without_block_markers() {
        let python = rule_by_filetype("python").unwrap();
        let result = highlight_line(Some(python), b"x = 1", true);
        assert!(!result.open_comment);
        assert_eq!(result.highlight[4], Highlight::Number);
    }
}
