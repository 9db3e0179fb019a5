//! Tab-aware column mapping between logical offsets and display cells
//!
//! Every byte occupies one display cell except the tab character, which
//! expands to the next multiple of [`TAB_WIDTH`].

/// Tab width for display column calculations
pub const TAB_WIDTH: usize = 4;

/// Punctuation that ends a word for keyword and number matching
const SEPARATOR_PUNCTUATION: &[u8] = b",.()+-/*=~%<>[];";

/// Check if a byte delimits keywords and numbers (whitespace, NUL, or punctuation)
#[inline]
pub fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == b'\0' || SEPARATOR_PUNCTUATION.contains(&byte)
}

/// Convert a logical offset in `raw` to its display column.
///
/// Offsets past the end of the line walk only the existing bytes.
pub fn logical_to_display(raw: &[u8], logical: usize) -> usize {
    let mut display = 0;

    for &byte in raw.iter().take(logical) {
        if byte == b'\t' {
            display += (TAB_WIDTH - 1) - (display % TAB_WIDTH);
        }
        display += 1;
    }

    display
}

/// Convert a display column to the logical offset that covers it.
///
/// Returns the first logical offset whose post-tab display column exceeds
/// `display`, or the line length if the column lies past the end. A column
/// inside an expanded tab maps to the tab itself.
pub fn display_to_logical(raw: &[u8], display: usize) -> usize {
    let mut current = 0;

    for (logical, &byte) in raw.iter().enumerate() {
        if byte == b'\t' {
            current += (TAB_WIDTH - 1) - (current % TAB_WIDTH);
        }
        current += 1;

        if current > display {
            return logical;
        }
    }

    raw.len()
}

/// Expand every tab in `raw` to spaces up to the next tab stop
pub fn render(raw: &[u8]) -> Vec<u8> {
    let tabs = raw.iter().filter(|&&b| b == b'\t').count();
    let mut rendered = Vec::with_capacity(raw.len() + tabs * (TAB_WIDTH - 1));

    for &byte in raw {
        if byte == b'\t' {
            rendered.push(b' ');
            while rendered.len() % TAB_WIDTH != 0 {
                rendered.push(b' ');
            }
        } else {
            rendered.push(byte);
        }
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_expands_tab_to_next_stop() {
        assert_eq!(render(b"a\tb"), b"a   b".to_vec());
        assert_eq!(render(b"\tx"), b"    x".to_vec());
        assert_eq!(render(b"abcd\te"), b"abcd    e".to_vec());
    }

    #[test]
    fn test_render_without_tabs_is_identity() {
        assert_eq!(render(b"hello world"), b"hello world".to_vec());
        assert!(render(b"").is_empty());
    }

    #[test]
    fn test_logical_to_display_with_tab() {
        let raw = b"a\tb";
        assert_eq!(logical_to_display(raw, 0), 0);
        assert_eq!(logical_to_display(raw, 1), 1);
        assert_eq!(logical_to_display(raw, 2), 4);
        assert_eq!(logical_to_display(raw, 3), 5);
    }

    #[test]
    fn test_logical_to_display_clamps_past_end() {
        assert_eq!(logical_to_display(b"ab", 10), 2);
    }

    #[test]
    fn test_display_to_logical_inside_tab_maps_to_tab() {
        let raw = b"a\tb";
        assert_eq!(display_to_logical(raw, 1), 1);
        assert_eq!(display_to_logical(raw, 2), 1);
        assert_eq!(display_to_logical(raw, 3), 1);
        assert_eq!(display_to_logical(raw, 4), 2);
    }

    #[test]
    fn test_display_to_logical_past_end_returns_length() {
        assert_eq!(display_to_logical(b"abc", 3), 3);
        assert_eq!(display_to_logical(b"abc", 99), 3);
        assert_eq!(display_to_logical(b"", 0), 0);
    }

    #[test]
    fn test_round_trip_on_plain_text() {
        let raw = b"let x = 42;";
        for c in 0..=raw.len() {
            assert_eq!(display_to_logical(raw, logical_to_display(raw, c)), c);
        }
    }

    #[test]
    fn test_round_trip_with_tabs() {
        let raw = b"\tif\t(x)";
        for c in 0..=raw.len() {
            assert_eq!(display_to_logical(raw, logical_to_display(raw, c)), c);
        }
    }

    #[test]
    fn test_separators() {
        for &b in b" \t\n\0,.()+-/*=~%<>[];" {
            assert!(is_separator(b), "{:?} should be a separator", b as char);
        }
        for &b in b"az_AZ09#{}\"'" {
            assert!(!is_separator(b), "{:?} should not be a separator", b as char);
        }
    }
}
