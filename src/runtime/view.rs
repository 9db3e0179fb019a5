//! Drawing a frame: text rows, status line, message line

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use linepad::model::{message_line, status_line, AppModel, Line};
use linepad::syntax::Highlight;
use linepad::theme::Color;

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Welcome banner centered in `width` columns, led by the `~` filler
pub fn welcome_line(width: usize) -> String {
    let text = format!("linepad editor -- version {}", env!("CARGO_PKG_VERSION"));
    let text: String = text.chars().take(width).collect();
    let mut padding = (width - text.chars().count()) / 2;

    let mut line = String::with_capacity(width);
    if padding > 0 {
        line.push('~');
        padding -= 1;
    }
    line.extend(std::iter::repeat(' ').take(padding));
    line.push_str(&text);
    line
}

/// Split the visible part of a line into runs of equal highlight
fn visible_runs(line: &Line, left: usize, width: usize) -> Vec<(Highlight, String)> {
    let rendered = line.rendered();
    let highlight = line.highlight();
    let start = left.min(rendered.len());
    let end = (left + width).min(rendered.len());

    let mut runs: Vec<(Highlight, String)> = Vec::new();
    let mut run_start = start;
    for i in start..end {
        if highlight[i] != highlight[run_start] {
            runs.push((
                highlight[run_start],
                String::from_utf8_lossy(&rendered[run_start..i]).into_owned(),
            ));
            run_start = i;
        }
    }
    if run_start < end {
        runs.push((
            highlight[run_start],
            String::from_utf8_lossy(&rendered[run_start..end]).into_owned(),
        ));
    }
    runs
}

/// Draw the whole screen. The model must have been scrolled already.
pub fn draw(model: &AppModel, out: &mut impl Write) -> io::Result<()> {
    let viewport = &model.editor.viewport;
    let width = viewport.visible_columns;
    let theme = &model.theme;

    queue!(out, cursor::Hide, cursor::MoveTo(0, 0))?;

    let shown = &model.buffer.lines()[viewport.visible_range(model.buffer.len())];
    for row in 0..viewport.visible_lines {
        queue!(
            out,
            cursor::MoveTo(0, row as u16),
            SetBackgroundColor(term_color(theme.editor.background))
        )?;

        match shown.get(row) {
            Some(line) => {
                for (highlight, text) in visible_runs(line, viewport.left_column, width) {
                    queue!(
                        out,
                        SetForegroundColor(term_color(theme.color(highlight))),
                        Print(text)
                    )?;
                }
            }
            None => {
                let filler = if model.shows_welcome() && row == viewport.visible_lines / 3 {
                    welcome_line(width)
                } else {
                    "~".to_string()
                };
                queue!(
                    out,
                    SetForegroundColor(term_color(theme.editor.tilde)),
                    Print(filler)
                )?;
            }
        }
        queue!(out, Clear(ClearType::UntilNewLine))?;
    }

    let status_row = viewport.visible_lines as u16;
    queue!(
        out,
        cursor::MoveTo(0, status_row),
        SetBackgroundColor(term_color(theme.status_bar.background)),
        SetForegroundColor(term_color(theme.status_bar.foreground)),
        SetAttribute(Attribute::Bold),
        Print(status_line(model, width)),
        SetAttribute(Attribute::Reset),
        ResetColor,
    )?;

    let message: String = message_line(model)
        .unwrap_or_default()
        .chars()
        .take(width)
        .collect();
    queue!(
        out,
        cursor::MoveTo(0, status_row + 1),
        SetBackgroundColor(term_color(theme.editor.background)),
        SetForegroundColor(term_color(theme.editor.foreground)),
        Print(&message),
        Clear(ClearType::UntilNewLine),
        ResetColor,
    )?;

    let (cursor_col, cursor_row) = if model.ui.prompt.is_active() {
        (message.chars().count(), status_row as usize + 1)
    } else {
        let (row, col) = model.editor.screen_cursor();
        (col, row)
    };
    queue!(
        out,
        cursor::MoveTo(cursor_col as u16, cursor_row as u16),
        cursor::Show
    )?;

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use linepad::model::LineStore;
    use linepad::syntax::rule_by_filetype;

    #[test]
    fn test_welcome_line_centered() {
        let line = welcome_line(60);
        assert!(line.starts_with('~'));
        assert!(line.trim_end().ends_with(env!("CARGO_PKG_VERSION")));
        let text_start = line.find("linepad").unwrap();
        let text_len = line.len() - text_start;
        assert!((60 - text_len) / 2 == text_start);
    }

    #[test]
    fn test_welcome_line_narrow() {
        assert_eq!(welcome_line(7), "linepad");
        assert_eq!(welcome_line(0), "");
    }

    #[test]
    fn test_visible_runs_split_on_highlight() {
        let store = LineStore::from_lines(["int x;"], rule_by_filetype("c"));
        let line = store.get(0).unwrap();
        let runs = visible_runs(line, 0, 80);
        assert_eq!(runs[0], (Highlight::KeywordSecondary, "int".to_string()));
        assert_eq!(runs[1], (Highlight::Normal, " x;".to_string()));

        let clipped = visible_runs(line, 4, 1);
        assert_eq!(clipped, vec![(Highlight::Normal, "x".to_string())]);
        assert!(visible_runs(line, 10, 5).is_empty());
    }
}
