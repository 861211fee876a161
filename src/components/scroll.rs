//! Scrolling support for the overlays
//!
//! Lines are wrapped to the overlay width up front, so the number of rows is
//! known exactly and the scroll offset can be clamped to the last page.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Break each line into rows of at most `width` display columns, keeping span styles
pub fn wrap_lines(lines: &[Line<'static>], width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    if width == 0 {
        return lines.to_vec();
    }

    let mut rows = Vec::with_capacity(lines.len());
    for line in lines {
        let mut current: Vec<Span<'static>> = Vec::new();
        let mut used = 0;
        for span in &line.spans {
            let mut chunk = String::new();
            for c in span.content.chars() {
                let w = c.width().unwrap_or(0);
                if used + w > width && used > 0 {
                    if !chunk.is_empty() {
                        current.push(Span::styled(std::mem::take(&mut chunk), span.style));
                    }
                    rows.push(Line::from(std::mem::take(&mut current)));
                    used = 0;
                }
                chunk.push(c);
                used += w;
            }
            if !chunk.is_empty() {
                current.push(Span::styled(chunk, span.style));
            }
        }
        rows.push(Line::from(current));
    }
    rows
}

/// Largest offset that still fills a view of `visible` rows
pub fn max_scroll(total: usize, visible: u16) -> usize {
    total.saturating_sub(visible as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Style};

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_long_line_wraps_without_losing_text() {
        let text = "x".repeat(25) + "END";
        let rows = wrap_lines(&[Line::from(text.clone())], 10);

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| plain(r).chars().count() <= 10));
        assert_eq!(rows.iter().map(plain).collect::<String>(), text);
    }

    #[test]
    fn test_wrap_keeps_span_styles() {
        let line = Line::from(vec![
            Span::raw("key: "),
            Span::styled("abcdefgh", Style::default().fg(Color::Green)),
        ]);
        let rows = wrap_lines(&[line], 8);

        assert_eq!(plain(&rows[0]), "key: abc");
        assert_eq!(plain(&rows[1]), "defgh");
        assert_eq!(rows[1].spans[0].style.fg, Some(Color::Green));
    }

    #[test]
    fn test_short_and_empty_lines_stay_single_rows() {
        let rows = wrap_lines(&[Line::from(""), Line::from("short")], 10);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_max_scroll() {
        assert_eq!(max_scroll(50, 20), 30);
        assert_eq!(max_scroll(5, 20), 0);
    }
}
