//! Object details dialog
//!
//! Full property dump of one object from the browser, wrapped to the
//! overlay width and scrollable.

use crate::action::Action;
use crate::component::Component;
use crate::components::scroll;
use crate::model::schema::StoredObject;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct ObjectDetailsDialog {
    object_id: String,
    scroll_offset: usize,
    scroll_limit: usize,
    content: Vec<Line<'static>>,
}

impl ObjectDetailsDialog {
    pub fn set_object(
        &mut self,
        object_id: &str,
        object: Option<(&str, &StoredObject)>,
        scroll: usize,
    ) {
        self.object_id = object_id.to_string();
        self.scroll_offset = scroll;
        self.content = match object {
            Some((class_name, object)) => object_lines(class_name, object),
            None => vec![Line::from(Span::styled(
                "Object is no longer loaded",
                Style::default().fg(Color::DarkGray),
            ))],
        };
    }

    /// Last valid scroll offset, as of the latest draw
    pub fn scroll_limit(&self) -> usize {
        self.scroll_limit
    }
}

impl Component for ObjectDetailsDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('v') | KeyCode::Enter => {
                Some(Action::CloseModal)
            }
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ModalDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ModalUp),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 2;
        let overlay_area = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(overlay_area);

        let rows = scroll::wrap_lines(&self.content, chunks[0].width.saturating_sub(2));
        let total = rows.len();
        self.scroll_limit = scroll::max_scroll(total, chunks[0].height.saturating_sub(2));
        self.scroll_offset = self.scroll_offset.min(self.scroll_limit);

        let paragraph = Paragraph::new(rows)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(format!(" Object: {} ", self.object_id))
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            )
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, chunks[0]);

        let position = if self.scroll_limit > 0 {
            format!("  line {}/{}", self.scroll_offset + 1, total)
        } else {
            String::new()
        };
        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                " Esc/q ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Close  "),
            Span::styled(
                " j/k ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Scroll"),
            Span::styled(position, Style::default().fg(Color::DarkGray)),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[1]);

        Ok(())
    }
}

/// Id, class and every property line of an object
pub fn object_lines(class_name: &str, object: &StoredObject) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("ID: ", label),
            Span::styled(object.id.clone(), Style::default().fg(Color::Magenta)),
        ]),
        Line::from(vec![
            Span::styled("Class: ", label),
            Span::raw(class_name.to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Properties:", label)),
    ];
    lines.extend(object.properties_json().lines().map(|l| {
        Line::from(Span::styled(
            l.to_string(),
            Style::default().fg(Color::Green),
        ))
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_object_lines_hold_every_property() {
        let object: StoredObject = serde_json::from_value(json!({
            "id": "obj-1",
            "properties": {"body": "x".repeat(300), "title": "Hello"}
        }))
        .unwrap();

        let text = plain(&object_lines("Article", &object));

        assert_eq!(text[0], "ID: obj-1");
        assert_eq!(text[1], "Class: Article");
        assert!(text.iter().any(|l| l.contains(&"x".repeat(300))));
        assert!(text.iter().any(|l| l.contains("\"title\": \"Hello\"")));
    }

    #[test]
    fn test_missing_object_message() {
        let mut dialog = ObjectDetailsDialog::default();
        dialog.set_object("gone", None, 0);
        assert_eq!(plain(&dialog.content), vec!["Object is no longer loaded"]);
    }
}
