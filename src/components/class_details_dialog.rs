//! Class details dialog
//!
//! Shows name, vectorizer and every property of one schema class.

use crate::action::Action;
use crate::component::Component;
use crate::components::scroll;
use crate::model::domain::ClassDetailsView;
use crate::model::schema::ClassInfo;
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
pub struct ClassDetailsDialog {
    class_name: String,
    scroll_offset: usize,
    scroll_limit: usize,
    content: Vec<Line<'static>>,
}

impl ClassDetailsDialog {
    pub fn set_view(&mut self, class_name: &str, view: Option<&ClassDetailsView>, scroll: usize) {
        self.class_name = class_name.to_string();
        self.scroll_offset = scroll;
        self.content = details_lines(view);
    }

    /// Last valid scroll offset, as of the latest draw
    pub fn scroll_limit(&self) -> usize {
        self.scroll_limit
    }
}

impl Component for ClassDetailsDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => Some(Action::CloseModal),
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
        self.scroll_limit = scroll::max_scroll(rows.len(), chunks[0].height.saturating_sub(2));
        self.scroll_offset = self.scroll_offset.min(self.scroll_limit);

        let paragraph = Paragraph::new(rows)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(format!(" Class Details: {} ", self.class_name))
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, chunks[0]);

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
        ]))
        .block(Block::default().borders(Borders::ALL));

        frame.render_widget(help, chunks[1]);
        Ok(())
    }
}

/// Body of the details dialog for the given state
pub fn details_lines(view: Option<&ClassDetailsView>) -> Vec<Line<'static>> {
    match view {
        None | Some(ClassDetailsView::Loading) => vec![Line::from(Span::styled(
            "Loading class details...",
            Style::default().fg(Color::Yellow),
        ))],
        Some(ClassDetailsView::Failed(msg)) => vec![Line::from(Span::styled(
            format!("Error loading class details: {}", msg),
            Style::default().fg(Color::Red),
        ))],
        Some(ClassDetailsView::NotFound(name)) => vec![Line::from(Span::styled(
            format!("Class \"{}\" not found in schema", name),
            Style::default().fg(Color::DarkGray),
        ))],
        Some(ClassDetailsView::Loaded(class)) => class_lines(class),
    }
}

fn class_lines(class: &ClassInfo) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Class Name: ", label),
            Span::raw(class.name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Vectorizer: ", label),
            Span::raw(class.vectorizer_label().to_string()),
        ]),
    ];

    let properties = class.properties.as_deref().unwrap_or_default();
    if !properties.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Properties:",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        for property in properties {
            lines.push(Line::from(vec![
                Span::raw("  • "),
                Span::styled(
                    property.name.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" ({})", property.data_type_label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schema::Property;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_details_list_properties_with_types() {
        let class = ClassInfo::new("Article")
            .with_vectorizer("text2vec-contextionary")
            .with_property(Property::new("title", &["text"]))
            .with_property(Property::new("tags", &["text[]", "string"]));

        let text = plain(&details_lines(Some(&ClassDetailsView::Loaded(class))));

        assert_eq!(text[0], "Class Name: Article");
        assert_eq!(text[1], "Vectorizer: text2vec-contextionary");
        assert!(text.contains(&"  • title (text)".to_string()));
        assert!(text.contains(&"  • tags (text[], string)".to_string()));
    }

    #[test]
    fn test_details_without_properties_has_no_heading() {
        let text = plain(&details_lines(Some(&ClassDetailsView::Loaded(ClassInfo::new("Empty")))));
        assert!(!text.iter().any(|l| l == "Properties:"));
    }

    #[test]
    fn test_details_error_and_loading() {
        let text = plain(&details_lines(None));
        assert_eq!(text, vec!["Loading class details..."]);

        let text = plain(&details_lines(Some(&ClassDetailsView::Failed("timeout".to_string()))));
        assert_eq!(text, vec!["Error loading class details: timeout"]);
    }
}
