//! Blocking alert: a message that stays on top until dismissed

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::modal::AlertKind;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct AlertDialog {
    kind: AlertKind,
    message: String,
}

impl Default for AlertDialog {
    fn default() -> Self {
        Self {
            kind: AlertKind::Success,
            message: String::new(),
        }
    }
}

impl AlertDialog {
    pub fn set_content(&mut self, kind: AlertKind, message: &str) {
        self.kind = kind;
        self.message = message.to_string();
    }

    fn color(&self) -> Color {
        alert_color(self.kind)
    }
}

fn alert_color(kind: AlertKind) -> Color {
    match kind {
        AlertKind::Success => Color::Green,
        AlertKind::Partial => Color::Yellow,
        AlertKind::Error => Color::Red,
    }
}

impl Component for AlertDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q') => {
                Some(Action::CloseModal)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let width = 60.min(area.width);
        let text_width = width.saturating_sub(4).max(1) as usize;
        let message_lines = (self.message.chars().count() / text_width + 1) as u16;
        let popup_area = centered_popup(area, width, message_lines + 6);

        frame.render_widget(Clear, popup_area);

        let color = self.color();

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.message.clone(),
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " Enter ",
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw("OK"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(format!(" {} ", self.kind.title()))
                    .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_success_is_not_drawn_as_success() {
        let mut dialog = AlertDialog::default();
        dialog.set_content(
            AlertKind::Partial,
            "Partially successful. Deleted 3 classes, 1 errors.",
        );
        assert_eq!(dialog.color(), Color::Yellow);
        assert_ne!(alert_color(AlertKind::Partial), alert_color(AlertKind::Success));
        assert_eq!(alert_color(AlertKind::Error), Color::Red);
    }
}
