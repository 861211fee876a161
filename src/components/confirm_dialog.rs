//! Yes/no confirmation dialog
//!
//! Used for the pending destructive action and for quitting.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Confirmation dialog with a title and a wrapped message
#[derive(Default)]
pub struct ConfirmDialog {
    title: String,
    message: String,
    /// Destructive confirmations are drawn in red
    danger: bool,
}

impl ConfirmDialog {
    pub fn set_content(&mut self, title: &str, message: &str, danger: bool) {
        self.title = title.to_string();
        self.message = message.to_string();
        self.danger = danger;
    }
}

impl Component for ConfirmDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let width = 64.min(area.width);
        // Borders, padding, blank lines and the key hints
        let text_width = width.saturating_sub(4).max(1) as usize;
        let message_lines = (self.message.chars().count() / text_width + 1) as u16;
        let popup_area = centered_popup(area, width, message_lines + 6);

        frame.render_widget(Clear, popup_area);

        let accent = if self.danger { Color::Red } else { Color::Yellow };
        let confirm_label = if self.danger { "Yes, delete  " } else { "Yes  " };

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.message.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " y ",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::raw(confirm_label),
                Span::styled(
                    " n/Esc ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("Cancel"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent))
                    .title(format!(" {} ", self.title))
                    .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD)),
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
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_confirm_keys() {
        let mut dialog = ConfirmDialog::default();
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Char('y'))).unwrap(),
            Some(Action::ConfirmModal)
        );
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::ConfirmModal)
        );
    }

    #[test]
    fn test_cancel_keys() {
        let mut dialog = ConfirmDialog::default();
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::CloseModal)
        );
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Char('n'))).unwrap(),
            Some(Action::CloseModal)
        );
        assert_eq!(dialog.handle_key_event(key(KeyCode::Char('x'))).unwrap(), None);
    }
}
