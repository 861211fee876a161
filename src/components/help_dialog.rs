//! Help dialog component
//!
//! Lists every keyboard shortcut, grouped by the part of the screen it
//! applies to.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Shortcut groups: (heading, [(keys, description)])
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j / ↓", "Move to next card"),
            ("k / ↑", "Move to previous card"),
            ("Tab", "Next tab (Schema/Objects/Classes)"),
            ("Shift+Tab", "Previous tab"),
            ("1 / 2 / 3", "Jump to tab"),
        ],
    ),
    (
        "Schema & Classes",
        &[
            ("Enter / v", "View class details"),
            ("d", "Delete selected class"),
            ("D", "Delete all classes (Classes tab)"),
            ("e", "Export schema to weaviate-schema.json"),
        ],
    ),
    (
        "Object Browser",
        &[
            ("h / ←", "Previous class"),
            ("l / →", "Next class"),
            ("+ / -", "Raise / lower the object limit"),
            ("o / Enter", "Load objects"),
            ("v", "View the full object"),
            ("d", "Delete selected object"),
        ],
    ),
    (
        "General",
        &[
            ("r", "Reload current tab"),
            ("R", "Recheck connection and reload"),
            ("i", "Server info"),
            ("?", "Show this help"),
            ("q", "Quit"),
            ("Ctrl+c", "Quit immediately"),
        ],
    ),
    (
        "Dialogs",
        &[
            ("y / Enter", "Confirm"),
            ("n / Esc", "Cancel or close"),
            ("j / k", "Scroll details, objects and server info"),
        ],
    ),
];

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let dialog_area = area.inner(Margin {
            vertical: 3,
            horizontal: 6,
        });
        frame.render_widget(Clear, dialog_area);

        let content = help_lines();
        let total = content.len();
        let visible = dialog_area.height.saturating_sub(2) as usize;
        self.scroll_offset = self.scroll_offset.min(total.saturating_sub(visible));

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            )
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, dialog_area);

        if total > visible {
            let mut state = ScrollbarState::new(total - visible).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut state,
            );
        }

        Ok(())
    }
}

fn help_lines() -> Vec<Line<'static>> {
    let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (title, shortcuts) in SHORTCUTS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {}", title), heading)));
        for (keys, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("    {:12}", keys), key_style),
                Span::raw(*description),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Esc, q or ? closes this dialog",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_help_lists_destructive_keys() {
        let text: Vec<String> = help_lines()
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(text.iter().any(|l| l.contains("Delete all classes")));
        assert!(text.iter().any(|l| l.contains("Export schema")));
    }

    #[test]
    fn test_scroll_keys() {
        let mut dialog = HelpDialog::default();
        for _ in 0..2 {
            dialog
                .handle_key_event(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE))
                .unwrap();
        }
        assert_eq!(dialog.scroll_offset, 2);

        let action = dialog
            .handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::CloseModal));
    }
}
