//! Loading overlay drawn while a destructive request is in flight

use crate::components::centered_popup;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Dim the screen and show a small "working" box
pub fn draw_loading_overlay(frame: &mut Frame, area: Rect, label: &str) {
    let dim = Block::default().style(Style::default().fg(Color::DarkGray));
    frame.render_widget(dim, area);

    let width = (label.chars().count() as u16 + 10).clamp(24, area.width.max(1));
    let popup_area = centered_popup(area, width, 5);
    frame.render_widget(Clear, popup_area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("⏳ {}", label),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, popup_area);
}
