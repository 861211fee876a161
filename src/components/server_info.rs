//! Server information dialog component
//!
//! Displays store metadata (version, hostname, modules) and the cluster
//! node list.

use crate::action::Action;
use crate::component::Component;
use crate::components::scroll;
use crate::model::domain::ServerInfo;
use crate::model::schema::{MetaData, NodesData};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Server information dialog component
#[derive(Default)]
pub struct ServerInfoDialog {
    content: Vec<Line<'static>>,
    scroll_offset: usize,
    scroll_limit: usize,
}

impl ServerInfoDialog {
    /// Update content based on server info
    pub fn set_server_info(&mut self, info: Option<&ServerInfo>, store_url: Option<&str>, scroll: usize) {
        self.scroll_offset = scroll;
        self.content = match info {
            Some(info) => render_server_info(info, store_url),
            None => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Loading server information...",
                    Style::default().fg(Color::Yellow),
                )),
            ],
        };
    }

    /// Last valid scroll offset, as of the latest draw
    pub fn scroll_limit(&self) -> usize {
        self.scroll_limit
    }
}

impl Component for ServerInfoDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('i') | KeyCode::Char('q') | KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ModalDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ModalUp),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);
        let background = Block::default().style(Style::default().bg(Color::Reset));
        frame.render_widget(background, area);

        let margin = 2;
        let overlay_area = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(overlay_area);

        let rows = scroll::wrap_lines(&self.content, main_chunks[0].width.saturating_sub(2));
        self.scroll_limit = scroll::max_scroll(rows.len(), main_chunks[0].height.saturating_sub(2));
        self.scroll_offset = self.scroll_offset.min(self.scroll_limit);

        let paragraph = Paragraph::new(rows)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Server Info ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, main_chunks[0]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                " i/Esc ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Close  "),
            Span::styled(
                " j/k ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Scroll"),
        ]))
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL));

        frame.render_widget(help, main_chunks[1]);

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper functions
// ─────────────────────────────────────────────────────────────────────────────

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ))
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("  {}: ", label)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn error_line(msg: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", msg),
        Style::default().fg(Color::Red),
    ))
}

/// Render server information content
pub fn render_server_info(info: &ServerInfo, store_url: Option<&str>) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    lines.push(heading("Store"));
    if let Some(url) = store_url {
        lines.push(field("URL", url.to_string()));
    }
    match (&info.meta, &info.meta_error) {
        (Some(meta), _) => lines.extend(meta_lines(meta)),
        (None, Some(err)) => lines.push(error_line(err)),
        (None, None) => {}
    }
    lines.push(Line::from(""));

    lines.push(heading("Nodes"));
    match (&info.nodes, &info.nodes_error) {
        (Some(nodes), _) => lines.extend(node_lines(nodes)),
        (None, Some(err)) => lines.push(error_line(err)),
        (None, None) => {}
    }

    lines
}

fn meta_lines(meta: &MetaData) -> Vec<Line<'static>> {
    let modules = meta.module_names();
    vec![
        field("Version", meta.version.clone().unwrap_or_else(|| "unknown".to_string())),
        field("Hostname", meta.hostname.clone().unwrap_or_else(|| "unknown".to_string())),
        field(
            "Modules",
            if modules.is_empty() {
                "none".to_string()
            } else {
                modules.join(", ")
            },
        ),
    ]
}

fn node_lines(nodes: &NodesData) -> Vec<Line<'static>> {
    if nodes.nodes.is_empty() {
        return vec![Line::from(Span::styled(
            "  No nodes reported",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    nodes
        .nodes
        .iter()
        .map(|node| {
            let status_color = if node.status.eq_ignore_ascii_case("healthy") {
                Color::Green
            } else {
                Color::Red
            };
            let (shards, objects) = node
                .stats
                .as_ref()
                .map_or((0, 0), |s| (s.shard_count, s.object_count));
            Line::from(vec![
                Span::styled(
                    format!("  {} ", node.name),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("[{}] ", node.status), Style::default().fg(status_color)),
                Span::styled(
                    format!(
                        "v{}  shards: {}  objects: {}",
                        node.version.as_deref().unwrap_or("?"),
                        shards,
                        objects
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_server_info() {
        let info = ServerInfo {
            meta: Some(
                serde_json::from_value(json!({
                    "version": "1.24.1",
                    "hostname": "http://[::]:8080",
                    "modules": {"text2vec-openai": {}, "backup-s3": {}}
                }))
                .unwrap(),
            ),
            meta_error: None,
            nodes: Some(
                serde_json::from_value(json!({
                    "nodes": [{"name": "node1", "status": "HEALTHY", "version": "1.24.1",
                               "stats": {"shardCount": 2, "objectCount": 42}}]
                }))
                .unwrap(),
            ),
            nodes_error: None,
        };

        let text = plain(&render_server_info(&info, Some("http://10.0.0.2:8080")));
        assert!(text.contains("URL: http://10.0.0.2:8080"));
        assert!(text.contains("Version: 1.24.1"));
        assert!(text.contains("Modules: backup-s3, text2vec-openai"));
        assert!(text.contains("node1 [HEALTHY] v1.24.1  shards: 2  objects: 42"));
    }

    #[test]
    fn test_render_server_info_errors_inline() {
        let info = ServerInfo {
            meta: None,
            meta_error: Some("Failed to load metadata".to_string()),
            nodes: None,
            nodes_error: Some("Error loading nodes: timeout".to_string()),
        };

        let text = plain(&render_server_info(&info, None));
        assert!(text.contains("Failed to load metadata"));
        assert!(text.contains("Error loading nodes: timeout"));
    }
}
