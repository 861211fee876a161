//! Panel content builders
//!
//! Turn view state into either a single message (loading, empty, error) or
//! a list of cards. Kept free of any Frame so the output can be inspected
//! directly.

use crate::model::domain::ObjectsView;
use crate::model::schema::{ClassInfo, StoredObject};
use crate::model::ui::ViewState;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};
use unicode_width::UnicodeWidthStr;

/// Property lines shown per object card; `v` opens the full dump
pub const OBJECT_PREVIEW_LINES: usize = 8;

/// Kind of single-message panel content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Loading,
    Empty,
    Placeholder,
    Error,
}

impl MessageKind {
    pub fn style(&self) -> Style {
        match self {
            MessageKind::Loading => Style::default().fg(Color::Yellow),
            MessageKind::Empty | MessageKind::Placeholder => Style::default().fg(Color::DarkGray),
            MessageKind::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}

/// What a panel shows
#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    Message { kind: MessageKind, text: String },
    Cards(Vec<Text<'static>>),
}

impl PanelBody {
    fn message(kind: MessageKind, text: impl Into<String>) -> Self {
        PanelBody::Message {
            kind,
            text: text.into(),
        }
    }

    pub fn card_count(&self) -> usize {
        match self {
            PanelBody::Cards(cards) => cards.len(),
            PanelBody::Message { .. } => 0,
        }
    }

    /// Message text, if this panel is a single message
    #[cfg(test)]
    pub fn message_text(&self) -> Option<&str> {
        match self {
            PanelBody::Message { text, .. } => Some(text),
            PanelBody::Cards(_) => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Schema tab
// ─────────────────────────────────────────────────────────────────────────────

pub fn schema_panel(view: &ViewState<Vec<ClassInfo>>, width: u16) -> PanelBody {
    match view {
        ViewState::Loading => PanelBody::message(MessageKind::Loading, "Loading schema..."),
        ViewState::Failed(msg) => PanelBody::message(MessageKind::Error, msg.clone()),
        ViewState::Loaded(classes) if classes.is_empty() => {
            PanelBody::message(MessageKind::Empty, "No classes found in schema")
        }
        ViewState::Loaded(classes) => {
            PanelBody::Cards(classes.iter().map(|c| schema_card(c, width)).collect())
        }
    }
}

fn schema_card(class: &ClassInfo, width: u16) -> Text<'static> {
    Text::from(vec![
        Line::from(vec![
            Span::styled("◆ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                fit_width(&class.name, width.saturating_sub(6) as usize),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        labelled("Properties", class.property_count().to_string()),
        labelled("Vectorizer", class.vectorizer_label().to_string()),
        Line::from(""),
    ])
}

// ─────────────────────────────────────────────────────────────────────────────
// Classes tab
// ─────────────────────────────────────────────────────────────────────────────

pub fn classes_panel(view: &ViewState<Vec<ClassInfo>>, width: u16) -> PanelBody {
    match view {
        ViewState::Loading => PanelBody::message(MessageKind::Loading, "Loading classes..."),
        ViewState::Failed(msg) => PanelBody::message(MessageKind::Error, msg.clone()),
        ViewState::Loaded(classes) if classes.is_empty() => {
            PanelBody::message(MessageKind::Empty, "No classes found")
        }
        ViewState::Loaded(classes) => {
            PanelBody::Cards(classes.iter().map(|c| management_card(c, width)).collect())
        }
    }
}

fn management_card(class: &ClassInfo, width: u16) -> Text<'static> {
    let name_width = (width as usize / 2).max(12);
    Text::from(vec![
        Line::from(vec![
            Span::styled("◆ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{:<w$}", fit_width(&class.name, name_width), w = name_width),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Properties ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:<4}", class.property_count()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled("  Vectorizer ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                class.vectorizer_label().to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ])
}

// ─────────────────────────────────────────────────────────────────────────────
// Objects tab
// ─────────────────────────────────────────────────────────────────────────────

pub fn objects_panel(view: &ObjectsView, width: u16) -> PanelBody {
    match view {
        ObjectsView::NoClassSelected => {
            PanelBody::message(MessageKind::Placeholder, "Please select a class first")
        }
        ObjectsView::Loading => PanelBody::message(MessageKind::Loading, "Loading objects..."),
        ObjectsView::Failed(msg) => PanelBody::message(MessageKind::Error, msg.clone()),
        ObjectsView::Loaded(page) if page.objects.is_empty() => PanelBody::message(
            MessageKind::Empty,
            format!("No objects found in class \"{}\"", page.class_name),
        ),
        ObjectsView::Loaded(page) => {
            PanelBody::Cards(page.objects.iter().map(|o| object_card(o, width)).collect())
        }
    }
}

fn object_card(object: &StoredObject, width: u16) -> Text<'static> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("▣ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                "Object",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("  ID: ", Style::default().fg(Color::DarkGray)),
            Span::styled(object.id.clone(), Style::default().fg(Color::Magenta)),
        ]),
        Line::from(Span::styled(
            "  Properties:",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let dump = object.properties_json();
    let line_width = width.saturating_sub(6) as usize;
    lines.extend(dump.lines().take(OBJECT_PREVIEW_LINES).map(|l| {
        Line::from(Span::styled(
            format!("    {}", fit_width(l, line_width)),
            Style::default().fg(Color::Green),
        ))
    }));
    let hidden = dump.lines().count().saturating_sub(OBJECT_PREVIEW_LINES);
    if hidden > 0 {
        lines.push(Line::from(Span::styled(
            format!("    … {} more lines, v shows the full object", hidden),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    Text::from(lines)
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn labelled(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::Cyan)),
    ])
}

/// Truncate to a display width, marking the cut with an ellipsis
pub fn fit_width(s: &str, max: usize) -> String {
    if max == 0 || s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Plain text of a card, for assertions
#[cfg(test)]
pub fn card_text(card: &Text) -> String {
    card.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
