//! Home component - Main application screen
//!
//! Displays the header with the connectivity indicator, the tab bar, the
//! active panel and the status/help bars. Owns tab, cursor and object
//! browser state.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_main_layout;
use crate::components::panels::{self, PanelBody};
use crate::model::domain::{DomainState, ObjectsView};
use crate::model::schema::{ClassInfo, StoredObject};
use crate::model::ui::{ClassSelector, ConnectionStatus, ReloadTarget, Tab};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

/// Step used by the `+`/`-` limit keys
pub const LIMIT_STEP: i32 = 5;

// ═══════════════════════════════════════════════════════════════════════════════
// Home Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Home component for the main application view
pub struct HomeComponent {
    /// Current active tab
    pub active_tab: Tab,

    /// Cursor of each tab's card list
    schema_list: ListState,
    classes_list: ListState,
    objects_list: ListState,

    /// Class chosen for the object browser
    pub class_selector: ClassSelector,

    /// Maximum number of objects fetched per browse
    pub object_limit: u32,

    max_object_limit: u32,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new(10, 100)
    }
}

impl HomeComponent {
    pub fn new(object_limit: u32, max_object_limit: u32) -> Self {
        let max_object_limit = max_object_limit.max(1);
        Self {
            active_tab: Tab::Schema,
            schema_list: ListState::default(),
            classes_list: ListState::default(),
            objects_list: ListState::default(),
            class_selector: ClassSelector::default(),
            object_limit: object_limit.clamp(1, max_object_limit),
            max_object_limit,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tabs
    // ─────────────────────────────────────────────────────────────────────────

    fn tab_index(&self) -> usize {
        Tab::all()
            .iter()
            .position(|t| *t == self.active_tab)
            .unwrap_or(0)
    }

    /// Switch to the tab at `index`; returns false for an index with no tab
    pub fn select_tab(&mut self, index: usize) -> bool {
        match Tab::all().get(index) {
            Some(tab) => {
                self.active_tab = *tab;
                true
            }
            None => false,
        }
    }

    /// Switch to the next tab
    pub fn next_tab(&mut self) {
        let count = Tab::all().len();
        self.select_tab((self.tab_index() + 1) % count);
    }

    /// Switch to the previous tab
    pub fn previous_tab(&mut self) {
        let count = Tab::all().len();
        self.select_tab((self.tab_index() + count - 1) % count);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Cursor
    // ─────────────────────────────────────────────────────────────────────────

    fn list_state_mut(&mut self, tab: Tab) -> &mut ListState {
        match tab {
            Tab::Schema => &mut self.schema_list,
            Tab::Objects => &mut self.objects_list,
            Tab::Classes => &mut self.classes_list,
        }
    }

    fn list_state(&self, tab: Tab) -> &ListState {
        match tab {
            Tab::Schema => &self.schema_list,
            Tab::Objects => &self.objects_list,
            Tab::Classes => &self.classes_list,
        }
    }

    /// Index of the card under the cursor in the active tab
    pub fn selected_index(&self) -> Option<usize> {
        self.list_state(self.active_tab).selected()
    }

    /// Move the cursor down, wrapping to the first card
    pub fn next(&mut self, count: usize) {
        let state = self.list_state_mut(self.active_tab);
        if count == 0 {
            state.select(None);
            return;
        }
        let next = state.selected().map_or(0, |i| (i + 1) % count);
        state.select(Some(next));
    }

    /// Move the cursor up, wrapping to the last card
    pub fn previous(&mut self, count: usize) {
        let state = self.list_state_mut(self.active_tab);
        if count == 0 {
            state.select(None);
            return;
        }
        let prev = match state.selected() {
            Some(0) | None => count - 1,
            Some(i) => (i - 1).min(count - 1),
        };
        state.select(Some(prev));
    }

    /// Keep a tab's cursor inside a list of `count` cards
    pub fn clamp_selection(&mut self, tab: Tab, count: usize) {
        let state = self.list_state_mut(tab);
        let selected = match (count, state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (n, Some(i)) => Some(i.min(n - 1)),
        };
        state.select(selected);
    }

    /// Number of cards the active tab currently shows
    pub fn card_count(&self, domain: &DomainState) -> usize {
        match self.active_tab {
            Tab::Schema => domain.schema.loaded().map_or(0, Vec::len),
            Tab::Classes => domain.classes.loaded().map_or(0, Vec::len),
            Tab::Objects => match &domain.objects {
                ObjectsView::Loaded(page) => page.objects.len(),
                _ => 0,
            },
        }
    }

    /// Class under the cursor on the schema or classes tab
    pub fn selected_class<'a>(&self, domain: &'a DomainState) -> Option<&'a ClassInfo> {
        let classes = match self.active_tab {
            Tab::Schema => domain.schema.loaded()?,
            Tab::Classes => domain.classes.loaded()?,
            Tab::Objects => return None,
        };
        classes.get(self.selected_index()?)
    }

    /// Object under the cursor, with the class it was loaded from
    pub fn selected_object<'a>(&self, domain: &'a DomainState) -> Option<(&'a str, &'a StoredObject)> {
        if self.active_tab != Tab::Objects {
            return None;
        }
        match &domain.objects {
            ObjectsView::Loaded(page) => page
                .objects
                .get(self.selected_index()?)
                .map(|object| (page.class_name.as_str(), object)),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Object Browser
    // ─────────────────────────────────────────────────────────────────────────

    /// Change the limit by `step`, staying within `1..=max`
    pub fn adjust_limit(&mut self, step: i32) {
        let next = self.object_limit as i64 + step as i64;
        self.object_limit = next.clamp(1, self.max_object_limit as i64) as u32;
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(match key.code {
                KeyCode::Char('c') => Some(Action::ForceQuit),
                _ => None,
            });
        }

        // Object browser keys take precedence on their tab
        if self.active_tab == Tab::Objects {
            let action = match key.code {
                KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevClass),
                KeyCode::Char('l') | KeyCode::Right => Some(Action::NextClass),
                KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::AdjustLimit(LIMIT_STEP)),
                KeyCode::Char('-') => Some(Action::AdjustLimit(-LIMIT_STEP)),
                KeyCode::Char('o') | KeyCode::Enter => {
                    Some(Action::BeginReload(ReloadTarget::Objects))
                }
                KeyCode::Char('d') => Some(Action::RequestDeleteObject),
                KeyCode::Char('v') => Some(Action::OpenObjectDetails),
                _ => None,
            };
            if action.is_some() {
                return Ok(action);
            }
        }

        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char(c @ '1'..='3') => Some(Action::SelectTab(c as usize - '1' as usize)),

            // Classes
            KeyCode::Enter | KeyCode::Char('v') if self.active_tab != Tab::Objects => {
                Some(Action::OpenClassDetails)
            }
            KeyCode::Char('d') if self.active_tab != Tab::Objects => {
                Some(Action::RequestDeleteClass)
            }
            KeyCode::Char('D') if self.active_tab == Tab::Classes => {
                Some(Action::RequestDeleteAll)
            }

            // Loading
            KeyCode::Char('r') => Some(Action::ReloadCurrentTab),
            KeyCode::Char('R') => Some(Action::Startup),

            // Modals
            KeyCode::Char('i') => Some(Action::OpenServerInfo),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),

            // Export
            KeyCode::Char('e') => Some(Action::ExportSchema),

            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let follow_up = match action {
            Action::NextTab => {
                self.next_tab();
                self.active_tab.reload_on_show().map(Action::BeginReload)
            }
            Action::PrevTab => {
                self.previous_tab();
                self.active_tab.reload_on_show().map(Action::BeginReload)
            }
            // Choosing the active tab again reloads it too
            Action::SelectTab(index) => {
                if self.select_tab(index) {
                    self.active_tab.reload_on_show().map(Action::BeginReload)
                } else {
                    None
                }
            }
            Action::NextClass => {
                self.class_selector.next();
                None
            }
            Action::PrevClass => {
                self.class_selector.previous();
                None
            }
            Action::AdjustLimit(step) => {
                self.adjust_limit(step);
                None
            }
            _ => None,
        };
        Ok(follow_up)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub domain: &'a DomainState,
    pub base_url: &'a str,
    pub status_message: Option<&'a str>,
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let layout = calculate_main_layout(area, home.active_tab == Tab::Objects);

    render_header(frame, layout.header, ctx);
    render_tabs(frame, layout.tabs, home);
    if let Some(toolbar) = layout.toolbar {
        render_object_toolbar(frame, toolbar, home);
    }

    let width = layout.body.width.saturating_sub(4);
    let body = match home.active_tab {
        Tab::Schema => panels::schema_panel(&ctx.domain.schema, width),
        Tab::Classes => panels::classes_panel(&ctx.domain.classes, width),
        Tab::Objects => panels::objects_panel(&ctx.domain.objects, width),
    };
    home.clamp_selection(home.active_tab, body.card_count());
    render_panel(frame, layout.body, home, body);

    render_status_bar(frame, layout.status, ctx);
    render_help_bar(frame, layout.help, home);

    Ok(())
}

/// Indicator text and color for the connection state
pub fn connection_indicator(status: ConnectionStatus) -> (String, Color) {
    let color = match status {
        ConnectionStatus::Checking => Color::Yellow,
        ConnectionStatus::Connected => Color::Green,
        ConnectionStatus::Disconnected | ConnectionStatus::Error => Color::Red,
    };
    (format!("● {}", status.label()), color)
}

fn render_header(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let (indicator, color) = connection_indicator(ctx.domain.connection);

    let mut spans = vec![
        Span::styled(
            " Weaviate Dashboard ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(indicator, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ];
    if let Some(url) = &ctx.domain.store_url {
        spans.push(Span::styled(
            format!("  store: {}", url),
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::styled(
        format!("  api: {}", ctx.base_url),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let all_tabs = Tab::all();
    let titles: Vec<String> = all_tabs
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{} {}", i + 1, t.name()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(home.tab_index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_object_toolbar(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let options = home.class_selector.options();
    let selected = options
        .get(home.class_selector.selected_index())
        .copied()
        .unwrap_or_default();
    let selected_style = if home.class_selector.selected_class().is_some() {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(" Class: ", Style::default().fg(Color::DarkGray)),
        Span::styled("◀ ", Style::default().fg(Color::Cyan)),
        Span::styled(selected.to_string(), selected_style),
        Span::styled(" ▶", Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(
                "  ({}/{})",
                home.class_selector.selected_index(),
                options.len().saturating_sub(1)
            ),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("    Limit: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            home.object_limit.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_panel(frame: &mut Frame, area: Rect, home: &mut HomeComponent, body: PanelBody) {
    let tab = home.active_tab;
    let title = match &body {
        PanelBody::Cards(cards) => format!(" {} ({}) ", tab.name(), cards.len()),
        PanelBody::Message { .. } => format!(" {} ", tab.name()),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));

    match body {
        PanelBody::Message { kind, text } => {
            let paragraph = Paragraph::new(vec![Line::from(""), Line::from(text)])
                .style(kind.style())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(paragraph, area);
        }
        PanelBody::Cards(cards) => {
            let items: Vec<ListItem> = cards.into_iter().map(ListItem::new).collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(Color::Rgb(30, 40, 60)))
                .highlight_symbol("▌");
            frame.render_stateful_widget(list, area, home.list_state_mut(tab));
        }
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let spans = match ctx.status_message {
        Some(status) => vec![Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow),
        )],
        None => vec![],
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hint(key: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", key),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

fn render_help_bar(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let mut spans = vec![key_hint("q", Color::Yellow), Span::raw("Quit ")];

    match home.active_tab {
        Tab::Schema | Tab::Classes => {
            spans.extend([
                key_hint("Enter", Color::Green),
                Span::raw("Details "),
                key_hint("d", Color::Red),
                Span::raw("Delete "),
            ]);
            if home.active_tab == Tab::Classes {
                spans.extend([key_hint("D", Color::Red), Span::raw("Delete All ")]);
            }
        }
        Tab::Objects => {
            spans.extend([
                key_hint("h/l", Color::Cyan),
                Span::raw("Class "),
                key_hint("+/-", Color::Cyan),
                Span::raw("Limit "),
                key_hint("o", Color::Green),
                Span::raw("Load "),
                key_hint("v", Color::Green),
                Span::raw("View "),
                key_hint("d", Color::Red),
                Span::raw("Delete "),
            ]);
        }
    }

    spans.extend([
        key_hint("e", Color::Cyan),
        Span::raw("Export "),
        key_hint("r", Color::Cyan),
        Span::raw("Reload "),
        key_hint("i", Color::Magenta),
        Span::raw("Info "),
        key_hint("?", Color::White),
        Span::raw("Help"),
    ]);

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::domain::ObjectPage;
    use crate::model::ui::ViewState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn domain_with_classes(names: &[&str]) -> DomainState {
        let classes: Vec<ClassInfo> = names.iter().map(|n| ClassInfo::new(*n)).collect();
        DomainState {
            schema: ViewState::Loaded(classes.clone()),
            classes: ViewState::Loaded(classes),
            ..DomainState::default()
        }
    }

    #[test]
    fn test_tab_switch_reloads_schema_and_classes_only() {
        let mut home = HomeComponent::default();

        let follow_up = home.update(Action::NextTab).unwrap();
        assert_eq!(home.active_tab, Tab::Objects);
        assert_eq!(follow_up, None);

        let follow_up = home.update(Action::NextTab).unwrap();
        assert_eq!(home.active_tab, Tab::Classes);
        assert_eq!(follow_up, Some(Action::BeginReload(ReloadTarget::Classes)));

        let follow_up = home.update(Action::NextTab).unwrap();
        assert_eq!(home.active_tab, Tab::Schema);
        assert_eq!(follow_up, Some(Action::BeginReload(ReloadTarget::Schema)));
    }

    #[test]
    fn test_select_active_tab_reloads_it() {
        let mut home = HomeComponent::default();
        assert_eq!(
            home.update(Action::SelectTab(0)).unwrap(),
            Some(Action::BeginReload(ReloadTarget::Schema))
        );

        home.active_tab = Tab::Classes;
        assert_eq!(
            home.update(Action::SelectTab(2)).unwrap(),
            Some(Action::BeginReload(ReloadTarget::Classes))
        );

        home.active_tab = Tab::Objects;
        assert_eq!(home.update(Action::SelectTab(1)).unwrap(), None);
    }

    #[test]
    fn test_select_missing_tab_is_ignored() {
        let mut home = HomeComponent::default();
        assert_eq!(home.update(Action::SelectTab(7)).unwrap(), None);
        assert_eq!(home.active_tab, Tab::Schema);
    }

    #[test]
    fn test_number_keys_select_tabs() {
        let mut home = HomeComponent::default();
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('3'))).unwrap(),
            Some(Action::SelectTab(2))
        );
    }

    #[test]
    fn test_keys_depend_on_tab() {
        let mut home = HomeComponent::default();
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('d'))).unwrap(),
            Some(Action::RequestDeleteClass)
        );
        assert_eq!(home.handle_key_event(key(KeyCode::Char('D'))).unwrap(), None);
        assert_eq!(
            home.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::OpenClassDetails)
        );

        home.active_tab = Tab::Classes;
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('D'))).unwrap(),
            Some(Action::RequestDeleteAll)
        );

        home.active_tab = Tab::Objects;
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('d'))).unwrap(),
            Some(Action::RequestDeleteObject)
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::BeginReload(ReloadTarget::Objects))
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('l'))).unwrap(),
            Some(Action::NextClass)
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('v'))).unwrap(),
            Some(Action::OpenObjectDetails)
        );
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        let mut home = HomeComponent::default();
        let action = home
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(action, Some(Action::ForceQuit));
    }

    #[test]
    fn test_limit_is_clamped() {
        let mut home = HomeComponent::new(10, 100);
        home.adjust_limit(-LIMIT_STEP);
        home.adjust_limit(-LIMIT_STEP);
        assert_eq!(home.object_limit, 1);

        home.adjust_limit(500);
        assert_eq!(home.object_limit, 100);

        let home = HomeComponent::new(0, 100);
        assert_eq!(home.object_limit, 1);
    }

    #[test]
    fn test_cursor_wraps_and_clamps() {
        let mut home = HomeComponent::default();
        home.next(3);
        assert_eq!(home.selected_index(), Some(0));
        home.previous(3);
        assert_eq!(home.selected_index(), Some(2));
        home.next(3);
        assert_eq!(home.selected_index(), Some(0));

        home.previous(3);
        home.clamp_selection(Tab::Schema, 1);
        assert_eq!(home.selected_index(), Some(0));

        home.clamp_selection(Tab::Schema, 0);
        assert_eq!(home.selected_index(), None);
    }

    #[test]
    fn test_selected_class_follows_active_tab() {
        let domain = domain_with_classes(&["Article", "Author"]);
        let mut home = HomeComponent::default();
        home.next(2);
        home.next(2);
        assert_eq!(home.selected_class(&domain).map(|c| c.name.as_str()), Some("Author"));

        home.active_tab = Tab::Classes;
        assert_eq!(home.selected_class(&domain), None);
        home.next(2);
        assert_eq!(home.selected_class(&domain).map(|c| c.name.as_str()), Some("Article"));
    }

    #[test]
    fn test_selected_object() {
        let object: StoredObject =
            serde_json::from_value(serde_json::json!({"id": "abc-1", "properties": {}})).unwrap();
        let domain = DomainState {
            objects: ObjectsView::Loaded(ObjectPage {
                class_name: "Article".to_string(),
                objects: vec![object],
            }),
            ..DomainState::default()
        };

        let mut home = HomeComponent::default();
        home.active_tab = Tab::Objects;
        assert_eq!(home.card_count(&domain), 1);
        home.next(1);

        let (class_name, object) = home.selected_object(&domain).unwrap();
        assert_eq!(class_name, "Article");
        assert_eq!(object.id, "abc-1");
    }

    #[test]
    fn test_connection_indicator_colors() {
        assert_eq!(
            connection_indicator(ConnectionStatus::Connected),
            ("● Connected".to_string(), Color::Green)
        );
        assert_eq!(connection_indicator(ConnectionStatus::Error).1, Color::Red);
    }
}
