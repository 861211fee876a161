//! UI state - presentation state separate from the data fetched from the API

/// Tab selection in the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Schema,
    Objects,
    Classes,
}

impl Tab {
    pub fn all() -> Vec<Tab> {
        vec![Tab::Schema, Tab::Objects, Tab::Classes]
    }

    pub fn name(&self) -> &str {
        match self {
            Tab::Schema => "Schema",
            Tab::Objects => "Objects",
            Tab::Classes => "Classes",
        }
    }

    /// View that is reloaded whenever the tab is shown
    pub fn reload_on_show(&self) -> Option<ReloadTarget> {
        match self {
            Tab::Schema => Some(ReloadTarget::Schema),
            Tab::Objects => None,
            Tab::Classes => Some(ReloadTarget::Classes),
        }
    }
}

/// Which view(s) a reload refreshes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadTarget {
    Schema,
    Classes,
    Objects,
    /// Schema view followed by the classes view
    SchemaAndClasses,
}

/// State of the connectivity indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Checking,
    Connected,
    Disconnected,
    Error,
}

impl ConnectionStatus {
    pub fn label(&self) -> &str {
        match self {
            ConnectionStatus::Checking => "Checking...",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Disconnected => "Disconnected",
            ConnectionStatus::Error => "Error",
        }
    }
}

/// Content of a panel that is filled by an API call
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Loaded(T),
    /// Inline error block shown in place of the content
    Failed(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Placeholder shown as the first selector option
pub const CLASS_PLACEHOLDER: &str = "Select a class...";

/// Class-selection control of the object browser
///
/// Index 0 is always the placeholder, so a selector for N classes has N+1
/// options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSelector {
    classes: Vec<String>,
    selected: usize,
}

impl ClassSelector {
    /// Replace the options, resetting the selection to the placeholder
    pub fn populate<I, S>(&mut self, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = classes.into_iter().map(Into::into).collect();
        self.selected = 0;
    }

    /// All options including the placeholder
    pub fn options(&self) -> Vec<&str> {
        std::iter::once(CLASS_PLACEHOLDER)
            .chain(self.classes.iter().map(String::as_str))
            .collect()
    }

    pub fn option_count(&self) -> usize {
        self.classes.len() + 1
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Currently selected class, `None` while the placeholder is selected
    pub fn selected_class(&self) -> Option<&str> {
        match self.selected {
            0 => None,
            i => self.classes.get(i - 1).map(String::as_str),
        }
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % self.option_count();
    }

    pub fn previous(&mut self) {
        self.selected = if self.selected == 0 {
            self.option_count() - 1
        } else {
            self.selected - 1
        };
    }

    /// Select a class by name, falling back to the placeholder
    pub fn select(&mut self, class_name: &str) {
        self.selected = self
            .classes
            .iter()
            .position(|c| c == class_name)
            .map_or(0, |i| i + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_has_placeholder_plus_classes() {
        let mut selector = ClassSelector::default();
        selector.populate(["Article", "Author", "Publication"]);

        assert_eq!(selector.option_count(), 4);
        assert_eq!(
            selector.options(),
            vec![CLASS_PLACEHOLDER, "Article", "Author", "Publication"]
        );
        assert_eq!(selector.selected_class(), None);
    }

    #[test]
    fn test_selector_wraps_around() {
        let mut selector = ClassSelector::default();
        selector.populate(["Article", "Author"]);

        selector.previous();
        assert_eq!(selector.selected_class(), Some("Author"));

        selector.next();
        assert_eq!(selector.selected_class(), None);

        selector.next();
        assert_eq!(selector.selected_class(), Some("Article"));
    }

    #[test]
    fn test_selector_select_unknown_class() {
        let mut selector = ClassSelector::default();
        selector.populate(["Article"]);
        selector.select("Article");
        assert_eq!(selector.selected_index(), 1);

        selector.select("Missing");
        assert_eq!(selector.selected_index(), 0);
    }

    #[test]
    fn test_empty_selector_only_has_placeholder() {
        let mut selector = ClassSelector::default();
        selector.next();
        assert_eq!(selector.option_count(), 1);
        assert_eq!(selector.selected_index(), 0);
    }

    #[test]
    fn test_tab_reloads() {
        assert_eq!(Tab::Schema.reload_on_show(), Some(ReloadTarget::Schema));
        assert_eq!(Tab::Classes.reload_on_show(), Some(ReloadTarget::Classes));
        assert_eq!(Tab::Objects.reload_on_show(), None);
    }
}
