//! Domain state - data fetched from the dashboard API, separate from UI concerns

use super::schema::{ClassInfo, MetaData, NodesData, StoredObject};
use super::ui::{ConnectionStatus, ViewState};

/// Objects of one class as returned by the last browse
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPage {
    pub class_name: String,
    pub objects: Vec<StoredObject>,
}

/// Content of the object browser panel
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ObjectsView {
    /// No class has been chosen yet
    #[default]
    NoClassSelected,
    Loading,
    Loaded(ObjectPage),
    Failed(String),
}

impl ObjectsView {
    /// A loaded object by id, with the class it was loaded from
    pub fn find(&self, object_id: &str) -> Option<(&str, &StoredObject)> {
        match self {
            ObjectsView::Loaded(page) => page
                .objects
                .iter()
                .find(|o| o.id == object_id)
                .map(|o| (page.class_name.as_str(), o)),
            _ => None,
        }
    }
}

/// Content of the class details modal
#[derive(Debug, Clone, PartialEq)]
pub enum ClassDetailsView {
    Loading,
    Loaded(ClassInfo),
    NotFound(String),
    Failed(String),
}

/// Store metadata and node list shown by the server info overlay
#[derive(Debug, Clone, Default)]
pub struct ServerInfo {
    pub meta: Option<MetaData>,
    pub meta_error: Option<String>,
    pub nodes: Option<NodesData>,
    pub nodes_error: Option<String>,
}

/// Domain state containing everything fetched from the server
#[derive(Debug, Default)]
pub struct DomainState {
    /// Connectivity indicator
    pub connection: ConnectionStatus,

    /// Store URL reported by the health endpoint
    pub store_url: Option<String>,

    /// Schema tab content
    pub schema: ViewState<Vec<ClassInfo>>,

    /// Classes tab content
    pub classes: ViewState<Vec<ClassInfo>>,

    /// Object browser content
    pub objects: ObjectsView,

    /// Class details modal content
    pub class_details: Option<ClassDetailsView>,

    /// Server info overlay content
    pub server_info: Option<ServerInfo>,
}

impl DomainState {
    pub fn new() -> Self {
        Self::default()
    }
}

