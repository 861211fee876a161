//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components. It owns
//! the API client and is the only place requests are made.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, draw_loading_overlay, AlertDialog, ClassDetailsDialog, ConfirmDialog,
    HelpDialog, HomeComponent, HomeRenderContext, ObjectDetailsDialog, ServerInfoDialog,
};
use crate::config::Config;
use crate::model::domain::{ClassDetailsView, DomainState, ObjectPage, ObjectsView, ServerInfo};
use crate::model::modal::{AlertKind, Modal, ModalStack, PendingAction};
use crate::model::schema::{ApiResponse, DeleteAllReport};
use crate::model::ui::{ConnectionStatus, ReloadTarget, Tab, ViewState};
use crate::services::{self, DashboardApi};
use anyhow::{anyhow, Result};
use chrono::Local;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::path::Path;
use tracing::{debug, info, warn};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Client for the dashboard REST API
    api: Box<dyn DashboardApi>,

    /// Resolved configuration
    pub config: Config,

    /// Domain state (data fetched from the server)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Destructive action waiting for confirmation
    pub pending: Option<PendingAction>,

    /// A confirmed action is running; the loading overlay is shown
    pub executing: bool,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub confirm_dialog: ConfirmDialog,
    pub alert_dialog: AlertDialog,
    pub class_details_dialog: ClassDetailsDialog,
    pub object_details_dialog: ObjectDetailsDialog,
    pub server_info_dialog: ServerInfoDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App instance talking to `api`
    pub fn new(api: Box<dyn DashboardApi>, config: Config) -> App {
        App {
            api,
            home: HomeComponent::new(config.default_object_limit, config.max_object_limit),
            config,
            domain: DomainState::new(),
            modals: ModalStack::new(),
            pending: None,
            executing: false,
            should_quit: false,
            status_message: None,
            confirm_dialog: ConfirmDialog::default(),
            alert_dialog: AlertDialog::default(),
            class_details_dialog: ClassDetailsDialog::default(),
            object_details_dialog: ObjectDetailsDialog::default(),
            server_info_dialog: ServerInfoDialog::default(),
            help_dialog: HelpDialog::default(),
        }
    }

    /// Set the status bar text, stamped with the local time
    fn set_status(&mut self, message: impl AsRef<str>) {
        self.status_message = Some(format!(
            "[{}] {}",
            Local::now().format("%H:%M:%S"),
            message.as_ref()
        ));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────────────────────────────

    fn check_connection(&mut self) {
        match self.api.health() {
            Ok(health) => {
                self.domain.connection = if health.connected {
                    ConnectionStatus::Connected
                } else {
                    ConnectionStatus::Disconnected
                };
                self.domain.store_url = health.url.filter(|u| !u.is_empty());
                info!(connected = health.connected, "health check finished");
            }
            Err(e) => {
                warn!(error = %format!("{:#}", e), "health check failed");
                self.domain.connection = ConnectionStatus::Error;
            }
        }
    }

    fn load_schema(&mut self) {
        self.domain.schema = match self.api.schema() {
            Ok(response) => match response.into_data().and_then(|data| data.classes) {
                Some(classes) => {
                    let previous = self.home.class_selector.selected_class().map(str::to_string);
                    self.home
                        .class_selector
                        .populate(classes.iter().map(|c| c.name.clone()));
                    if let Some(name) = previous {
                        self.home.class_selector.select(&name);
                    }
                    debug!(count = classes.len(), "schema loaded");
                    ViewState::Loaded(classes)
                }
                None => {
                    warn!("schema request reported failure");
                    ViewState::Failed("Failed to load schema".to_string())
                }
            },
            Err(e) => {
                warn!(error = %format!("{:#}", e), "schema request failed");
                ViewState::Failed(format!("Error loading schema: {:#}", e))
            }
        };
    }

    fn load_classes(&mut self) {
        self.domain.classes = match self.api.schema() {
            Ok(response) => match response.into_data().and_then(|data| data.classes) {
                Some(classes) => {
                    debug!(count = classes.len(), "classes loaded");
                    ViewState::Loaded(classes)
                }
                None => {
                    warn!("classes request reported failure");
                    ViewState::Failed("Failed to load classes".to_string())
                }
            },
            Err(e) => {
                warn!(error = %format!("{:#}", e), "classes request failed");
                ViewState::Failed(format!("Error loading classes: {:#}", e))
            }
        };
    }

    fn load_objects(&mut self) {
        let Some(class_name) = self.home.class_selector.selected_class().map(str::to_string) else {
            self.domain.objects = ObjectsView::NoClassSelected;
            return;
        };
        let limit = self.home.object_limit;

        self.domain.objects = match self.api.objects(&class_name, limit) {
            Ok(response) => match response.into_data().and_then(|data| data.objects) {
                Some(objects) => {
                    debug!(class = %class_name, count = objects.len(), limit, "objects loaded");
                    ObjectsView::Loaded(ObjectPage {
                        class_name,
                        objects,
                    })
                }
                None => {
                    warn!(class = %class_name, "objects request reported failure");
                    ObjectsView::Failed("Failed to load objects".to_string())
                }
            },
            Err(e) => {
                warn!(class = %class_name, error = %format!("{:#}", e), "objects request failed");
                ObjectsView::Failed(format!("Error loading objects: {:#}", e))
            }
        };
    }

    /// Put the target views into their loading state
    ///
    /// Returns false when there is nothing to fetch.
    fn begin_reload(&mut self, target: ReloadTarget) -> bool {
        match target {
            ReloadTarget::Schema => self.domain.schema = ViewState::Loading,
            ReloadTarget::Classes => self.domain.classes = ViewState::Loading,
            ReloadTarget::SchemaAndClasses => {
                self.domain.schema = ViewState::Loading;
                self.domain.classes = ViewState::Loading;
            }
            ReloadTarget::Objects => {
                if self.home.class_selector.selected_class().is_none() {
                    self.domain.objects = ObjectsView::NoClassSelected;
                    return false;
                }
                self.domain.objects = ObjectsView::Loading;
            }
        }
        true
    }

    fn reload(&mut self, target: ReloadTarget) {
        match target {
            ReloadTarget::Schema => self.load_schema(),
            ReloadTarget::Classes => self.load_classes(),
            ReloadTarget::SchemaAndClasses => {
                self.load_schema();
                self.load_classes();
            }
            ReloadTarget::Objects => self.load_objects(),
        }
    }

    fn load_class_details(&mut self, class_name: &str) {
        let view = match self.api.schema() {
            Ok(response) => match response
                .into_data()
                .and_then(|data| data.find_class(class_name).cloned())
            {
                Some(class) => ClassDetailsView::Loaded(class),
                None => ClassDetailsView::NotFound(class_name.to_string()),
            },
            Err(e) => {
                warn!(class = %class_name, error = %format!("{:#}", e), "class details request failed");
                ClassDetailsView::Failed(format!("{:#}", e))
            }
        };
        self.domain.class_details = Some(view);
    }

    fn load_server_info(&mut self) {
        let (meta, meta_error) = split_response(self.api.meta(), "metadata");
        let (nodes, nodes_error) = split_response(self.api.nodes(), "nodes");
        self.domain.server_info = Some(ServerInfo {
            meta,
            meta_error,
            nodes,
            nodes_error,
        });
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Destructive Actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Record `action` and ask for confirmation
    fn request(&mut self, action: PendingAction) {
        debug!(?action, "awaiting confirmation");
        self.modals.push(action.confirm_modal());
        self.pending = Some(action);
    }

    /// Run the confirmed action, report the outcome and return to idle
    fn execute_pending(&mut self) {
        let alert = self.pending.take().map(|action| {
            info!(?action, "executing confirmed action");
            self.run_pending(&action)
        });

        self.executing = false;
        self.modals.remove_confirm();
        if let Some(alert) = alert {
            self.modals.push(alert);
        }
    }

    fn run_pending(&mut self, action: &PendingAction) -> Modal {
        let alert = match action {
            PendingAction::DeleteClass(class_name) => match self.api.delete_class(class_name) {
                Ok(response) if response.success => {
                    info!(class = %class_name, "class deleted");
                    self.reload_schema_views();
                    Modal::alert(
                        AlertKind::Success,
                        format!("Class \"{}\" deleted successfully", class_name),
                    )
                }
                Ok(response) => error_alert(response.error_or("Failed to delete class")),
                Err(e) => error_alert(format!("{:#}", e)),
            },
            PendingAction::DeleteObject {
                class_name,
                object_id,
            } => match self.api.delete_object(class_name, object_id) {
                Ok(response) if response.success => {
                    info!(class = %class_name, id = %object_id, "object deleted");
                    if self.begin_reload(ReloadTarget::Objects) {
                        self.load_objects();
                    }
                    Modal::alert(AlertKind::Success, "Object deleted successfully")
                }
                Ok(response) => error_alert(response.error_or("Failed to delete object")),
                Err(e) => error_alert(format!("{:#}", e)),
            },
            PendingAction::DeleteAllClasses => match self.api.delete_all_classes() {
                Ok(report) => match report.aborted() {
                    // Nothing was attempted
                    Some(reason) => error_alert(reason),
                    None => self.finish_delete_all(&report),
                },
                Err(e) => error_alert(format!("{:#}", e)),
            },
        };
        if let Modal::Alert { message, .. } = &alert {
            self.set_status(message);
        }
        alert
    }

    fn finish_delete_all(&mut self, report: &DeleteAllReport) -> Modal {
        for failure in &report.errors {
            warn!(class = %failure.class_name, error = %failure.error, "class not deleted");
        }
        info!(
            deleted = report.total_deleted,
            errors = report.total_errors,
            classes = ?report.deleted_classes,
            "delete-all finished"
        );
        self.reload_schema_views();
        let kind = if report.success {
            AlertKind::Success
        } else {
            AlertKind::Partial
        };
        Modal::alert(kind, report.summary())
    }

    fn reload_schema_views(&mut self) {
        self.begin_reload(ReloadTarget::SchemaAndClasses);
        self.reload(ReloadTarget::SchemaAndClasses);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────────────────────

    fn export_schema(&mut self) {
        let dir = Path::new(&self.config.export_dir);
        let result = self.api.schema().and_then(|response| {
            let schema = response
                .into_data()
                .ok_or_else(|| anyhow!("Failed to load schema"))?;
            services::write_schema(&schema, dir)
        });

        match result {
            Ok(path) => {
                info!(path = %path.display(), "schema exported");
                self.set_status(format!("Schema exported to {}", path.display()));
            }
            Err(e) => {
                warn!(error = %format!("{:#}", e), "schema export failed");
                self.modals.push(Modal::alert(
                    AlertKind::Error,
                    format!("Error exporting schema: {:#}", e),
                ));
            }
        }
    }
}

/// Payload or inline error text of a read-only request
fn split_response<T>(result: Result<ApiResponse<T>>, what: &str) -> (Option<T>, Option<String>) {
    let failed = format!("Failed to load {}", what);
    match result {
        Ok(response) if response.success => match response.data {
            Some(data) => (Some(data), None),
            None => (None, Some(failed)),
        },
        Ok(response) => (None, Some(response.error_or(&failed))),
        Err(e) => {
            warn!(what, error = %format!("{:#}", e), "request failed");
            (None, Some(format!("Error loading {}: {:#}", what, e)))
        }
    }
}

fn error_alert(reason: impl AsRef<str>) -> Modal {
    warn!(reason = reason.as_ref(), "action failed");
    Modal::alert(AlertKind::Error, format!("Error: {}", reason.as_ref()))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Input is blocked while the loading overlay is up
        if self.executing {
            return Ok(None);
        }

        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else {
            self.home.handle_key_event(key)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let follow_up = match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => None,
            Action::ForceQuit => {
                self.should_quit = true;
                None
            }
            Action::Startup => {
                self.domain.connection = ConnectionStatus::Checking;
                Some(Action::CheckConnection)
            }
            Action::CheckConnection => {
                self.check_connection();
                Some(Action::BeginReload(ReloadTarget::SchemaAndClasses))
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to HomeComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => {
                self.home.next(self.home.card_count(&self.domain));
                None
            }
            Action::PrevItem => {
                self.home.previous(self.home.card_count(&self.domain));
                None
            }
            Action::NextTab
            | Action::PrevTab
            | Action::SelectTab(_)
            | Action::NextClass
            | Action::PrevClass
            | Action::AdjustLimit(_) => self.home.update(action)?,

            // ─────────────────────────────────────────────────────────────────
            // Loading
            // ─────────────────────────────────────────────────────────────────
            Action::BeginReload(target) => {
                if self.begin_reload(target) {
                    Some(Action::Reload(target))
                } else {
                    None
                }
            }
            Action::Reload(target) => {
                self.reload(target);
                None
            }
            Action::ReloadCurrentTab => Some(Action::BeginReload(match self.home.active_tab {
                Tab::Schema => ReloadTarget::Schema,
                Tab::Objects => ReloadTarget::Objects,
                Tab::Classes => ReloadTarget::Classes,
            })),

            // ─────────────────────────────────────────────────────────────────
            // Destructive Actions
            // ─────────────────────────────────────────────────────────────────
            Action::RequestDeleteClass => {
                if let Some(class) = self.home.selected_class(&self.domain) {
                    let action = PendingAction::DeleteClass(class.name.clone());
                    self.request(action);
                }
                None
            }
            Action::RequestDeleteObject => {
                if let Some((class_name, object)) = self.home.selected_object(&self.domain) {
                    let action = PendingAction::DeleteObject {
                        class_name: class_name.to_string(),
                        object_id: object.id.clone(),
                    };
                    self.request(action);
                }
                None
            }
            Action::RequestDeleteAll => {
                self.request(PendingAction::DeleteAllClasses);
                None
            }
            Action::ExecutePending => {
                self.execute_pending();
                None
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
                None
            }
            Action::OpenClassDetails => match self.home.selected_class(&self.domain) {
                Some(class) => {
                    let class_name = class.name.clone();
                    self.domain.class_details = Some(ClassDetailsView::Loading);
                    self.modals.push(Modal::ClassDetails {
                        class_name,
                        scroll_offset: 0,
                    });
                    Some(Action::LoadClassDetails)
                }
                None => None,
            },
            Action::LoadClassDetails => {
                if let Some(Modal::ClassDetails { class_name, .. }) = self.modals.top().cloned() {
                    self.load_class_details(&class_name);
                }
                None
            }
            Action::OpenObjectDetails => match self.home.selected_object(&self.domain) {
                Some((_, object)) => {
                    let object_id = object.id.clone();
                    debug!(id = %object_id, "showing object");
                    self.modals.push(Modal::ObjectDetails {
                        object_id,
                        scroll_offset: 0,
                    });
                    None
                }
                None => None,
            },
            Action::OpenServerInfo => {
                self.domain.server_info = None;
                self.modals.push(Modal::ServerInfo { scroll_offset: 0 });
                Some(Action::LoadServerInfo)
            }
            Action::LoadServerInfo => {
                self.load_server_info();
                None
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
                None
            }
            Action::CloseModal => {
                match self.modals.top() {
                    Some(Modal::Confirm { .. }) => {
                        debug!(pending = ?self.pending, "confirmation cancelled");
                        self.pending = None;
                    }
                    Some(Modal::ClassDetails { .. }) => self.domain.class_details = None,
                    Some(Modal::ServerInfo { .. }) => self.domain.server_info = None,
                    _ => {}
                }
                self.modals.pop();
                None
            }
            Action::ConfirmModal => match self.modals.top() {
                Some(Modal::QuitConfirm) => {
                    self.should_quit = true;
                    None
                }
                Some(Modal::Confirm { .. }) if self.pending.is_some() => {
                    self.executing = true;
                    Some(Action::ExecutePending)
                }
                Some(Modal::Confirm { .. }) => {
                    self.modals.pop();
                    None
                }
                _ => None,
            },
            Action::ModalUp => {
                let limit = self.modal_scroll_limit();
                if let Some(offset) = self.modals.top_mut().and_then(Modal::scroll_offset_mut) {
                    *offset = (*offset).min(limit).saturating_sub(1);
                }
                None
            }
            Action::ModalDown => {
                let limit = self.modal_scroll_limit();
                if let Some(offset) = self.modals.top_mut().and_then(Modal::scroll_offset_mut) {
                    *offset = (*offset + 1).min(limit);
                }
                None
            }

            // ─────────────────────────────────────────────────────────────────
            // Export
            // ─────────────────────────────────────────────────────────────────
            Action::ExportSchema => {
                self.export_schema();
                None
            }
        };

        Ok(follow_up)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = HomeRenderContext {
            domain: &self.domain,
            base_url: &self.config.base_url,
            status_message: self.status_message.as_deref(),
        };
        draw_home_screen(frame, area, &mut self.home, &ctx)?;

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }

        if self.executing {
            draw_loading_overlay(frame, area, "Working...");
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Scroll limit of the overlay on top, measured when it was last drawn
    fn modal_scroll_limit(&self) -> usize {
        match self.modals.top() {
            Some(Modal::ClassDetails { .. }) => self.class_details_dialog.scroll_limit(),
            Some(Modal::ObjectDetails { .. }) => self.object_details_dialog.scroll_limit(),
            Some(Modal::ServerInfo { .. }) => self.server_info_dialog.scroll_limit(),
            _ => 0,
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm | Modal::Confirm { .. } => self.confirm_dialog.handle_key_event(key),
            Modal::Alert { .. } => self.alert_dialog.handle_key_event(key),
            Modal::ClassDetails { .. } => self.class_details_dialog.handle_key_event(key),
            Modal::ObjectDetails { .. } => self.object_details_dialog.handle_key_event(key),
            Modal::ServerInfo { .. } => self.server_info_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => {
                self.confirm_dialog
                    .set_content("Quit", "Are you sure you want to quit?", false);
                self.confirm_dialog.draw(frame, area)?;
            }
            Modal::Confirm { title, message } => {
                self.confirm_dialog.set_content(title, message, true);
                self.confirm_dialog.draw(frame, area)?;
            }
            Modal::Alert { kind, message } => {
                self.alert_dialog.set_content(*kind, message);
                self.alert_dialog.draw(frame, area)?;
            }
            Modal::ClassDetails {
                class_name,
                scroll_offset,
            } => {
                self.class_details_dialog.set_view(
                    class_name,
                    self.domain.class_details.as_ref(),
                    *scroll_offset,
                );
                self.class_details_dialog.draw(frame, area)?;
            }
            Modal::ObjectDetails {
                object_id,
                scroll_offset,
            } => {
                self.object_details_dialog.set_object(
                    object_id,
                    self.domain.objects.find(object_id),
                    *scroll_offset,
                );
                self.object_details_dialog.draw(frame, area)?;
            }
            Modal::ServerInfo { scroll_offset } => {
                self.server_info_dialog.set_server_info(
                    self.domain.server_info.as_ref(),
                    self.domain.store_url.as_deref(),
                    *scroll_offset,
                );
                self.server_info_dialog.draw(frame, area)?;
            }
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}
