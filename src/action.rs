//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state. An update may return a follow-up action; the main
//! loop redraws before dispatching it, which is how loading states become
//! visible before a blocking request runs.

use crate::model::ui::ReloadTarget;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,
    /// First load: connection check, then schema and classes
    Startup,
    /// Check the health endpoint and update the indicator
    CheckConnection,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next item in the active list
    NextItem,
    /// Move to previous item in the active list
    PrevItem,
    /// Move to next tab
    NextTab,
    /// Move to previous tab
    PrevTab,
    /// Jump to a tab by position
    SelectTab(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────────────────────────────
    /// Put the target view(s) into the loading state
    BeginReload(ReloadTarget),
    /// Fetch the target view(s)
    Reload(ReloadTarget),
    /// Reload whatever the active tab shows
    ReloadCurrentTab,

    // ─────────────────────────────────────────────────────────────────────────
    // Object Browser
    // ─────────────────────────────────────────────────────────────────────────
    /// Select the next class in the selector
    NextClass,
    /// Select the previous class in the selector
    PrevClass,
    /// Change the object limit by a signed step
    AdjustLimit(i32),

    // ─────────────────────────────────────────────────────────────────────────
    // Destructive Actions
    // ─────────────────────────────────────────────────────────────────────────
    /// Ask to delete the class under the cursor
    RequestDeleteClass,
    /// Ask to delete the object under the cursor
    RequestDeleteObject,
    /// Ask to delete every class
    RequestDeleteAll,
    /// Run the pending action (loading overlay is already shown)
    ExecutePending,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open details of the class under the cursor
    OpenClassDetails,
    /// Fetch the class shown by the open details modal
    LoadClassDetails,
    /// Open the full dump of the object under the cursor
    OpenObjectDetails,
    /// Open store metadata and nodes overlay
    OpenServerInfo,
    /// Fetch metadata and nodes for the open overlay
    LoadServerInfo,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,
    /// Scroll the current modal up
    ModalUp,
    /// Scroll the current modal down
    ModalDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────────────────────
    /// Write the schema to weaviate-schema.json
    ExportSchema,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::Startup => write!(f, "Startup"),
            Action::CheckConnection => write!(f, "CheckConnection"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::SelectTab(i) => write!(f, "SelectTab({})", i),
            Action::BeginReload(target) => write!(f, "BeginReload({:?})", target),
            Action::Reload(target) => write!(f, "Reload({:?})", target),
            Action::ReloadCurrentTab => write!(f, "ReloadCurrentTab"),
            Action::NextClass => write!(f, "NextClass"),
            Action::PrevClass => write!(f, "PrevClass"),
            Action::AdjustLimit(step) => write!(f, "AdjustLimit({})", step),
            Action::RequestDeleteClass => write!(f, "RequestDeleteClass"),
            Action::RequestDeleteObject => write!(f, "RequestDeleteObject"),
            Action::RequestDeleteAll => write!(f, "RequestDeleteAll"),
            Action::ExecutePending => write!(f, "ExecutePending"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenClassDetails => write!(f, "OpenClassDetails"),
            Action::LoadClassDetails => write!(f, "LoadClassDetails"),
            Action::OpenObjectDetails => write!(f, "OpenObjectDetails"),
            Action::OpenServerInfo => write!(f, "OpenServerInfo"),
            Action::LoadServerInfo => write!(f, "LoadServerInfo"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
            Action::ExportSchema => write!(f, "ExportSchema"),
        }
    }
}
