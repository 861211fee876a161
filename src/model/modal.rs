//! Modal stack and the pending destructive action
//!
//! Overlays are an enum-based stack; only the top modal receives input.
//! The confirm modal is paired with a single [`PendingAction`] slot owned by
//! the app: a delete trigger fills it, confirming executes and clears it,
//! closing the modal just clears it.

/// Destructive operation waiting for confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteClass(String),
    DeleteObject { class_name: String, object_id: String },
    DeleteAllClasses,
}

impl PendingAction {
    pub fn title(&self) -> &str {
        match self {
            PendingAction::DeleteClass(_) => "Delete Class",
            PendingAction::DeleteObject { .. } => "Delete Object",
            PendingAction::DeleteAllClasses => "Delete All Classes",
        }
    }

    pub fn message(&self) -> String {
        match self {
            PendingAction::DeleteClass(class_name) => format!(
                "Are you sure you want to delete the class \"{}\"? This action cannot be undone and will delete all objects in this class.",
                class_name
            ),
            PendingAction::DeleteObject { .. } => {
                "Are you sure you want to delete this object? This action cannot be undone."
                    .to_string()
            }
            PendingAction::DeleteAllClasses => {
                "Are you sure you want to delete ALL classes from the schema? This will permanently delete all data and cannot be undone."
                    .to_string()
            }
        }
    }

    /// The modal that asks for confirmation of this action
    pub fn confirm_modal(&self) -> Modal {
        Modal::Confirm {
            title: self.title().to_string(),
            message: self.message(),
        }
    }
}

/// Severity of a blocking alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    /// Some of a bulk operation failed
    Partial,
    Error,
}

impl AlertKind {
    pub fn title(&self) -> &'static str {
        match self {
            AlertKind::Success => "Success",
            AlertKind::Partial => "Partial Success",
            AlertKind::Error => "Error",
        }
    }
}

/// Represents a modal overlay that can be displayed on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Confirmation of the pending destructive action
    Confirm { title: String, message: String },
    /// Properties of one schema class
    ClassDetails {
        class_name: String,
        scroll_offset: usize,
    },
    /// Full property dump of one loaded object
    ObjectDetails {
        object_id: String,
        scroll_offset: usize,
    },
    /// Blocking message that must be dismissed
    Alert { kind: AlertKind, message: String },
    /// Store metadata and cluster nodes
    ServerInfo { scroll_offset: usize },
    /// Help dialog showing all keyboard shortcuts
    Help,
}

impl Modal {
    pub fn alert(kind: AlertKind, message: impl Into<String>) -> Self {
        Modal::Alert {
            kind,
            message: message.into(),
        }
    }

    /// Scroll position of the scrollable overlays
    pub fn scroll_offset_mut(&mut self) -> Option<&mut usize> {
        match self {
            Modal::ClassDetails { scroll_offset, .. }
            | Modal::ObjectDetails { scroll_offset, .. }
            | Modal::ServerInfo { scroll_offset } => Some(scroll_offset),
            _ => None,
        }
    }
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    /// Remove every confirm modal, wherever it sits in the stack
    pub fn remove_confirm(&mut self) {
        self.stack.retain(|m| !matches!(m, Modal::Confirm { .. }));
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        stack.push(Modal::Help);

        assert_eq!(stack.pop(), Some(Modal::Help));
        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_modal_stack_top_mut() {
        let mut stack = ModalStack::new();
        stack.push(Modal::ClassDetails {
            class_name: "Article".to_string(),
            scroll_offset: 0,
        });

        if let Some(offset) = stack.top_mut().and_then(Modal::scroll_offset_mut) {
            *offset = 3;
        }

        assert_eq!(
            stack.top(),
            Some(&Modal::ClassDetails {
                class_name: "Article".to_string(),
                scroll_offset: 3,
            })
        );

        stack.push(Modal::Help);
        assert!(stack.top_mut().and_then(Modal::scroll_offset_mut).is_none());
    }

    #[test]
    fn test_remove_confirm_keeps_other_modals() {
        let mut stack = ModalStack::new();
        stack.push(PendingAction::DeleteAllClasses.confirm_modal());
        stack.push(Modal::alert(AlertKind::Success, "done"));

        stack.remove_confirm();

        assert_eq!(stack.len(), 1);
        assert!(matches!(stack.top(), Some(Modal::Alert { .. })));
    }

    #[test]
    fn test_pending_action_texts() {
        let action = PendingAction::DeleteClass("Article".to_string());
        assert_eq!(action.title(), "Delete Class");
        assert!(action.message().contains("\"Article\""));

        let action = PendingAction::DeleteObject {
            class_name: "Article".to_string(),
            object_id: "abc".to_string(),
        };
        assert_eq!(action.title(), "Delete Object");
        assert!(action.message().starts_with("Are you sure you want to delete this object?"));

        assert!(PendingAction::DeleteAllClasses.message().contains("ALL classes"));
    }

    #[test]
    fn test_alert_titles_follow_kind() {
        assert_eq!(AlertKind::Success.title(), "Success");
        assert_eq!(AlertKind::Partial.title(), "Partial Success");
        assert_eq!(AlertKind::Error.title(), "Error");
    }
}
