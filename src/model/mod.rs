//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `schema` - Wire types of the dashboard API
//! - `DomainState` - Data fetched from the server
//! - `ui` - Presentation state (tabs, view states, class selector)
//! - `ModalStack` - Modal overlay management and the pending action

pub mod domain;
pub mod modal;
pub mod schema;
pub mod ui;
