//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod alert_dialog;
pub mod class_details_dialog;
pub mod confirm_dialog;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod loading_overlay;
pub mod object_details_dialog;
pub mod panels;
pub mod scroll;
pub mod server_info;

pub use alert_dialog::AlertDialog;
pub use class_details_dialog::ClassDetailsDialog;
pub use confirm_dialog::ConfirmDialog;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use layout::{calculate_main_layout, centered_popup};
pub use loading_overlay::draw_loading_overlay;
pub use object_details_dialog::ObjectDetailsDialog;
pub use server_info::ServerInfoDialog;
