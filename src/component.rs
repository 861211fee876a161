//! Component trait - Interface for UI components
//!
//! Each component owns its presentation state, turns key events into
//! Actions and renders itself. Data fetched from the API is handed to the
//! component by the App at draw time rather than stored in it.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// The flow is:
/// 1. `handle_key_event` - map a key to an Action, without touching state
/// 2. `update` - apply an Action, optionally returning a follow-up
/// 3. `draw` - render into the given area
pub trait Component {
    /// Map a key event to an Action
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Update component state based on an Action
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component to the frame
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
