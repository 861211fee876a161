//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    /// Title and connectivity indicator
    pub header: Rect,
    pub tabs: Rect,
    /// Class selector and limit (objects tab only)
    pub toolbar: Option<Rect>,
    pub body: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect, show_toolbar: bool) -> MainLayout {
    let mut constraints = vec![Constraint::Length(1), Constraint::Length(2)];
    if show_toolbar {
        constraints.push(Constraint::Length(3));
    }
    constraints.extend([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    if show_toolbar {
        MainLayout {
            header: chunks[0],
            tabs: chunks[1],
            toolbar: Some(chunks[2]),
            body: chunks[3],
            status: chunks[4],
            help: chunks[5],
        }
    } else {
        MainLayout {
            header: chunks[0],
            tabs: chunks[1],
            toolbar: None,
            body: chunks[2],
            status: chunks[3],
            help: chunks[4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 60, 10);
        assert_eq!(popup, Rect::new(20, 15, 60, 10));

        let small = centered_popup(Rect::new(0, 0, 30, 5), 60, 10);
        assert_eq!(small.width, 30);
        assert_eq!(small.height, 5);
    }

    #[test]
    fn test_toolbar_only_when_requested() {
        let area = Rect::new(0, 0, 80, 30);

        let layout = calculate_main_layout(area, false);
        assert!(layout.toolbar.is_none());
        assert_eq!(layout.body.height, 30 - 1 - 2 - 1 - 1);

        let layout = calculate_main_layout(area, true);
        assert_eq!(layout.toolbar.map(|r| r.height), Some(3));
        assert_eq!(layout.body.height, 30 - 1 - 2 - 3 - 1 - 1);
    }
}
