//! Layout State - Cached layout areas for hit testing

use ratatui::layout::{Position, Rect};

/// Cached layout areas, updated each frame during rendering
#[derive(Debug, Default)]
pub struct LayoutState {
    /// Clickable navigation entries, in item order
    pub nav_item_areas: Vec<Rect>,
    /// Mobile menu toggle (narrow terminals only)
    pub menu_button_area: Option<Rect>,
    /// Page scrollbar track
    pub scrollbar_area: Option<Rect>,
    /// Left button went down on the scrollbar and has not been released
    pub dragging_scrollbar: bool,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigation entry under a terminal cell
    pub fn nav_item_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.nav_item_areas
            .iter()
            .position(|area| area.contains(position))
    }

    /// Whether a terminal cell is on the mobile menu toggle
    pub fn is_menu_button(&self, column: u16, row: u16) -> bool {
        self.menu_button_area
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    /// Whether a terminal cell is on the page scrollbar
    pub fn is_scrollbar(&self, column: u16, row: u16) -> bool {
        self.scrollbar_area
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }
}
