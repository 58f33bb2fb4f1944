//! Mouse event handling
//!
//! Wheel scrolling moves the page; clicks follow navigation entries or
//! toggle the mobile menu. The scrollbar jumps on click and follows drags.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::tui::app::App;

/// Page offset for a pointer at `row` over a scrollbar track
fn scrollbar_offset(row: u16, track: Rect, max_scroll: f64) -> f64 {
    if track.height <= 1 {
        return 0.0;
    }
    let relative = row.saturating_sub(track.y).min(track.height - 1) as f64;
    relative / (track.height - 1) as f64 * max_scroll
}

impl App {
    /// Handle mouse events for scrolling and clicking
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(self.scale.wheel_step()),
            MouseEventKind::ScrollUp => self.scroll_by(-self.scale.wheel_step()),
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_left_click(mouse.column, mouse.row);
            }
            MouseEventKind::Drag(MouseButton::Left) if self.layout.dragging_scrollbar => {
                self.jump_to_scrollbar_row(mouse.row);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.layout.dragging_scrollbar = false;
            }
            _ => {}
        }
    }

    fn jump_to_scrollbar_row(&mut self, row: u16) {
        if let Some(track) = self.layout.scrollbar_area {
            let offset = scrollbar_offset(row, track, self.page.max_scroll());
            self.scroll_to(offset);
        }
    }

    fn handle_left_click(&mut self, column: u16, row: u16) {
        if self.layout.is_scrollbar(column, row) {
            self.layout.dragging_scrollbar = true;
            self.jump_to_scrollbar_row(row);
            return;
        }

        if self.layout.is_menu_button(column, row) {
            self.nav.toggle_mobile_menu();
            self.needs_redraw = true;
            return;
        }

        if let Some(index) = self.layout.nav_item_at(column, row) {
            self.activate_nav(index);
            return;
        }

        // Clicking outside an open menu closes it
        if self.nav.is_mobile_menu_open() {
            self.nav.toggle_mobile_menu();
            self.needs_redraw = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::scrollbar_offset;
    use crate::tui::app::App;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use folio_core::HeroConfig;
    use ratatui::layout::Rect;

    fn event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app() -> App {
        let mut app = App::new(&HeroConfig::default(), false, None).unwrap();
        app.resize(54);
        app.tracker.mount(&mut app.page);
        app
    }

    #[test]
    fn test_wheel_scrolls_page() {
        let mut app = app();
        app.handle_mouse_event(event(MouseEventKind::ScrollDown, 0, 10));
        app.handle_mouse_event(event(MouseEventKind::ScrollDown, 0, 10));
        assert_eq!(app.page.scroll_y(), 120.0);
        app.handle_mouse_event(event(MouseEventKind::ScrollUp, 0, 10));
        assert_eq!(app.page.scroll_y(), 60.0);
    }

    #[test]
    fn test_click_nav_entry() {
        let mut app = app();
        app.layout.nav_item_areas = vec![Rect::new(10, 1, 4, 1), Rect::new(20, 1, 5, 1)];
        app.handle_mouse_event(event(MouseEventKind::Down(MouseButton::Left), 21, 1));
        assert_eq!(app.page.scroll_y(), 2496.0);
    }

    #[test]
    fn test_scrollbar_offset() {
        let track = Rect::new(79, 3, 1, 11);
        assert_eq!(scrollbar_offset(3, track, 1000.0), 0.0);
        assert_eq!(scrollbar_offset(8, track, 1000.0), 500.0);
        assert_eq!(scrollbar_offset(13, track, 1000.0), 1000.0);
        assert_eq!(scrollbar_offset(40, track, 1000.0), 1000.0);
        assert_eq!(scrollbar_offset(0, track, 1000.0), 0.0);
        assert_eq!(scrollbar_offset(5, Rect::new(0, 5, 1, 1), 1000.0), 0.0);
    }

    #[test]
    fn test_scrollbar_drag() {
        let mut app = app();
        let max = app.page.max_scroll();
        app.layout.scrollbar_area = Some(Rect::new(79, 3, 1, 11));
        app.handle_mouse_event(event(MouseEventKind::Down(MouseButton::Left), 79, 13));
        assert_eq!(app.page.scroll_y(), max);
        app.handle_mouse_event(event(MouseEventKind::Drag(MouseButton::Left), 40, 3));
        assert_eq!(app.page.scroll_y(), 0.0);
        app.handle_mouse_event(event(MouseEventKind::Up(MouseButton::Left), 40, 3));
        app.handle_mouse_event(event(MouseEventKind::Drag(MouseButton::Left), 40, 13));
        assert_eq!(app.page.scroll_y(), 0.0);
    }

    #[test]
    fn test_click_menu_button_and_outside() {
        let mut app = app();
        app.layout.menu_button_area = Some(Rect::new(30, 1, 6, 1));
        app.handle_mouse_event(event(MouseEventKind::Down(MouseButton::Left), 31, 1));
        assert!(app.nav.is_mobile_menu_open());
        app.handle_mouse_event(event(MouseEventKind::Down(MouseButton::Left), 5, 20));
        assert!(!app.nav.is_mobile_menu_open());
    }
}
