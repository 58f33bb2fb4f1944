//! Keyboard event handlers

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tui::app::App;

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        let is_press =
            key_event.kind == KeyEventKind::Press || key_event.kind == KeyEventKind::Repeat;
        if !is_press {
            return;
        }

        let code = key_event.code;
        let modifiers = key_event.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let viewport = self.page.viewport_height();
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                // Esc closes the menu before it quits
                if self.nav.is_mobile_menu_open() {
                    self.nav.toggle_mobile_menu();
                    self.needs_redraw = true;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-self.scale.line_step()),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(self.scale.line_step()),
            KeyCode::PageUp => self.scroll_by(-self.scale.page_step(viewport)),
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.scroll_by(self.scale.page_step(viewport))
            }
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to(0.0),
            KeyCode::End | KeyCode::Char('G') => self.scroll_to(self.page.max_scroll()),
            KeyCode::Char('m') => {
                self.nav.toggle_mobile_menu();
                self.needs_redraw = true;
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as u8 - b'1') as usize;
                self.activate_nav(index);
            }
            _ => {}
        }
    }
}
