//! Terminal renderer for the hero page

pub mod app;
pub mod components;
pub mod handlers;
pub mod state;
pub mod themes;

// Re-exports
pub use app::App;
pub use themes::ThemeMode;

/// Restore terminal state - called on exit, panic included
pub fn restore_terminal() {
    use crossterm::{
        cursor::Show,
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
}
