//! UI components for the hero renderer
//!
//! Reusable rendering components: progress bar, navigation bar, status bar, scrollbar.

pub mod nav_bar;
pub mod progress_bar;
pub mod scrollbars;
pub mod status_bar;

pub use nav_bar::render_nav_bar;
pub use progress_bar::render_progress_bar;
pub use scrollbars::render_page_scrollbar;
pub use status_bar::{render_status_bar, StatusInfo};
