//! Event handlers for the App
//!
//! Split by concern; each file adds an `impl App` block.

pub mod keyboard;
pub mod mouse;
pub mod rendering;
