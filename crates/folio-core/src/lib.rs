//! Folio Core - Scroll-driven hero tracking for the portfolio site
//!
//! This crate provides everything below the renderer:
//! - The active-line tracker and its pure recomputation
//! - A simulated page standing in for the browser
//! - Scroll progress and navigation bar state
//! - Hero text segmentation
//! - Configuration, paths and errors

pub mod config;
pub mod constants;
pub mod error;
pub mod hero;
pub mod nav;
pub mod paths;
pub mod progress;

// Re-exports for convenience
pub use config::HeroConfig;
pub use error::{FolioError, Result};
pub use hero::{ActiveLineTracker, HeroEnvironment, HeroLines, SimulatedPage, TrackerState};
pub use nav::NavState;
pub use progress::ScrollProgress;
