//! Scroll-driven hero
//!
//! The tracker decides which hero line is emphasized from scroll position
//! and sentinel visibility. Everything it needs from the host arrives
//! through [`HeroEnvironment`]; [`SimulatedPage`] is the in-process host.

pub mod band;
pub mod emoji;
pub mod environment;
pub mod geometry;
pub mod line;
pub mod page;
pub mod signal;
pub mod tracker;

pub use band::{ObservationBand, ObserverConfig};
pub use environment::{HeroEnvironment, ListenerId, ListenerOptions, ObserverId, Registrations};
pub use geometry::{
    BoundingRect, ContainerGeometry, EnvironmentSnapshot, ScrollState, ViewportState,
    VisibilityReading,
};
pub use line::{HeroLines, Line};
pub use page::{PageEvents, PageLayout, SimulatedPage};
pub use signal::{compute_active_index, ActiveDecision, SignalSource};
pub use tracker::{ActiveLineTracker, TrackerState};
