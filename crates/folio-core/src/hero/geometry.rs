//! Geometry shared by the tracker and its environment
//!
//! Document coordinates are measured from the top of the page; client
//! coordinates from the top of the viewport.

use serde::{Deserialize, Serialize};

/// Vertical extent of a box in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingRect {
    pub top: f64,
    pub height: f64,
}

impl BoundingRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Vertical center
    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Position and rendered height of the hero container, in document coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerGeometry {
    pub top: f64,
    pub height: f64,
}

/// Snapshot of the ambient browser state the tracker is allowed to see
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvironmentSnapshot {
    /// Vertical scroll offset of the page
    pub scroll_y: f64,
    /// Height of the viewport
    pub viewport_height: f64,
}

/// Scroll offset paired with the container it is measured against
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub container_top: f64,
    pub container_height: f64,
}

impl ScrollState {
    pub fn new(snapshot: &EnvironmentSnapshot, container: &ContainerGeometry) -> Self {
        Self {
            scroll_y: snapshot.scroll_y,
            container_top: container.top,
            container_height: container.height,
        }
    }
}

/// Viewport dimensions relevant to vertical tracking
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportState {
    pub height: f64,
}

impl From<&EnvironmentSnapshot> for ViewportState {
    fn from(snapshot: &EnvironmentSnapshot) -> Self {
        Self {
            height: snapshot.viewport_height,
        }
    }
}

/// One visibility report for a sentinel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilityReading {
    /// Index of the line the sentinel belongs to
    pub line: usize,
    pub is_intersecting: bool,
    /// Fraction of the sentinel inside the observation band
    pub ratio: f64,
    /// Sentinel bounds in client coordinates
    pub rect: BoundingRect,
}
