//! Active index recomputation
//!
//! One pure function reconciles both signals. Both event handlers of the
//! tracker call it, so identical inputs always give the same index.

use serde::Serialize;

use crate::constants::tracking::TOP_GUARD;

use super::geometry::{ScrollState, ViewportState, VisibilityReading};

/// Which branch decided the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalSource {
    /// A sentinel intersecting the observation band won
    Visibility,
    /// Derived from the scroll offset within the container
    ScrollPosition,
    /// The container has barely entered view; first line forced
    TopGuard,
}

impl SignalSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalSource::Visibility => "visibility",
            SignalSource::ScrollPosition => "scroll_position",
            SignalSource::TopGuard => "top_guard",
        }
    }
}

/// Result of one recomputation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveDecision {
    pub index: usize,
    pub source: SignalSource,
}

/// Derive the active line index.
///
/// `readings` is the visibility batch being handled (empty for raw scroll
/// events). `line_count` must be at least one; the result is always in
/// `0..line_count`.
pub fn compute_active_index(
    readings: &[VisibilityReading],
    scroll: &ScrollState,
    viewport: &ViewportState,
    line_count: usize,
) -> ActiveDecision {
    match closest_to_center(readings, viewport, line_count) {
        Some(index) => ActiveDecision {
            index,
            source: SignalSource::Visibility,
        },
        None => scroll_position_index(scroll, viewport, line_count),
    }
}

/// Visibility signal: the intersecting sentinel nearest the viewport center.
///
/// Candidates are ordered by their top edge; on equal distance the earlier
/// one wins. Readings for unknown lines are ignored.
pub fn closest_to_center(
    readings: &[VisibilityReading],
    viewport: &ViewportState,
    line_count: usize,
) -> Option<usize> {
    let mut intersecting: Vec<&VisibilityReading> = readings
        .iter()
        .filter(|r| r.is_intersecting && r.line < line_count)
        .collect();
    // Stable, so equal tops keep delivery order
    intersecting.sort_by(|a, b| a.rect.top.total_cmp(&b.rect.top));

    let viewport_center = viewport.height / 2.0;
    let distance = |r: &VisibilityReading| (r.rect.center() - viewport_center).abs();

    intersecting
        .into_iter()
        .reduce(|prev, curr| {
            if distance(curr) < distance(prev) {
                curr
            } else {
                prev
            }
        })
        .map(|r| r.line)
}

/// Scroll-position signal, also run on every raw scroll event
pub fn scroll_position_index(
    scroll: &ScrollState,
    viewport: &ViewportState,
    line_count: usize,
) -> ActiveDecision {
    let last = line_count.saturating_sub(1);

    if scroll.scroll_y < scroll.container_top + viewport.height * TOP_GUARD {
        return ActiveDecision {
            index: 0,
            source: SignalSource::TopGuard,
        };
    }

    let relative = scroll.scroll_y - scroll.container_top;
    let fraction = relative / scroll.container_height;
    let index = if scroll.container_height > 0.0 && fraction.is_finite() {
        // Negative values floor below zero and saturate to 0 on the cast
        ((fraction * line_count as f64).floor().max(0.0) as usize).min(last)
    } else {
        0
    };

    ActiveDecision {
        index,
        source: SignalSource::ScrollPosition,
    }
}
