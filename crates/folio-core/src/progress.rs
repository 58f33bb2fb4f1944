//! Page scroll progress

use crate::hero::EnvironmentSnapshot;

/// How far the page has been scrolled, in percent
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollProgress {
    percent: f64,
}

impl ScrollProgress {
    pub fn from_snapshot(snapshot: &EnvironmentSnapshot, document_height: f64) -> Self {
        Self {
            percent: scroll_progress(
                snapshot.scroll_y,
                document_height,
                snapshot.viewport_height,
            ),
        }
    }

    /// Clamped to [0, 100]; NaN counts as 0
    pub fn from_percent(percent: f64) -> Self {
        let percent = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) };
        Self { percent }
    }

    /// Percentage in [0, 100]
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Filled cells of a bar `width` cells wide
    pub fn filled(&self, width: u16) -> u16 {
        ((self.percent / 100.0) * width as f64).round().clamp(0.0, width as f64) as u16
    }
}

/// Percentage of the scrollable distance covered, clamped to [0, 100].
///
/// A page that cannot scroll reports 0 at the top and 100 otherwise.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let total = document_height - viewport_height;
    if total.is_nan() || total <= 0.0 {
        return if scroll_y > 0.0 { 100.0 } else { 0.0 };
    }
    let percent = (scroll_y / total) * 100.0;
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}
