//! Observation band and threshold reporting
//!
//! Mirrors how a viewport intersection observer decides what it reports:
//! the root is shrunk by the configured margins, each target's visible
//! fraction inside it is measured, and a report fires only when that
//! fraction crosses one of the configured thresholds.

use crate::constants::tracking::{BAND_BOTTOM_MARGIN, BAND_TOP_MARGIN, OBSERVER_THRESHOLDS};
use crate::error::{FolioError, Result};

use super::geometry::BoundingRect;

/// Configuration handed to the environment's visibility observer
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverConfig {
    /// Fraction of the viewport cut from the top of the band
    pub top_margin: f64,
    /// Fraction of the viewport cut from the bottom of the band
    pub bottom_margin: f64,
    /// Sorted, deduplicated ratios in [0, 1]
    pub thresholds: Vec<f64>,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            top_margin: BAND_TOP_MARGIN,
            bottom_margin: BAND_BOTTOM_MARGIN,
            thresholds: OBSERVER_THRESHOLDS.to_vec(),
        }
    }
}

impl ObserverConfig {
    pub fn new(top_margin: f64, bottom_margin: f64, mut thresholds: Vec<f64>) -> Result<Self> {
        let valid_margin = |m: f64| (0.0..1.0).contains(&m);
        if !valid_margin(top_margin)
            || !valid_margin(bottom_margin)
            || top_margin + bottom_margin >= 1.0
        {
            return Err(FolioError::InvalidBand {
                top: top_margin,
                bottom: bottom_margin,
            });
        }
        if let Some(bad) = thresholds
            .iter()
            .copied()
            .find(|t| !(0.0..=1.0).contains(t))
        {
            return Err(FolioError::InvalidThreshold(bad));
        }
        thresholds.sort_by(f64::total_cmp);
        thresholds.dedup();
        if thresholds.is_empty() {
            thresholds.push(0.0);
        }
        Ok(Self {
            top_margin,
            bottom_margin,
            thresholds,
        })
    }

    /// Band for a viewport of the given height
    pub fn band(&self, viewport_height: f64) -> ObservationBand {
        ObservationBand::from_viewport(viewport_height, self.top_margin, self.bottom_margin)
    }

    /// Sample a target against this configuration
    pub fn sample(&self, band: &ObservationBand, rect: &BoundingRect) -> ObserverSample {
        let is_intersecting = band.is_intersecting(rect);
        let ratio = band.intersection_ratio(rect);
        let step = self.thresholds.iter().filter(|t| ratio >= **t).count();
        ObserverSample {
            is_intersecting,
            ratio,
            step,
        }
    }
}

/// The central vertical slice of the viewport, in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationBand {
    pub top: f64,
    pub bottom: f64,
}

impl ObservationBand {
    pub fn from_viewport(viewport_height: f64, top_margin: f64, bottom_margin: f64) -> Self {
        Self {
            top: viewport_height * top_margin,
            bottom: viewport_height * (1.0 - bottom_margin),
        }
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    /// True when the rect touches the band, edges included
    pub fn is_intersecting(&self, rect: &BoundingRect) -> bool {
        rect.top <= self.bottom && rect.bottom() >= self.top
    }

    /// Fraction of the rect's height inside the band
    pub fn intersection_ratio(&self, rect: &BoundingRect) -> f64 {
        if !self.is_intersecting(rect) {
            return 0.0;
        }
        if rect.height <= 0.0 {
            return 1.0;
        }
        let overlap = rect.bottom().min(self.bottom) - rect.top.max(self.top);
        (overlap.max(0.0) / rect.height).clamp(0.0, 1.0)
    }
}

/// What the observer last saw for one target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverSample {
    pub is_intersecting: bool,
    pub ratio: f64,
    /// Number of thresholds at or below `ratio`
    pub step: usize,
}

impl ObserverSample {
    /// Whether moving from `previous` to `self` produces a report.
    ///
    /// The first sample after observation starts always reports.
    pub fn crossed_from(&self, previous: Option<&ObserverSample>) -> bool {
        match previous {
            None => true,
            Some(prev) => prev.step != self.step || prev.is_intersecting != self.is_intersecting,
        }
    }
}
