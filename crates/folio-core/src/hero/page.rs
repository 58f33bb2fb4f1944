//! Simulated page
//!
//! A deterministic stand-in for the browser hosting the hero. It lays out
//! the container and one sentinel per line, owns the scroll offset and the
//! viewport height, and reports visibility the way an intersection observer
//! would: an initial report for every sentinel, then one per threshold
//! crossing.
//!
//! Layout (heights relative to the viewport height `vh`):
//! - container: `max(N * 60, 200)` percent, below a fixed header
//! - sentinel list: padded by 10% top and bottom
//! - each line slot: 50%, with a 20% sentinel centered inside

use crate::constants::layout::{
    CONTAINER_MIN, CONTAINER_PER_LINE, DEFAULT_HEADER_HEIGHT, DEFAULT_TRAILING_HEIGHT,
    LIST_PADDING, SENTINEL_HEIGHT, SLOT_HEIGHT,
};

use super::band::{ObserverConfig, ObserverSample};
use super::environment::{HeroEnvironment, ListenerId, ListenerOptions, ObserverId};
use super::geometry::{BoundingRect, ContainerGeometry, EnvironmentSnapshot, VisibilityReading};
use super::signal::ActiveDecision;
use super::tracker::ActiveLineTracker;

/// Fixed page regions around the hero, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    /// Height of everything above the hero container
    pub header_height: f64,
    /// Height of everything below the hero container
    pub trailing_height: f64,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            header_height: DEFAULT_HEADER_HEIGHT,
            trailing_height: DEFAULT_TRAILING_HEIGHT,
        }
    }
}

/// Events produced by one change to the page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageEvents {
    /// A scroll event reached at least one listener
    pub scrolled: bool,
    /// Visibility reports to deliver as one batch
    pub visibility: Vec<VisibilityReading>,
}

impl PageEvents {
    pub fn is_empty(&self) -> bool {
        !self.scrolled && self.visibility.is_empty()
    }

    /// Deliver to a tracker: the scroll event first, then the visibility batch.
    ///
    /// Returns the decision of the last handler that recomputed.
    pub fn dispatch<E: HeroEnvironment + ?Sized>(
        &self,
        tracker: &mut ActiveLineTracker,
        env: &E,
    ) -> Option<ActiveDecision> {
        let mut decision = None;
        if self.scrolled {
            decision = tracker.handle_scroll(env).or(decision);
        }
        if !self.visibility.is_empty() {
            decision = tracker.handle_visibility(&self.visibility, env).or(decision);
        }
        decision
    }
}

#[derive(Debug)]
struct ObserverState {
    id: ObserverId,
    config: ObserverConfig,
    last: Vec<Option<ObserverSample>>,
}

/// In-process page hosting the hero
#[derive(Debug)]
pub struct SimulatedPage {
    line_count: usize,
    layout: PageLayout,
    viewport_height: f64,
    scroll_y: f64,
    reduced_motion: bool,
    attached: bool,
    next_id: u64,
    listeners: Vec<ListenerId>,
    observers: Vec<ObserverState>,
    queued: Vec<VisibilityReading>,
}

impl SimulatedPage {
    pub fn new(line_count: usize, viewport_height: f64, layout: PageLayout) -> Self {
        Self {
            line_count,
            layout,
            viewport_height: viewport_height.max(0.0),
            scroll_y: 0.0,
            reduced_motion: false,
            attached: true,
            next_id: 0,
            listeners: Vec::new(),
            observers: Vec::new(),
            queued: Vec::new(),
        }
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    /// Attach or detach the hero container
    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Container geometry regardless of attachment
    pub fn container_geometry(&self) -> ContainerGeometry {
        let vh = self.viewport_height;
        let factor = (self.line_count as f64 * CONTAINER_PER_LINE).max(CONTAINER_MIN);
        ContainerGeometry {
            top: self.layout.header_height,
            height: factor * vh,
        }
    }

    pub fn document_height(&self) -> f64 {
        self.layout.header_height
            + self.container_geometry().height
            + self.layout.trailing_height
    }

    /// Largest reachable scroll offset
    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport_height).max(0.0)
    }

    /// Sentinel bounds in document coordinates
    pub fn sentinel_document_rect(&self, line: usize) -> BoundingRect {
        let vh = self.viewport_height;
        let container = self.container_geometry();
        let slot_top = container.top + LIST_PADDING * vh + line as f64 * SLOT_HEIGHT * vh;
        BoundingRect::new(
            slot_top + (SLOT_HEIGHT - SENTINEL_HEIGHT) / 2.0 * vh,
            SENTINEL_HEIGHT * vh,
        )
    }

    /// Sentinel bounds in client coordinates
    pub fn sentinel_client_rect(&self, line: usize) -> BoundingRect {
        let rect = self.sentinel_document_rect(line);
        BoundingRect::new(rect.top - self.scroll_y, rect.height)
    }

    /// Scroll to an absolute offset, clamped to the document
    pub fn scroll_to(&mut self, y: f64) -> PageEvents {
        let target = if y.is_finite() { y } else { 0.0 };
        let target = target.clamp(0.0, self.max_scroll());
        let moved = target != self.scroll_y;
        self.scroll_y = target;
        self.collect(moved)
    }

    pub fn scroll_by(&mut self, delta: f64) -> PageEvents {
        self.scroll_to(self.scroll_y + delta)
    }

    /// Change the viewport height; the layout follows it
    pub fn resize(&mut self, viewport_height: f64) -> PageEvents {
        self.viewport_height = viewport_height.max(0.0);
        let clamped = self.scroll_y.min(self.max_scroll());
        let moved = clamped != self.scroll_y;
        self.scroll_y = clamped;
        self.collect(moved)
    }

    /// Deliver reports queued since the last change (initial observation)
    pub fn flush(&mut self) -> PageEvents {
        self.collect(false)
    }

    fn collect(&mut self, moved: bool) -> PageEvents {
        self.sample_observers();
        PageEvents {
            scrolled: moved && !self.listeners.is_empty(),
            visibility: std::mem::take(&mut self.queued),
        }
    }

    fn sample_observers(&mut self) {
        if !self.attached {
            return;
        }
        let rects: Vec<BoundingRect> = (0..self.line_count)
            .map(|line| self.sentinel_client_rect(line))
            .collect();
        let viewport_height = self.viewport_height;

        for observer in &mut self.observers {
            let band = observer.config.band(viewport_height);
            for (line, last) in observer.last.iter_mut().enumerate() {
                let Some(rect) = rects.get(line) else {
                    continue;
                };
                let sample = observer.config.sample(&band, rect);
                if sample.crossed_from(last.as_ref()) {
                    self.queued.push(VisibilityReading {
                        line,
                        is_intersecting: sample.is_intersecting,
                        ratio: sample.ratio,
                        rect: *rect,
                    });
                }
                *last = Some(sample);
            }
            tracing::trace!(observer = observer.id.0, "Sampled sentinels");
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl HeroEnvironment for SimulatedPage {
    fn snapshot(&self) -> EnvironmentSnapshot {
        EnvironmentSnapshot {
            scroll_y: self.scroll_y,
            viewport_height: self.viewport_height,
        }
    }

    fn container(&self) -> Option<ContainerGeometry> {
        self.attached.then(|| self.container_geometry())
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn observe_sentinels(&mut self, config: &ObserverConfig, line_count: usize) -> ObserverId {
        let id = ObserverId(self.next_id());
        self.observers.push(ObserverState {
            id,
            config: config.clone(),
            last: vec![None; line_count.min(self.line_count)],
        });
        // Initial reports are queued until the next flush or scroll
        self.sample_observers();
        id
    }

    fn disconnect_observer(&mut self, id: ObserverId) {
        self.observers.retain(|o| o.id != id);
        if self.observers.is_empty() {
            self.queued.clear();
        }
    }

    fn add_scroll_listener(&mut self, _options: ListenerOptions) -> ListenerId {
        let id = ListenerId(self.next_id());
        self.listeners.push(id);
        id
    }

    fn remove_scroll_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|l| *l != id);
    }
}
