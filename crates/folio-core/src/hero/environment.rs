//! Environment contract for the tracker
//!
//! Everything the tracker would otherwise read from ambient browser state
//! comes through [`HeroEnvironment`], so tracking is deterministic under test.

use super::band::ObserverConfig;
use super::geometry::{ContainerGeometry, EnvironmentSnapshot};

/// Handle for a registered visibility observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u64);

/// Handle for a registered scroll listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Options for a scroll listener registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerOptions {
    /// The listener never blocks scrolling
    pub passive: bool,
}

impl Default for ListenerOptions {
    fn default() -> Self {
        Self { passive: true }
    }
}

/// Host side of the tracker: geometry readouts and event registration
pub trait HeroEnvironment {
    /// Current scroll offset and viewport height
    fn snapshot(&self) -> EnvironmentSnapshot;

    /// Hero container geometry, `None` while it is not attached
    fn container(&self) -> Option<ContainerGeometry>;

    /// Accessibility preference; the tracker reads it once at mount
    fn prefers_reduced_motion(&self) -> bool;

    /// Start reporting visibility of the sentinels for lines `0..line_count`
    fn observe_sentinels(&mut self, config: &ObserverConfig, line_count: usize) -> ObserverId;

    /// Stop a visibility observer
    fn disconnect_observer(&mut self, id: ObserverId);

    /// Start delivering scroll events
    fn add_scroll_listener(&mut self, options: ListenerOptions) -> ListenerId;

    /// Stop delivering scroll events to a listener
    fn remove_scroll_listener(&mut self, id: ListenerId);
}

/// Both registrations held while observing, released together
#[derive(Debug, PartialEq, Eq)]
pub struct Registrations {
    observer: ObserverId,
    listener: ListenerId,
}

impl Registrations {
    /// Register the observer and the scroll listener
    pub fn acquire<E: HeroEnvironment + ?Sized>(
        env: &mut E,
        config: &ObserverConfig,
        line_count: usize,
    ) -> Self {
        let observer = env.observe_sentinels(config, line_count);
        let listener = env.add_scroll_listener(ListenerOptions::default());
        Self { observer, listener }
    }

    /// Deregister both sources
    pub fn release<E: HeroEnvironment + ?Sized>(self, env: &mut E) {
        env.disconnect_observer(self.observer);
        env.remove_scroll_listener(self.listener);
    }

    pub fn observer(&self) -> ObserverId {
        self.observer
    }

    pub fn listener(&self) -> ListenerId {
        self.listener
    }
}
