//! Active-line tracker
//!
//! Lifecycle:
//! - `Unmounted` until [`ActiveLineTracker::mount`] runs
//! - `Detached` when the container was absent at mount (no observation)
//! - `Disabled` when reduced motion was requested (index pinned to the last line)
//! - `Observing` while scroll and visibility events drive the index
//! - `Stopped` after [`ActiveLineTracker::unmount`]
//!
//! Only `Observing` reacts to events. The published index lives in a watch
//! channel whose only sender is the tracker.

use serde::Serialize;
use tokio::sync::watch;

use super::band::ObserverConfig;
use super::environment::{HeroEnvironment, Registrations};
use super::geometry::{ScrollState, ViewportState, VisibilityReading};
use super::line::HeroLines;
use super::signal::{compute_active_index, ActiveDecision};

/// Tracker lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerState {
    Unmounted,
    Detached,
    Disabled,
    Observing,
    Stopped,
}

impl TrackerState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TrackerState::Disabled | TrackerState::Stopped)
    }
}

/// Derives and publishes which hero line is emphasized
#[derive(Debug)]
pub struct ActiveLineTracker {
    line_count: usize,
    config: ObserverConfig,
    state: TrackerState,
    registrations: Option<Registrations>,
    active: watch::Sender<usize>,
    last_decision: Option<ActiveDecision>,
}

impl ActiveLineTracker {
    /// Create an unmounted tracker with the default observer configuration
    pub fn new(lines: &HeroLines) -> Self {
        Self::with_config(lines, ObserverConfig::default())
    }

    pub fn with_config(lines: &HeroLines, config: ObserverConfig) -> Self {
        let (active, _) = watch::channel(0);
        Self {
            line_count: lines.len(),
            config,
            state: TrackerState::Unmounted,
            registrations: None,
            active,
            last_decision: None,
        }
    }

    /// Current active line index
    pub fn active_index(&self) -> usize {
        *self.active.borrow()
    }

    /// Observe every change of the active index
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.active.subscribe()
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn config(&self) -> &ObserverConfig {
        &self.config
    }

    /// Outcome of the most recent recomputation, if any ran
    pub fn last_decision(&self) -> Option<ActiveDecision> {
        self.last_decision
    }

    /// Registrations currently held (only while observing)
    pub fn registrations(&self) -> Option<&Registrations> {
        self.registrations.as_ref()
    }

    /// Start tracking.
    ///
    /// An absent container makes this a no-op mount. Reduced motion pins
    /// the last line for good. Otherwise both event sources are registered
    /// and the scroll-position signal is evaluated once right away.
    pub fn mount<E: HeroEnvironment + ?Sized>(&mut self, env: &mut E) {
        if self.state != TrackerState::Unmounted {
            tracing::warn!(state = ?self.state, "Ignoring mount of an already mounted tracker");
            return;
        }

        if env.container().is_none() {
            tracing::debug!("Hero container not attached; tracker left detached");
            self.state = TrackerState::Detached;
            return;
        }

        if env.prefers_reduced_motion() {
            self.publish(self.line_count - 1);
            self.state = TrackerState::Disabled;
            tracing::info!(
                active = self.line_count - 1,
                "Reduced motion preferred; hero tracking disabled"
            );
            return;
        }

        self.registrations = Some(Registrations::acquire(env, &self.config, self.line_count));
        self.state = TrackerState::Observing;
        tracing::info!(lines = self.line_count, "Hero tracking started");

        self.handle_scroll(env);
    }

    /// React to a raw scroll event
    pub fn handle_scroll<E: HeroEnvironment + ?Sized>(
        &mut self,
        env: &E,
    ) -> Option<ActiveDecision> {
        self.recompute(&[], env)
    }

    /// React to a batch of visibility reports
    pub fn handle_visibility<E: HeroEnvironment + ?Sized>(
        &mut self,
        readings: &[VisibilityReading],
        env: &E,
    ) -> Option<ActiveDecision> {
        self.recompute(readings, env)
    }

    /// Stop tracking and release both event sources
    pub fn unmount<E: HeroEnvironment + ?Sized>(&mut self, env: &mut E) {
        if let Some(registrations) = self.registrations.take() {
            registrations.release(env);
            tracing::info!("Hero tracking stopped");
        }
        self.state = TrackerState::Stopped;
    }

    fn recompute<E: HeroEnvironment + ?Sized>(
        &mut self,
        readings: &[VisibilityReading],
        env: &E,
    ) -> Option<ActiveDecision> {
        if self.state != TrackerState::Observing {
            return None;
        }
        let Some(container) = env.container() else {
            tracing::debug!("Hero container detached; keeping active line");
            return None;
        };

        let snapshot = env.snapshot();
        let decision = compute_active_index(
            readings,
            &ScrollState::new(&snapshot, &container),
            &ViewportState::from(&snapshot),
            self.line_count,
        );
        tracing::debug!(
            scroll_y = snapshot.scroll_y,
            readings = readings.len(),
            index = decision.index,
            source = ?decision.source,
            "Recomputed active line"
        );

        self.last_decision = Some(decision);
        self.publish(decision.index);
        Some(decision)
    }

    fn publish(&self, index: usize) {
        self.active.send_if_modified(|current| {
            if *current == index {
                false
            } else {
                *current = index;
                true
            }
        });
    }
}

impl Drop for ActiveLineTracker {
    fn drop(&mut self) {
        if self.registrations.is_some() {
            tracing::warn!("Hero tracker dropped while observing; call unmount first");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::environment::{ListenerId, ListenerOptions, ObserverId};
    use crate::hero::geometry::{BoundingRect, ContainerGeometry, EnvironmentSnapshot};

    /// Hand-driven environment: geometry is set directly by the test
    #[derive(Default)]
    struct FakeEnv {
        scroll_y: f64,
        viewport_height: f64,
        container: Option<ContainerGeometry>,
        reduced_motion: bool,
        observers: Vec<ObserverId>,
        listeners: Vec<ListenerId>,
        next_id: u64,
    }

    impl FakeEnv {
        fn attached() -> Self {
            Self {
                viewport_height: 800.0,
                container: Some(ContainerGeometry {
                    top: 1000.0,
                    height: 4000.0,
                }),
                ..Default::default()
            }
        }
    }

    impl HeroEnvironment for FakeEnv {
        fn snapshot(&self) -> EnvironmentSnapshot {
            EnvironmentSnapshot {
                scroll_y: self.scroll_y,
                viewport_height: self.viewport_height,
            }
        }

        fn container(&self) -> Option<ContainerGeometry> {
            self.container
        }

        fn prefers_reduced_motion(&self) -> bool {
            self.reduced_motion
        }

        fn observe_sentinels(&mut self, _config: &ObserverConfig, _count: usize) -> ObserverId {
            self.next_id += 1;
            let id = ObserverId(self.next_id);
            self.observers.push(id);
            id
        }

        fn disconnect_observer(&mut self, id: ObserverId) {
            self.observers.retain(|o| *o != id);
        }

        fn add_scroll_listener(&mut self, options: ListenerOptions) -> ListenerId {
            assert!(options.passive);
            self.next_id += 1;
            let id = ListenerId(self.next_id);
            self.listeners.push(id);
            id
        }

        fn remove_scroll_listener(&mut self, id: ListenerId) {
            self.listeners.retain(|l| *l != id);
        }
    }

    fn lines(n: usize) -> HeroLines {
        HeroLines::from_texts((0..n).map(|i| format!("line {i}"))).unwrap()
    }

    fn visible(line: usize, top: f64) -> VisibilityReading {
        VisibilityReading {
            line,
            is_intersecting: true,
            ratio: 1.0,
            rect: BoundingRect::new(top, 160.0),
        }
    }

    #[test]
    fn test_mount_registers_and_evaluates_scroll() {
        let mut env = FakeEnv::attached();
        env.scroll_y = 3000.0;
        let mut tracker = ActiveLineTracker::new(&lines(4));

        tracker.mount(&mut env);

        assert_eq!(tracker.state(), TrackerState::Observing);
        assert_eq!(env.observers.len(), 1);
        assert_eq!(env.listeners.len(), 1);
        // Initial synchronous evaluation already ran
        assert_eq!(tracker.active_index(), 2);

        tracker.unmount(&mut env);
    }

    #[test]
    fn test_reduced_motion_pins_last_line() {
        let mut env = FakeEnv::attached();
        env.reduced_motion = true;
        let mut tracker = ActiveLineTracker::new(&lines(4));

        tracker.mount(&mut env);
        assert_eq!(tracker.state(), TrackerState::Disabled);
        assert_eq!(tracker.active_index(), 3);
        assert!(env.observers.is_empty());
        assert!(env.listeners.is_empty());

        env.scroll_y = 1000.0;
        assert!(tracker.handle_scroll(&env).is_none());
        assert!(tracker
            .handle_visibility(&[visible(0, 320.0)], &env)
            .is_none());
        assert_eq!(tracker.active_index(), 3);
    }

    #[test]
    fn test_absent_container_is_noop_mount() {
        let mut env = FakeEnv {
            viewport_height: 800.0,
            reduced_motion: true,
            ..Default::default()
        };
        let mut tracker = ActiveLineTracker::new(&lines(3));

        tracker.mount(&mut env);
        assert_eq!(tracker.state(), TrackerState::Detached);
        assert_eq!(tracker.active_index(), 0);
        assert!(env.observers.is_empty());
        assert!(tracker.handle_scroll(&env).is_none());
    }

    #[test]
    fn test_visibility_overrides_scroll_signal() {
        let mut env = FakeEnv::attached();
        env.scroll_y = 3000.0;
        let mut tracker = ActiveLineTracker::new(&lines(4));
        tracker.mount(&mut env);

        let decision = tracker.handle_visibility(&[visible(0, 320.0)], &env);
        assert_eq!(decision.map(|d| d.index), Some(0));
        assert_eq!(tracker.active_index(), 0);

        // Empty batch falls back to scroll position
        tracker.handle_visibility(&[], &env);
        assert_eq!(tracker.active_index(), 2);

        tracker.unmount(&mut env);
    }

    #[test]
    fn test_unmount_releases_and_freezes() {
        let mut env = FakeEnv::attached();
        env.scroll_y = 3000.0;
        let mut tracker = ActiveLineTracker::new(&lines(4));
        tracker.mount(&mut env);
        tracker.unmount(&mut env);

        assert_eq!(tracker.state(), TrackerState::Stopped);
        assert!(env.observers.is_empty());
        assert!(env.listeners.is_empty());

        env.scroll_y = 4900.0;
        assert!(tracker.handle_scroll(&env).is_none());
        assert!(tracker
            .handle_visibility(&[visible(3, 320.0)], &env)
            .is_none());
        assert_eq!(tracker.active_index(), 2);
    }

    #[test]
    fn test_subscribers_see_changes() {
        let mut env = FakeEnv::attached();
        let mut tracker = ActiveLineTracker::new(&lines(4));
        let mut rx = tracker.subscribe();
        tracker.mount(&mut env);

        // Still at 0 after the initial evaluation
        assert!(!rx.has_changed().unwrap());

        env.scroll_y = 4000.0;
        tracker.handle_scroll(&env);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 3);

        tracker.unmount(&mut env);
    }

    #[test]
    fn test_index_always_in_range() {
        let mut env = FakeEnv::attached();
        let mut tracker = ActiveLineTracker::new(&lines(5));
        tracker.mount(&mut env);

        for step in -20..200 {
            env.scroll_y = step as f64 * 50.0;
            tracker.handle_scroll(&env);
            assert!(tracker.active_index() < 5);
        }
        tracker.handle_visibility(&[visible(42, 320.0)], &env);
        assert!(tracker.active_index() < 5);

        tracker.unmount(&mut env);
    }

    #[test]
    fn test_second_mount_ignored() {
        let mut env = FakeEnv::attached();
        let mut tracker = ActiveLineTracker::new(&lines(2));
        tracker.mount(&mut env);
        tracker.mount(&mut env);
        assert_eq!(env.observers.len(), 1);
        tracker.unmount(&mut env);
    }
}
