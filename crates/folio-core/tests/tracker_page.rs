//! Tracker driven end to end by the simulated page

use folio_core::hero::{
    ActiveLineTracker, HeroEnvironment, HeroLines, PageLayout, SignalSource, SimulatedPage,
    TrackerState,
};
use folio_core::HeroConfig;

const VIEWPORT: f64 = 1000.0;

fn setup(reduced_motion: bool) -> (SimulatedPage, ActiveLineTracker) {
    let lines = HeroConfig::default().hero_lines().unwrap();
    let page = SimulatedPage::new(lines.len(), VIEWPORT, PageLayout::default())
        .with_reduced_motion(reduced_motion);
    let tracker = ActiveLineTracker::new(&lines);
    (page, tracker)
}

#[test]
fn test_initial_state_before_interaction() {
    let (mut page, mut tracker) = setup(false);
    tracker.mount(&mut page);

    assert_eq!(tracker.state(), TrackerState::Observing);
    assert_eq!(page.listener_count(), 1);
    assert_eq!(page.observer_count(), 1);
    assert_eq!(tracker.active_index(), 0);
    assert_eq!(
        tracker.last_decision().map(|d| d.source),
        Some(SignalSource::TopGuard)
    );

    // Initial visibility reports: only the first sentinel sits in the band
    let events = page.flush();
    let decision = events.dispatch(&mut tracker, &page).unwrap();
    assert_eq!(decision.index, 0);
    assert_eq!(decision.source, SignalSource::Visibility);

    tracker.unmount(&mut page);
}

#[test]
fn test_centered_sentinel_beats_scroll_position() {
    let (mut page, mut tracker) = setup(false);
    tracker.mount(&mut page);
    page.flush().dispatch(&mut tracker, &page);

    // Center the third sentinel in the viewport
    let rect = page.sentinel_document_rect(2);
    let events = page.scroll_to(rect.center() - VIEWPORT / 2.0);
    assert!(events.scrolled);
    events.dispatch(&mut tracker, &page);

    // Scroll position alone would give line 1 here
    assert_eq!(tracker.active_index(), 2);
    assert_eq!(
        tracker.last_decision().map(|d| d.source),
        Some(SignalSource::Visibility)
    );

    tracker.unmount(&mut page);
}

#[test]
fn test_bottom_and_back_to_top() {
    let (mut page, mut tracker) = setup(false);
    tracker.mount(&mut page);
    page.flush().dispatch(&mut tracker, &page);

    let max = page.max_scroll();
    page.scroll_to(max).dispatch(&mut tracker, &page);
    assert_eq!(tracker.active_index(), 3);

    page.scroll_to(0.0).dispatch(&mut tracker, &page);
    assert_eq!(tracker.active_index(), 0);

    tracker.unmount(&mut page);
}

#[test]
fn test_sweep_stays_in_range() {
    let (mut page, mut tracker) = setup(false);
    let mut rx = tracker.subscribe();
    tracker.mount(&mut page);
    page.flush().dispatch(&mut tracker, &page);

    let mut seen = std::collections::BTreeSet::new();
    let mut y = 0.0;
    while y <= page.max_scroll() {
        page.scroll_to(y).dispatch(&mut tracker, &page);
        assert!(tracker.active_index() < 4);
        seen.insert(tracker.active_index());
        y += 25.0;
    }
    // Every line gets its turn on the way down
    assert_eq!(seen.len(), 4);
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), tracker.active_index());

    tracker.unmount(&mut page);
}

#[test]
fn test_reduced_motion_never_moves() {
    let (mut page, mut tracker) = setup(true);
    tracker.mount(&mut page);
    assert_eq!(tracker.state(), TrackerState::Disabled);
    assert_eq!(tracker.active_index(), 3);
    assert_eq!(page.listener_count(), 0);

    for y in [0.0, 500.0, 1500.0, 0.0] {
        let events = page.scroll_to(y);
        assert!(events.is_empty());
        events.dispatch(&mut tracker, &page);
        assert_eq!(tracker.active_index(), 3);
    }
}

#[test]
fn test_events_after_unmount_are_ignored() {
    let (mut page, mut tracker) = setup(false);
    tracker.mount(&mut page);
    page.flush().dispatch(&mut tracker, &page);
    tracker.unmount(&mut page);

    assert_eq!(page.listener_count(), 0);
    assert_eq!(page.observer_count(), 0);

    let events = page.scroll_to(page.max_scroll());
    assert!(events.is_empty());

    // Even a stray delivery does not move the index
    let snapshot_before = tracker.active_index();
    assert!(tracker.handle_scroll(&page).is_none());
    assert_eq!(tracker.active_index(), snapshot_before);
}

#[test]
fn test_detached_container_mount_is_noop() {
    let lines = HeroLines::from_texts(["only"]).unwrap();
    let mut page = SimulatedPage::new(1, VIEWPORT, PageLayout::default());
    page.set_attached(false);
    let mut tracker = ActiveLineTracker::new(&lines);

    tracker.mount(&mut page);
    assert_eq!(tracker.state(), TrackerState::Detached);
    assert_eq!(page.observer_count(), 0);
    assert!(page.container().is_none());
    assert_eq!(tracker.active_index(), 0);

    tracker.unmount(&mut page);
    assert_eq!(tracker.state(), TrackerState::Stopped);
}
