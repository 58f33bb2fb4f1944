//! Emphasis timing for the active line
//!
//! The tracker publishes the active index; this records when it last
//! changed so emoji emphasis can be staggered from that moment.

use std::time::{Duration, Instant};

use tokio::sync::watch;

/// Follows the tracker's published index
#[derive(Debug)]
pub struct EmphasisState {
    rx: watch::Receiver<usize>,
    active: usize,
    activated_at: Instant,
}

impl EmphasisState {
    pub fn new(rx: watch::Receiver<usize>) -> Self {
        let active = *rx.borrow();
        Self {
            rx,
            active,
            activated_at: Instant::now(),
        }
    }

    /// Pull the latest published index; true when it changed
    pub fn sync(&mut self) -> bool {
        match self.rx.has_changed() {
            Ok(true) => {
                let next = *self.rx.borrow_and_update();
                if next != self.active {
                    tracing::debug!(from = self.active, to = next, "Active hero line changed");
                    self.active = next;
                    self.activated_at = Instant::now();
                    return true;
                }
                false
            }
            // Sender dropped: keep the last value
            Ok(false) | Err(_) => false,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Time since the active line last changed
    pub fn elapsed(&self) -> Duration {
        self.activated_at.elapsed()
    }

    /// Whether an emphasis scheduled after `delay` has started
    pub fn has_started(&self, delay: Duration) -> bool {
        self.elapsed() >= delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_follows_sender() {
        let (tx, rx) = watch::channel(0usize);
        let mut emphasis = EmphasisState::new(rx);
        assert_eq!(emphasis.active(), 0);
        assert!(!emphasis.sync());

        tx.send(2).unwrap();
        assert!(emphasis.sync());
        assert_eq!(emphasis.active(), 2);
        assert!(emphasis.has_started(Duration::ZERO));
    }

    #[test]
    fn test_sender_dropped_keeps_value() {
        let (tx, rx) = watch::channel(1usize);
        let mut emphasis = EmphasisState::new(rx);
        drop(tx);
        assert!(!emphasis.sync());
        assert_eq!(emphasis.active(), 1);
    }
}
