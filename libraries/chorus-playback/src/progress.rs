//! Scrub tracking for the seek control
//!
//! While the user drags the seek control, the locally-held position takes
//! precedence over engine progress ticks so the displayed position does not
//! jump backward under their finger. On release the pending value is
//! committed with a single seek.

use std::time::Duration;

/// Tracks an in-progress scrub (drag) of the seek control
#[derive(Debug, Clone, Default)]
pub struct ScrubTracker {
    active: bool,
    position: Duration,
}

impl ScrubTracker {
    /// Create an inactive tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a scrub at the given position
    pub fn begin(&mut self, position: Duration) {
        self.active = true;
        self.position = position;
    }

    /// Move the scrub target; ignored when no scrub is active
    pub fn update(&mut self, position: Duration) {
        if self.active {
            self.position = position;
        }
    }

    /// End the scrub, returning the position to commit
    ///
    /// Returns `None` if no scrub was active.
    pub fn finish(&mut self) -> Option<Duration> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(self.position)
    }

    /// Abandon any in-progress scrub without committing
    pub fn reset(&mut self) {
        self.active = false;
        self.position = Duration::ZERO;
    }

    /// Whether a scrub is in progress
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The held position, while a scrub is active
    pub fn position(&self) -> Option<Duration> {
        self.active.then_some(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_ignored_when_inactive() {
        let mut scrub = ScrubTracker::new();
        scrub.update(Duration::from_secs(10));
        assert!(scrub.position().is_none());
        assert!(scrub.finish().is_none());
    }

    #[test]
    fn held_position_survives_until_finish() {
        let mut scrub = ScrubTracker::new();
        scrub.begin(Duration::from_secs(30));
        scrub.update(Duration::from_secs(45));
        assert_eq!(scrub.position(), Some(Duration::from_secs(45)));

        assert_eq!(scrub.finish(), Some(Duration::from_secs(45)));
        assert!(!scrub.is_active());
        // A second finish commits nothing
        assert!(scrub.finish().is_none());
    }

    #[test]
    fn reset_discards_pending_value() {
        let mut scrub = ScrubTracker::new();
        scrub.begin(Duration::from_secs(12));
        scrub.reset();
        assert!(scrub.finish().is_none());
    }
}
