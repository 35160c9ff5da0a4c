use std::time::Duration;

use bevy::prelude::*;

/// Holds the latest resize until no newer one has arrived for `quiet`.
/// A zero quiet period releases every size on the next poll.
#[derive(Resource, Debug, Clone, Default)]
pub struct ResizeDebouncer {
    quiet: Duration,
    pending: Option<(UVec2, Duration)>,
}

impl ResizeDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record a size seen at `now`, replacing any pending one.
    pub fn push(&mut self, size: UVec2, now: Duration) {
        self.pending = Some((size, now));
    }

    /// The pending size once it has been quiet long enough.
    pub fn poll(&mut self, now: Duration) -> Option<UVec2> {
        let (size, seen_at) = self.pending?;
        if now.saturating_sub(seen_at) >= self.quiet {
            self.pending = None;
            Some(size)
        } else {
            None
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
