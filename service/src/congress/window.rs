//! Sliding-window admission state for the upstream request budget.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Ordered timestamps of successfully issued calls inside the rolling
/// window.
///
/// The structure itself is single-threaded; the executor wraps it in a
/// mutex so the prune-check and record steps stay atomic on a
/// multi-threaded runtime. All methods take `now` explicitly, which keeps
/// the window clock-free and lets tests walk time forward.
#[derive(Debug)]
pub struct AdmissionWindow {
    events: VecDeque<Instant>,
    max_requests: usize,
    window: Duration,
}

impl AdmissionWindow {
    #[must_use]
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            events: VecDeque::with_capacity(max_requests.min(1024)),
            max_requests,
            window,
        }
    }

    /// Prune timestamps older than `now - window` and report whether
    /// another call may be admitted.
    pub fn admit(&mut self, now: Instant) -> bool {
        self.prune(now);
        self.events.len() < self.max_requests
    }

    /// Record a successfully completed call at `now`.
    pub fn record(&mut self, now: Instant) {
        self.events.push_back(now);
    }

    /// Number of recorded calls currently inside the window.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub const fn max_requests(&self) -> usize {
        self.max_requests
    }

    fn prune(&mut self, now: Instant) {
        while let Some(oldest) = self.events.front() {
            if now.duration_since(*oldest) >= self.window {
                self.events.pop_front();
            } else {
                break;
            }
        }
    }
}
