use std::time::{Duration, Instant};

/// Cancellable repeating timer that rate-limits ticks.
///
/// The scheduler never queues: when polled late it fires once and restarts
/// its baseline from the poll instant, so a slow frame or a pause cannot
/// produce a burst of catch-up ticks.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickScheduler {
    interval: Duration,
    baseline: Option<Instant>,
}

impl TickScheduler {
    /// Creates a disarmed scheduler.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            baseline: None,
        }
    }

    /// Starts counting a fresh interval from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.baseline = Some(now);
    }

    /// Drops any pending tick; `poll` returns false until re-armed.
    pub fn cancel(&mut self) {
        self.baseline = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.baseline.is_some()
    }

    /// Replaces the interval; the current baseline is kept.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when a tick is due at `now`, and restarts the interval.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(baseline) = self.baseline else {
            return false;
        };

        if now.saturating_duration_since(baseline) < self.interval {
            return false;
        }

        self.baseline = Some(now);
        true
    }

    /// Time left until the next tick, or `None` when disarmed.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        let baseline = self.baseline?;
        Some(
            self.interval
                .saturating_sub(now.saturating_duration_since(baseline)),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::TickScheduler;

    #[test]
    fn disarmed_scheduler_never_fires() {
        let now = Instant::now();
        let mut scheduler = TickScheduler::new(Duration::from_millis(100));

        assert!(!scheduler.poll(now + Duration::from_secs(10)));
        assert_eq!(scheduler.time_until_due(now), None);
    }

    #[test]
    fn fires_once_interval_has_elapsed() {
        let start = Instant::now();
        let mut scheduler = TickScheduler::new(Duration::from_millis(100));
        scheduler.arm(start);

        assert!(!scheduler.poll(start + Duration::from_millis(99)));
        assert!(scheduler.poll(start + Duration::from_millis(100)));
        assert!(!scheduler.poll(start + Duration::from_millis(150)));
        assert!(scheduler.poll(start + Duration::from_millis(200)));
    }

    #[test]
    fn late_poll_does_not_catch_up() {
        let start = Instant::now();
        let mut scheduler = TickScheduler::new(Duration::from_millis(100));
        scheduler.arm(start);

        let late = start + Duration::from_millis(1_000);
        assert!(scheduler.poll(late));
        assert!(!scheduler.poll(late));
        assert!(!scheduler.poll(late + Duration::from_millis(50)));
    }

    #[test]
    fn cancel_stops_pending_tick() {
        let start = Instant::now();
        let mut scheduler = TickScheduler::new(Duration::from_millis(100));
        scheduler.arm(start);

        scheduler.cancel();

        assert!(!scheduler.is_armed());
        assert!(!scheduler.poll(start + Duration::from_millis(500)));
    }

    #[test]
    fn shorter_interval_applies_to_current_baseline() {
        let start = Instant::now();
        let mut scheduler = TickScheduler::new(Duration::from_millis(150));
        scheduler.arm(start);

        scheduler.set_interval(Duration::from_millis(70));

        assert_eq!(
            scheduler.time_until_due(start + Duration::from_millis(20)),
            Some(Duration::from_millis(50))
        );
        assert!(scheduler.poll(start + Duration::from_millis(70)));
    }
}
