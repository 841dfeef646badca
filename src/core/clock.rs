//! Countdown arithmetic
//!
//! The clock is a value: an anchor instant plus a duration. It owns no
//! timers and does no I/O; the caller polls it with its own notion of
//! "now" on every redraw tick.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub(crate) struct CountdownClock {
    anchor: Instant,
    duration: Duration,
}

impl CountdownClock {
    /// Anchor the countdown at the current instant.
    pub(crate) fn start(duration: Duration) -> Self {
        Self::anchored_at(Instant::now(), duration)
    }

    pub(crate) fn anchored_at(anchor: Instant, duration: Duration) -> Self {
        CountdownClock { anchor, duration }
    }

    pub(crate) fn duration(&self) -> Duration {
        self.duration
    }

    /// Time left at `now`, clamped to zero. Never negative, even if `now`
    /// somehow precedes the anchor.
    pub(crate) fn remaining(&self, now: Instant) -> Duration {
        self.duration
            .saturating_sub(now.saturating_duration_since(self.anchor))
    }

    pub(crate) fn is_complete(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }
}

/// "MM:SS" with plain div/mod arithmetic: a 90-minute countdown renders
/// as "90:00", not a clock-of-day wraparound.
pub(crate) fn format_mmss(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_is_duration_minus_elapsed() {
        let anchor = Instant::now();
        let clock = CountdownClock::anchored_at(anchor, Duration::from_secs(1500));
        for elapsed in [0u64, 1, 60, 1499, 1500, 1501, 9000] {
            let now = anchor + Duration::from_secs(elapsed);
            let expected = 1500u64.saturating_sub(elapsed);
            assert_eq!(clock.remaining(now), Duration::from_secs(expected));
        }
    }

    #[test]
    fn remaining_never_negative() {
        let anchor = Instant::now();
        let clock = CountdownClock::anchored_at(anchor, Duration::from_secs(5));
        let now = anchor + Duration::from_secs(3600);
        assert_eq!(clock.remaining(now), Duration::ZERO);
    }

    #[test]
    fn zero_duration_is_complete_immediately() {
        let anchor = Instant::now();
        let clock = CountdownClock::anchored_at(anchor, Duration::ZERO);
        assert!(clock.is_complete(anchor));
    }

    #[test]
    fn complete_exactly_when_remaining_hits_zero() {
        let anchor = Instant::now();
        let clock = CountdownClock::anchored_at(anchor, Duration::from_secs(10));
        assert!(!clock.is_complete(anchor + Duration::from_millis(9_999)));
        assert!(clock.is_complete(anchor + Duration::from_secs(10)));
    }

    #[test]
    fn completion_is_monotonic() {
        let anchor = Instant::now();
        let clock = CountdownClock::anchored_at(anchor, Duration::from_secs(10));
        let mut seen_complete = false;
        for elapsed_ms in (0u64..30_000).step_by(700) {
            let now = anchor + Duration::from_millis(elapsed_ms);
            let complete = clock.is_complete(now);
            if seen_complete {
                assert!(complete, "completion regressed at {elapsed_ms}ms");
            }
            seen_complete = complete;
        }
        assert!(seen_complete);
    }

    #[test]
    fn format_pads_and_never_wraps() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(5), "00:05");
        assert_eq!(format_mmss(125), "02:05");
        assert_eq!(format_mmss(1500), "25:00");
        assert_eq!(format_mmss(5400), "90:00");
    }
}
