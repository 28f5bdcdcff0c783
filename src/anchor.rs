//! Bounded retry schedule for scroll-to-anchor navigation.
//!
//! The target section may not exist yet when the fragment changes (images
//! and fonts can still be shifting layout), so the navigator polls for it
//! on a fixed interval with a capped attempt count. A target that never
//! appears is not an error; the schedule gives up silently.

/// Vertical gap reserved for the fixed header when scrolling a section
/// into view.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Delay between successive lookups of the target element.
pub const RETRY_INTERVAL_MS: u64 = 120;

/// Total lookups before a fragment is abandoned.
pub const MAX_ATTEMPTS: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryStep {
    /// Target resolved; scroll to it and stop polling.
    Scroll,
    /// Target absent, attempts remain; poll again.
    Wait,
    /// Attempts exhausted; stop polling without scrolling.
    GiveUp,
}

#[derive(Debug, Clone, Copy)]
pub struct AnchorRetry {
    remaining: u32,
}

impl AnchorRetry {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            remaining: max_attempts,
        }
    }

    pub fn step(&mut self, target_found: bool) -> RetryStep {
        if target_found {
            self.remaining = 0;
            return RetryStep::Scroll;
        }
        if self.remaining <= 1 {
            self.remaining = 0;
            return RetryStep::GiveUp;
        }
        self.remaining -= 1;
        RetryStep::Wait
    }
}

impl Default for AnchorRetry {
    fn default() -> Self {
        Self::new(MAX_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_target_scrolls_immediately() {
        let mut retry = AnchorRetry::new(5);
        assert_eq!(retry.step(true), RetryStep::Scroll);
    }

    #[test]
    fn test_late_target_scrolls_after_waits() {
        let mut retry = AnchorRetry::new(5);
        assert_eq!(retry.step(false), RetryStep::Wait);
        assert_eq!(retry.step(false), RetryStep::Wait);
        assert_eq!(retry.step(true), RetryStep::Scroll);
    }

    #[test]
    fn test_missing_target_exhausts_attempts() {
        let mut retry = AnchorRetry::new(3);
        assert_eq!(retry.step(false), RetryStep::Wait);
        assert_eq!(retry.step(false), RetryStep::Wait);
        assert_eq!(retry.step(false), RetryStep::GiveUp);
        // stays exhausted
        assert_eq!(retry.step(false), RetryStep::GiveUp);
    }

    #[test]
    fn test_fresh_schedule_restores_attempts() {
        let mut retry = AnchorRetry::new(2);
        retry.step(false);
        retry.step(false);
        assert_eq!(retry.step(false), RetryStep::GiveUp);
        retry = AnchorRetry::new(2);
        assert_eq!(retry.step(false), RetryStep::Wait);
    }
}
