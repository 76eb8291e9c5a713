//! Count-up animation for statistic figures

use std::time::Duration;

use crate::easing::exponential_ease_out;
use crate::timing::progress;

/// Counts from 0 up to `target` with an exponential ease-out
///
/// The counter plays once: later calls to [`SmoothCounter::start`] are
/// ignored.
#[derive(Debug, Clone)]
pub struct SmoothCounter {
    target: u64,
    duration: Duration,
    delay: Duration,
    started_at: Option<Duration>,
}

impl SmoothCounter {
    pub fn new(target: u64, duration: Duration, delay: Duration) -> Self {
        Self {
            target,
            duration,
            delay,
            started_at: None,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Begin counting at clock value `now`
    pub fn start(&mut self, now: Duration) {
        if self.started_at.is_none() {
            self.started_at = Some(now + self.delay);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        self.started_at
            .is_some_and(|start| now.saturating_sub(start) >= self.duration)
    }

    /// Displayed value at clock value `now`
    pub fn value_at(&self, now: Duration) -> u64 {
        let Some(start) = self.started_at else {
            return 0;
        };
        if now < start {
            return 0;
        }
        if self.is_finished(now) {
            return self.target;
        }
        let p = progress(now - start, self.duration);
        (exponential_ease_out(p) * self.target as f64).floor() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_zero_until_started_and_delayed() {
        let mut counter = SmoothCounter::new(150, ms(2000), ms(500));
        assert_eq!(counter.value_at(ms(1000)), 0);

        counter.start(ms(0));
        assert_eq!(counter.value_at(ms(400)), 0);
        assert!(counter.value_at(ms(1000)) > 0);
    }

    #[test]
    fn test_ease_out_expo_is_front_loaded() {
        let mut counter = SmoothCounter::new(100, ms(1000), Duration::ZERO);
        counter.start(ms(0));

        // 1 - 2^-5 = 0.96875
        assert_eq!(counter.value_at(ms(500)), 96);
        assert!(counter.value_at(ms(100)) >= 50);
    }

    #[test]
    fn test_reaches_target_exactly() {
        let mut counter = SmoothCounter::new(98, ms(1000), Duration::ZERO);
        counter.start(ms(0));
        assert!(counter.value_at(ms(999)) < 98);
        assert_eq!(counter.value_at(ms(1000)), 98);
        assert_eq!(counter.value_at(ms(5000)), 98);
        assert!(counter.is_finished(ms(1000)));
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut counter = SmoothCounter::new(10, ms(1000), Duration::ZERO);
        counter.start(ms(0));
        counter.start(ms(800));
        assert_eq!(counter.value_at(ms(1000)), 10);
    }
}
