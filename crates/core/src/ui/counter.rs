//! Animated counter easing

use std::time::Duration;

use marketfeed_domain::compact_count;

/// `1 - (1 - p)^4`, decelerating towards the end
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Counts from zero up to `target` over `duration`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u64,
    duration: Duration,
}

impl CounterAnimation {
    pub fn new(target: u64, duration: Duration) -> Self {
        Self { target, duration }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Displayed value after `elapsed`: `floor(ease(t / d) * target)`
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        let progress = self.progress(elapsed);
        if progress >= 1.0 {
            return self.target;
        }
        let value = (ease_out_quart(progress) * self.target as f64).floor();
        (value as u64).min(self.target)
    }

    /// Compact label after `elapsed`
    pub fn label_at(&self, elapsed: Duration) -> String {
        compact_count(self.value_at(elapsed))
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}
