use std::time::{Duration, Instant};

/// Fraction of `duration` covered by `elapsed`, clamped to `0.0..=1.0`.
#[must_use]
pub fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

#[must_use]
pub fn ease_out(progress: f32) -> f32 {
    let inv = 1.0 - progress.clamp(0.0, 1.0);
    1.0 - inv * inv
}

#[must_use]
pub fn ease_in_out(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let inv = 1.0 - t;
        1.0 - 2.0 * inv * inv
    }
}

/// Wall-clock animation timer anchored at a start instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectTimer {
    started_at: Instant,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub fn new(started_at: Instant, duration: Duration) -> Self {
        Self {
            started_at,
            duration,
        }
    }

    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        normalized_progress(now.saturating_duration_since(self.started_at), self.duration)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    #[must_use]
    pub fn finishes_at(&self) -> Instant {
        self.started_at + self.duration
    }
}
