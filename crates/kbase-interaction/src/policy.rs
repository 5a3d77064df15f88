//! Response policies for the mock answering service.

use kbase_core::ResponsePolicy;
use kbase_core::config::ServiceSettings;
use rand::Rng;
use std::time::Duration;

/// Draws latency uniformly from `[min, max)` and fails with a fixed
/// probability on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomResponsePolicy {
    min_latency: Duration,
    max_latency: Duration,
    failure_rate: f64,
}

impl RandomResponsePolicy {
    /// Creates a policy. Bounds are swapped if given in reverse and the
    /// failure rate is clamped to [0, 1] (NaN counts as 0).
    pub fn new(min_latency: Duration, max_latency: Duration, failure_rate: f64) -> Self {
        let (min_latency, max_latency) = if min_latency <= max_latency {
            (min_latency, max_latency)
        } else {
            (max_latency, min_latency)
        };
        Self {
            min_latency,
            max_latency,
            failure_rate: if failure_rate.is_nan() {
                0.0
            } else {
                failure_rate.clamp(0.0, 1.0)
            },
        }
    }

    pub fn from_settings(settings: &ServiceSettings) -> Self {
        Self::new(
            Duration::from_millis(settings.min_latency_ms),
            Duration::from_millis(settings.max_latency_ms),
            settings.failure_rate,
        )
    }
}

impl Default for RandomResponsePolicy {
    fn default() -> Self {
        Self::from_settings(&ServiceSettings::default())
    }
}

impl ResponsePolicy for RandomResponsePolicy {
    fn latency(&self) -> Duration {
        if self.min_latency == self.max_latency {
            return self.min_latency;
        }
        rand::thread_rng().gen_range(self.min_latency..self.max_latency)
    }

    fn should_fail(&self) -> bool {
        rand::thread_rng().gen_bool(self.failure_rate)
    }
}

/// Always returns the same latency and failure decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedResponsePolicy {
    latency: Duration,
    fail: bool,
}

impl FixedResponsePolicy {
    pub fn new(latency: Duration, fail: bool) -> Self {
        Self { latency, fail }
    }

    /// Answers immediately, never fails.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, false)
    }

    /// Fails immediately on every call.
    pub fn failing() -> Self {
        Self::new(Duration::ZERO, true)
    }
}

impl ResponsePolicy for FixedResponsePolicy {
    fn latency(&self) -> Duration {
        self.latency
    }

    fn should_fail(&self) -> bool {
        self.fail
    }
}
