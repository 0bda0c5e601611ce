//! Automation run parameters.

use std::time::Duration;

/// Tunables for one automation run. Immutable for the run's lifetime.
#[derive(Debug, Clone)]
pub struct AutomationConfig {
    /// Base delay between video-region polls. The actual delay is
    /// randomized around this value, floored at 500ms.
    pub poll_interval: Duration,
    /// Frame-difference MSE below which a poll counts as static.
    pub static_frame_threshold: f64,
    /// Consecutive static polls required before checking for completion.
    pub required_static_polls: u32,
    /// Close-region MSE above which the video is judged finished rather
    /// than blocked by a quiz popup.
    pub close_change_threshold: f64,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
            static_frame_threshold: 1.0,
            required_static_polls: 3,
            close_change_threshold: 100.0,
        }
    }
}

/// How to recover from a transient failure inside the loop.
#[derive(Debug, Clone)]
pub struct BackoffPolicy {
    pub delay: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(3),
        }
    }
}
