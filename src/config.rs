//! Engine tuning knobs and the speed-to-interval mapping.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Slowest accepted speed slider position.
pub const SPEED_MIN: u32 = 1;
/// Fastest accepted speed slider position.
pub const SPEED_MAX: u32 = 100;
/// Speed used by callers that do not care (middle of the slider).
pub const DEFAULT_SPEED: u32 = 50;

/// Fixed poll period for the pause loop and cancellation checks.
///
/// Bounds resume and cancel latency independently of the speed setting.
pub const DEFAULT_PAUSE_POLL: Duration = Duration::from_millis(25);

/// Configuration for the run scheduler.
///
/// All fields have sensible defaults; override selectively via the `with_*`
/// methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Poll period for pause/cancel observation. Default: 25 ms.
    pub pause_poll: Duration,

    /// Whether to invoke the audio-cue callback per step. Default: true.
    pub emit_cues: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pause_poll: DEFAULT_PAUSE_POLL,
            emit_cues: true,
        }
    }
}

impl EngineConfig {
    /// Override the pause/cancel poll period.
    #[must_use]
    pub fn with_pause_poll(mut self, pause_poll: Duration) -> Self {
        self.pause_poll = pause_poll;
        self
    }

    /// Enable or disable audio cues.
    #[must_use]
    pub fn with_cues(mut self, emit_cues: bool) -> Self {
        self.emit_cues = emit_cues;
        self
    }

    /// Check the configuration for contradictions.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when the poll period is zero (the pause loop would
    /// busy-spin).
    pub fn validate(&self) -> EngineResult<()> {
        if self.pause_poll.is_zero() {
            return Err(EngineError::InvalidConfig {
                detail: "pause_poll must be non-zero; 25ms bounds resume latency without spinning"
                    .to_owned(),
            });
        }
        Ok(())
    }
}

/// Inter-step interval for a speed slider position.
///
/// Monotonically decreasing in `speed`: position 1 waits 100 ms per step,
/// position 100 waits 1 ms. Out-of-range input is clamped.
#[must_use]
pub fn interval_for_speed(speed: u32) -> Duration {
    let clamped = speed.clamp(SPEED_MIN, SPEED_MAX);
    Duration::from_millis(u64::from(SPEED_MAX + 1 - clamped))
}
