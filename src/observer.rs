//! The renderer/audio boundary.
//!
//! The engine never draws or makes sound; it hands immutable snapshots to a
//! [`RunObserver`] synchronously after each applied step, before the
//! inter-step wait begins. Observers must not block for long — they run on
//! the worker thread and stall pacing while they execute.

use crate::sequence::Sequence;
use crate::types::{RunOutcome, RunState};

/// Consumer of live run output.
pub trait RunObserver: Send {
    /// One applied step: the updated sequence and the live statistics.
    fn on_step(&mut self, snapshot: &Sequence, state: &RunState);

    /// Audio cue for the step's primary affected element. Default: ignored.
    fn on_cue(&mut self, _frequency: f32) {}

    /// Terminal callback after completion, cancellation, or fault. On
    /// cancellation and fault the snapshot has already been reset to neutral.
    fn on_finish(&mut self, _snapshot: &Sequence, _state: &RunState, _outcome: RunOutcome) {}
}

/// Observer that discards everything (headless runs, tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl RunObserver for NullObserver {
    fn on_step(&mut self, _snapshot: &Sequence, _state: &RunState) {}
}

const CUE_BASE_HZ: f32 = 220.0;
const CUE_HZ_PER_UNIT: f32 = 2.0;

/// Deterministic pitch for a bar value.
///
/// Linear map over the generator's `10..=409` value range, yielding roughly
/// 240 Hz to 1038 Hz. Consumers may ignore it entirely.
#[must_use]
pub fn cue_frequency(value: u32) -> f32 {
    #[allow(clippy::cast_precision_loss)] // values are bounded far below f32 precision loss
    {
        CUE_BASE_HZ + CUE_HZ_PER_UNIT * value as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_frequency_is_linear_in_value() {
        assert_eq!(cue_frequency(10), 240.0);
        assert_eq!(cue_frequency(409), 1038.0);
        assert!(cue_frequency(100) > cue_frequency(50));
    }

    #[test]
    fn null_observer_accepts_everything() {
        let mut observer = NullObserver;
        let sequence = Sequence::from_values(&[1, 2]);
        let state = RunState {
            phase: crate::types::RunPhase::Running,
            comparisons: 0,
            swaps: 0,
        };
        observer.on_step(&sequence, &state);
        observer.on_cue(440.0);
        observer.on_finish(&sequence, &state, RunOutcome::Completed);
    }
}
