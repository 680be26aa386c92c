use std::io;

use crate::types::{RunPhase, StepKind};

/// Unified error type for the sort-step engine.
///
/// Control-surface misuse (`InvalidStateTransition`) is surfaced synchronously
/// to the caller. `MalformedStep` and `FrozenElement` are internal invariant
/// violations: an algorithm that honors its contract never produces them, and
/// when they do occur the scheduler logs them and forces the run down the
/// cancellation path instead of crashing the surrounding application.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A control call arrived in a phase where it is not legal.
    #[error(
        "cannot {operation} while the engine is {phase}; check Scheduler::phase() before issuing control calls"
    )]
    InvalidStateTransition {
        /// The rejected operation (`start`, `pause`, `resume`, `cancel`).
        operation: &'static str,
        /// The phase the engine was in when the call arrived.
        phase: RunPhase,
    },

    /// A step referenced an index outside the sequence.
    #[error(
        "{kind:?} step addresses index {index} but the sequence holds {len} elements; the emitting algorithm violated its contract"
    )]
    MalformedStep {
        /// Kind of the offending step.
        kind: StepKind,
        /// The out-of-range index.
        index: usize,
        /// Length of the sequence at the time of application.
        len: usize,
    },

    /// A step re-activated an element that had already settled.
    #[error(
        "{kind:?} step re-activates settled index {index}; settled elements are frozen until the run ends"
    )]
    FrozenElement {
        /// Kind of the offending step.
        kind: StepKind,
        /// The settled index that was re-tagged.
        index: usize,
    },

    /// A requested sequence length fell outside the supported range.
    #[error("sequence length {requested} outside the supported range [{min}, {max}]")]
    InvalidSequenceLength {
        /// The rejected length.
        requested: usize,
        /// Smallest supported length.
        min: usize,
        /// Largest supported length.
        max: usize,
    },

    /// Engine configuration failed validation.
    #[error("invalid engine configuration: {detail}")]
    InvalidConfig {
        /// What was wrong and how to fix it.
        detail: String,
    },

    /// The run worker thread could not be spawned.
    #[error("failed to spawn the run worker thread: {source}")]
    WorkerSpawn {
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type EngineResult<T> = Result<T, EngineError>;

/// Why an in-progress step stream stopped before completion.
///
/// `Cancelled` is a normal termination outcome, not a failure: it exists so
/// that cancellation unwinds out of arbitrarily deep algorithm recursion via
/// `?`, and it never crosses the public boundary as an error — callers only
/// observe the `Cancelled` phase transition. `Fault` wraps an internal
/// invariant violation that aborts the run.
#[derive(Debug)]
pub enum RunInterrupt {
    /// Cancellation was requested; stop emitting steps immediately.
    Cancelled,
    /// A step failed validation against the sequence.
    Fault(EngineError),
}
