//! Core event and state types shared across the engine.
//!
//! A sorting variant communicates with the scheduler exclusively through
//! [`Step`] values; the scheduler publishes progress to observers as
//! [`RunState`] snapshots. Nothing in this module performs work — these are
//! the wire types of the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Display state
// ---------------------------------------------------------------------------

/// Visual ordering state carried by every element.
///
/// Transition rule: `Neutral -> Comparing -> {Neutral, Swapping} -> Settled`.
/// Once `Settled`, an element is frozen for the remainder of the run and must
/// not re-enter `Comparing` or `Swapping`; cancellation resets every element
/// to `Neutral` regardless of prior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayState {
    /// Not currently involved in any operation.
    #[default]
    Neutral,
    /// Under comparison this step.
    Comparing,
    /// Being relocated this step.
    Swapping,
    /// Final position fixed for the remainder of the run.
    Settled,
}

impl DisplayState {
    /// True for the transient highlight states a settled element must never
    /// re-enter.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Comparing | Self::Swapping)
    }
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// One bar of the visualized sequence.
///
/// `value` is only ever relocated (swap/overwrite), never recomputed;
/// `state` is mutated only through step application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Height of the bar.
    pub value: u32,
    /// Current display tag.
    pub state: DisplayState,
}

impl Element {
    /// A fresh element in the neutral state.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self {
            value,
            state: DisplayState::Neutral,
        }
    }
}

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// Classification of an atomic step, used to drive the statistics counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Two values were compared.
    Compare,
    /// Two positions exchanged their values.
    Swap,
    /// One position received a new value.
    Overwrite,
    /// Pure display re-tagging, no values touched.
    Mark,
}

/// One atomic, externally observable mutation/state-tag event.
///
/// Steps are the only channel between an algorithm and the scheduler:
/// algorithms describe mutations, the scheduler interprets them against the
/// working sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// What this step represents.
    pub kind: StepKind,
    /// Affected positions, in emission order.
    pub indices: Vec<usize>,
    /// Display state applied to every affected position.
    pub state_after: DisplayState,
    /// Value relocations `(index, new_value)` applied before re-tagging.
    /// Empty for pure comparisons, marks, and identity swaps.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value_moves: Vec<(usize, u32)>,
}

impl Step {
    /// A comparison touching the given positions.
    #[must_use]
    pub fn compare(indices: Vec<usize>) -> Self {
        Self {
            kind: StepKind::Compare,
            indices,
            state_after: DisplayState::Comparing,
            value_moves: Vec::new(),
        }
    }

    /// An exchange of the values currently at `a` and `b`.
    ///
    /// `value_a`/`value_b` are the values *before* the exchange. An identity
    /// swap (`a == b`) carries no value moves and therefore does not count
    /// toward the movement statistic.
    #[must_use]
    pub fn swap(a: usize, b: usize, value_a: u32, value_b: u32) -> Self {
        let (indices, value_moves) = if a == b {
            (vec![a], Vec::new())
        } else {
            (vec![a, b], vec![(a, value_b), (b, value_a)])
        };
        Self {
            kind: StepKind::Swap,
            indices,
            state_after: DisplayState::Swapping,
            value_moves,
        }
    }

    /// Placement of `value` at `index`.
    #[must_use]
    pub fn overwrite(index: usize, value: u32, state_after: DisplayState) -> Self {
        Self {
            kind: StepKind::Overwrite,
            indices: vec![index],
            state_after,
            value_moves: vec![(index, value)],
        }
    }

    /// Pure display re-tagging of the given positions.
    #[must_use]
    pub fn mark(indices: Vec<usize>, state_after: DisplayState) -> Self {
        Self {
            kind: StepKind::Mark,
            indices,
            state_after,
            value_moves: Vec::new(),
        }
    }

    /// Whether this step actually relocates a value.
    ///
    /// This is the movement-counter criterion: identity swaps are excluded.
    #[must_use]
    pub fn relocates(&self) -> bool {
        matches!(self.kind, StepKind::Swap | StepKind::Overwrite) && !self.value_moves.is_empty()
    }

    /// First affected position, used for the audio cue.
    #[must_use]
    pub fn primary_index(&self) -> Option<usize> {
        self.indices.first().copied()
    }
}

// ---------------------------------------------------------------------------
// Run lifecycle
// ---------------------------------------------------------------------------

/// Scheduler lifecycle phase.
///
/// `Idle -> Running -> {Paused <-> Running} -> {Completed, Cancelled} -> Idle`;
/// the terminal outcomes are reported via [`RunOutcome`] while the phase
/// itself returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    /// No run in progress; `start` is legal.
    Idle,
    /// Steps are being applied and paced.
    Running,
    /// Suspended; the pacing loop polls for resume or cancel.
    Paused,
    /// Cancellation requested; observed at the next suspension point.
    Cancelling,
}

impl RunPhase {
    pub(crate) const fn as_u8(self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Running => 1,
            Self::Paused => 2,
            Self::Cancelling => 3,
        }
    }

    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Running,
            2 => Self::Paused,
            3 => Self::Cancelling,
            _ => Self::Idle,
        }
    }
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Cancelling => "cancelling",
        };
        f.write_str(label)
    }
}

/// Terminal outcome of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// Every step was applied; the sequence is sorted and fully settled.
    Completed,
    /// The run was cancelled; the display was reset to neutral.
    Cancelled,
    /// An internal invariant violation aborted the run; display reset.
    Faulted,
}

/// Live phase and statistics snapshot published to observers.
///
/// Owned exclusively by the scheduler; observers and algorithms only read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    /// Current lifecycle phase.
    pub phase: RunPhase,
    /// Comparisons counted so far this run.
    pub comparisons: u64,
    /// Value-relocating swaps/overwrites counted so far this run.
    pub swaps: u64,
}
