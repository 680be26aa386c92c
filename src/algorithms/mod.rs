//! The five step-producing sort variants and their shared contract.
//!
//! Each variant walks a private scratch copy of the values and *describes*
//! mutations by emitting [`Step`]s into a [`StepSink`]; it never applies them
//! itself. The sink's `accept` returns `Result<(), RunInterrupt>`, so a
//! cancellation or fault raised at any suspension point unwinds through
//! arbitrarily deep recursion (quick, merge) with `?` instead of completing
//! the remaining recursive calls.
//!
//! Replaying a variant's full step stream against its input sequence, in
//! emission order, yields a non-decreasing ordering with every element
//! settled. Streams are deterministic and restartable from scratch, but not
//! resumable mid-stream.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RunInterrupt;
use crate::sequence::Sequence;
use crate::types::Step;

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

/// Consumer of a step stream.
///
/// The scheduler's live sink applies, counts, publishes, and paces each step;
/// [`StepBuffer`] just collects for planning and tests.
pub trait StepSink {
    /// Accept one step.
    ///
    /// # Errors
    ///
    /// `RunInterrupt::Cancelled` to abort the emitting algorithm at this
    /// suspension point, `RunInterrupt::Fault` when step application failed.
    fn accept(&mut self, step: Step) -> Result<(), RunInterrupt>;
}

/// Sink that buffers every step and never interrupts.
#[derive(Debug, Default)]
pub struct StepBuffer {
    steps: Vec<Step>,
}

impl StepBuffer {
    /// An empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps collected so far.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Consume the buffer.
    #[must_use]
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl StepSink for StepBuffer {
    fn accept(&mut self, step: Step) -> Result<(), RunInterrupt> {
        self.steps.push(step);
        Ok(())
    }
}

/// The closed set of supported sorting variants.
///
/// The set is fixed and exhaustively matched everywhere (scheduler dispatch,
/// classifier mapping); new variants are a source change, not a plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    /// Adjacent-exchange passes; stable.
    Bubble,
    /// Running-minimum selection with one committed swap per pass.
    Selection,
    /// Shift-left insertion; settles only at the end of the full pass.
    Insertion,
    /// Lomuto partition, last-element pivot, left recursion first.
    Quick,
    /// Top-down merge with `<=` left-preference tie-break; stable.
    Merge,
}

impl AlgorithmKind {
    /// Every variant, in UI order.
    pub const ALL: [Self; 5] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Quick,
        Self::Merge,
    ];

    /// Human-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Quick => "Quick Sort",
            Self::Merge => "Merge Sort",
        }
    }

    /// Parse the short lowercase name used by selectors and configs.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bubble" => Some(Self::Bubble),
            "selection" => Some(Self::Selection),
            "insertion" => Some(Self::Insertion),
            "quick" => Some(Self::Quick),
            "merge" => Some(Self::Merge),
            _ => None,
        }
    }

    /// Emit this variant's full step stream for `values` into `sink`.
    ///
    /// The algorithm mirrors its own emitted mutations onto a scratch copy;
    /// the caller-visible sequence is only touched by whoever interprets the
    /// steps.
    ///
    /// # Errors
    ///
    /// Propagates the first interrupt returned by the sink.
    pub fn emit(self, values: &[u32], sink: &mut dyn StepSink) -> Result<(), RunInterrupt> {
        let mut scratch = values.to_vec();
        match self {
            Self::Bubble => bubble::emit(&mut scratch, sink),
            Self::Selection => selection::emit(&mut scratch, sink),
            Self::Insertion => insertion::emit(&mut scratch, sink),
            Self::Quick => quick::emit(&mut scratch, sink),
            Self::Merge => merge::emit(&mut scratch, sink),
        }
    }

    /// Materialize the full step stream for a sequence.
    #[must_use]
    pub fn plan(self, sequence: &Sequence) -> Vec<Step> {
        let mut buffer = StepBuffer::new();
        let emitted = self.emit(&sequence.values(), &mut buffer);
        debug_assert!(emitted.is_ok(), "StepBuffer never interrupts");
        buffer.into_steps()
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Quick => "quick",
            Self::Merge => "merge",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::AlgorithmKind;
    use crate::sequence::Sequence;
    use crate::stats::RunStats;

    /// Plan, replay, and count a variant's step stream over `values`.
    pub(crate) fn replay(kind: AlgorithmKind, values: &[u32]) -> (Sequence, RunStats) {
        let mut sequence = Sequence::from_values(values);
        let mut stats = RunStats::default();
        for step in kind.plan(&sequence) {
            stats.record(&step);
            sequence.apply(&step).expect("replayed step must be valid");
        }
        (sequence, stats)
    }

    /// Replay and assert the universal postconditions.
    pub(crate) fn assert_sorted_and_settled(kind: AlgorithmKind, values: &[u32]) -> RunStats {
        let (sequence, stats) = replay(kind, values);
        let mut expected = values.to_vec();
        expected.sort_unstable();
        assert_eq!(sequence.values(), expected, "{kind} must sort ascending");
        if !values.is_empty() {
            assert!(sequence.all_settled(), "{kind} must settle every element");
        }
        stats
    }
}
