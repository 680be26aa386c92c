//! Comparison and movement counters.
//!
//! This module is the single source of truth for the counting rule: one
//! comparison per `Compare` step, one movement per `Swap`/`Overwrite` step
//! that actually relocates a value. Identity swaps (selection sort's
//! `min_idx == i` case) carry no value moves and count zero.

use serde::{Deserialize, Serialize};

use crate::types::{Step, StepKind};

/// Per-run statistics, reset at the start of every run and never decremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Number of `Compare` steps applied.
    pub comparisons: u64,
    /// Number of value-relocating `Swap`/`Overwrite` steps applied.
    pub swaps: u64,
}

impl RunStats {
    /// Classify one applied step into the counters.
    pub fn record(&mut self, step: &Step) {
        match step.kind {
            StepKind::Compare => self.comparisons += 1,
            StepKind::Swap | StepKind::Overwrite => {
                if step.relocates() {
                    self.swaps += 1;
                }
            }
            StepKind::Mark => {}
        }
    }

    /// Zero both counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
