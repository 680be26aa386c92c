//! Quick sort as a step stream.
//!
//! Lomuto partition with the last element of the active range as pivot.
//! Recursion is depth-first, left partition fully before right; that order is
//! part of the observable contract (it determines the animation order and the
//! golden traces). Cancellation unwinds out of any recursion depth via the
//! sink's interrupt result.

use super::StepSink;
use crate::error::RunInterrupt;
use crate::types::{DisplayState, Step};

pub(super) fn emit(values: &mut [u32], sink: &mut dyn StepSink) -> Result<(), RunInterrupt> {
    let n = values.len();
    if n == 0 {
        return Ok(());
    }
    if n == 1 {
        return sink.accept(Step::mark(vec![0], DisplayState::Settled));
    }
    sort_range(values, 0, n - 1, sink)
}

fn sort_range(
    values: &mut [u32],
    low: usize,
    high: usize,
    sink: &mut dyn StepSink,
) -> Result<(), RunInterrupt> {
    if low == high {
        return sink.accept(Step::mark(vec![low], DisplayState::Settled));
    }
    let pivot_at = partition(values, low, high, sink)?;
    if pivot_at > low {
        sort_range(values, low, pivot_at - 1, sink)?;
    }
    if pivot_at < high {
        sort_range(values, pivot_at + 1, high, sink)?;
    }
    Ok(())
}

/// Partition `[low, high]` around `values[high]`, returning the pivot's final
/// position. `slot` is the boundary of the less-than region.
fn partition(
    values: &mut [u32],
    low: usize,
    high: usize,
    sink: &mut dyn StepSink,
) -> Result<usize, RunInterrupt> {
    let pivot = values[high];
    sink.accept(Step::mark(vec![high], DisplayState::Swapping))?;
    let mut slot = low;
    for j in low..high {
        sink.accept(Step::compare(vec![j]))?;
        if values[j] < pivot {
            sink.accept(Step::swap(slot, j, values[slot], values[j]))?;
            values.swap(slot, j);
            slot += 1;
        }
        sink.accept(Step::mark(vec![j], DisplayState::Neutral))?;
    }
    sink.accept(Step::swap(slot, high, values[slot], values[high]))?;
    values.swap(slot, high);
    sink.accept(Step::mark(vec![slot], DisplayState::Settled))?;
    if slot != high {
        sink.accept(Step::mark(vec![high], DisplayState::Neutral))?;
    }
    Ok(slot)
}
