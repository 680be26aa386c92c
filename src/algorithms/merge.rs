//! Merge sort as a step stream.
//!
//! Top-down: split at `mid = (left + right) / 2`, recurse left, recurse
//! right, then merge. The merge emits a comparison while both halves are
//! non-empty and an overwrite for every placed element, including the
//! tail-copy phases that have no corresponding comparison. `<=` is the
//! left-preference tie-break, so equal elements from the left half are placed
//! first (stable).
//!
//! Placed elements are tagged settled only in the outermost merge — the one
//! spanning the full array. Inner merges tag neutral, because their slots are
//! re-touched by later merges and settled elements are frozen.

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
    sort_range(values, 0, n - 1, n, sink)
}

fn sort_range(
    values: &mut [u32],
    left: usize,
    right: usize,
    n: usize,
    sink: &mut dyn StepSink,
) -> Result<(), RunInterrupt> {
    if left >= right {
        return Ok(());
    }
    let mid = (left + right) / 2;
    sort_range(values, left, mid, n, sink)?;
    sort_range(values, mid + 1, right, n, sink)?;
    merge(values, left, mid, right, n, sink)
}

fn merge(
    values: &mut [u32],
    left: usize,
    mid: usize,
    right: usize,
    n: usize,
    sink: &mut dyn StepSink,
) -> Result<(), RunInterrupt> {
    let left_half = values[left..=mid].to_vec();
    let right_half = values[mid + 1..=right].to_vec();
    let place_state = if left == 0 && right == n - 1 {
        DisplayState::Settled
    } else {
        DisplayState::Neutral
    };
    let (mut i, mut j, mut k) = (0, 0, left);
    while i < left_half.len() && j < right_half.len() {
        sink.accept(Step::compare(vec![k]))?;
        let value = if left_half[i] <= right_half[j] {
            i += 1;
            left_half[i - 1]
        } else {
            j += 1;
            right_half[j - 1]
        };
        sink.accept(Step::overwrite(k, value, place_state))?;
        values[k] = value;
        k += 1;
    }
    while i < left_half.len() {
        sink.accept(Step::overwrite(k, left_half[i], place_state))?;
        values[k] = left_half[i];
        i += 1;
        k += 1;
    }
    while j < right_half.len() {
        sink.accept(Step::overwrite(k, right_half[j], place_state))?;
        values[k] = right_half[j];
        j += 1;
        k += 1;
    }
    Ok(())
}
