//! Bubble sort as a step stream.
//!
//! Outer pass `i in [0, n-1)`, inner `j in [0, n-1-i)`: compare the adjacent
//! pair, swap when out of order, reset the touched pair to neutral, and
//! settle the frozen maximum after each pass. Stable: equal values never
//! reorder (strict `>` swap condition).

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
    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            sink.accept(Step::compare(vec![j, j + 1]))?;
            if values[j] > values[j + 1] {
                sink.accept(Step::swap(j, j + 1, values[j], values[j + 1]))?;
                values.swap(j, j + 1);
            }
            sink.accept(Step::mark(vec![j, j + 1], DisplayState::Neutral))?;
        }
        sink.accept(Step::mark(vec![n - 1 - i], DisplayState::Settled))?;
    }
    sink.accept(Step::mark(vec![0], DisplayState::Settled))
}
