//! Insertion sort as a step stream.
//!
//! Each outer pass picks up `key = values[i]`, shifts greater elements one
//! slot right (compare + overwrite per shift), and places the key in the
//! opened slot. The terminal placement is emitted only when the key actually
//! moved, keeping the movement counter exact; when nothing shifted, the
//! pickup highlight is simply cleared. Elements settle once, after the full
//! pass — insertion sort has no frozen sorted prefix in this design, the
//! sorted region is visible through values only.

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
    for i in 1..n {
        let key = values[i];
        sink.accept(Step::mark(vec![i], DisplayState::Comparing))?;
        // `slot` is the position the key would currently land in.
        let mut slot = i;
        while slot > 0 && values[slot - 1] > key {
            sink.accept(Step::compare(vec![slot - 1]))?;
            sink.accept(Step::overwrite(
                slot,
                values[slot - 1],
                DisplayState::Swapping,
            ))?;
            values[slot] = values[slot - 1];
            sink.accept(Step::mark(vec![slot - 1, slot], DisplayState::Neutral))?;
            slot -= 1;
        }
        if slot == i {
            sink.accept(Step::mark(vec![i], DisplayState::Neutral))?;
        } else {
            sink.accept(Step::overwrite(slot, key, DisplayState::Neutral))?;
            values[slot] = key;
        }
    }
    sink.accept(Step::mark((0..n).collect(), DisplayState::Settled))
}
