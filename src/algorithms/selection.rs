//! Selection sort as a step stream.
//!
//! Each outer pass tracks a running minimum, highlighting the current
//! candidate and demoting it back to neutral when a better one is found, then
//! commits exactly one swap between `i` and the found minimum. The swap is
//! emitted even when `min_idx == i`, but as an identity swap carrying no
//! value moves, so it counts zero toward the movement statistic.

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
        let mut min_idx = i;
        sink.accept(Step::mark(vec![min_idx], DisplayState::Comparing))?;
        for j in i + 1..n {
            sink.accept(Step::compare(vec![j]))?;
            if values[j] < values[min_idx] {
                sink.accept(Step::mark(vec![min_idx], DisplayState::Neutral))?;
                min_idx = j;
                sink.accept(Step::mark(vec![min_idx], DisplayState::Comparing))?;
            } else {
                sink.accept(Step::mark(vec![j], DisplayState::Neutral))?;
            }
        }
        sink.accept(Step::swap(i, min_idx, values[i], values[min_idx]))?;
        values.swap(i, min_idx);
        sink.accept(Step::mark(vec![min_idx], DisplayState::Neutral))?;
        sink.accept(Step::mark(vec![i], DisplayState::Settled))?;
    }
    sink.accept(Step::mark(vec![n - 1], DisplayState::Settled))
}

#[cfg(test)]
mod tests {
    use crate::algorithms::AlgorithmKind;
    use crate::algorithms::testutil::assert_sorted_and_settled;

    #[test]
    fn sorted_input_commits_only_identity_swaps() {
        let stats = assert_sorted_and_settled(AlgorithmKind::Selection, &[1, 2, 3, 4]);
        // One swap step per outer pass, all identity, none counted.
        assert_eq!(stats.swaps, 0);
        assert_eq!(stats.comparisons, 6);
    }

    #[test]
    fn reverse_input_commits_one_swap_per_moving_pass() {
        let stats = assert_sorted_and_settled(AlgorithmKind::Selection, &[4, 3, 2, 1]);
        assert_eq!(stats.comparisons, 6);
        // Passes 0 and 1 relocate; passes 2's swap is identity after the
        // earlier exchanges.
        assert_eq!(stats.swaps, 2);
    }

    #[test]
    fn duplicates_and_random_values() {
        assert_sorted_and_settled(AlgorithmKind::Selection, &[5, 1, 5, 3, 1, 9]);
    }

    #[test]
    fn boundary_sizes() {
        assert_sorted_and_settled(AlgorithmKind::Selection, &[]);
        assert_sorted_and_settled(AlgorithmKind::Selection, &[3]);
        assert_sorted_and_settled(AlgorithmKind::Selection, &[2, 1]);
    }
}
