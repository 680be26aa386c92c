//! Best-effort classifier mapping pasted code to a sort family.
//!
//! A keyword-frequency heuristic with no correctness guarantee: the engine
//! only consumes the result to pick which variant `start` receives. Ties and
//! text with no recognizable hints fall back to bubble sort, the application
//! default.

use crate::algorithms::AlgorithmKind;

const QUICK_HINTS: &[&str] = &["quick", "pivot", "partition", "lomuto", "hoare"];
const MERGE_HINTS: &[&str] = &["merge", "mid", "halves", "divide"];
const INSERTION_HINTS: &[&str] = &["insertion", "insert", "key", "shift"];
const SELECTION_HINTS: &[&str] = &["selection", "min_idx", "minidx", "minimum", "smallest"];
const BUBBLE_HINTS: &[&str] = &["bubble", "adjacent", "neighbor"];

/// Guess which sort family `text` implements.
#[must_use]
pub fn classify(text: &str) -> AlgorithmKind {
    let haystack = text.to_lowercase();
    let score = |hints: &[&str]| -> usize {
        hints
            .iter()
            .map(|hint| haystack.matches(hint).count())
            .sum()
    };
    let ranked = [
        (AlgorithmKind::Quick, score(QUICK_HINTS)),
        (AlgorithmKind::Merge, score(MERGE_HINTS)),
        (AlgorithmKind::Insertion, score(INSERTION_HINTS)),
        (AlgorithmKind::Selection, score(SELECTION_HINTS)),
        (AlgorithmKind::Bubble, score(BUBBLE_HINTS)),
    ];
    let mut best = (AlgorithmKind::Bubble, 0);
    for (kind, hits) in ranked {
        if hits > best.1 {
            best = (kind, hits);
        }
    }
    best.0
}
