//! The mutable element sequence owned by the scheduler during a run.
//!
//! A [`Sequence`] has a fixed length for the duration of a run: steps may
//! relocate values and re-tag display states, never insert or delete.
//! [`Sequence::apply`] is the single interpretation point for steps and
//! performs the defensive invariant checks of the engine (index bounds,
//! settled-element freeze).

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::types::{DisplayState, Element, Step};

/// Ordered, fixed-length collection of elements with display tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    elements: Vec<Element>,
}

impl Sequence {
    /// Build a sequence from raw values, all tagged neutral.
    #[must_use]
    pub fn from_values(values: &[u32]) -> Self {
        Self {
            elements: values.iter().copied().map(Element::new).collect(),
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when the sequence holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Read-only view of the elements.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The values in their current order.
    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        self.elements.iter().map(|element| element.value).collect()
    }

    /// Whether the values are in non-decreasing order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.elements
            .windows(2)
            .all(|pair| pair[0].value <= pair[1].value)
    }

    /// Whether every element carries the settled tag.
    #[must_use]
    pub fn all_settled(&self) -> bool {
        self.elements
            .iter()
            .all(|element| element.state == DisplayState::Settled)
    }

    /// Apply one step: relocate values, then re-tag the affected positions.
    ///
    /// # Errors
    ///
    /// `MalformedStep` when any referenced index is out of range, and
    /// `FrozenElement` when the step would re-activate a settled element.
    /// Both are internal invariant violations that abort the run.
    pub fn apply(&mut self, step: &Step) -> EngineResult<()> {
        let len = self.elements.len();
        for &index in step
            .indices
            .iter()
            .chain(step.value_moves.iter().map(|(index, _)| index))
        {
            if index >= len {
                return Err(EngineError::MalformedStep {
                    kind: step.kind,
                    index,
                    len,
                });
            }
        }
        if step.state_after.is_active() {
            for &index in &step.indices {
                if self.elements[index].state == DisplayState::Settled {
                    return Err(EngineError::FrozenElement {
                        kind: step.kind,
                        index,
                    });
                }
            }
        }
        for &(index, value) in &step.value_moves {
            self.elements[index].value = value;
        }
        for &index in &step.indices {
            self.elements[index].state = step.state_after;
        }
        Ok(())
    }

    /// Reset every element to neutral (cancellation path).
    pub fn reset_states(&mut self) {
        for element in &mut self.elements {
            element.state = DisplayState::Neutral;
        }
    }
}
