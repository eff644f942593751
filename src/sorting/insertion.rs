//! Insertion sort as a resumable state machine

use super::{HighlightSet, Step, StepKind};
use crate::sequence::{Direction, Sequence, Value};
use std::cmp::Ordering;

/// Cursor state for insertion sort.
///
/// `current` is the value being inserted for pass `outer`, and `cursor` is
/// the slot that holds it right now. Each shift moves the left neighbour one
/// slot right and writes `current` into the vacated slot, so the sequence is
/// a permutation of its input after every step.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    outer: usize,
    cursor: usize,
    current: Option<Value>,
}

impl Default for InsertionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl InsertionSort {
    pub fn new() -> Self {
        InsertionSort {
            outer: 1,
            cursor: 1,
            current: None,
        }
    }

    pub fn resume(&mut self, seq: &mut Sequence, direction: Direction) -> Option<Step> {
        while self.outer < seq.len() {
            let current = match self.current {
                Some(value) => value,
                None => {
                    let value = seq[self.outer];
                    self.cursor = self.outer;
                    self.current = Some(value);
                    value
                }
            };

            let k = self.cursor;
            if k > 0 && direction.order(seq[k - 1], current) == Ordering::Greater {
                let left = seq[k - 1];
                seq.shift_assign(k, left);
                seq.shift_assign(k - 1, current);
                self.cursor = k - 1;
                return Some(Step::new(StepKind::Shift, HighlightSet::pair(k, k - 1)));
            }

            // `current` is in place; move on without a visual step
            self.outer += 1;
            self.current = None;
        }
        None
    }
}
