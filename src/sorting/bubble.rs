//! Bubble sort as a resumable state machine

use super::{HighlightSet, Step, StepKind};
use crate::sequence::{Direction, Sequence};
use std::cmp::Ordering;

/// Cursor state for bubble sort.
///
/// Pass `pass` walks `index` over `0..len - 1 - pass`. Only swaps suspend;
/// in-order comparisons run on until the next swap or the end of the sort.
#[derive(Debug, Clone, Default)]
pub struct BubbleSort {
    pass: usize,
    index: usize,
}

impl BubbleSort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resume(&mut self, seq: &mut Sequence, direction: Direction) -> Option<Step> {
        let len = seq.len();
        while self.pass + 1 < len {
            if self.index + 1 >= len - self.pass {
                self.pass += 1;
                self.index = 0;
                continue;
            }

            let j = self.index;
            self.index += 1;

            if seq.compare(j, j + 1, direction) == Ordering::Greater {
                seq.swap(j, j + 1);
                return Some(Step::new(StepKind::Swap, HighlightSet::pair(j, j + 1)));
            }
        }
        None
    }
}
