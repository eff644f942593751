//! Selection sort as a resumable state machine

use super::{HighlightSet, Step, StepKind};
use crate::sequence::{Direction, Sequence};
use std::cmp::Ordering;

/// Cursor state for selection sort.
///
/// Pass `pass` scans `inner` over `pass + 1..len` while tracking the index
/// of the running extremum. Every scanned position is a `Compare` step; a
/// comparison that finds a new extremum is followed by an `Update` step.
/// Each pass ends with exactly one `Swap` step, so a sort over `n` values
/// always performs `n` swaps.
#[derive(Debug, Clone)]
pub struct SelectionSort {
    pass: usize,
    inner: usize,
    extremum: usize,
    /// Set between the `Compare` and `Update` steps of an updating comparison
    pending_update: bool,
}

impl Default for SelectionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionSort {
    pub fn new() -> Self {
        SelectionSort {
            pass: 0,
            inner: 1,
            extremum: 0,
            pending_update: false,
        }
    }

    pub fn resume(&mut self, seq: &mut Sequence, direction: Direction) -> Option<Step> {
        let len = seq.len();
        if len < 2 || self.pass >= len {
            return None;
        }

        if self.pending_update {
            self.pending_update = false;
            let previous = self.extremum;
            self.extremum = self.inner;
            self.inner += 1;
            return Some(Step::new(
                StepKind::Update,
                HighlightSet::pair(self.extremum, previous),
            ));
        }

        if self.inner < len {
            let (m, j) = (self.extremum, self.inner);
            if seq.compare(m, j, direction) == Ordering::Greater {
                self.pending_update = true;
            } else {
                self.inner += 1;
            }
            return Some(Step::new(StepKind::Compare, HighlightSet::pair(m, j)));
        }

        let (i, m) = (self.pass, self.extremum);
        seq.swap(i, m);
        self.pass += 1;
        self.extremum = self.pass;
        self.inner = self.pass + 1;
        Some(Step::new(StepKind::Swap, HighlightSet::pair(i, m)))
    }
}
