//! Stepwise sort engine
//!
//! Each algorithm is an explicit state machine whose fields are its loop
//! cursors. A call to [`SortEngine::resume`] runs from the stored cursors to
//! the next visually meaningful point, mutates the [`Sequence`] if that point
//! is a swap or shift, stores the updated cursors and returns a [`Step`].
//! `None` means the sort is complete; the sequence is then fully ordered
//! under the engine's direction.
//!
//! - [`bubble`]: only swaps are steps
//! - [`insertion`]: every shift of the value being inserted is a step
//! - [`selection`]: every comparison is a step, new extrema add an update
//!   step, and each pass ends with a swap step
//!
//! Sequences of length 0 or 1 complete immediately with no steps.

pub mod bubble;
pub mod highlight;
pub mod insertion;
pub mod selection;

pub use bubble::BubbleSort;
pub use highlight::{HighlightSet, Marker};
pub use insertion::InsertionSort;
pub use selection::SelectionSort;

use crate::sequence::{Direction, Sequence};
use std::fmt;
use std::str::FromStr;

/// The sorting algorithms that can be visualised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Selection,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Insertion, Algorithm::Selection];

    /// Display name used in the title bar
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
        }
    }

    /// Key that selects this algorithm
    pub fn key(self) -> char {
        match self {
            Algorithm::Bubble => 'b',
            Algorithm::Insertion => 'i',
            Algorithm::Selection => 's',
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}' (expected bubble, insertion or selection)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" | "b" => Ok(Algorithm::Bubble),
            "insertion" | "i" => Ok(Algorithm::Insertion),
            "selection" | "s" => Ok(Algorithm::Selection),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// What a step did to the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Two elements exchanged places
    Swap,
    /// An element moved one slot right to make room for the inserted value
    Shift,
    /// Two elements were compared; nothing moved
    Compare,
    /// A new extremum candidate was chosen; nothing moved
    Update,
}

impl StepKind {
    /// Whether this step changed the order of the sequence
    pub fn is_mutation(self) -> bool {
        matches!(self, StepKind::Swap | StepKind::Shift)
    }
}

/// One unit of work performed by an engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub highlights: HighlightSet,
}

impl Step {
    pub fn new(kind: StepKind, highlights: HighlightSet) -> Self {
        Step { kind, highlights }
    }
}

#[derive(Debug, Clone)]
enum Machine {
    Bubble(BubbleSort),
    Insertion(InsertionSort),
    Selection(SelectionSort),
}

/// A suspended sort run for one algorithm and direction
#[derive(Debug, Clone)]
pub struct SortEngine {
    algorithm: Algorithm,
    direction: Direction,
    machine: Machine,
    finished: bool,
}

impl SortEngine {
    /// Create an engine with every cursor at its initial value
    pub fn new(algorithm: Algorithm, direction: Direction) -> Self {
        let machine = match algorithm {
            Algorithm::Bubble => Machine::Bubble(BubbleSort::new()),
            Algorithm::Insertion => Machine::Insertion(InsertionSort::new()),
            Algorithm::Selection => Machine::Selection(SelectionSort::new()),
        };
        SortEngine {
            algorithm,
            direction,
            machine,
            finished: false,
        }
    }

    /// Run to the next step boundary.
    ///
    /// Returns `None` once the sort is complete, and keeps returning `None`
    /// on every later call.
    pub fn resume(&mut self, seq: &mut Sequence) -> Option<Step> {
        if self.finished {
            return None;
        }

        let step = match &mut self.machine {
            Machine::Bubble(m) => m.resume(seq, self.direction),
            Machine::Insertion(m) => m.resume(seq, self.direction),
            Machine::Selection(m) => m.resume(seq, self.direction),
        };

        if step.is_none() {
            self.finished = true;
        }
        step
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
