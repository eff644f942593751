//! Sequence model
//!
//! This module owns the values being sorted and the geometry used to draw them:
//! - [`Sequence`]: the mutable array plus its [`Layout`]
//! - [`layout`]: bar geometry derived from the values and the viewport
//! - [`generate`]: random sequence generation
//!
//! # Mutation
//!
//! Only the active sort engine mutates a sequence, and only through
//! [`Sequence::swap`] and [`Sequence::shift_assign`]. Neither touches the
//! layout: bar positions are keyed by index, not by value, so the geometry
//! stays valid until the sequence is replaced or the viewport changes.
//!
//! Indexing outside `0..len` panics. The engines never produce such an index,
//! so a panic here is a bug in an engine rather than a runtime condition.

pub mod generate;
pub mod layout;

pub use layout::{Layout, Viewport};

use std::cmp::Ordering;
use std::fmt;

/// A single bar value
pub type Value = u32;

/// Sort direction, global to a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Display name used in the title bar
    pub fn name(self) -> &'static str {
        match self {
            Direction::Ascending => "Ascending",
            Direction::Descending => "Descending",
        }
    }

    /// Order `a` relative to `b` under this direction
    pub fn order(self, a: Value, b: Value) -> Ordering {
        match self {
            Direction::Ascending => a.cmp(&b),
            Direction::Descending => b.cmp(&a),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The values being sorted together with their bar layout
#[derive(Debug, Clone)]
pub struct Sequence {
    values: Vec<Value>,
    layout: Layout,
}

impl Sequence {
    /// Create a sequence laid out for the given viewport
    pub fn new(values: Vec<Value>, viewport: Viewport) -> Self {
        let layout = Layout::compute(&values, viewport);
        Sequence { values, layout }
    }

    /// Install a brand-new sequence and recompute the layout
    pub fn replace(&mut self, values: Vec<Value>) {
        self.layout = Layout::compute(&values, self.layout.viewport);
        self.values = values;
    }

    /// Recompute the layout for a new viewport
    pub fn resize(&mut self, viewport: Viewport) {
        self.layout = Layout::compute(&self.values, viewport);
    }

    /// Compare element `i` against element `j` under `direction`.
    ///
    /// `Greater` means the pair is out of order: `i` should come after `j`.
    pub fn compare(&self, i: usize, j: usize, direction: Direction) -> Ordering {
        direction.order(self.values[i], self.values[j])
    }

    /// Exchange two elements in place
    pub fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
    }

    /// Overwrite a single slot
    pub fn shift_assign(&mut self, i: usize, value: Value) {
        self.values[i] = value;
    }

    pub fn get(&self, i: usize) -> Option<Value> {
        self.values.get(i).copied()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check whether every adjacent pair is in order under `direction`
    pub fn is_sorted(&self, direction: Direction) -> bool {
        self.values
            .windows(2)
            .all(|w| direction.order(w[0], w[1]) != Ordering::Greater)
    }
}

impl std::ops::Index<usize> for Sequence {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[Value]) -> Sequence {
        Sequence::new(values.to_vec(), Viewport::new(80, 20))
    }

    #[test]
    fn test_compare_ascending() {
        let s = seq(&[1, 5, 5]);
        assert_eq!(s.compare(0, 1, Direction::Ascending), Ordering::Less);
        assert_eq!(s.compare(1, 0, Direction::Ascending), Ordering::Greater);
        assert_eq!(s.compare(1, 2, Direction::Ascending), Ordering::Equal);
    }

    #[test]
    fn test_compare_descending_reverses() {
        let s = seq(&[1, 5]);
        assert_eq!(s.compare(0, 1, Direction::Descending), Ordering::Greater);
        assert_eq!(s.compare(1, 0, Direction::Descending), Ordering::Less);
    }

    #[test]
    fn test_swap_keeps_layout() {
        let mut s = seq(&[3, 9, 1]);
        let before = s.layout().clone();
        s.swap(0, 2);
        assert_eq!(s.values(), &[1, 9, 3]);
        assert_eq!(s.layout(), &before);
    }

    #[test]
    fn test_shift_assign_touches_one_slot() {
        let mut s = seq(&[3, 9, 1]);
        s.shift_assign(1, 3);
        assert_eq!(s.values(), &[3, 3, 1]);
        assert_eq!(s.get(1), Some(3));
        assert_eq!(s.get(3), None);
    }

    #[test]
    fn test_replace_recomputes_layout() {
        let mut s = seq(&[1, 2, 3]);
        s.replace(vec![10, 40, 20, 30]);
        assert_eq!(s.len(), 4);
        assert_eq!(s.layout().min_value, 10);
        assert_eq!(s.layout().max_value, 40);
        assert_eq!(s.layout().viewport, Viewport::new(80, 20));
    }

    #[test]
    fn test_is_sorted() {
        assert!(seq(&[1, 2, 2, 3]).is_sorted(Direction::Ascending));
        assert!(!seq(&[1, 2, 2, 3]).is_sorted(Direction::Descending));
        assert!(seq(&[3, 2, 2, 1]).is_sorted(Direction::Descending));
        assert!(seq(&[]).is_sorted(Direction::Ascending));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_swap_panics() {
        let mut s = seq(&[1, 2]);
        s.swap(0, 2);
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(Direction::Ascending.toggled(), Direction::Descending);
        assert_eq!(Direction::Descending.toggled(), Direction::Ascending);
        assert_eq!(Direction::Descending.to_string(), "Descending");
    }
}
