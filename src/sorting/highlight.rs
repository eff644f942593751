//! Per-step highlight sets

use rustc_hash::FxHashMap;

/// Semantic role of a highlighted bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The stationary side of the operation (drawn green)
    Primary,
    /// The element being carried or examined (drawn red)
    Secondary,
}

/// Which bars a single animation frame should emphasise.
///
/// Every engine step builds a fresh set; nothing is shared between steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    markers: FxHashMap<usize, Marker>,
}

impl HighlightSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set with one Primary and one Secondary index
    pub fn pair(primary: usize, secondary: usize) -> Self {
        let mut set = Self::new();
        set.mark(primary, Marker::Primary);
        set.mark(secondary, Marker::Secondary);
        set
    }

    /// Mark `index`, replacing any previous marker for it
    pub fn mark(&mut self, index: usize, marker: Marker) {
        self.markers.insert(index, marker);
    }

    pub fn get(&self, index: usize) -> Option<Marker> {
        self.markers.get(&index).copied()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.markers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
