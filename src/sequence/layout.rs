//! Bar geometry derived from a sequence and the viewport it is drawn into

use super::Value;

/// Columns left empty around the bars (half on each side)
pub const SIDE_PAD: u16 = 4;

/// Fraction of a bar slot covered by the bar itself
const BAR_FILL: f64 = 0.9;

/// Size of the bar region, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Viewport { width, height }
    }
}

/// Read-only geometry for drawing a sequence as bars.
///
/// Heights are scaled so the smallest value is one row tall and the largest
/// fills the viewport. When every value is equal the range is treated as 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub viewport: Viewport,
    pub min_value: Value,
    pub max_value: Value,
    /// Columns per bar slot
    pub bar_spacing: u16,
    /// Columns actually filled by a bar
    pub bar_width: u16,
    /// Column of the first bar
    pub start_x: u16,
    /// Rows per unit of value above `min_value`
    pub height_scale: f64,
}

impl Layout {
    pub fn compute(values: &[Value], viewport: Viewport) -> Self {
        let min_value = values.iter().copied().min().unwrap_or(0);
        let max_value = values.iter().copied().max().unwrap_or(0);

        // max == min would divide by zero
        let range = (max_value - min_value).max(1);

        let usable = viewport.width.saturating_sub(SIDE_PAD);
        let bar_spacing = if values.is_empty() {
            usable.max(1)
        } else {
            (f64::from(usable) / values.len() as f64).round().max(1.0) as u16
        };
        let bar_width = (f64::from(bar_spacing) * BAR_FILL).floor().max(1.0) as u16;

        let height_scale = f64::from(viewport.height.saturating_sub(1)) / f64::from(range);

        Layout {
            viewport,
            min_value,
            max_value,
            bar_spacing,
            bar_width,
            start_x: SIDE_PAD / 2,
            height_scale,
        }
    }

    /// Height of the bar for `value`, in rows, clamped to the viewport
    pub fn bar_height(&self, value: Value) -> u16 {
        if self.viewport.height == 0 {
            return 0;
        }
        let above_min = f64::from(value.saturating_sub(self.min_value));
        let rows = 1.0 + (above_min * self.height_scale).round();
        (rows as u16).min(self.viewport.height)
    }

    /// Left column of the bar at `index`, relative to the viewport
    pub fn bar_x(&self, index: usize) -> usize {
        usize::from(self.start_x) + index * usize::from(self.bar_spacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tallest_bar_fills_viewport() {
        let layout = Layout::compute(&[5, 50, 100], Viewport::new(80, 30));
        assert_eq!(layout.bar_height(5), 1);
        assert_eq!(layout.bar_height(100), 30);
        assert!(layout.bar_height(50) > 1 && layout.bar_height(50) < 30);
    }

    #[test]
    fn test_all_equal_values_do_not_divide_by_zero() {
        let layout = Layout::compute(&[7, 7, 7], Viewport::new(80, 30));
        assert!(layout.height_scale.is_finite());
        assert_eq!(layout.bar_height(7), 1);
    }

    #[test]
    fn test_empty_sequence_layout() {
        let layout = Layout::compute(&[], Viewport::new(80, 30));
        assert_eq!(layout.min_value, 0);
        assert_eq!(layout.max_value, 0);
        assert!(layout.height_scale.is_finite());
        assert!(layout.bar_spacing >= 1);
    }

    #[test]
    fn test_spacing_and_width() {
        // 76 usable columns over 50 bars rounds to 2 columns per slot
        let values: Vec<Value> = (0..50).collect();
        let layout = Layout::compute(&values, Viewport::new(80, 20));
        assert_eq!(layout.bar_spacing, 2);
        assert_eq!(layout.bar_width, 1);
        assert_eq!(layout.start_x, 2);
        assert_eq!(layout.bar_x(3), 8);
    }

    #[test]
    fn test_wide_slots_leave_a_gap() {
        let layout = Layout::compute(&[1, 2, 3, 4], Viewport::new(24, 10));
        assert_eq!(layout.bar_spacing, 5);
        assert_eq!(layout.bar_width, 4);
    }

    #[test]
    fn test_more_bars_than_columns_keeps_one_column_each() {
        let values: Vec<Value> = (0..500).collect();
        let layout = Layout::compute(&values, Viewport::new(40, 10));
        assert_eq!(layout.bar_spacing, 1);
        assert_eq!(layout.bar_width, 1);
    }

    #[test]
    fn test_zero_height_viewport() {
        let layout = Layout::compute(&[1, 9], Viewport::new(40, 0));
        assert_eq!(layout.bar_height(9), 0);
    }
}
