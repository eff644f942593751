//! Bar chart of the sequence

use crate::sequence::Sequence;
use crate::sorting::{HighlightSet, Marker};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const BAR_SYMBOL: &str = "█";

/// Draws one vertical bar per value, bottom-aligned in the render area.
///
/// Geometry comes from the sequence's [`Layout`](crate::sequence::Layout);
/// bars that fall outside the area are clipped.
pub struct Bars<'a> {
    sequence: &'a Sequence,
    highlights: Option<&'a HighlightSet>,
}

impl<'a> Bars<'a> {
    pub fn new(sequence: &'a Sequence) -> Self {
        Bars {
            sequence,
            highlights: None,
        }
    }

    pub fn highlights(mut self, highlights: &'a HighlightSet) -> Self {
        self.highlights = Some(highlights);
        self
    }

    fn color_of(&self, index: usize) -> Color {
        match self.highlights.and_then(|h| h.get(index)) {
            Some(Marker::Primary) => DEFAULT_THEME.primary,
            Some(Marker::Secondary) => DEFAULT_THEME.secondary,
            None => DEFAULT_THEME.bar,
        }
    }
}

impl Widget for Bars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let layout = self.sequence.layout();
        let width = usize::from(area.width);

        for (index, &value) in self.sequence.values().iter().enumerate() {
            let left = layout.bar_x(index);
            if left >= width {
                break;
            }

            let style = Style::default().fg(self.color_of(index));
            let height = layout.bar_height(value).min(area.height);
            let right = (left + usize::from(layout.bar_width)).min(width);

            for column in left..right {
                let x = area.x + column as u16;
                for row in 0..height {
                    let y = area.bottom() - 1 - row;
                    buf.set_string(x, y, BAR_SYMBOL, style);
                }
            }
        }
    }
}
