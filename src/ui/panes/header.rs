//! Title and help text above the bars

use crate::sequence::Direction;
use crate::sorting::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub const CONTROLS_HELP: &str = "R - Reset | SPACE - Start Sorting | A - Ascending | D - Descending";
pub const ALGORITHMS_HELP: &str = "I - Insertion | B - Bubble | S - Selection";

/// Title text, e.g. "Bubble Sort - Ascending"
pub fn title(algorithm: Algorithm, direction: Direction) -> String {
    format!("{} - {}", algorithm.name(), direction.name())
}

pub fn render_header(frame: &mut Frame, area: Rect, algorithm: Algorithm, direction: Direction) {
    let lines = vec![
        Line::styled(
            title(algorithm, direction),
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(CONTROLS_HELP, Style::default().fg(DEFAULT_THEME.fg)),
        Line::styled(ALGORITHMS_HELP, Style::default().fg(DEFAULT_THEME.comment)),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
