//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the status bar reports about the sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Idle,
    Sorting,
    Sorted,
}

/// Tracks the step counter and run phase from the frames the driver draws.
///
/// A run starts when a start command is seen, or at the latest with the first
/// step frame after an idle frame, and ends with the next idle frame. Reset and
/// configuration commands clear a finished run.
#[derive(Debug, Clone, Default)]
pub struct RunStatus {
    pub phase: RunPhase,
    pub steps: usize,
}

impl RunStatus {
    /// Begin a new run unless one is already in progress
    pub fn start(&mut self) {
        if self.phase != RunPhase::Sorting {
            self.phase = RunPhase::Sorting;
            self.steps = 0;
        }
    }

    pub fn on_step(&mut self) {
        self.start();
        self.steps += 1;
    }

    pub fn on_idle(&mut self) {
        if self.phase == RunPhase::Sorting {
            self.phase = RunPhase::Sorted;
        }
    }

    /// Forget the last run
    pub fn clear(&mut self) {
        self.phase = RunPhase::Idle;
        self.steps = 0;
    }

    pub fn message(&self) -> String {
        match self.phase {
            RunPhase::Idle => "Ready".to_string(),
            RunPhase::Sorting => "Sorting...".to_string(),
            RunPhase::Sorted => format!("Sorted in {} step(s)", self.steps),
        }
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, status: &RunStatus) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let badge_bg = match status.phase {
        RunPhase::Idle => DEFAULT_THEME.key_bg,
        RunPhase::Sorting => DEFAULT_THEME.accent,
        RunPhase::Sorted => DEFAULT_THEME.primary,
    };

    let left_spans = vec![
        Span::styled(
            format!(" Step {} ", status.steps),
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", status.message()),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.key_bg).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let (badge, badge_style) = match status.phase {
        RunPhase::Idle => (" IDLE ", DEFAULT_THEME.key_bg),
        RunPhase::Sorting => (" ▶ SORTING ", DEFAULT_THEME.accent),
        RunPhase::Sorted => (" SORTED ", DEFAULT_THEME.primary),
    };

    let right_spans = vec![
        Span::styled(" ⎵ ", key_style),
        Span::styled(" start ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" r ", key_style),
        Span::styled(" reset ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(
            badge,
            Style::default()
                .bg(badge_style)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
