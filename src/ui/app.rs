//! Terminal render/input driver

use super::panes::{render_header, render_status_bar, Bars, RunPhase, RunStatus};
use crate::sequence::{Direction as SortDirection, Sequence, Viewport};
use crate::session::{Command, RenderDriver};
use crate::sorting::{Algorithm, HighlightSet};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Rows used by the title and help text, including a blank spacer row
const HEADER_HEIGHT: u16 = 4;

/// Screen regions: header, bars, status bar
pub struct ScreenAreas {
    pub header: Rect,
    pub bars: Rect,
    pub status: Rect,
}

impl ScreenAreas {
    pub fn split(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        ScreenAreas {
            header: chunks[0],
            bars: chunks[1],
            status: chunks[2],
        }
    }
}

/// Size of the bar region for a terminal of `width` x `height` cells
pub fn bar_viewport(width: u16, height: u16) -> Viewport {
    let bars = ScreenAreas::split(Rect::new(0, 0, width, height)).bars;
    Viewport::new(bars.width, bars.height)
}

/// Map a key press to a session command. Unbound keys map to `None`.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(' ') => Some(Command::StartSort),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'r' => Some(Command::Reset),
            'a' => Some(Command::SetAscending),
            'd' => Some(Command::SetDescending),
            c => Algorithm::ALL
                .into_iter()
                .find(|a| a.key() == c)
                .map(Command::SelectAlgorithm),
        },
        _ => None,
    }
}

/// Draws the session with ratatui and reads crossterm events.
///
/// The poll timeout doubles as the frame clock: each call to
/// [`poll_commands`](RenderDriver::poll_commands) waits up to one tick for
/// the first event, then drains whatever else is queued.
pub struct TerminalDriver<B: Backend> {
    terminal: Terminal<B>,
    tick: Duration,
    /// Title of the last idle frame, reused while sorting
    algorithm: Algorithm,
    direction: SortDirection,
    status: RunStatus,
}

impl<B: Backend> TerminalDriver<B> {
    pub fn new(terminal: Terminal<B>, tick: Duration) -> Self {
        TerminalDriver {
            terminal,
            tick,
            algorithm: Algorithm::default(),
            direction: SortDirection::default(),
            status: RunStatus::default(),
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn status(&self) -> &RunStatus {
        &self.status
    }

    fn draw(&mut self, sequence: &Sequence, highlights: Option<&HighlightSet>) -> io::Result<()> {
        let (algorithm, direction, status) = (self.algorithm, self.direction, &self.status);
        self.terminal
            .draw(|frame| draw_screen(frame, sequence, algorithm, direction, highlights, status))?;
        Ok(())
    }

    /// Keep the status bar in step with the commands the session will see
    fn observe(&mut self, command: Command) {
        match command {
            Command::Reset => self.status.clear(),
            Command::StartSort => self.status.start(),
            Command::SetAscending | Command::SetDescending | Command::SelectAlgorithm(_)
                if self.status.phase != RunPhase::Sorting =>
            {
                self.status.clear()
            }
            _ => {}
        }
    }
}

fn draw_screen(
    frame: &mut Frame,
    sequence: &Sequence,
    algorithm: Algorithm,
    direction: SortDirection,
    highlights: Option<&HighlightSet>,
    status: &RunStatus,
) {
    let areas = ScreenAreas::split(frame.area());

    render_header(frame, areas.header, algorithm, direction);

    let mut bars = Bars::new(sequence);
    if let Some(highlights) = highlights {
        bars = bars.highlights(highlights);
    }
    frame.render_widget(bars, areas.bars);

    render_status_bar(frame, areas.status, status);
}

impl<B: Backend> RenderDriver for TerminalDriver<B> {
    fn render_idle(
        &mut self,
        sequence: &Sequence,
        algorithm: Algorithm,
        direction: SortDirection,
    ) -> io::Result<()> {
        self.algorithm = algorithm;
        self.direction = direction;
        self.status.on_idle();
        self.draw(sequence, None)
    }

    fn render_step(&mut self, sequence: &Sequence, highlights: &HighlightSet) -> io::Result<()> {
        self.status.on_step();
        self.draw(sequence, Some(highlights))
    }

    fn poll_commands(&mut self) -> io::Result<Vec<Command>> {
        let mut commands = Vec::new();
        let mut timeout = self.tick;

        while event::poll(timeout)? {
            timeout = Duration::ZERO;
            let command = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => command_for_key(key),
                Event::Resize(width, height) => Some(Command::Resize(bar_viewport(width, height))),
                _ => None,
            };
            if let Some(command) = command {
                self.observe(command);
                commands.push(command);
            }
        }

        Ok(commands)
    }
}
