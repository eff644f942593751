//! Interface between the session and whatever draws it and reads input

use super::Command;
use crate::sequence::{Direction, Sequence};
use crate::sorting::{Algorithm, HighlightSet};
use std::io;

/// Draws frames and delivers user commands.
///
/// The session calls exactly one render method per tick, then
/// [`poll_commands`](RenderDriver::poll_commands). Implementations pace the
/// loop by waiting up to one frame period inside `poll_commands`.
pub trait RenderDriver {
    /// Draw every bar in the neutral colour, with the title and help text
    fn render_idle(
        &mut self,
        sequence: &Sequence,
        algorithm: Algorithm,
        direction: Direction,
    ) -> io::Result<()>;

    /// Draw the bars using the colours from `highlights`
    fn render_step(&mut self, sequence: &Sequence, highlights: &HighlightSet) -> io::Result<()>;

    /// Commands received since the previous call
    fn poll_commands(&mut self) -> io::Result<Vec<Command>>;
}
