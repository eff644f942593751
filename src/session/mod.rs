//! Session controller
//!
//! A [`Session`] owns the sequence and the configuration toggles, and runs at
//! most one [`SortEngine`] at a time. It is a two-state machine:
//!
//! ```text
//!            StartSort                 engine complete
//!   Idle ─────────────────▶ Sorting ─────────────────▶ Idle
//!    ▲                         │
//!    └──────── Reset ──────────┘   (Reset from Idle stays Idle)
//! ```
//!
//! Direction and algorithm changes only apply while idle. A reset drops the
//! engine and its cursors on the spot; the next start always builds a fresh
//! engine.

pub mod command;
pub mod driver;

pub use command::Command;
pub use driver::RenderDriver;

use crate::config::SessionConfig;
use crate::sequence::{generate, Direction, Sequence, Value, Viewport};
use crate::sorting::{Algorithm, SortEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::ops::{ControlFlow, RangeInclusive};
use tracing::{debug, info, trace};

/// Whether a sort is in progress
#[derive(Debug, Clone)]
pub enum SessionState {
    Idle,
    Sorting(SortEngine),
}

pub struct Session {
    sequence: Sequence,
    count: usize,
    value_range: RangeInclusive<Value>,
    rng: StdRng,
    algorithm: Algorithm,
    direction: Direction,
    state: SessionState,
    /// Steps taken by the current or most recent run
    steps: usize,
}

impl Session {
    /// Create an idle session with a freshly generated sequence
    pub fn new(config: &SessionConfig, viewport: Viewport) -> Self {
        let mut rng = rng(config);
        let values = generate::random_values(&mut rng, config.count, config.values.clone());
        Self::build(config, Sequence::new(values, viewport), rng)
    }

    /// Create an idle session around an existing sequence.
    ///
    /// Later resets still generate from `config`.
    pub fn with_sequence(config: &SessionConfig, sequence: Sequence) -> Self {
        Self::build(config, sequence, rng(config))
    }

    fn build(config: &SessionConfig, sequence: Sequence, rng: StdRng) -> Self {
        Session {
            sequence,
            count: config.count,
            value_range: config.values.clone(),
            rng,
            algorithm: config.algorithm,
            direction: config.direction,
            state: SessionState::Idle,
            steps: 0,
        }
    }

    /// Advance the running sort by one step, or redraw the idle view
    pub fn tick<D: RenderDriver>(&mut self, driver: &mut D) -> io::Result<()> {
        let resumed = match &mut self.state {
            SessionState::Sorting(engine) => Some(engine.resume(&mut self.sequence)),
            SessionState::Idle => None,
        };

        match resumed {
            Some(Some(step)) => {
                self.steps += 1;
                trace!(step = self.steps, kind = ?step.kind, "sort step");
                driver.render_step(&self.sequence, &step.highlights)
            }
            Some(None) => {
                info!(
                    algorithm = %self.algorithm,
                    direction = %self.direction,
                    steps = self.steps,
                    "sort finished"
                );
                self.state = SessionState::Idle;
                driver.render_idle(&self.sequence, self.algorithm, self.direction)
            }
            None => driver.render_idle(&self.sequence, self.algorithm, self.direction),
        }
    }

    /// Apply one user command
    pub fn apply(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::Quit => return ControlFlow::Break(()),
            Command::Reset => self.reset(),
            Command::Resize(viewport) => {
                debug!(width = viewport.width, height = viewport.height, "resize");
                self.sequence.resize(viewport);
            }
            _ if self.is_sorting() => {
                debug!(?command, "ignored while sorting");
            }
            Command::StartSort => {
                info!(
                    algorithm = %self.algorithm,
                    direction = %self.direction,
                    len = self.sequence.len(),
                    "sort started"
                );
                self.steps = 0;
                self.state = SessionState::Sorting(SortEngine::new(self.algorithm, self.direction));
            }
            Command::SetAscending => self.direction = Direction::Ascending,
            Command::SetDescending => self.direction = Direction::Descending,
            Command::SelectAlgorithm(algorithm) => self.algorithm = algorithm,
        }
        ControlFlow::Continue(())
    }

    /// Tick, poll and apply commands until a quit command arrives
    pub fn run<D: RenderDriver>(&mut self, driver: &mut D) -> io::Result<()> {
        loop {
            self.tick(driver)?;
            for command in driver.poll_commands()? {
                if self.apply(command).is_break() {
                    info!("quit requested");
                    return Ok(());
                }
            }
        }
    }

    fn reset(&mut self) {
        if self.is_sorting() {
            info!(steps = self.steps, "sort abandoned by reset");
        }
        let values =
            generate::random_values(&mut self.rng, self.count, self.value_range.clone());
        self.sequence.replace(values);
        self.state = SessionState::Idle;
        self.steps = 0;
        debug!(len = self.sequence.len(), "sequence regenerated");
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_sorting(&self) -> bool {
        matches!(self.state, SessionState::Sorting(_))
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

/// Seeded generator when the config pins one, entropy otherwise
fn rng(config: &SessionConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
