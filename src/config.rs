//! Command-line configuration

use crate::sequence::{Direction, Value};
use crate::sorting::Algorithm;
use clap::Parser;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Watch bubble, insertion and selection sort rearrange a row of bars
#[derive(Parser, Debug, Clone)]
#[command(name = "sortty", version, about)]
pub struct Args {
    /// Number of bars
    #[arg(short = 'n', long, default_value_t = 50)]
    pub count: usize,

    /// Smallest generated value
    #[arg(long, default_value_t = 5)]
    pub min: Value,

    /// Largest generated value
    #[arg(long, default_value_t = 100)]
    pub max: Value,

    /// Frame period in milliseconds
    #[arg(long, default_value_t = 10)]
    pub tick_ms: u64,

    /// Initial algorithm: bubble, insertion or selection
    #[arg(short, long, default_value = "bubble")]
    pub algorithm: Algorithm,

    /// Start in descending order
    #[arg(long)]
    pub descending: bool,

    /// Seed for reproducible sequences
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write logs (defaults to sortty.log in the temp directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("bar count must be at least 1")]
    ZeroCount,

    #[error("--min ({min}) must not exceed --max ({max})")]
    InvertedRange { min: Value, max: Value },

    #[error("frame period must be at least 1 ms")]
    ZeroTick,
}

/// Validated settings for a [`Session`](crate::session::Session)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub count: usize,
    pub values: RangeInclusive<Value>,
    pub tick: Duration,
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            count: 50,
            values: 5..=100,
            tick: Duration::from_millis(10),
            algorithm: Algorithm::Bubble,
            direction: Direction::Ascending,
            seed: None,
        }
    }
}

impl Args {
    pub fn session_config(&self) -> Result<SessionConfig, ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::ZeroCount);
        }
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }

        Ok(SessionConfig {
            count: self.count,
            values: self.min..=self.max,
            tick: Duration::from_millis(self.tick_ms),
            algorithm: self.algorithm,
            direction: if self.descending {
                Direction::Descending
            } else {
                Direction::Ascending
            },
            seed: self.seed,
        })
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("sortty.log"))
    }
}
