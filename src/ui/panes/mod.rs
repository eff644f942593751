//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`header`]: Title with the selected algorithm and direction, plus key help
//! - [`bars`]: The sequence drawn as bars, with per-step highlight colors
//! - [`status`]: Status bar with step counter, run phase and keybindings
//!
//! Each pane is a stateless render function or widget; the only state they
//! read lives in [`RunStatus`] and the session's sequence.

pub mod bars;
pub mod header;
pub mod status;

// Re-export render functions for convenience
pub use bars::Bars;
pub use header::render_header;
pub use status::{render_status_bar, RunPhase, RunStatus};
