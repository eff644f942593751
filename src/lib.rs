//! # Introduction
//!
//! sortty draws a random sequence as vertical bars in the terminal and
//! animates bubble, insertion or selection sort one step per frame, so every
//! comparison, swap and shift can be watched as it happens. The terminal UI is
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Frame loop
//!
//! ```text
//! tick → engine.resume() → Step { kind, highlights } → render → poll commands
//! ```
//!
//! 1. [`sequence`] — the values being sorted and the bar layout derived from them.
//! 2. [`sorting`] — one resumable state machine per algorithm; each
//!    [`sorting::SortEngine::resume`] call performs one step and reports which
//!    bars to highlight.
//! 3. [`session`] — the Idle/Sorting controller and the
//!    [`session::RenderDriver`] interface it draws through.
//! 4. [`config`] — command-line flags.
//! 5. [`ui`] — ratatui-based driver; not part of the stable library API.
//!
//! ## Keys
//!
//! `r` reset, space start, `a`/`d` ascending/descending,
//! `b`/`i`/`s` bubble/insertion/selection, `q` quit.

pub mod config;
pub mod sequence;
pub mod session;
pub mod sorting;
pub mod ui;
