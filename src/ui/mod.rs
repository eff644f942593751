//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — [`TerminalDriver`], the [`RenderDriver`] that draws frames and
//!   turns crossterm events into session commands
//! - **[`panes`]** — stateless render functions for each visible region (header,
//!   bars, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! [`RenderDriver`]: crate::session::RenderDriver

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{bar_viewport, TerminalDriver};
