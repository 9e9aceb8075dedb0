//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: the full-screen [`Screen`](crate::session::Screen), key handling
//!   for gates and pauses
//! - **[`panes`]**: stateless render functions for the board, move log and status bar
//! - **[`theme`]**: colour palette shared by all panes
//!
//! Construct an [`App`] over a raw-mode [`Terminal`](ratatui::Terminal) and hand it
//! to [`session::run`](crate::session::run).

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
