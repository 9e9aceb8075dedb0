//! TUI pane rendering modules
//!
//! - [`board`]: the tower itself, drawn from the shared board layout
//! - [`log`]: running list of moves, auto-scrolled to the newest
//! - [`status`]: move counter, status message, keybindings and run phase
//!
//! Each pane exports a stateless `render_*` function.

pub mod board;
pub mod log;
pub mod status;

pub use board::render_board_pane;
pub use log::render_log_pane;
pub use status::{render_status_bar, Phase};
