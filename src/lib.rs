//! # Introduction
//!
//! hanoi computes the minimal solution to the Tower of Hanoi and animates it
//! in the terminal, one frame per move.
//!
//! ## Pipeline
//!
//! ```text
//! DiskCount → Solver → MoveSink → (PegState → Board rows → Screen)
//! ```
//!
//! 1. [`tower`]: pegs, moves, validated disk counts and the [`tower::PegState`]
//!    the animation mutates.
//! 2. [`solver`]: the recursive move generator and the [`solver::MoveSink`]
//!    trait it feeds, plus a text-only [`solver::Transcript`] sink.
//! 3. [`session`]: the stateful [`session::Animator`] sink and the
//!    [`session::Screen`] trait that front-ends implement.
//! 4. [`render`]: board geometry and highlight tones, shared by all screens.
//! 5. [`ansi`] and [`ui`]: a clear-and-print screen and a ratatui screen.
//! 6. [`prompt`]: interactive, re-prompting input.

pub mod ansi;
pub mod config;
pub mod errors;
pub mod logging;
pub mod prompt;
pub mod render;
pub mod session;
pub mod solver;
pub mod tower;
pub mod ui;
