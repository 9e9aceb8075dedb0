//! Error types for input validation and for running an animation
//!
//! [`InputError`] covers everything a user can type wrong at a prompt. Its
//! `Display` text is exactly what the prompt loop prints before asking again,
//! so it is never fatal.
//!
//! [`AppError`] covers the failures that end a run: terminal I/O and the user
//! quitting the full-screen interface mid-animation.

use std::fmt;
use std::io;

/// Rejected input at a numeric prompt
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// The text did not parse as a number
    NotANumber { input: String },

    /// The number parsed but lies outside the accepted range
    OutOfRange { min: String, max: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotANumber { .. } => {
                write!(f, "Invalid input. Enter a numeric value.")
            }
            InputError::OutOfRange { min, max } => {
                write!(f, "Enter a number between {} and {}.", min, max)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Errors that end an animation run
#[derive(Debug)]
pub enum AppError {
    /// Reading from or writing to the terminal failed
    Io(io::Error),

    /// The user quit before the puzzle was solved
    Interrupted { moves: u64 },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "Terminal error: {}", e),
            AppError::Interrupted { moves } => {
                write!(
                    f,
                    "Interrupted after {} move{}",
                    moves,
                    if *moves == 1 { "" } else { "s" }
                )
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Interrupted { .. } => None,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}
