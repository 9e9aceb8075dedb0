//! Interactive prompts
//!
//! Every prompt reads from a [`BufRead`] and writes to a [`Write`], so the
//! loops can be driven from byte slices in tests. Invalid numbers never end
//! the program: the prompt prints the [`InputError`] and asks again. Only
//! running out of input stops a numeric prompt.

use crate::config::CONFIRM_THRESHOLD;
use crate::errors::InputError;
use crate::tower::DiskCount;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Optional sign followed by at least one digit
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse `text` as a number inside `range`
///
/// An integer that does not fit `T` (negative for an unsigned type, or too
/// long) is reported as out of range rather than as garbage.
pub fn parse_in_range<T>(text: &str, range: &RangeInclusive<T>) -> Result<T, InputError>
where
    T: FromStr + PartialOrd + Display,
{
    let trimmed = text.trim();
    let out_of_range = || InputError::OutOfRange {
        min: range.start().to_string(),
        max: range.end().to_string(),
    };

    let value: T = match trimmed.parse() {
        Ok(value) => value,
        Err(_) if is_integer_literal(trimmed) => return Err(out_of_range()),
        Err(_) => {
            return Err(InputError::NotANumber {
                input: trimmed.to_string(),
            })
        }
    };

    if range.contains(&value) {
        Ok(value)
    } else {
        Err(out_of_range())
    }
}

/// Read one line, returning `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Ask for a number in `range` until one is given
///
/// # Errors
///
/// Fails with [`io::ErrorKind::UnexpectedEof`] if the input ends before a
/// valid number is read, or with any I/O error from `input`/`output`.
pub fn read_number<T, R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    range: RangeInclusive<T>,
) -> io::Result<T>
where
    T: FromStr + PartialOrd + Display,
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}: ", prompt)?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a valid number was entered",
            ));
        };

        match parse_in_range(&line, &range) {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::debug!(input = line.trim(), "rejected input: {}", e);
                writeln!(output, "{}", e)?;
            }
        }
    }
}

/// Ask a yes/no question; only `y` (any case) counts as yes
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<bool> {
    write!(output, "{} ", question)?;
    output.flush()?;
    Ok(read_line(input)?.is_some_and(|line| line.trim().eq_ignore_ascii_case("y")))
}

/// Ask before animating a puzzle with more than [`CONFIRM_THRESHOLD`] disks
///
/// Returns `true` without asking for smaller puzzles. On any answer other
/// than `y` it prints `Exiting.` and returns `false`.
pub fn confirm_large<R: BufRead, W: Write>(
    disks: DiskCount,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    if disks.get() <= CONFIRM_THRESHOLD {
        return Ok(true);
    }
    let question = format!(
        "Warning: This requires {} moves. Continue? (y/n):",
        disks.total_moves()
    );
    if confirm(input, output, &question)? {
        return Ok(true);
    }
    writeln!(output, "Exiting.")?;
    Ok(false)
}

/// Print `message` and wait for a line (or end of input)
pub fn wait_for_enter<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<()> {
    write!(output, "{}", message)?;
    output.flush()?;
    read_line(input)?;
    Ok(())
}
