//! Plain clear-and-print screen
//!
//! Each frame clears the terminal, homes the cursor and prints the board with
//! ANSI colours, followed by a caption for the move. Gates read a line from
//! the input, so this screen works in an ordinary cooked-mode terminal.

use crate::errors::AppError;
use crate::prompt;
use crate::render::{self, Row, Tone};
use crate::session::{Screen, Step, Summary};
use crate::tower::PegState;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};

/// Terminal colour for a tone, `None` for the default colour
pub fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Plain => None,
        Tone::Moved => Some(Color::DarkRed),
        Tone::Settled => Some(Color::DarkGreen),
    }
}

/// Queue one board row, colouring highlighted segments
fn queue_row<W: Write>(out: &mut W, row: &Row) -> std::io::Result<()> {
    for segment in row.segments() {
        match tone_color(segment.tone) {
            Some(color) => queue!(
                out,
                SetForegroundColor(color),
                Print(&segment.text),
                ResetColor
            )?,
            None => queue!(out, Print(&segment.text))?,
        }
    }
    queue!(out, Print("\n"))
}

/// Screen that redraws the whole terminal for every frame
pub struct PlainScreen<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PlainScreen<R, W> {
    pub fn new(input: R, output: W) -> Self {
        PlainScreen { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Screen for PlainScreen<R, W> {
    type Error = AppError;

    fn draw(&mut self, state: &PegState, step: Option<&Step>) -> Result<(), AppError> {
        queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        for row in render::board(state) {
            queue_row(&mut self.output, &row)?;
        }
        if let Some(step) = step {
            queue!(self.output, Print(render::caption(step)), Print("\n"))?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn gate(&mut self, message: &str) -> Result<(), AppError> {
        prompt::wait_for_enter(&mut self.input, &mut self.output, message)?;
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> Result<(), AppError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", summary)?;
        Ok(())
    }
}
