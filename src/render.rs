//! Board layout shared by every screen
//!
//! [`board`] turns a [`PegState`] into rows of text segments, each tagged with
//! a [`Tone`]. Screens only decide how a tone looks (ANSI colour, ratatui
//! style); the geometry lives here.
//!
//! # Layout
//!
//! For `n` disks every peg gets a column `2n - 1` characters wide, and columns
//! are separated by one space. A disk of size `s` is drawn as `2s - 1` `=`
//! characters centred in its column; an empty level shows the rod `|`.
//!
//! ```text
//!  =   |   |
//! ===  |   |
//! === === ===
//!  A   B   C
//! ```

use crate::session::Step;
use crate::tower::{Peg, PegState};

/// How a piece of the board is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// The disk that just moved; wins over `Settled`
    Moved,
    /// A disk resting on the destination peg
    Settled,
}

/// A run of text drawn with one tone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
}

/// One line of the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    segments: Vec<Segment>,
}

impl Row {
    /// Append text, merging it into the previous segment when the tone matches
    fn push(&mut self, text: &str, tone: Tone) {
        if text.is_empty() {
            return;
        }
        if let Some(last) = self.segments.last_mut() {
            if last.tone == tone {
                last.text.push_str(text);
                return;
            }
        }
        self.segments.push(Segment {
            text: text.to_string(),
            tone,
        });
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The row without any highlighting
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Tone for `disk` sitting on `peg`
pub fn disk_tone(state: &PegState, peg: Peg, disk: u32) -> Tone {
    if state.last_moved() == Some(disk) {
        Tone::Moved
    } else if peg == state.destination() {
        Tone::Settled
    } else {
        Tone::Plain
    }
}

/// Lay out the whole board: one row per level (top first), the base, and the
/// peg labels
pub fn board(state: &PegState) -> Vec<Row> {
    let n = state.disks() as usize;
    let width = 2 * n - 1;
    let mut rows = Vec::with_capacity(n + 2);

    for level in (0..n).rev() {
        let mut row = Row::default();
        for (i, peg) in Peg::ALL.into_iter().enumerate() {
            if i > 0 {
                row.push(" ", Tone::Plain);
            }
            match state.peg(peg).get(level) {
                Some(&disk) => {
                    let pad = " ".repeat(n - disk as usize);
                    row.push(&pad, Tone::Plain);
                    row.push(&"=".repeat(2 * disk as usize - 1), disk_tone(state, peg, disk));
                    row.push(&pad, Tone::Plain);
                }
                None => {
                    let pad = " ".repeat(n - 1);
                    row.push(&pad, Tone::Plain);
                    row.push("|", Tone::Plain);
                    row.push(&pad, Tone::Plain);
                }
            }
        }
        rows.push(row);
    }

    let mut base = Row::default();
    let column = "=".repeat(width);
    base.push(&vec![column.as_str(); 3].join(" "), Tone::Plain);
    rows.push(base);

    let mut labels = Row::default();
    let pad = " ".repeat(n - 1);
    let text = Peg::ALL
        .into_iter()
        .map(|peg| format!("{pad}{}{pad}", peg.label()))
        .collect::<Vec<_>>()
        .join(" ");
    labels.push(&text, Tone::Plain);
    rows.push(labels);

    rows
}

/// Caption printed under a frame
pub fn caption(step: &Step) -> String {
    format!("Move {}: {}", step.number, step.mv)
}
