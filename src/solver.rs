//! Recursive move generation
//!
//! [`solve`] walks the textbook divide-and-conquer recursion and hands every
//! move to a [`MoveSink`] the moment it is produced. The sink decides what a
//! move means: collecting it, printing it, or applying it to a
//! [`PegState`](crate::tower::PegState) and drawing a frame.
//!
//! ```text
//! solve(n, src → dst via aux)
//!   solve(n-1, src → aux via dst)
//!   move disk n: src → dst
//!   solve(n-1, aux → dst via src)
//! ```
//!
//! Recursion depth equals the disk count, which is capped at
//! [`MAX_DISKS`](crate::config::MAX_DISKS).

use crate::tower::{DiskCount, Move, PegRoles};
use std::convert::Infallible;
use std::io::{self, Write};

/// Consumer of the moves produced by [`solve`]
pub trait MoveSink {
    type Error;

    /// Handle the next move. Returning an error stops the solver.
    fn record(&mut self, mv: Move) -> Result<(), Self::Error>;
}

impl MoveSink for Vec<Move> {
    type Error = Infallible;

    fn record(&mut self, mv: Move) -> Result<(), Self::Error> {
        self.push(mv);
        Ok(())
    }
}

/// Produce the `2^n - 1` moves that carry `disks` disks from `roles.source` to
/// `roles.destination`, feeding each one to `sink` in order
pub fn solve<S: MoveSink + ?Sized>(
    disks: DiskCount,
    roles: PegRoles,
    sink: &mut S,
) -> Result<(), S::Error> {
    tracing::debug!(
        disks = disks.get(),
        from = %roles.source,
        to = %roles.destination,
        "solving"
    );
    solve_subtower(disks.get(), roles, sink)
}

fn solve_subtower<S: MoveSink + ?Sized>(
    n: u32,
    roles: PegRoles,
    sink: &mut S,
) -> Result<(), S::Error> {
    debug_assert!(n >= 1, "sub-tower must hold at least one disk");

    if n == 1 {
        return sink.record(Move {
            disk: 1,
            from: roles.source,
            to: roles.destination,
        });
    }

    solve_subtower(n - 1, roles.to_auxiliary(), sink)?;
    sink.record(Move {
        disk: n,
        from: roles.source,
        to: roles.destination,
    })?;
    solve_subtower(n - 1, roles.from_auxiliary(), sink)
}

/// Collect the full solution into a vector
pub fn moves(disks: DiskCount, roles: PegRoles) -> Vec<Move> {
    let mut out = Vec::with_capacity(disks.total_moves() as usize);
    match solve(disks, roles, &mut out) {
        Ok(()) => out,
        Err(never) => match never {},
    }
}

/// Text-only sink: one line per move, no board state
pub struct Transcript<W: Write> {
    out: W,
    count: u64,
}

impl<W: Write> Transcript<W> {
    pub fn new(out: W) -> Self {
        Transcript { out, count: 0 }
    }

    /// Number of moves written so far
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MoveSink for Transcript<W> {
    type Error = io::Error;

    fn record(&mut self, mv: Move) -> Result<(), Self::Error> {
        self.count += 1;
        writeln!(
            self.out,
            "Move disk {} from {} to {}",
            mv.disk, mv.from, mv.to
        )
    }
}
