//! Peg state
//!
//! [`PegState`] holds the disks stacked on each peg. It is created with every
//! disk on peg A and only changes through [`PegState::move_disk`].
//!
//! # Invariants
//!
//! - Each peg is strictly decreasing from bottom to top
//! - The three pegs together hold every disk `1..=n` exactly once
//!
//! A move that would break either invariant is a bug in the caller, so it
//! panics instead of returning an error.

use super::{DiskCount, Move, Peg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PegState {
    pegs: [Vec<u32>; 3],
    disks: u32,
    last_moved: Option<u32>,
    destination: Peg,
}

impl PegState {
    /// All disks on peg A, largest at the bottom, with peg C as the goal
    pub fn new(disks: DiskCount) -> Self {
        let n = disks.get();
        PegState {
            pegs: [(1..=n).rev().collect(), Vec::new(), Vec::new()],
            disks: n,
            last_moved: None,
            destination: Peg::C,
        }
    }

    /// Change the peg whose disks count as already settled
    pub fn with_destination(mut self, destination: Peg) -> Self {
        self.destination = destination;
        self
    }

    /// Move the top disk of `from` onto `to` and return its size
    ///
    /// # Panics
    ///
    /// If `from` is empty, or the disk is larger than the top disk of `to`.
    pub fn move_disk(&mut self, from: Peg, to: Peg) -> u32 {
        let disk = self.pegs[from.index()]
            .pop()
            .unwrap_or_else(|| panic!("move from empty peg {}", from));
        if let Some(top) = self.top(to) {
            assert!(
                disk < top,
                "disk {} placed on smaller disk {} at peg {}",
                disk,
                top,
                to
            );
        }
        self.pegs[to.index()].push(disk);
        self.last_moved = Some(disk);
        disk
    }

    /// Apply a move produced by the solver
    ///
    /// # Panics
    ///
    /// As [`move_disk`](Self::move_disk), or if the top disk of `mv.from` is
    /// not `mv.disk`.
    pub fn apply(&mut self, mv: Move) {
        let disk = self.move_disk(mv.from, mv.to);
        assert_eq!(disk, mv.disk, "expected disk {} on peg {}", mv.disk, mv.from);
    }

    /// Disks on `peg`, bottom first
    pub fn peg(&self, peg: Peg) -> &[u32] {
        &self.pegs[peg.index()]
    }

    /// Smallest disk on `peg`, if any
    pub fn top(&self, peg: Peg) -> Option<u32> {
        self.pegs[peg.index()].last().copied()
    }

    pub fn disks(&self) -> u32 {
        self.disks
    }

    pub fn last_moved(&self) -> Option<u32> {
        self.last_moved
    }

    pub fn destination(&self) -> Peg {
        self.destination
    }

    /// Every disk sits on the destination peg
    pub fn is_solved(&self) -> bool {
        self.peg(self.destination).len() == self.disks as usize
    }
}
