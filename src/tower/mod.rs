//! Puzzle model
//!
//! This module provides the types the solver and the screens share:
//! - [`Peg`]: one of the three fixed pegs
//! - [`PegRoles`]: which peg is the source, destination and auxiliary
//! - [`DiskCount`]: a disk count already checked against the accepted range
//! - [`Move`]: a single disk relocation
//! - [`state::PegState`]: the disks currently stacked on each peg
//!
//! # Disk Sizes
//!
//! Disks are numbered by size, `1` being the smallest. On every peg the sizes
//! strictly decrease from bottom to top.

pub mod state;

use crate::config::{MAX_DISKS, MIN_DISKS};
use crate::errors::InputError;
use std::fmt;

pub use state::PegState;

/// One of the three pegs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    /// Position of the peg, left to right
    pub fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }

    /// Label printed under the peg
    pub fn label(self) -> char {
        match self {
            Peg::A => 'A',
            Peg::B => 'B',
            Peg::C => 'C',
        }
    }

    /// The peg that is neither `self` nor `other`, or `None` if they are the same
    pub fn third(self, other: Peg) -> Option<Peg> {
        if self == other {
            return None;
        }
        Peg::ALL.into_iter().find(|&p| p != self && p != other)
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Assignment of the three pegs to their roles in a (sub-)problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PegRoles {
    pub source: Peg,
    pub destination: Peg,
    pub auxiliary: Peg,
}

impl PegRoles {
    /// Move everything from A to C, using B as the spare peg
    pub const STANDARD: PegRoles = PegRoles {
        source: Peg::A,
        destination: Peg::C,
        auxiliary: Peg::B,
    };

    /// Roles for moving from `source` to `destination`; the auxiliary peg is
    /// whichever one is left over
    pub fn new(source: Peg, destination: Peg) -> Option<Self> {
        let auxiliary = source.third(destination)?;
        Some(PegRoles {
            source,
            destination,
            auxiliary,
        })
    }

    /// Roles for the first half of the recursion: clear the smaller disks
    /// out onto the auxiliary peg
    pub fn to_auxiliary(self) -> Self {
        PegRoles {
            source: self.source,
            destination: self.auxiliary,
            auxiliary: self.destination,
        }
    }

    /// Roles for the second half: bring the smaller disks from the auxiliary
    /// peg onto the destination
    pub fn from_auxiliary(self) -> Self {
        PegRoles {
            source: self.auxiliary,
            destination: self.destination,
            auxiliary: self.source,
        }
    }
}

/// Number of disks in a puzzle, in `MIN_DISKS..=MAX_DISKS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DiskCount(u32);

impl DiskCount {
    pub fn get(self) -> u32 {
        self.0
    }

    /// Length of the minimal solution, `2^n - 1`
    pub fn total_moves(self) -> u64 {
        (1u64 << self.0) - 1
    }
}

impl TryFrom<u32> for DiskCount {
    type Error = InputError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        if (MIN_DISKS..=MAX_DISKS).contains(&n) {
            Ok(DiskCount(n))
        } else {
            Err(InputError::OutOfRange {
                min: MIN_DISKS.to_string(),
                max: MAX_DISKS.to_string(),
            })
        }
    }
}

impl fmt::Display for DiskCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Relocation of the top disk of one peg onto another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub disk: u32,
    pub from: Peg,
    pub to: Peg,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Disk {} from {} to {}", self.disk, self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_third_peg() {
        assert_eq!(Peg::A.third(Peg::C), Some(Peg::B));
        assert_eq!(Peg::C.third(Peg::B), Some(Peg::A));
        assert_eq!(Peg::B.third(Peg::A), Some(Peg::C));
        assert_eq!(Peg::B.third(Peg::B), None);
    }

    #[test]
    fn test_roles_new() {
        assert_eq!(PegRoles::new(Peg::A, Peg::C), Some(PegRoles::STANDARD));
        assert_eq!(PegRoles::new(Peg::A, Peg::A), None);
    }

    #[test]
    fn test_roles_swap_for_subproblems() {
        let roles = PegRoles::STANDARD;

        let first = roles.to_auxiliary();
        assert_eq!(first.source, Peg::A);
        assert_eq!(first.destination, Peg::B);
        assert_eq!(first.auxiliary, Peg::C);

        let second = roles.from_auxiliary();
        assert_eq!(second.source, Peg::B);
        assert_eq!(second.destination, Peg::C);
        assert_eq!(second.auxiliary, Peg::A);
    }

    #[test]
    fn test_disk_count_bounds() {
        assert!(DiskCount::try_from(0).is_err());
        assert!(DiskCount::try_from(21).is_err());
        assert_eq!(DiskCount::try_from(1).map(DiskCount::get), Ok(1));
        assert_eq!(DiskCount::try_from(20).map(DiskCount::get), Ok(20));
    }

    #[test]
    fn test_disk_count_zero_message() {
        let err = DiskCount::try_from(0).unwrap_err();
        assert_eq!(err.to_string(), "Enter a number between 1 and 20.");
    }

    #[test]
    fn test_total_moves() {
        let moves = |n| DiskCount::try_from(n).unwrap().total_moves();
        assert_eq!(moves(1), 1);
        assert_eq!(moves(3), 7);
        assert_eq!(moves(10), 1023);
        assert_eq!(moves(20), 1_048_575);
    }

    #[test]
    fn test_move_display() {
        let mv = Move {
            disk: 2,
            from: Peg::A,
            to: Peg::C,
        };
        assert_eq!(mv.to_string(), "Disk 2 from A to C");
    }
}
