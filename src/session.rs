//! One animated run, from the initial frame to the exit prompt
//!
//! A [`Screen`] is the front-end: it draws frames, pauses between them and
//! blocks on the start/exit gates. [`Animator`] is the stateful move sink that
//! owns the [`PegState`] while the solver runs. [`run`] wires the two together.

use crate::solver::{self, MoveSink};
use crate::tower::{DiskCount, Move, PegRoles, PegState};
use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

/// A move together with its position in the solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// 1-based
    pub number: u64,
    pub total: u64,
    pub mv: Move,
}

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub moves: u64,
    pub elapsed: Duration,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Puzzle solved in {} moves!", self.moves)?;
        write!(
            f,
            "Total processing time: {:.2} seconds",
            self.elapsed.as_secs_f64()
        )
    }
}

/// Front-end for an animated run
pub trait Screen {
    type Error;

    /// Show `state`; `step` is `None` for the initial frame
    fn draw(&mut self, state: &PegState, step: Option<&Step>) -> Result<(), Self::Error>;

    /// Wait between frames
    fn pause(&mut self, delay: Duration) -> Result<(), Self::Error> {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        Ok(())
    }

    /// Block until the user confirms `message`
    fn gate(&mut self, message: &str) -> Result<(), Self::Error>;

    /// Report the finished run
    fn finish(&mut self, summary: &Summary) -> Result<(), Self::Error>;
}

/// Stateful sink: applies each move, draws it, then pauses
pub struct Animator<'a, S: Screen + ?Sized> {
    state: PegState,
    screen: &'a mut S,
    delay: Duration,
    count: u64,
    total: u64,
}

impl<'a, S: Screen + ?Sized> Animator<'a, S> {
    pub fn new(state: PegState, screen: &'a mut S, delay: Duration) -> Self {
        let total = (1u64 << state.disks()) - 1;
        Animator {
            state,
            screen,
            delay,
            count: 0,
            total,
        }
    }

    pub fn state(&self) -> &PegState {
        &self.state
    }

    /// Moves applied so far
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl<S: Screen + ?Sized> MoveSink for Animator<'_, S> {
    type Error = S::Error;

    fn record(&mut self, mv: Move) -> Result<(), Self::Error> {
        self.count += 1;
        tracing::trace!(number = self.count, disk = mv.disk, from = %mv.from, to = %mv.to, "move");
        self.state.apply(mv);
        let step = Step {
            number: self.count,
            total: self.total,
            mv,
        };
        self.screen.draw(&self.state, Some(&step))?;
        self.screen.pause(self.delay)
    }
}

/// Animate the full solution for `disks` on `screen`
pub fn run<S: Screen + ?Sized>(
    screen: &mut S,
    disks: DiskCount,
    delay: Duration,
) -> Result<Summary, S::Error> {
    tracing::info!(disks = disks.get(), delay_ms = delay.as_millis() as u64, "starting run");

    let state = PegState::new(disks);
    screen.draw(&state, None)?;
    screen.gate("Press Enter to start...")?;

    let started = Instant::now();
    let moves = {
        let mut animator = Animator::new(state, screen, delay);
        solver::solve(disks, PegRoles::STANDARD, &mut animator)?;
        debug_assert!(animator.state().is_solved());
        animator.count()
    };
    let summary = Summary {
        moves,
        elapsed: started.elapsed(),
    };
    tracing::info!(moves = summary.moves, elapsed = ?summary.elapsed, "puzzle solved");

    screen.finish(&summary)?;
    screen.gate("Press Enter to exit...")?;
    Ok(summary)
}
