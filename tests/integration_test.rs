// Integration tests for the solver and the animation session

use hanoi::ansi::PlainScreen;
use hanoi::session::{self, Animator, Screen, Step, Summary};
use hanoi::solver::{self, moves, MoveSink, Transcript};
use hanoi::tower::{DiskCount, Move, Peg, PegRoles, PegState};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::convert::Infallible;
use std::time::Duration;

fn disks(n: u32) -> DiskCount {
    DiskCount::try_from(n).expect("valid disk count")
}

/// Sink that applies every move and checks the peg invariants as it goes
struct Checker {
    state: PegState,
    count: u64,
}

impl Checker {
    fn new(n: u32) -> Self {
        Checker {
            state: PegState::new(disks(n)),
            count: 0,
        }
    }
}

impl MoveSink for Checker {
    type Error = Infallible;

    fn record(&mut self, mv: Move) -> Result<(), Self::Error> {
        assert!(self.state.top(mv.from).is_some(), "source peg empty");
        if let Some(top) = self.state.top(mv.to) {
            assert!(mv.disk < top, "disk {} onto smaller disk {}", mv.disk, top);
        }
        self.state.apply(mv);
        self.count += 1;

        for peg in Peg::ALL {
            let stack = self.state.peg(peg);
            assert!(stack.windows(2).all(|w| w[0] > w[1]), "peg {} out of order", peg);
        }
        let mut all: Vec<u32> = Peg::ALL
            .iter()
            .flat_map(|&p| self.state.peg(p).iter().copied())
            .collect();
        all.sort_unstable();
        assert_eq!(all, (1..=self.state.disks()).collect::<Vec<_>>());
        Ok(())
    }
}

#[test]
fn test_three_disk_sequence() {
    use Peg::{A, B, C};
    let pairs: Vec<(Peg, Peg)> = moves(disks(3), PegRoles::STANDARD)
        .iter()
        .map(|mv| (mv.from, mv.to))
        .collect();
    assert_eq!(
        pairs,
        vec![(A, C), (A, B), (C, B), (A, C), (B, A), (B, C), (A, C)]
    );
}

#[test]
fn test_two_disk_final_state() {
    let mut checker = Checker::new(2);
    solver::solve(disks(2), PegRoles::STANDARD, &mut checker).unwrap();
    assert_eq!(checker.state.peg(Peg::C), &[2, 1]);
    assert!(checker.state.peg(Peg::A).is_empty());
    assert!(checker.state.peg(Peg::B).is_empty());
}

#[test]
fn test_other_roles() {
    let mut state = PegState::new(disks(3)).with_destination(Peg::B);
    for mv in moves(disks(3), PegRoles::new(Peg::A, Peg::B).unwrap()) {
        state.apply(mv);
    }
    assert!(state.is_solved());

    let mut state = state.with_destination(Peg::A);
    for mv in moves(disks(3), PegRoles::new(Peg::B, Peg::A).unwrap()) {
        state.apply(mv);
    }
    assert!(state.is_solved());
    assert_eq!(state.peg(Peg::A), &[3, 2, 1]);
}

#[test]
fn test_transcript_and_animation_agree() {
    let mut transcript = Transcript::new(Vec::new());
    solver::solve(disks(4), PegRoles::STANDARD, &mut transcript).unwrap();
    let text = String::from_utf8(transcript.into_inner()).unwrap();

    let mut screen = StepLog::default();
    let mut animator = Animator::new(PegState::new(disks(4)), &mut screen, Duration::ZERO);
    solver::solve(disks(4), PegRoles::STANDARD, &mut animator).unwrap();
    assert!(animator.state().is_solved());

    let animated: Vec<String> = screen
        .steps
        .iter()
        .map(|s| format!("Move disk {} from {} to {}", s.mv.disk, s.mv.from, s.mv.to))
        .collect();
    assert_eq!(text.lines().collect::<Vec<_>>(), animated);
}

#[test]
fn test_sequence_is_deterministic() {
    assert_eq!(
        moves(disks(8), PegRoles::STANDARD),
        moves(disks(8), PegRoles::STANDARD)
    );
}

#[test]
fn test_zero_disks_rejected() {
    let err = DiskCount::try_from(0).unwrap_err();
    assert_eq!(err.to_string(), "Enter a number between 1 and 20.");
}

#[test]
fn test_largest_puzzle_move_count() {
    let mut count = Counter(0);
    solver::solve(disks(20), PegRoles::STANDARD, &mut count).unwrap();
    assert_eq!(count.0, 1_048_575);
}

struct Counter(u64);

impl MoveSink for Counter {
    type Error = Infallible;

    fn record(&mut self, _: Move) -> Result<(), Self::Error> {
        self.0 += 1;
        Ok(())
    }
}

#[derive(Default)]
struct StepLog {
    steps: Vec<Step>,
}

impl Screen for StepLog {
    type Error = Infallible;

    fn draw(&mut self, _: &PegState, step: Option<&Step>) -> Result<(), Self::Error> {
        self.steps.extend(step.copied());
        Ok(())
    }

    fn gate(&mut self, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn finish(&mut self, _: &Summary) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[test]
fn test_plain_session_end_to_end() {
    let mut screen = PlainScreen::new("\n\n".as_bytes(), Vec::new());
    let summary = session::run(&mut screen, disks(3), Duration::ZERO).expect("run failed");
    assert_eq!(summary.moves, 7);

    let out = String::from_utf8(screen.into_output()).unwrap();
    assert!(out.contains("Move 1: Disk 1 from A to C"));
    assert!(out.contains("Move 7: Disk 1 from A to C"));
    assert!(out.contains("Puzzle solved in 7 moves!"));
}

#[test]
fn test_session_honours_delay() {
    let mut screen = PlainScreen::new("\n\n".as_bytes(), Vec::new());
    let summary = session::run(&mut screen, disks(2), Duration::from_millis(10)).unwrap();
    assert!(summary.elapsed >= Duration::from_millis(30));
}

proptest! {
    #[test]
    fn prop_move_count_and_invariants(n in 1u32..=12) {
        let mut checker = Checker::new(n);
        solver::solve(disks(n), PegRoles::STANDARD, &mut checker).unwrap();

        prop_assert_eq!(checker.count, (1u64 << n) - 1);
        prop_assert!(checker.state.is_solved());
        prop_assert_eq!(checker.state.peg(Peg::C).to_vec(), (1..=n).rev().collect::<Vec<_>>());
    }

    #[test]
    fn prop_any_roles_solve(n in 1u32..=8, src in 0usize..3, dst in 0usize..3) {
        prop_assume!(src != dst);
        let roles = PegRoles::new(Peg::ALL[src], Peg::ALL[dst]).unwrap();
        let sequence = moves(disks(n), roles);
        prop_assert_eq!(sequence.len() as u64, (1u64 << n) - 1);
        prop_assert_eq!(sequence.first().map(|m| m.disk), Some(1));
        prop_assert_eq!(sequence[sequence.len() / 2].disk, n);
        prop_assert_eq!(sequence[sequence.len() / 2].from, roles.source);
        prop_assert_eq!(sequence[sequence.len() / 2].to, roles.destination);
    }
}
