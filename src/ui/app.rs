//! Full-screen animation screen

use crate::config::MOVE_LOG_CAPACITY;
use crate::errors::AppError;
use crate::render;
use crate::session::{Screen, Step, Summary};
use crate::tower::{DiskCount, PegState};
use crate::ui::panes::{self, Phase};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Continue,
    Quit,
    Ignore,
}

fn key_action(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }
    match key.code {
        KeyCode::Enter => KeyAction::Continue,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        // Raw mode swallows SIGINT, so Ctrl-C arrives as a key
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}

/// The main application state
pub struct App<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,

    /// Latest state handed to `draw`, kept for redraws on resize
    board: PegState,

    /// Most recent captions, oldest first, at most `MOVE_LOG_CAPACITY`
    log: VecDeque<String>,
    log_scroll: usize,

    status_message: String,

    /// Prompt shown after the status message while a gate is open
    hint: Option<String>,

    phase: Phase,
    current_move: u64,
    total_moves: u64,
}

impl<'a, B: Backend> App<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, disks: DiskCount) -> Self {
        App {
            terminal,
            board: PegState::new(disks),
            log: VecDeque::new(),
            log_scroll: usize::MAX,
            status_message: String::from("Ready!"),
            hint: None,
            phase: Phase::Ready,
            current_move: 0,
            total_moves: disks.total_moves(),
        }
    }

    /// Repaint the whole screen from the stored state
    fn redraw(&mut self) -> Result<(), AppError> {
        let App {
            terminal,
            board,
            log,
            log_scroll,
            status_message,
            hint,
            phase,
            current_move,
            total_moves,
        } = self;

        let message = match hint {
            Some(hint) => format!("{} {}", status_message, hint),
            None => status_message.clone(),
        };

        let entries: &[String] = log.make_contiguous();
        terminal.draw(|f| {
            render(
                f,
                board,
                entries,
                log_scroll,
                &message,
                *current_move,
                *total_moves,
                *phase,
            )
        })?;
        Ok(())
    }

    /// Block for the next key press, redrawing on resize
    fn wait_for_key(&mut self, timeout: Option<Duration>) -> Result<KeyAction, AppError> {
        if let Some(timeout) = timeout {
            if !event::poll(timeout)? {
                return Ok(KeyAction::Ignore);
            }
        }
        match event::read()? {
            Event::Key(key) => Ok(key_action(key)),
            Event::Resize(_, _) => {
                self.redraw()?;
                Ok(KeyAction::Ignore)
            }
            _ => Ok(KeyAction::Ignore),
        }
    }

    fn push_log(&mut self, caption: String) {
        self.log.push_back(caption);
        while self.log.len() > MOVE_LOG_CAPACITY {
            self.log.pop_front();
        }
    }

    fn interrupted(&self) -> AppError {
        AppError::Interrupted {
            moves: self.current_move,
        }
    }
}

/// Lay out and render every pane
#[allow(clippy::too_many_arguments)]
fn render(
    frame: &mut Frame,
    board: &PegState,
    log: &[String],
    log_scroll: &mut usize,
    message: &str,
    current_move: u64,
    total_moves: u64,
    phase: Phase,
) {
    let size = frame.area();

    // Board and log side by side, status bar at the bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_chunks[0]);

    panes::render_board_pane(frame, columns[0], board);
    panes::render_log_pane(frame, columns[1], log, log_scroll);
    panes::render_status_bar(
        frame,
        main_chunks[1],
        message,
        current_move,
        total_moves,
        phase,
    );
}

impl<B: Backend> Screen for App<'_, B> {
    type Error = AppError;

    fn draw(&mut self, state: &PegState, step: Option<&Step>) -> Result<(), AppError> {
        self.board = state.clone();
        if let Some(step) = step {
            self.phase = Phase::Playing;
            self.current_move = step.number;
            self.total_moves = step.total;
            self.push_log(render::caption(step));
            self.log_scroll = usize::MAX;
            self.status_message = format!(
                "Disk {} {} → {}",
                step.mv.disk, step.mv.from, step.mv.to
            );
        }
        self.redraw()
    }

    fn pause(&mut self, delay: Duration) -> Result<(), AppError> {
        let deadline = Instant::now() + delay;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if self.wait_for_key(Some(remaining))? == KeyAction::Quit {
                return Err(self.interrupted());
            }
            if remaining.is_zero() {
                return Ok(());
            }
        }
    }

    fn gate(&mut self, message: &str) -> Result<(), AppError> {
        self.hint = Some(message.to_string());
        self.redraw()?;
        loop {
            match self.wait_for_key(None)? {
                KeyAction::Continue => break,
                KeyAction::Quit => return Err(self.interrupted()),
                KeyAction::Ignore => {}
            }
        }
        self.hint = None;
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> Result<(), AppError> {
        self.phase = Phase::Solved;
        self.status_message = format!(
            "Solved in {} moves ({:.2}s)",
            summary.moves,
            summary.elapsed.as_secs_f64()
        );
        self.redraw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tower::{Move, Peg};
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_key_actions() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(key_action(press(KeyCode::Enter)), KeyAction::Continue);
        assert_eq!(key_action(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(key_action(press(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(key_action(press(KeyCode::Char('c'))), KeyAction::Ignore);
        assert_eq!(
            key_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_draw_step_updates_panes() {
        let mut terminal = Terminal::new(TestBackend::new(120, 12)).unwrap();
        let disks = DiskCount::try_from(2).unwrap();
        let mut app = App::new(&mut terminal, disks);

        let mut state = PegState::new(disks);
        let mv = Move {
            disk: 1,
            from: Peg::A,
            to: Peg::B,
        };
        state.apply(mv);
        app.draw(
            &state,
            Some(&Step {
                number: 1,
                total: 3,
                mv,
            }),
        )
        .unwrap();
        assert_eq!(app.log, ["Move 1: Disk 1 from A to B"]);
        assert_eq!(app.phase, Phase::Playing);

        let text = screen_text(&terminal);
        assert!(text.contains("Move 1/3"));
        assert!(text.contains("Move 1: Disk 1 from A to B"));
        assert!(text.contains("PLAYING"));
    }

    #[test]
    fn test_counter_follows_step_total() {
        let mut terminal = Terminal::new(TestBackend::new(120, 12)).unwrap();
        let disks = DiskCount::try_from(3).unwrap();
        let mut app = App::new(&mut terminal, disks);

        let mut state = PegState::new(disks);
        let mv = Move {
            disk: 1,
            from: Peg::A,
            to: Peg::C,
        };
        state.apply(mv);
        app.draw(
            &state,
            Some(&Step {
                number: 1,
                total: 9,
                mv,
            }),
        )
        .unwrap();
        assert_eq!(app.total_moves, 9);
        assert!(screen_text(&terminal).contains("Move 1/9"));
    }

    #[test]
    fn test_log_keeps_latest_captions() {
        let mut terminal = Terminal::new(TestBackend::new(120, 12)).unwrap();
        let disks = DiskCount::try_from(1).unwrap();
        let mut app = App::new(&mut terminal, disks);

        let extra = 5;
        for i in 0..MOVE_LOG_CAPACITY + extra {
            app.push_log(format!("entry {}", i));
        }
        assert_eq!(app.log.len(), MOVE_LOG_CAPACITY);
        assert_eq!(app.log.front().map(String::as_str), Some("entry 5"));
        assert_eq!(
            app.log.back().cloned(),
            Some(format!("entry {}", MOVE_LOG_CAPACITY + extra - 1))
        );

        app.redraw().unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains(&format!("entry {}", MOVE_LOG_CAPACITY + extra - 1)));
    }

    #[test]
    fn test_finish_shows_summary() {
        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        let disks = DiskCount::try_from(1).unwrap();
        let mut app = App::new(&mut terminal, disks);
        app.finish(&Summary {
            moves: 1,
            elapsed: Duration::from_millis(20),
        })
        .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Solved in 1 moves (0.02s)"));
        assert!(text.contains("SOLVED"));
    }
}
