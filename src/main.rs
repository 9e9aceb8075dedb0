// hanoi: Tower of Hanoi solver with terminal animation

use std::io::{self, Write};
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use hanoi::ansi::PlainScreen;
use hanoi::config::{MAX_DELAY_MS, MAX_DISKS, MIN_DELAY_MS, MIN_DISKS};
use hanoi::errors::{AppError, InputError};
use hanoi::session;
use hanoi::solver::{self, Transcript};
use hanoi::tower::{DiskCount, PegRoles};
use hanoi::ui::App;
use hanoi::{logging, prompt};

#[derive(Parser)]
#[command(name = "hanoi")]
#[command(about = "Solve the Tower of Hanoi and animate every move in the terminal")]
struct Args {
    /// Number of disks; prompts when omitted
    #[arg(long, value_parser = clap::value_parser!(u32).range(i64::from(MIN_DISKS)..=i64::from(MAX_DISKS)))]
    disks: Option<u32>,

    /// Delay between moves in milliseconds; prompts when omitted
    #[arg(long, value_parser = parse_delay)]
    delay: Option<f64>,

    /// Skip the confirmation for large puzzles
    #[arg(short, long)]
    yes: bool,

    /// Print the list of moves instead of animating them
    #[arg(long, conflicts_with = "tui")]
    list: bool,

    /// Animate in a full-screen interface with a move log
    #[arg(long)]
    tui: bool,
}

fn parse_delay(s: &str) -> Result<f64, InputError> {
    prompt::parse_in_range(s, &(MIN_DELAY_MS..=MAX_DELAY_MS))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let args = Args::parse();

    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    println!("Tower of Hanoi Visualization");
    println!("----------------------------");

    let disks = match args.disks {
        Some(n) => n,
        None => prompt::read_number(
            &mut input,
            &mut output,
            &format!("Enter number of disks ({}-{})", MIN_DISKS, MAX_DISKS),
            MIN_DISKS..=MAX_DISKS,
        )?,
    };
    let disks = DiskCount::try_from(disks)?;

    if args.list {
        let mut transcript = Transcript::new(io::BufWriter::new(output.lock()));
        solver::solve(disks, PegRoles::STANDARD, &mut transcript)?;
        transcript.into_inner().flush()?;
        return Ok(());
    }

    if !args.yes && !prompt::confirm_large(disks, &mut input, &mut output)? {
        return Ok(());
    }

    let delay_ms = match args.delay {
        Some(ms) => ms,
        None => prompt::read_number(
            &mut input,
            &mut output,
            "Enter animation delay in milliseconds",
            MIN_DELAY_MS..=MAX_DELAY_MS,
        )?,
    };
    let delay = Duration::from_secs_f64(delay_ms / 1000.0);

    if args.tui {
        drop(input);
        return run_tui(disks, delay);
    }

    let mut screen = PlainScreen::new(input, output);
    session::run(&mut screen, disks, delay)?;
    Ok(())
}

/// Animate inside the alternate screen, restoring the terminal afterwards
fn run_tui(disks: DiskCount, delay: Duration) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = {
        let mut app = App::new(&mut terminal, disks);
        session::run(&mut app, disks, delay)
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(summary) => println!("{}", summary),
        Err(e @ AppError::Interrupted { .. }) => println!("{}.", e),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
