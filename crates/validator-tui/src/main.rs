mod app;
mod render;
mod tests;
mod theme;

use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use theme::ThemeKind;
use validator_core::{invalid_grid, valid_grid, Grid};

/// How often timers advance when no input arrives.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Interactive checker for 9x9 Sudoku boards.
#[derive(Parser)]
#[command(name = "sudoku-validator", version, about)]
struct Cli {
    /// Start from an 81-character board string (digits 1-9, with 0 or '.' for empty)
    #[arg(long, value_name = "CELLS", value_parser = parse_grid)]
    grid: Option<Grid>,

    /// Preload a sample board instead of an empty one
    #[arg(long, value_enum, conflicts_with = "grid")]
    sample: Option<Sample>,

    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeKind>,
}

/// Sample boards that can be preloaded from the command line.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Sample {
    /// Fully solved board that passes every rule
    Valid,
    /// Filled board with a column conflict
    Invalid,
}

fn parse_grid(s: &str) -> Result<Grid, String> {
    Grid::from_string(s)
        .ok_or_else(|| "board strings are 81 cells of 1-9, with 0 or '.' for empty".to_string())
}

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let board = starting_grid(&cli);
    let theme = cli.theme.unwrap_or(ThemeKind::Dark);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Run the app
    let result = run_app(&mut stdout, App::with_board(board, theme));

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

/// The board the session starts from.
fn starting_grid(cli: &Cli) -> Grid {
    if let Some(ref board) = cli.grid {
        return board.clone();
    }
    match cli.sample {
        Some(Sample::Valid) => valid_grid(),
        Some(Sample::Invalid) => invalid_grid(),
        None => Grid::new(),
    }
}

fn run_app(stdout: &mut io::Stdout, mut app: App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // Render
        render::render(stdout, &app)?;
        stdout.flush()?;

        // Handle input with timeout so timers keep moving
        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key) {
                    app::AppAction::Continue => {}
                    app::AppAction::Quit => break,
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
