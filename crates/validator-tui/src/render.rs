use crate::app::App;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;
use validator_core::Position;

// Grid footprint: 9 cells of 3 chars plus 10 border columns,
// 9 cell rows interleaved with 10 separator rows.
const GRID_WIDTH: u16 = 37;
const GRID_HEIGHT: u16 = 19;

const HEAVY_RULE: &str = "+===+===+===+===+===+===+===+===+===+";
const LIGHT_RULE: &str = "+---+---+---+---+---+---+---+---+---+";

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide, Clear(ClearType::All))?;

    let start_x = if term_width > GRID_WIDTH {
        (term_width - GRID_WIDTH) / 2
    } else {
        1
    };
    let start_y = if term_height > GRID_HEIGHT + 9 { 2 } else { 1 };

    render_grid(stdout, app, start_x, start_y)?;

    let status_y = start_y + GRID_HEIGHT + 1;
    render_status(stdout, app, start_x, status_y)?;
    render_controls(stdout, app, start_x, status_y + 3)?;

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_width)?;
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    execute!(stdout, SetBackgroundColor(theme.bg))?;

    // Top border (thick)
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.box_border),
        Print(HEAVY_RULE)
    )?;

    for row in 0..9 {
        let cell_y = y + 1 + row as u16 * 2;

        execute!(stdout, MoveTo(x, cell_y))?;

        for col in 0..9 {
            // Thick bars at 3x3 boundaries
            let (bar, bar_color) = if col % 3 == 0 {
                ("║", theme.box_border)
            } else {
                ("│", theme.border)
            };
            execute!(
                stdout,
                SetBackgroundColor(theme.bg),
                SetForegroundColor(bar_color),
                Print(bar)
            )?;

            render_cell(stdout, app, Position::new(row, col))?;
        }
        execute!(
            stdout,
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.box_border),
            Print("║")
        )?;

        // Horizontal separator, thick under each box band
        let (rule, rule_color) = if row == 8 || (row + 1) % 3 == 0 {
            (HEAVY_RULE, theme.box_border)
        } else {
            (LIGHT_RULE, theme.border)
        };
        execute!(
            stdout,
            MoveTo(x, cell_y + 1),
            SetForegroundColor(rule_color),
            Print(rule)
        )?;
    }

    Ok(())
}

fn render_cell(stdout: &mut io::Stdout, app: &App, pos: Position) -> io::Result<()> {
    let theme = &app.theme;
    let value = app.session.grid().get(pos);
    let is_cursor = pos == app.cursor;
    let is_flagged = app.is_flagged(pos);

    let bg = if is_cursor {
        theme.selected_bg
    } else if is_flagged {
        theme.flagged_bg
    } else {
        theme.bg
    };
    let fg = if is_flagged {
        theme.error
    } else if value == 0 {
        theme.empty
    } else {
        theme.filled
    };

    execute!(stdout, SetBackgroundColor(bg), SetForegroundColor(fg))?;

    // Cell content: 3 chars " X "
    if value == 0 {
        execute!(stdout, Print(" · "))?;
    } else {
        execute!(stdout, Print(format!(" {} ", value)))?;
    }

    Ok(())
}

fn render_status(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let result = app.session.result();

    execute!(stdout, SetBackgroundColor(theme.bg), MoveTo(x, y))?;
    if result.is_cleared() {
        execute!(
            stdout,
            SetForegroundColor(theme.info),
            Print("Press Enter to validate the board")
        )?;
    } else {
        let color = if result.is_error {
            theme.error
        } else {
            theme.success
        };
        execute!(stdout, SetForegroundColor(color), Print(&result.message))?;
    }

    execute!(
        stdout,
        MoveTo(x, y + 1),
        SetForegroundColor(theme.info),
        Print(format!(
            "Cell: Row {} Col {}   Empty cells: {}",
            app.cursor.row + 1,
            app.cursor.col + 1,
            app.session.grid().empty_count()
        ))
    )?;

    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    execute!(stdout, SetBackgroundColor(theme.bg))?;

    let controls = [
        ("hjkl/Arrows", "Move"),
        ("wasd", "Jump box"),
        ("1-9", "Set cell"),
        ("Enter/v", "Validate"),
        ("n", "Clear board"),
        ("g", "Good sample"),
        ("b", "Bad sample"),
        ("t", "Theme"),
        ("q", "Quit"),
    ];

    // Display in 3 columns (3 items each)
    for (i, (key, desc)) in controls.iter().enumerate() {
        let col = i / 3;
        let row = i % 3;
        let cx = x + (col as u16) * 24;
        let cy = y + row as u16;

        execute!(
            stdout,
            MoveTo(cx, cy),
            SetForegroundColor(theme.key),
            Print(format!("{:>11}", key)),
            SetForegroundColor(theme.info),
            Print(format!(" {}", desc))
        )?;
    }

    Ok(())
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    term_width: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let padded = format!("  {}  ", msg);
    let x = term_width.saturating_sub(padded.len() as u16) / 2;

    execute!(
        stdout,
        MoveTo(x, 0),
        SetForegroundColor(theme.fg),
        SetBackgroundColor(theme.selected_bg),
        Print(&padded)
    )?;

    Ok(())
}
