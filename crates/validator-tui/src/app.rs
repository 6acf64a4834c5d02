use crate::theme::{Theme, ThemeKind};
use crossterm::event::{KeyCode, KeyEvent};
use log::debug;
use validator_core::{
    invalid_grid, valid_grid, CellUpdate, Grid, GridValidator, Position, Violation,
};

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// The main application state
pub struct App {
    /// Current edit session over the board
    pub session: GridValidator,
    /// Currently selected cell position
    pub cursor: Position,
    /// Selected theme
    pub theme_kind: ThemeKind,
    /// Color theme
    pub theme: Theme,
    /// Message to display
    pub message: Option<String>,
    /// Message timer
    message_timer: u32,
    /// Rule behind the last failed validation, drives cell highlighting
    pub flagged: Option<Violation>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new app over an empty board
    pub fn new() -> Self {
        Self::with_board(Grid::new(), ThemeKind::Dark)
    }

    /// Create a new app over `board`
    pub fn with_board(board: Grid, theme_kind: ThemeKind) -> Self {
        Self {
            session: GridValidator::with_seed(board),
            cursor: Position::new(4, 4),
            theme_kind,
            theme: theme_kind.theme(),
            message: None,
            message_timer: 0,
            flagged: None,
        }
    }

    /// Update timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 30; // ~3 seconds at 100ms poll
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),

            // Jump to box
            KeyCode::Char('w') => self.jump_box(-1, 0),
            KeyCode::Char('s') => self.jump_box(1, 0),
            KeyCode::Char('a') => self.jump_box(0, -1),
            KeyCode::Char('d') => self.jump_box(0, 1),

            // Number input
            KeyCode::Char(c @ '1'..='9') => {
                let value = c.to_digit(10).unwrap() as u8;
                self.enter_value(value);
            }

            // Zero is out of range, so these can never empty a cell
            KeyCode::Char('0') | KeyCode::Delete | KeyCode::Backspace => {
                self.enter_value(0);
            }

            // Validate
            KeyCode::Enter | KeyCode::Char('v') => self.run_validation(),

            // Boards
            KeyCode::Char('n') => self.load_board(Grid::new(), "Fresh board"),
            KeyCode::Char('g') => self.load_board(valid_grid(), "Loaded the solved sample"),
            KeyCode::Char('b') => self.load_board(invalid_grid(), "Loaded the conflicted sample"),

            // Theme cycle
            KeyCode::Char('t') => {
                self.theme_kind = self.theme_kind.next();
                self.theme = self.theme_kind.theme();
                self.show_message(&format!("{} theme", self.theme_kind.label()));
            }

            _ => {}
        }

        AppAction::Continue
    }

    /// Route a cell edit through the session
    fn enter_value(&mut self, value: u8) {
        self.flagged = None;
        match self.session.set_cell(self.cursor, value) {
            CellUpdate::Committed => {
                debug!(
                    "cell ({}, {}) set to {}",
                    self.cursor.row, self.cursor.col, value
                );
            }
            CellUpdate::Rejected => {
                self.show_message("Cells take 1-9 only, edit discarded");
            }
        }
    }

    /// Validate the board and remember which region failed, if any
    fn run_validation(&mut self) {
        self.flagged = self.session.grid().check().err();
        let result = self.session.validate();
        debug!(
            "validate: is_error={} message={:?}",
            result.is_error, result.message
        );
    }

    /// Start a fresh session over `board`
    fn load_board(&mut self, board: Grid, note: &str) {
        self.session = GridValidator::with_seed(board);
        self.flagged = None;
        self.show_message(note);
    }

    fn move_cursor(&mut self, row_delta: i32, col_delta: i32) {
        let new_row = (self.cursor.row as i32 + row_delta).clamp(0, 8) as usize;
        let new_col = (self.cursor.col as i32 + col_delta).clamp(0, 8) as usize;
        self.cursor = Position::new(new_row, new_col);
    }

    fn jump_box(&mut self, row_delta: i32, col_delta: i32) {
        let (box_row, box_col) = self.cursor.subgrid();

        let new_box_row = (box_row as i32 + row_delta).clamp(0, 2) as usize;
        let new_box_col = (box_col as i32 + col_delta).clamp(0, 2) as usize;

        // Move to center of new box
        self.cursor = Position::new(new_box_row * 3 + 1, new_box_col * 3 + 1);
    }

    /// Check if a position belongs to the region the last validation flagged
    pub fn is_flagged(&self, pos: Position) -> bool {
        match self.flagged {
            Some(Violation::OutOfRange { pos: bad, .. }) => pos == bad,
            Some(Violation::DuplicateInRow { row }) => pos.row == row,
            Some(Violation::DuplicateInColumn { col }) => pos.col == col,
            Some(Violation::DuplicateInSubgrid { box_row, box_col }) => {
                pos.subgrid() == (box_row, box_col)
            }
            None => false,
        }
    }
}
