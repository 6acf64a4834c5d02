//! Core Sudoku grid validation engine.
//!
//! A [`Grid`] holds a 9x9 board of raw cell values where `0` marks an empty
//! cell. [`Grid::validate`] checks the standard Sudoku rules and reports the
//! first problem it finds as a [`ValidationResult`]. [`GridValidator`] wraps
//! a grid in an edit session that commits in-range values and rolls anything
//! else back to the last committed state.

mod samples;
mod session;
mod validation;

pub use samples::{invalid_grid, valid_grid};
pub use session::{CellUpdate, GridValidator};
pub use validation::{ValidationResult, Violation};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows and columns in a grid.
pub const GRID_SIZE: usize = 9;

/// Number of rows and columns in one 3x3 subgrid.
pub const BOX_SIZE: usize = 3;

/// A cell coordinate on the grid.
///
/// Rows and columns are both 0-indexed from the top-left corner. Messages
/// shown to users report them 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..9`.
    pub fn new(row: usize, col: usize) -> Self {
        assert!(
            row < GRID_SIZE && col < GRID_SIZE,
            "position out of bounds: ({}, {})",
            row,
            col
        );
        Self { row, col }
    }

    /// Row-major index of this position, `0..81`.
    pub fn index(self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    /// Position for a row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `0..81`.
    pub fn from_index(index: usize) -> Self {
        assert!(
            index < GRID_SIZE * GRID_SIZE,
            "cell index out of bounds: {}",
            index
        );
        Self {
            row: index / GRID_SIZE,
            col: index % GRID_SIZE,
        }
    }

    /// The 3x3 subgrid containing this position, as `(box_row, box_col)`
    /// with both in `0..3`.
    pub fn subgrid(self) -> (usize, usize) {
        (self.row / BOX_SIZE, self.col / BOX_SIZE)
    }
}

/// Stable per-cell key for callers that render the 81 cells as a flat list.
pub const fn cell_key(index: usize) -> usize {
    index
}

/// A 9x9 Sudoku board.
///
/// Cells hold raw values: `1..=9` for digits, `0` for empty. A grid does
/// not police its contents on write; out-of-range values are caught by
/// [`Grid::validate`], and the edit policy lives in [`GridValidator`].
///
/// Serializes as the bare nested array (`[[u8; 9]; 9]`), so a JSON caller
/// can post a plain 9x9 array of numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty grid (all cells zero).
    pub fn new() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Creates a grid from row-major cell values.
    pub fn from_rows(rows: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells: rows }
    }

    /// Parses a grid from an 81-character row-major string.
    ///
    /// Digits `1`-`9` are cell values; `0` and `.` mark empty cells.
    /// Returns `None` on any other character or length.
    pub fn from_string(s: &str) -> Option<Self> {
        if s.chars().count() != GRID_SIZE * GRID_SIZE {
            return None;
        }
        let mut grid = Self::new();
        for (i, c) in s.chars().enumerate() {
            let value = match c {
                '1'..='9' => c as u8 - b'0',
                '0' | '.' => 0,
                _ => return None,
            };
            let pos = Position::from_index(i);
            grid.cells[pos.row][pos.col] = value;
        }
        Some(grid)
    }

    /// Returns the value at `pos` (`0` if empty).
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Writes a raw value at `pos`, without a range check.
    pub fn set(&mut self, pos: Position, value: u8) {
        self.cells[pos.row][pos.col] = value;
    }

    /// Row-major view of all cell values.
    pub fn rows(&self) -> &[[u8; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Compact 81-character row-major string, `.` for anything that is not
    /// a digit `1`-`9`. Inverse of [`Grid::from_string`].
    pub fn to_string_compact(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&v| match v {
                1..=9 => (b'0' + v) as char,
                _ => '.',
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 && row % BOX_SIZE == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for (col, &value) in cells.iter().enumerate() {
                if col > 0 {
                    if col % BOX_SIZE == 0 {
                        write!(f, " | ")?;
                    } else {
                        write!(f, " ")?;
                    }
                }
                if value == 0 {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
