//! Rule checks for a full grid.
//!
//! The scan order is part of the contract: rows first (range check before
//! duplicate check, cell by cell), then columns, then the 3x3 subgrids in
//! block-row-major order. The first problem found wins and everything after
//! it goes unreported.

use crate::{Grid, Position, BOX_SIZE, GRID_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of validating a grid, in display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Human-readable outcome text, empty until a validation has run.
    pub message: String,
    /// True when the grid failed validation.
    pub is_error: bool,
}

impl ValidationResult {
    /// The blank result: no message, no error flag.
    pub fn cleared() -> Self {
        Self {
            message: String::new(),
            is_error: false,
        }
    }

    /// The passing result.
    pub fn valid() -> Self {
        Self {
            message: "Valid Sudoku puzzle".to_string(),
            is_error: false,
        }
    }

    /// A failing result carrying the violation's message.
    pub fn error(violation: Violation) -> Self {
        Self {
            message: violation.to_string(),
            is_error: true,
        }
    }

    /// True when no validation outcome is being reported.
    pub fn is_cleared(&self) -> bool {
        self.message.is_empty() && !self.is_error
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::cleared()
    }
}

/// First rule violation found in a grid.
///
/// Carries enough structure for a front end to point at the offending
/// cell, row, column, or subgrid; [`fmt::Display`] renders the user-facing
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// A cell holds a value outside `1..=9` (empty cells included).
    OutOfRange {
        /// First offending cell in row-major scan order.
        pos: Position,
        /// The raw value found there.
        value: u8,
    },
    /// A row contains the same digit twice.
    DuplicateInRow { row: usize },
    /// A column contains the same digit twice.
    DuplicateInColumn { col: usize },
    /// A 3x3 subgrid contains the same digit twice.
    DuplicateInSubgrid { box_row: usize, box_col: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::OutOfRange { .. } => {
                write!(f, "Invalid input: Numbers should be between 1 and 9")
            }
            Violation::DuplicateInRow { row } => {
                write!(f, "Row {} contains duplicate numbers", row + 1)
            }
            Violation::DuplicateInColumn { col } => {
                write!(f, "Column {} contains duplicate numbers", col + 1)
            }
            Violation::DuplicateInSubgrid { box_row, box_col } => {
                write!(
                    f,
                    "Subgrid {},{} contains duplicate numbers",
                    box_row + 1,
                    box_col + 1
                )
            }
        }
    }
}

impl Grid {
    /// Checks the grid against the Sudoku rules, returning the first
    /// violation in scan order.
    ///
    /// Each row is swept left to right with the range check ahead of the
    /// duplicate check on every cell, so a 0 (or any other out-of-range
    /// value) always reports as `OutOfRange`, never as a duplicate. The
    /// column and subgrid passes run only after every cell has passed the
    /// range check.
    pub fn check(&self) -> Result<(), Violation> {
        for row in 0..GRID_SIZE {
            let mut seen = 0u16;
            for col in 0..GRID_SIZE {
                let value = self.get(Position::new(row, col));
                if !(1..=9).contains(&value) {
                    return Err(Violation::OutOfRange {
                        pos: Position::new(row, col),
                        value,
                    });
                }
                let bit = 1u16 << value;
                if seen & bit != 0 {
                    return Err(Violation::DuplicateInRow { row });
                }
                seen |= bit;
            }
        }

        for col in 0..GRID_SIZE {
            let mut seen = 0u16;
            for row in 0..GRID_SIZE {
                let bit = 1u16 << self.get(Position::new(row, col));
                if seen & bit != 0 {
                    return Err(Violation::DuplicateInColumn { col });
                }
                seen |= bit;
            }
        }

        for box_row in 0..BOX_SIZE {
            for box_col in 0..BOX_SIZE {
                let mut seen = 0u16;
                for row in box_row * BOX_SIZE..(box_row + 1) * BOX_SIZE {
                    for col in box_col * BOX_SIZE..(box_col + 1) * BOX_SIZE {
                        let bit = 1u16 << self.get(Position::new(row, col));
                        if seen & bit != 0 {
                            return Err(Violation::DuplicateInSubgrid { box_row, box_col });
                        }
                        seen |= bit;
                    }
                }
            }
        }

        Ok(())
    }

    /// Validates the grid, rendering the outcome in display form.
    ///
    /// An empty cell counts as out of range, so only a completely filled,
    /// conflict-free grid passes.
    pub fn validate(&self) -> ValidationResult {
        match self.check() {
            Ok(()) => ValidationResult::valid(),
            Err(violation) => ValidationResult::error(violation),
        }
    }
}
