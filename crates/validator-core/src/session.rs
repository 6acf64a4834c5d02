//! Edit session over a grid, with commit and rollback.

use crate::{Grid, Position, ValidationResult};

/// Outcome of a single cell edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellUpdate {
    /// The value was in range and is now part of the committed state.
    Committed,
    /// The value was out of range; the grid was rolled back unchanged.
    Rejected,
}

impl CellUpdate {
    /// True when the edit was committed.
    pub fn is_committed(self) -> bool {
        matches!(self, CellUpdate::Committed)
    }
}

/// An editable Sudoku board with validation and rollback.
///
/// The session keeps two independent copies of the board: the working grid
/// handed out to callers and a reference grid holding the last committed
/// state. [`set_cell`](GridValidator::set_cell) writes in-range values into
/// the reference grid and mirrors it back into the working grid;
/// out-of-range values leave the reference untouched and reset the working
/// grid to match it. Outside of [`validate_grid`](GridValidator::validate_grid)
/// the two grids never diverge.
#[derive(Debug, Clone, Default)]
pub struct GridValidator {
    grid: Grid,
    reference: Grid,
    result: ValidationResult,
}

impl GridValidator {
    /// Creates a session over an all-empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session starting from `seed`.
    pub fn with_seed(seed: Grid) -> Self {
        Self {
            grid: seed.clone(),
            reference: seed,
            result: ValidationResult::cleared(),
        }
    }

    /// The working grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The last committed state.
    pub fn reference(&self) -> &Grid {
        &self.reference
    }

    /// The most recent validation outcome ([`ValidationResult::cleared`]
    /// until a validation runs).
    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    /// Validates the working grid and stores the outcome.
    pub fn validate(&mut self) -> &ValidationResult {
        self.result = self.grid.validate();
        &self.result
    }

    /// Validates a caller-supplied grid and stores the outcome.
    ///
    /// The session's own grids are not touched; this is the one path where
    /// the grid being judged may differ from the committed state.
    pub fn validate_grid(&mut self, grid: &Grid) -> &ValidationResult {
        self.result = grid.validate();
        &self.result
    }

    /// Applies a single cell edit.
    ///
    /// Any pending validation outcome is discarded first, whether or not
    /// the edit goes through. A value in `1..=9` is committed; anything
    /// else is rejected and the working grid rolls back to the reference
    /// state. `0` is rejected like any other out-of-range value, so a
    /// committed cell cannot be emptied again through this path.
    pub fn set_cell(&mut self, pos: Position, value: u8) -> CellUpdate {
        self.result = ValidationResult::cleared();
        if (1..=9).contains(&value) {
            self.reference.set(pos, value);
            self.grid = self.reference.clone();
            CellUpdate::Committed
        } else {
            self.grid = self.reference.clone();
            CellUpdate::Rejected
        }
    }
}
