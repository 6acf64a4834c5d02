//! Ready-made boards for demos and tests.

use crate::Grid;

/// A completely solved board that passes every rule.
pub fn valid_grid() -> Grid {
    Grid::from_rows([
        [5, 3, 4, 6, 7, 8, 9, 1, 2],
        [6, 7, 2, 1, 9, 5, 3, 4, 8],
        [1, 9, 8, 3, 4, 2, 5, 6, 7],
        [8, 5, 9, 7, 6, 1, 4, 2, 3],
        [4, 2, 6, 8, 5, 3, 7, 9, 1],
        [7, 1, 3, 9, 2, 4, 8, 5, 6],
        [9, 6, 1, 5, 3, 7, 2, 8, 4],
        [2, 8, 7, 4, 1, 9, 6, 3, 5],
        [3, 4, 5, 2, 8, 6, 1, 7, 9],
    ])
}

/// A fully-filled board that looks plausible but is not a solution.
///
/// Every row holds nine distinct digits; the first violation is a repeated
/// 7 in column 7 (1-indexed).
pub fn invalid_grid() -> Grid {
    Grid::from_rows([
        [8, 2, 4, 7, 5, 9, 3, 1, 6],
        [6, 1, 9, 8, 3, 2, 4, 7, 5],
        [7, 5, 3, 6, 1, 4, 9, 2, 8],
        [9, 7, 2, 4, 6, 8, 5, 3, 1],
        [5, 4, 6, 9, 2, 1, 7, 8, 3],
        [1, 3, 8, 5, 7, 6, 2, 4, 9],
        [4, 6, 5, 1, 8, 3, 7, 9, 2],
        [2, 8, 1, 3, 9, 7, 6, 5, 4],
        [3, 9, 7, 2, 4, 5, 8, 1, 6],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_sample_passes() {
        let result = valid_grid().validate();
        assert!(!result.is_error);
        assert_eq!(result.message, "Valid Sudoku puzzle");
    }

    #[test]
    fn test_invalid_sample_fails_on_column_seven() {
        let result = invalid_grid().validate();
        assert!(result.is_error);
        assert_eq!(result.message, "Column 7 contains duplicate numbers");
    }

    #[test]
    fn test_samples_are_fully_filled() {
        assert_eq!(valid_grid().empty_count(), 0);
        assert_eq!(invalid_grid().empty_count(), 0);
    }
}
