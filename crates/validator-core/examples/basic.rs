//! Basic example of using the grid validation engine

use validator_core::{invalid_grid, valid_grid, Grid, GridValidator, Position};

fn main() {
    // Start an empty editing session
    println!("Starting an empty editing session...\n");
    let mut session = GridValidator::new();
    println!("Empty cells: {}", session.grid().empty_count());

    let result = session.validate();
    println!("Validation: {} (error: {})\n", result.message, result.is_error);

    // Commit a few edits
    println!("--- Editing cells ---\n");
    let update = session.set_cell(Position::new(0, 0), 5);
    println!("set (0,0) = 5 -> {:?}", update);

    // Out-of-range input rolls the board back to the committed state
    let update = session.set_cell(Position::new(0, 0), 0);
    println!("set (0,0) = 0 -> {:?}", update);
    println!(
        "cell (0,0) is still {}\n",
        session.grid().get(Position::new(0, 0))
    );

    // Validate the solved sample board
    println!("--- Validating the solved sample ---\n");
    let mut session = GridValidator::with_seed(valid_grid());
    println!("{}", session.grid());
    let result = session.validate();
    println!("Validation: {}\n", result.message);

    // And the conflicted one
    println!("--- Validating the conflicted sample ---\n");
    let mut session = GridValidator::with_seed(invalid_grid());
    let result = session.validate();
    println!("Validation: {}\n", result.message);

    // Parse a board from a string; boards with empty cells never pass
    println!("--- Parsing a board from string ---\n");
    let cells = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
    if let Some(grid) = Grid::from_string(cells) {
        println!("{}", grid);
        println!("Empty cells: {}", grid.empty_count());
        println!("Validation: {}", grid.validate().message);
    }
}
