use fifteen_puzzle::Label;
use fifteen_puzzle::layout::PlayArea;
use fifteen_puzzle::round::{PuzzleConfig, Round};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn main() {
    println!("Fifteen Puzzle\n");

    // Example: deal a reproducible round
    let config = PuzzleConfig::default();
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut round = match Round::new(&config, &mut rng) {
        Ok(round) => round,
        Err(error) => {
            eprintln!("Could not deal a round: {}", error);
            return;
        }
    };

    println!("Scrambled board (seed 2024):");
    print!("{}", round.board());

    // Only neighbors of the empty slot can slide
    let movable: Vec<u8> = (1..=15)
        .filter(|&number| round.board().can_move(Label::numbered(number)) == Ok(true))
        .collect();
    println!("\nMovable tiles: {:?}", movable);

    // The same flow a pointer handler uses: viewport pixels to a cell,
    // the cell to a move request
    let area = PlayArea::centered(1000.0, 800.0, round.board().grid());
    println!(
        "\nIn a 1000x800 viewport the board is a {} px square at ({}, {})",
        area.side(),
        area.x(),
        area.y()
    );

    println!("\nClicking the neighbor of the empty slot four times:");
    for _ in 0..4 {
        let grid = round.board().grid();
        let empty = round.board().empty_position();
        let (row, col) = (grid.row_of(empty), grid.col_of(empty));

        // Aim left of the empty slot, or above it from the first column
        let (row, col) = if col > 0 {
            (row, col - 1)
        } else if row > 0 {
            (row - 1, col)
        } else {
            break;
        };

        let label = round
            .board()
            .tile_at(row, col)
            .map(|tile| tile.label())
            .unwrap_or_else(Label::empty);
        let (x, y) = match area.cell_origin(row, col) {
            Some(origin) => origin,
            None => break,
        };
        let half = area.cell_size() / 2.0;

        let outcome = match area.cell_at(x + half, y + half) {
            Some((row, col)) => round.move_at(row, col),
            None => break,
        };
        println!(
            "  click ({:6.1}, {:6.1}) -> tile {} moved: {}",
            x + half,
            y + half,
            label,
            outcome.moved
        );
    }

    println!("\nBoard after play:");
    print!("{}", round.board());
    println!("\nSolved: {}", round.is_solved());
}
