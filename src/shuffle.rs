use crate::{Board, Direction, Grid};
use rand::Rng;

/// Number of scramble steps the standard game uses
pub const DEFAULT_SHUFFLE_ITERATIONS: u32 = 500;

/// Scramble `board` in place with `iterations` random moves of the empty
/// slot, then park the empty slot in the bottom-right corner.
///
/// Scrambling composes legal single-tile slides only, so the result is
/// always solvable by play.
pub fn shuffle<R: Rng + ?Sized>(board: &mut Board, iterations: u32, rng: &mut R) {
    for _ in 0..iterations {
        let chosen = rng.gen_range(0..Direction::ALL.len());
        scramble_step(board, chosen);
    }
    park_empty(board);
}

/// A freshly scrambled board on `grid`
pub fn shuffled_board<R: Rng + ?Sized>(grid: Grid, iterations: u32, rng: &mut R) -> Board {
    let mut board = Board::solved_on(grid);
    shuffle(&mut board, iterations, rng);
    board
}

/// Apply one scramble step: try the direction at `chosen`, and when it is
/// blocked cascade through the rest of `Direction::ALL` in order until one
/// fits. Returns the direction that moved.
///
/// Right is last in the order and has nothing to cascade to, so picking it
/// with the empty slot on the last column consumes the step without moving.
fn scramble_step(board: &mut Board, chosen: usize) -> Option<Direction> {
    for &direction in &Direction::ALL[chosen..] {
        if board.try_move_empty(direction) {
            return Some(direction);
        }
    }
    None
}

/// Walk the empty slot down to the bottom row, then right to the last
/// column, one legal slide at a time.
fn park_empty(board: &mut Board) {
    while board.try_move_empty(Direction::Down) {}
    while board.try_move_empty(Direction::Right) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Label;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn assert_permutation(board: &Board) {
        let mut indices: Vec<u8> = board
            .tiles()
            .iter()
            .map(|tile| tile.position().index())
            .collect();
        indices.sort_unstable();
        let expected: Vec<u8> = (1..=board.grid().slot_count()).collect();
        assert_eq!(indices, expected);
    }

    #[test]
    fn test_same_seed_same_board() {
        let mut first_rng = SmallRng::seed_from_u64(42);
        let mut second_rng = SmallRng::seed_from_u64(42);
        let first = shuffled_board(Grid::default(), DEFAULT_SHUFFLE_ITERATIONS, &mut first_rng);
        let second = shuffled_board(Grid::default(), DEFAULT_SHUFFLE_ITERATIONS, &mut second_rng);
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut first_rng = SmallRng::seed_from_u64(1);
        let mut second_rng = SmallRng::seed_from_u64(2);
        let first = shuffled_board(Grid::default(), DEFAULT_SHUFFLE_ITERATIONS, &mut first_rng);
        let second = shuffled_board(Grid::default(), DEFAULT_SHUFFLE_ITERATIONS, &mut second_rng);
        assert_ne!(first, second);
    }

    #[test]
    fn test_shuffle_parks_empty_bottom_right() {
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let board = shuffled_board(Grid::default(), DEFAULT_SHUFFLE_ITERATIONS, &mut rng);
            assert_eq!(
                board.empty_position(),
                board.grid().bottom_right(),
                "seed {} left the empty slot unparked",
                seed
            );
            assert_permutation(&board);
        }
    }

    #[test]
    fn test_shuffle_preserves_tile_set() {
        let mut rng = SmallRng::seed_from_u64(11);
        let board = shuffled_board(Grid::default(), DEFAULT_SHUFFLE_ITERATIONS, &mut rng);
        for number in 1..=15 {
            assert!(board.tile(Label::numbered(number)).is_some());
        }
        assert!(board.tile(Label::empty()).is_some());
        assert_eq!(board.tiles().len(), 16);
    }

    #[test]
    fn test_zero_iterations_leaves_solved() {
        let mut rng = SmallRng::seed_from_u64(9);
        let board = shuffled_board(Grid::default(), 0, &mut rng);
        assert!(board.is_solved());
    }

    #[test]
    fn test_full_shuffle_leaves_board_unsolved() {
        for seed in [3, 14, 159] {
            let mut rng = SmallRng::seed_from_u64(seed);
            let board = shuffled_board(Grid::default(), DEFAULT_SHUFFLE_ITERATIONS, &mut rng);
            assert!(!board.is_solved(), "seed {} produced a solved board", seed);
        }
    }

    #[test]
    fn test_shuffle_on_small_grid() {
        let grid = Grid::new(2).unwrap();
        let mut rng = SmallRng::seed_from_u64(5);
        let board = shuffled_board(grid, 50, &mut rng);
        assert_eq!(board.empty_position(), grid.bottom_right());
        assert_permutation(&board);
    }

    #[test]
    fn test_scramble_step_cascades_from_blocked_up() {
        // Put the empty slot in the top-left corner; Up is blocked there,
        // so the step falls through to Down.
        let mut board = Board::solved();
        while board.try_move_empty(Direction::Up) {}
        while board.try_move_empty(Direction::Left) {}
        assert_eq!(board.empty_position().index(), 1);

        assert_eq!(scramble_step(&mut board, 0), Some(Direction::Down));
        assert_eq!(board.empty_position().index(), 5);
    }

    #[test]
    fn test_scramble_step_cascades_from_blocked_left() {
        let mut board = Board::solved();
        while board.try_move_empty(Direction::Left) {}
        assert_eq!(board.empty_position().index(), 13);

        assert_eq!(scramble_step(&mut board, 2), Some(Direction::Right));
        assert_eq!(board.empty_position().index(), 14);
    }

    #[test]
    fn test_scramble_step_blocked_right_wastes_the_step() {
        // Empty sits on the last column of a solved board.
        let mut board = Board::solved();
        let before = board.clone();
        assert_eq!(scramble_step(&mut board, 3), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_scramble_step_right_moves_when_clear() {
        let mut board = Board::solved();
        assert!(board.try_move_empty(Direction::Left));
        assert_eq!(scramble_step(&mut board, 3), Some(Direction::Right));
        assert_eq!(board.empty_position().index(), 16);
    }

    #[test]
    fn test_park_empty_from_far_corner() {
        let mut board = Board::solved();
        while board.try_move_empty(Direction::Up) {}
        while board.try_move_empty(Direction::Left) {}
        assert_eq!(board.empty_position().index(), 1);

        park_empty(&mut board);
        assert_eq!(board.empty_position(), board.grid().bottom_right());
        assert_permutation(&board);
    }
}
