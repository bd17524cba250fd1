use crate::shuffle::{self, DEFAULT_SHUFFLE_ITERATIONS};
use crate::{Board, Grid, Label};
use rand::Rng;

/// Settings for dealing a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Side length of the grid
    pub grid_size: u8,
    /// Scramble steps applied when dealing
    pub shuffle_iterations: u32,
}

impl PuzzleConfig {
    /// The grid these settings describe
    pub fn grid(&self) -> Result<Grid, String> {
        Grid::new(self.grid_size)
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        PuzzleConfig {
            grid_size: Grid::DEFAULT_SIZE,
            shuffle_iterations: DEFAULT_SHUFFLE_ITERATIONS,
        }
    }
}

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Moves are accepted
    InPlay,
    /// The board reached the solved arrangement; moves are ignored
    Solved,
}

/// What a move request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether a tile actually slid
    pub moved: bool,
    /// Whether the round stands won after this request
    pub solved: bool,
}

/// One dealt game: a board plus the play/solved phase.
///
/// The round is the only writer of its board. Once the phase reaches
/// Solved the board is frozen; further move requests report the win
/// instead of mutating anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    board: Board,
    phase: Phase,
}

impl Round {
    /// Deal a new round: build a solved board on the configured grid,
    /// scramble it, and open play.
    pub fn new<R: Rng + ?Sized>(config: &PuzzleConfig, rng: &mut R) -> Result<Round, String> {
        let grid = config.grid()?;
        let board = shuffle::shuffled_board(grid, config.shuffle_iterations, rng);
        Ok(Round {
            board,
            phase: Phase::InPlay,
        })
    }

    /// Resume a round from an existing board. A board already in the
    /// solved arrangement yields a finished round.
    pub fn from_board(board: Board) -> Round {
        let phase = if board.is_solved() {
            Phase::Solved
        } else {
            Phase::InPlay
        };
        Round { board, phase }
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once the round has been won
    pub fn is_solved(&self) -> bool {
        self.phase == Phase::Solved
    }

    /// Request that the tile carrying `label` slide into the empty slot.
    ///
    /// In a finished round nothing moves and the outcome just restates the
    /// win. Otherwise the move applies when legal, and a move that
    /// completes the arrangement flips the round to Solved.
    pub fn move_tile(&mut self, label: Label) -> Result<MoveOutcome, String> {
        if self.phase == Phase::Solved {
            return Ok(MoveOutcome {
                moved: false,
                solved: true,
            });
        }
        let moved = self.board.apply_move(label)?;
        if moved && self.board.is_solved() {
            self.phase = Phase::Solved;
        }
        Ok(MoveOutcome {
            moved,
            solved: self.phase == Phase::Solved,
        })
    }

    /// Request a move by cell rather than label, which is how pointer
    /// input arrives. Cells outside the grid and the cell holding the
    /// empty slot ask for no legal move, so they leave the round untouched.
    pub fn move_at(&mut self, row: u8, col: u8) -> MoveOutcome {
        let label = match self.board.tile_at(row, col) {
            Some(tile) if !tile.label().is_empty() => tile.label(),
            _ => {
                return MoveOutcome {
                    moved: false,
                    solved: self.phase == Phase::Solved,
                };
            }
        };
        match self.move_tile(label) {
            Ok(outcome) => outcome,
            // The label was read off the board, so move_tile cannot miss it.
            Err(_) => MoveOutcome {
                moved: false,
                solved: self.phase == Phase::Solved,
            },
        }
    }
}
