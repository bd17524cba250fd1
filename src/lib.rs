use std::fmt;

pub mod layout;
pub mod round;
pub mod shuffle;
#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

/// A tile identity represented as a u8.
/// - 1 and up: the numbered faces
/// - 0: the empty-slot marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(u8);

impl Label {
    const EMPTY: u8 = 0;

    /// Create a numbered label (1 or greater)
    pub fn numbered(number: u8) -> Self {
        assert!(number >= 1, "Numbered labels start at 1");
        Label(number)
    }

    /// The empty-slot marker
    pub fn empty() -> Self {
        Label(Self::EMPTY)
    }

    /// Get the number (1 and up), or None for the empty marker
    pub fn number(&self) -> Option<u8> {
        if self.is_empty() { None } else { Some(self.0) }
    }

    /// Check if this is the empty marker
    pub fn is_empty(&self) -> bool {
        self.0 == Self::EMPTY
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number() {
            Some(number) => write!(f, "{}", number),
            None => write!(f, "empty"),
        }
    }
}

/// A slot index on the grid, 1-based and row-major; the last slot is the
/// bottom-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    /// The raw 1-based index
    pub fn index(&self) -> u8 {
        self.0
    }
}

/// A direction the empty slot can travel, meaning the neighboring tile on
/// that side slides into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order the shuffle falls through them
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction that undoes this one
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Geometry of the square playing grid.
///
/// Owns every derivation from slot indices: rows, columns, adjacency and
/// stepping. Nothing here touches tiles; boards combine a grid with a
/// tile set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: u8,
}

impl Grid {
    /// Side length of the standard puzzle
    pub const DEFAULT_SIZE: u8 = 4;

    const MIN_SIZE: u8 = 2;
    // 15 * 15 = 225 slots is the most a u8 slot index can address.
    const MAX_SIZE: u8 = 15;

    /// Create a grid with the given side length (2 through 15)
    pub fn new(size: u8) -> Result<Self, String> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(format!(
                "Grid size must be {} through {}, got {}",
                Self::MIN_SIZE,
                Self::MAX_SIZE,
                size
            ));
        }
        Ok(Grid { size })
    }

    /// Side length of this grid
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Total number of slots
    pub fn slot_count(&self) -> u8 {
        self.size * self.size
    }

    /// 0-indexed row of a slot
    pub fn row_of(&self, position: Position) -> u8 {
        (position.0 - 1) / self.size
    }

    /// 0-indexed column of a slot
    pub fn col_of(&self, position: Position) -> u8 {
        (position.0 - 1) % self.size
    }

    /// The slot at (row, col), or None outside the grid
    pub fn position_at(&self, row: u8, col: u8) -> Option<Position> {
        if row < self.size && col < self.size {
            Some(Position(row * self.size + col + 1))
        } else {
            None
        }
    }

    /// The bottom-right slot, home of the empty tile
    pub fn bottom_right(&self) -> Position {
        Position(self.slot_count())
    }

    /// True iff the two slots sit exactly one step apart on exactly one
    /// axis. This is the legal-move relation: a tile may swap with the
    /// empty slot only when this holds for their positions.
    pub fn is_adjacent(&self, a: Position, b: Position) -> bool {
        let row_gap = self.row_of(a).abs_diff(self.row_of(b));
        let col_gap = self.col_of(a).abs_diff(self.col_of(b));
        row_gap + col_gap == 1
    }

    /// The neighboring slot one step in `direction`, or None at the edge
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let row = self.row_of(position);
        let col = self.col_of(position);
        let (row, col) = match direction {
            Direction::Up => (row.checked_sub(1)?, col),
            Direction::Down => (row + 1, col),
            Direction::Left => (row, col.checked_sub(1)?),
            Direction::Right => (row, col + 1),
        };
        self.position_at(row, col)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid {
            size: Self::DEFAULT_SIZE,
        }
    }
}

/// A single tile: an identity plus the slot it currently occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    label: Label,
    position: Position,
}

impl Tile {
    /// The tile's identity
    pub fn label(&self) -> Label {
        self.label
    }

    /// The slot the tile currently occupies
    pub fn position(&self) -> Position {
        self.position
    }
}

/// The full board state: one tile per slot, positions forming a
/// permutation of the grid, exactly one tile carrying the empty marker.
///
/// Slots run 1..=n*n in row-major order, so on the default grid slot 1 is
/// the top-left cell and slot 16 the bottom-right, where the empty tile
/// lives when the puzzle is solved. The tile list itself is unordered;
/// lookups go through labels or positions, and mutation is limited to
/// single swaps with the empty tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    tiles: Vec<Tile>,
}

impl Board {
    /// A solved board on the standard 4x4 grid
    pub fn solved() -> Self {
        Self::solved_on(Grid::default())
    }

    /// A solved board on the given grid: position equals label for every
    /// numbered tile, empty in the bottom-right slot. Deterministic.
    pub fn solved_on(grid: Grid) -> Self {
        let mut tiles = Vec::with_capacity(grid.slot_count() as usize);
        for index in 1..grid.slot_count() {
            tiles.push(Tile {
                label: Label::numbered(index),
                position: Position(index),
            });
        }
        tiles.push(Tile {
            label: Label::empty(),
            position: grid.bottom_right(),
        });
        Board { grid, tiles }
    }

    /// The grid this board is laid out on
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// All tiles, in no particular order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Find a tile by label
    pub fn tile(&self, label: Label) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.label == label)
    }

    /// The tile occupying (row, col), or None when the cell lies outside
    /// the grid. Pointer hit-testing lands here after the presentation
    /// layer converts pixels to a cell.
    pub fn tile_at(&self, row: u8, col: u8) -> Option<&Tile> {
        let position = self.grid.position_at(row, col)?;
        self.tiles.iter().find(|tile| tile.position == position)
    }

    /// Current slot of the empty tile
    pub fn empty_position(&self) -> Position {
        match self.tiles.iter().find(|tile| tile.label.is_empty()) {
            Some(tile) => tile.position,
            // Every constructor places exactly one empty tile and swaps
            // never change labels, so this arm is unreachable.
            None => self.grid.bottom_right(),
        }
    }

    /// True iff the tile carrying `label` may swap with the empty tile
    /// right now, i.e. the two occupy adjacent cells.
    ///
    /// Asking about a label that is not on the board is a precondition
    /// violation and reported as an error rather than a silent miss.
    pub fn can_move(&self, label: Label) -> Result<bool, String> {
        let tile = self
            .tile(label)
            .ok_or_else(|| format!("No tile labeled {} on this board", label))?;
        Ok(self.grid.is_adjacent(tile.position, self.empty_position()))
    }

    /// Swap the tile carrying `label` with the empty tile if they are
    /// adjacent, in place.
    ///
    /// Returns Ok(true) when the swap happened and Ok(false) when the tile
    /// cannot move. The latter leaves the board untouched and is not an
    /// error: clicking an immovable tile simply does nothing.
    pub fn apply_move(&mut self, label: Label) -> Result<bool, String> {
        if !self.can_move(label)? {
            return Ok(false);
        }
        let empty_position = self.empty_position();
        let mut vacated = None;
        for tile in &mut self.tiles {
            if tile.label == label {
                vacated = Some(tile.position);
                tile.position = empty_position;
                break;
            }
        }
        if let Some(position) = vacated {
            self.place_empty(position);
        }
        Ok(true)
    }

    /// Move the empty tile one step in `direction`, dragging the neighbor
    /// from that side into the vacated slot. Returns whether the move was
    /// applied; at a grid edge nothing changes.
    pub fn try_move_empty(&mut self, direction: Direction) -> bool {
        let empty_position = self.empty_position();
        let target = match self.grid.neighbor(empty_position, direction) {
            Some(position) => position,
            None => return false,
        };
        for tile in &mut self.tiles {
            if tile.position == target {
                tile.position = empty_position;
                break;
            }
        }
        self.place_empty(target);
        true
    }

    /// True iff every tile sits on its home slot
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(|tile| self.is_correct(tile))
    }

    /// A numbered tile is correct on the slot matching its number; the
    /// empty tile is correct in the bottom-right corner.
    pub fn is_correct(&self, tile: &Tile) -> bool {
        match tile.label.number() {
            Some(number) => tile.position.index() == number,
            None => tile.position == self.grid.bottom_right(),
        }
    }

    fn place_empty(&mut self, position: Position) {
        for tile in &mut self.tiles {
            if tile.label.is_empty() {
                tile.position = position;
                break;
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.grid.size() {
            for col in 0..self.grid.size() {
                match self.tile_at(row, col).and_then(|tile| tile.label.number()) {
                    Some(number) => write!(f, "{:3} ", number)?,
                    None => write!(f, "  . ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
