use crate::layout::PlayArea;
use crate::round::{MoveOutcome, PuzzleConfig, Round};
use crate::{Board, Tile};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// JSON-serializable session settings; missing fields take the standard
/// game's values
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfigJson {
    pub grid_size: u8,
    pub shuffle_iterations: u32,
    /// Fixed scramble seed; omit for a clock-derived one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SessionConfigJson {
    fn default() -> Self {
        let config = PuzzleConfig::default();
        SessionConfigJson {
            grid_size: config.grid_size,
            shuffle_iterations: config.shuffle_iterations,
            seed: None,
        }
    }
}

/// JSON-serializable representation of one tile
#[derive(Serialize, Deserialize)]
pub struct TileJson {
    /// Face number, or null for the empty slot
    pub label: Option<u8>,
    /// 1-based row-major slot index
    pub position: u8,
    pub row: u8,
    pub col: u8,
    /// Whether the tile sits on its home slot
    pub correct: bool,
}

/// JSON-serializable snapshot of a board
#[derive(Serialize, Deserialize)]
pub struct BoardJson {
    pub grid_size: u8,
    pub solved: bool,
    pub tiles: Vec<TileJson>,
}

/// JSON-serializable placement of the board in the viewport
#[derive(Serialize, Deserialize)]
pub struct LayoutJson {
    pub x: f64,
    pub y: f64,
    pub side: f64,
    pub cell_size: f64,
}

/// Result of feeding one pointer click into the session
#[derive(Serialize, Deserialize)]
pub struct ClickJson {
    pub moved: bool,
    pub solved: bool,
    pub board: BoardJson,
}

/// Main WASM API: an interactive puzzle session
///
/// Owns one dealt round and the viewport layout. The browser feeds it
/// resize events and pointer clicks; it answers with JSON snapshots the
/// renderer draws from.
#[wasm_bindgen]
pub struct PuzzleSession {
    round: Round,
    area: PlayArea,
}

#[wasm_bindgen]
impl PuzzleSession {
    /// Start a session sized to a viewport of `width` by `height` pixels.
    ///
    /// `config` is a JSON object such as
    /// `{"grid_size": 4, "shuffle_iterations": 500, "seed": 12345}`;
    /// pass an empty string for the standard game.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, config: &str) -> Result<PuzzleSession, JsValue> {
        Self::new_internal(width, height, config).map_err(|e| JsValue::from_str(&e))
    }

    /// Recompute the layout for a resized viewport
    pub fn resize(&mut self, width: f64, height: f64) {
        self.area = PlayArea::centered(width, height, self.round.board().grid());
    }

    /// Recompute the layout from the browser window's inner size
    pub fn resize_to_window(&mut self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
        let width = window
            .inner_width()?
            .as_f64()
            .ok_or_else(|| JsValue::from_str("Window width is not a number"))?;
        let height = window
            .inner_height()?
            .as_f64()
            .ok_or_else(|| JsValue::from_str("Window height is not a number"))?;
        self.resize(width, height);
        Ok(())
    }

    /// Feed a pointer click at viewport pixel (x, y) into the round.
    ///
    /// Returns a JSON string with ClickJson: whether a tile slid, whether
    /// the round now stands won, and the full board snapshot to redraw
    /// from. Clicks outside the board are quiet no-ops.
    pub fn click(&mut self, x: f64, y: f64) -> String {
        let result = self.click_internal(x, y);
        to_json(&result)
    }

    /// Current board snapshot as a JSON string with BoardJson
    pub fn state(&self) -> String {
        to_json(&board_json(self.round.board(), self.round.is_solved()))
    }

    /// Current board placement as a JSON string with LayoutJson
    pub fn layout(&self) -> String {
        to_json(&LayoutJson {
            x: self.area.x(),
            y: self.area.y(),
            side: self.area.side(),
            cell_size: self.area.cell_size(),
        })
    }

    /// Whether the round has been won
    pub fn is_solved(&self) -> bool {
        self.round.is_solved()
    }
}

impl PuzzleSession {
    /// Internal implementation of the constructor
    fn new_internal(width: f64, height: f64, config: &str) -> Result<PuzzleSession, String> {
        // 1. Parse the config JSON, treating an empty string as defaults
        let config_json: SessionConfigJson = if config.trim().is_empty() {
            SessionConfigJson::default()
        } else {
            serde_json::from_str(config).map_err(|e| format!("Invalid config JSON: {}", e))?
        };

        // 2. Deal the round, seeding the scramble from the clock unless a
        //    fixed seed was supplied
        let config = PuzzleConfig {
            grid_size: config_json.grid_size,
            shuffle_iterations: config_json.shuffle_iterations,
        };
        let seed = config_json.seed.unwrap_or_else(clock_seed);
        let mut rng = SmallRng::seed_from_u64(seed);
        let round = Round::new(&config, &mut rng)?;

        // 3. Fit the board to the viewport
        let area = PlayArea::centered(width, height, round.board().grid());

        Ok(PuzzleSession { round, area })
    }

    fn click_internal(&mut self, x: f64, y: f64) -> ClickJson {
        let outcome = match self.area.cell_at(x, y) {
            Some((row, col)) => self.round.move_at(row, col),
            None => MoveOutcome {
                moved: false,
                solved: self.round.is_solved(),
            },
        };
        ClickJson {
            moved: outcome.moved,
            solved: outcome.solved,
            board: board_json(self.round.board(), self.round.is_solved()),
        }
    }
}

/// Convert a board to its JSON representation
fn board_json(board: &Board, solved: bool) -> BoardJson {
    let tiles = board
        .tiles()
        .iter()
        .map(|tile| tile_json(board, tile))
        .collect();
    BoardJson {
        grid_size: board.grid().size(),
        solved,
        tiles,
    }
}

/// Convert one tile to its JSON representation
fn tile_json(board: &Board, tile: &Tile) -> TileJson {
    let grid = board.grid();
    TileJson {
        label: tile.label().number(),
        position: tile.position().index(),
        row: grid.row_of(tile.position()),
        col: grid.col_of(tile.position()),
        correct: board.is_correct(tile),
    }
}

/// Serialize a value, folding serializer trouble into the payload instead
/// of panicking across the boundary
fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|e| format!(r#"{{"error":"Serialization error: {}"}}"#, e))
}

/// Milliseconds since the epoch, used to seed scrambles nobody pinned
fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Get the git commit hash that this WASM module was built from
///
/// Returns the short commit hash, or "unknown" if not available
#[wasm_bindgen]
pub fn get_build_commit() -> String {
    env!("BUILD_COMMIT").to_string()
}
