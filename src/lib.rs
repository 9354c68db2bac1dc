// Tile Grid - observable tile-grid data model with a sliding-merge game engine
// The dense TileGridModel backs a table-style view; the sparse TileBoard and
// GameEngine implement the game the model was built for

pub mod config;
pub mod display;
pub mod engine;
pub mod events;
pub mod grid;

pub use config::GridConfig;
pub use engine::{Direction, GameEngine, TurnOutcome, TILES_AT_START, TILES_AT_TURN};
pub use events::{EventListeners, GridEvent};
pub use grid::{GridError, GridResult, MoveResult, TableModel, Tile, TileBoard, TileGridModel};

/// Value a freshly constructed tile holds
pub const DEFAULT_TILE_VALUE: i64 = 2;
