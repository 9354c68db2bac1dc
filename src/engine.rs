// Game engine - turn-based sliding-merge controller over a TileBoard

use crate::config::GridConfig;
use crate::grid::board::{MoveResult, TileBoard};
use crate::grid::traits::{GridError, GridResult};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Tiles spawned when a game starts
pub const TILES_AT_START: usize = 4;
/// Tiles spawned after each turn that changed the board
pub const TILES_AT_TURN: usize = 1;

/// Direction a shift slides the tiles toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// What a single [`GameEngine::step`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Whether the shift moved or merged anything
    pub changed: bool,
    /// Tiles spawned after the shift, as (row, col, value)
    pub spawned: Vec<(usize, usize, i64)>,
    /// Whether any further move is possible
    pub has_moves: bool,
}

/// Turn controller: owns the board and the RNG, slides tiles in the four
/// directions, merges equal neighbours, and spawns new tiles on empty
/// cells (value 2 with probability 3/4, value 4 otherwise).
#[derive(Debug)]
pub struct GameEngine {
    board: TileBoard,
    rng: StdRng,
    turn: u64,
}

impl GameEngine {
    pub fn new(config: GridConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Seeded constructor for reproducible games
    pub fn with_seed(config: GridConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GridConfig, rng: StdRng) -> Self {
        Self {
            board: TileBoard::with_config(config),
            rng,
            turn: 0,
        }
    }

    pub fn board(&self) -> &TileBoard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut TileBoard {
        &mut self.board
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Reset the board and spawn the starting tiles
    pub fn start(&mut self) -> GridResult<Vec<(usize, usize, i64)>> {
        self.board.clear();
        self.turn = 0;
        let spawned = self.spawn_random(TILES_AT_START)?;
        info!("game started with {} tiles", spawned.len());
        Ok(spawned)
    }

    /// Spawn `count` tiles on distinct empty cells chosen uniformly
    pub fn spawn_random(&mut self, count: usize) -> GridResult<Vec<(usize, usize, i64)>> {
        let empty = self.board.empty_cells();
        if empty.len() < count {
            return Err(GridError::BoardFull);
        }

        let cells: Vec<(usize, usize)> = empty
            .choose_multiple(&mut self.rng, count)
            .copied()
            .collect();

        let mut spawned = Vec::with_capacity(count);
        for (row, col) in cells {
            let value = if self.rng.gen_range(0..4) != 0 { 2 } else { 4 };
            self.board.add_tile(row, col, value)?;
            spawned.push((row, col, value));
        }
        Ok(spawned)
    }

    /// Slide every tile as far as possible toward the direction's edge,
    /// merging equal values. Each cell merges at most once per shift.
    /// Returns whether anything moved or merged.
    pub fn shift(&mut self, direction: Direction) -> GridResult<bool> {
        let mut changed = false;
        for line in self.line_cells(direction) {
            if self.shift_line(&line)? {
                changed = true;
            }
        }
        Ok(changed)
    }

    /// Play one turn: shift, and spawn a tile if the board changed
    pub fn step(&mut self, direction: Direction) -> GridResult<TurnOutcome> {
        let changed = self.shift(direction)?;

        let spawned = if changed {
            self.turn += 1;
            self.spawn_random(TILES_AT_TURN)?
        } else {
            Vec::new()
        };

        let outcome = TurnOutcome {
            changed,
            spawned,
            has_moves: self.has_moves(),
        };
        debug!("turn {} {:?}: {:?}", self.turn, direction, outcome);
        Ok(outcome)
    }

    /// Whether any move is still possible: an empty cell exists, or two
    /// equal-valued tiles are orthogonal neighbours
    pub fn has_moves(&self) -> bool {
        let cells = self.board.cells();
        for (row, grid_row) in cells.iter().enumerate() {
            for (col, cell) in grid_row.iter().enumerate() {
                let Some(tile) = cell else {
                    return true;
                };
                let value = tile.value();

                if let Some(right) = grid_row.get(col + 1).and_then(|c| c.as_ref()) {
                    if right.value() == value {
                        return true;
                    }
                }
                if let Some(below) = cells.get(row + 1).and_then(|r| r[col].as_ref()) {
                    if below.value() == value {
                        return true;
                    }
                }
            }
        }
        false
    }

    // Cell coordinates of every line to compact, ordered from the edge
    // the tiles slide toward
    fn line_cells(&self, direction: Direction) -> Vec<Vec<(usize, usize)>> {
        let rows = self.board.config().rows;
        let cols = self.board.config().cols;

        match direction {
            Direction::Up => (0..cols)
                .map(|col| (0..rows).map(|row| (row, col)).collect())
                .collect(),
            Direction::Down => (0..cols)
                .map(|col| (0..rows).rev().map(|row| (row, col)).collect())
                .collect(),
            Direction::Left => (0..rows)
                .map(|row| (0..cols).map(|col| (row, col)).collect())
                .collect(),
            Direction::Right => (0..rows)
                .map(|row| (0..cols).rev().map(|col| (row, col)).collect())
                .collect(),
        }
    }

    // Compact one line toward its first cell. `target` is the nearest
    // slot a tile may still land in or merge with; a merge advances it
    // past the merged cell so nothing merges twice in one shift.
    fn shift_line(&mut self, line: &[(usize, usize)]) -> GridResult<bool> {
        let mut changed = false;
        let mut target = 0usize;

        for i in 1..line.len() {
            let (row, col) = line[i];
            if self.board.is_cell_empty(row, col)? {
                continue;
            }

            let mut k = target;
            while k < i {
                let (to_row, to_col) = line[k];
                match self.board.try_move_tile(row, col, to_row, to_col)? {
                    MoveResult::Moved => {
                        target = k;
                        changed = true;
                        break;
                    }
                    MoveResult::Merged => {
                        target = k + 1;
                        changed = true;
                        break;
                    }
                    MoveResult::Stayed => k += 1,
                    MoveResult::Empty => break,
                }
            }
            if k == i {
                // Nothing between target and i accepted the tile
                target = i;
            }
        }
        Ok(changed)
    }
}
