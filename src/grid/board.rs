// Tile Board - sparse game board where cells may be empty
// Tiles are added, moved, merged and removed over the board's lifetime

use crate::config::GridConfig;
use crate::events::{EventListeners, GridEvent};
use crate::grid::tile::Tile;
use crate::grid::traits::{GridError, GridResult};
use log::debug;

/// Outcome of a single [`TileBoard::try_move_tile`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Source cell held no tile, nothing happened
    Empty,
    /// Tile relocated to the empty target cell
    Moved,
    /// Equal values: source doubled, moved onto the target, target removed
    Merged,
    /// Target occupied by a different value, nothing happened
    Stayed,
}

/// Fixed-size 2D board of optional [`Tile`]s, row-major. Unlike
/// [`TileGridModel`](crate::grid::model::TileGridModel) cells start empty
/// and tiles enter the board through [`TileBoard::add_tile`].
#[derive(Debug)]
pub struct TileBoard {
    config: GridConfig,
    grid: Vec<Vec<Option<Tile>>>,
    listeners: EventListeners,
}

impl TileBoard {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_config(GridConfig::new(rows, cols))
    }

    pub fn with_config(config: GridConfig) -> Self {
        let grid = (0..config.rows)
            .map(|_| (0..config.cols).map(|_| None).collect())
            .collect();

        Self {
            config,
            grid,
            listeners: EventListeners::new(),
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn add_event_listener<F>(&mut self, listener: F)
    where
        F: Fn(&GridEvent) + Send + Sync + 'static,
    {
        self.listeners.add(listener);
    }

    /// Validate coordinates against board bounds
    pub fn validate_coordinates(&self, row: usize, col: usize) -> GridResult<()> {
        if row >= self.config.rows || col >= self.config.cols {
            return Err(GridError::InvalidCoordinates {
                row,
                col,
                rows: self.config.rows,
                cols: self.config.cols,
            });
        }
        Ok(())
    }

    pub fn is_cell_empty(&self, row: usize, col: usize) -> GridResult<bool> {
        self.validate_coordinates(row, col)?;
        Ok(self.grid[row][col].is_none())
    }

    /// Value of the tile at a cell, None for an empty cell
    pub fn value_at(&self, row: usize, col: usize) -> GridResult<Option<i64>> {
        self.validate_coordinates(row, col)?;
        Ok(self.grid[row][col].as_ref().map(Tile::value))
    }

    pub fn tile_count(&self) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }

    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (row, grid_row) in self.grid.iter().enumerate() {
            for (col, cell) in grid_row.iter().enumerate() {
                if cell.is_none() {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    // Public getter for accessing the private grid storage
    pub fn cells(&self) -> &Vec<Vec<Option<Tile>>> {
        &self.grid
    }

    /// Place a new tile on an empty cell
    pub fn add_tile(&mut self, row: usize, col: usize, value: i64) -> GridResult<()> {
        self.validate_coordinates(row, col)?;
        if self.grid[row][col].is_some() {
            return Err(GridError::CellOccupied { row, col });
        }

        self.grid[row][col] = Some(Tile::with_value(value));
        debug!("tile {} added at ({}, {})", value, row, col);
        self.listeners.emit(&GridEvent::TileAdded { row, col, value });
        Ok(())
    }

    /// Take the tile off a cell, returning its value
    pub fn remove_tile(&mut self, row: usize, col: usize) -> GridResult<i64> {
        self.validate_coordinates(row, col)?;

        match self.grid[row][col].take() {
            Some(tile) => {
                debug!("tile {} removed from ({}, {})", tile.value(), row, col);
                self.listeners.emit(&GridEvent::TileRemoved { row, col });
                Ok(tile.value())
            }
            None => Err(GridError::CellEmpty { row, col }),
        }
    }

    /// Attempt to move the tile at the source cell onto the target cell.
    ///
    /// - empty source: nothing happens (`Empty`)
    /// - empty target: the tile relocates (`Moved`)
    /// - equal values: the source doubles, replaces the target, and the
    ///   target tile leaves the board (`Merged`)
    /// - different values: nothing happens (`Stayed`)
    pub fn try_move_tile(
        &mut self,
        old_row: usize,
        old_col: usize,
        row: usize,
        col: usize,
    ) -> GridResult<MoveResult> {
        self.validate_coordinates(old_row, old_col)?;
        self.validate_coordinates(row, col)?;

        if (old_row, old_col) == (row, col) {
            return Ok(MoveResult::Stayed);
        }

        let source_value = match &self.grid[old_row][old_col] {
            Some(tile) => tile.value(),
            None => return Ok(MoveResult::Empty),
        };

        match self.grid[row][col].as_ref().map(Tile::value) {
            None => {
                self.move_tile(old_row, old_col, row, col);
                Ok(MoveResult::Moved)
            }
            Some(target_value) if target_value == source_value => {
                let merged = source_value * 2;

                // The consumed target leaves first, then the surviving
                // source doubles in place and slides onto the freed cell
                self.grid[row][col] = None;
                self.listeners.emit(&GridEvent::TileRemoved { row, col });

                if let Some(tile) = self.grid[old_row][old_col].as_mut() {
                    tile.set_value(merged);
                }
                self.listeners.emit(&GridEvent::TileValueChanged {
                    row: old_row,
                    col: old_col,
                    value: merged,
                });

                self.move_tile(old_row, old_col, row, col);
                debug!(
                    "tiles merged into {} at ({}, {}) from ({}, {})",
                    merged, row, col, old_row, old_col
                );
                Ok(MoveResult::Merged)
            }
            Some(_) => Ok(MoveResult::Stayed),
        }
    }

    /// Remove every tile from the board, without per-tile events
    pub fn clear(&mut self) {
        for row in &mut self.grid {
            for cell in row {
                *cell = None;
            }
        }
    }

    // Relocate a tile into a cell known to be empty
    fn move_tile(&mut self, old_row: usize, old_col: usize, row: usize, col: usize) {
        let tile = self.grid[old_row][old_col].take();
        self.grid[row][col] = tile;
        self.listeners.emit(&GridEvent::TileMoved {
            old_row,
            old_col,
            new_row: row,
            new_col: col,
        });
    }
}
