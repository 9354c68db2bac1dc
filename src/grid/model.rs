// Tile Grid Model - dense table model over a fixed-size grid of tiles
// Every cell holds a live tile from construction on; dimensions never change

use crate::config::GridConfig;
use crate::events::{EventListeners, GridEvent};
use crate::grid::tile::Tile;
use crate::grid::traits::{GridResult, TableModel};
use log::debug;

/// Fixed-size 2D model of owned [`Tile`]s, row-major. Implements
/// [`TableModel`] for consumption by a view layer: every cell is
/// editable, and each effective write emits one
/// [`GridEvent::CellChanged`] scoped to the written coordinate.
#[derive(Debug)]
pub struct TileGridModel {
    config: GridConfig,
    grid: Vec<Vec<Tile>>,
    listeners: EventListeners,
}

impl TileGridModel {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_config(GridConfig::new(rows, cols))
    }

    pub fn with_config(config: GridConfig) -> Self {
        let grid = (0..config.rows)
            .map(|_| (0..config.cols).map(|_| Tile::new()).collect())
            .collect();

        Self {
            config,
            grid,
            listeners: EventListeners::new(),
        }
    }

    pub fn add_event_listener<F>(&mut self, listener: F)
    where
        F: Fn(&GridEvent) + Send + Sync + 'static,
    {
        self.listeners.add(listener);
    }

    /// Borrow the tile at a cell
    pub fn tile(&self, row: usize, col: usize) -> GridResult<&Tile> {
        self.validate_coordinates(row, col)?;
        Ok(&self.grid[row][col])
    }

    /// Mutably borrow the tile at a cell, e.g. to register tile observers
    pub fn tile_mut(&mut self, row: usize, col: usize) -> GridResult<&mut Tile> {
        self.validate_coordinates(row, col)?;
        Ok(&mut self.grid[row][col])
    }

    // Public getter for accessing the private grid storage
    pub fn tiles(&self) -> &Vec<Vec<Tile>> {
        &self.grid
    }
}

impl TableModel for TileGridModel {
    fn config(&self) -> &GridConfig {
        &self.config
    }

    fn value_at(&self, row: usize, col: usize) -> GridResult<i64> {
        self.validate_coordinates(row, col)?;
        Ok(self.grid[row][col].value())
    }

    fn set_value_at(&mut self, row: usize, col: usize, value: i64) -> GridResult<bool> {
        self.validate_coordinates(row, col)?;

        // Tile::set_value short-circuits redundant writes and fires the
        // tile's own observers before the model-level notification
        if !self.grid[row][col].set_value(value) {
            return Ok(false);
        }

        debug!("cell ({}, {}) changed to {}", row, col, value);
        self.listeners.emit(&GridEvent::CellChanged { row, col, value });
        Ok(true)
    }
}
