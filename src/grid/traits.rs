// Common traits and types for the grid implementations

use crate::config::GridConfig;

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur during grid operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    InvalidCoordinates {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    CellOccupied {
        row: usize,
        col: usize,
    },
    CellEmpty {
        row: usize,
        col: usize,
    },
    BoardFull,
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InvalidCoordinates {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Invalid coordinates ({}, {}) - grid size is {}x{}",
                    row, col, rows, cols
                )
            }
            GridError::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is not empty", row, col)
            }
            GridError::CellEmpty { row, col } => write!(f, "Cell ({}, {}) is empty", row, col),
            GridError::BoardFull => write!(f, "No empty cells left on the board"),
        }
    }
}

impl std::error::Error for GridError {}

/// Capability contract for table-shaped tile containers.
/// Anything a view layer needs: dimensions, cell reads and writes,
/// and editability flags, all addressed by (row, col).
pub trait TableModel {
    /// Get the grid configuration
    fn config(&self) -> &GridConfig;

    /// Number of rows, invariant over the model's lifetime
    fn row_count(&self) -> usize {
        self.config().rows
    }

    /// Number of columns, invariant over the model's lifetime
    fn column_count(&self) -> usize {
        self.config().cols
    }

    /// Read the value at a cell
    fn value_at(&self, row: usize, col: usize) -> GridResult<i64>;

    /// Write a value to a cell. Returns Ok(false) when the cell already
    /// holds the value (no change, no notification), Ok(true) otherwise.
    fn set_value_at(&mut self, row: usize, col: usize, value: i64) -> GridResult<bool>;

    /// Whether the cell accepts writes
    fn is_editable(&self, row: usize, col: usize) -> GridResult<bool> {
        self.validate_coordinates(row, col)?;
        Ok(true)
    }

    /// Validate coordinates against grid bounds
    fn validate_coordinates(&self, row: usize, col: usize) -> GridResult<()> {
        let config = self.config();
        if row >= config.rows || col >= config.cols {
            return Err(GridError::InvalidCoordinates {
                row,
                col,
                rows: config.rows,
                cols: config.cols,
            });
        }
        Ok(())
    }
}
