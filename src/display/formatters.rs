// Display formatting utilities
// Plain-text rendering only; an interactive view layer is out of scope

use crate::grid::board::TileBoard;
use crate::grid::model::TileGridModel;
use crate::grid::traits::TableModel;
use std::fmt::Write;

/// Standard grid display configuration
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub show_headers: bool,
    /// Character width of one rendered cell
    pub cell_width: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_headers: true,
            cell_width: 5,
        }
    }
}

/// Format column headers for a grid
pub fn format_column_headers(cols: usize, cell_width: usize) -> String {
    let mut line = String::from("    ");
    for col in 0..cols {
        let _ = write!(line, " {:>width$}", col, width = cell_width);
    }
    line
}

/// Format the row prefix for a grid row
pub fn format_row_prefix(row: usize) -> String {
    format!("{:2}: ", row)
}

/// Format the board header with dimensions and tile count
pub fn format_board_header(rows: usize, cols: usize, tile_count: usize) -> String {
    format!("=== TILE BOARD ({} x {}) - {} tiles ===", rows, cols, tile_count)
}

/// Render a sparse board as text, one line per row, `.` for empty cells
pub fn format_board(board: &TileBoard, options: &DisplayOptions) -> String {
    let config = board.config();
    let mut out = String::new();

    if options.show_headers {
        out.push_str(&format_board_header(
            config.rows,
            config.cols,
            board.tile_count(),
        ));
        out.push('\n');
        out.push_str(&format_column_headers(config.cols, options.cell_width));
        out.push('\n');
    }

    for (row, grid_row) in board.cells().iter().enumerate() {
        out.push_str(&format_row_prefix(row));
        for cell in grid_row {
            match cell {
                Some(tile) => {
                    let _ = write!(out, " {:>width$}", tile.value(), width = options.cell_width);
                }
                None => {
                    let _ = write!(out, " {:>width$}", ".", width = options.cell_width);
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Render a dense model as text, one line per row
pub fn format_model(model: &TileGridModel, options: &DisplayOptions) -> String {
    let mut out = String::new();

    if options.show_headers {
        let _ = writeln!(
            out,
            "=== TILE GRID ({} x {}) ===",
            model.row_count(),
            model.column_count()
        );
        out.push_str(&format_column_headers(model.column_count(), options.cell_width));
        out.push('\n');
    }

    for (row, grid_row) in model.tiles().iter().enumerate() {
        out.push_str(&format_row_prefix(row));
        for tile in grid_row {
            let _ = write!(out, " {:>width$}", tile.value(), width = options.cell_width);
        }
        out.push('\n');
    }
    out
}
