// Display module for grid formatting and visualization
pub mod formatters;

// Re-export main functions
pub use formatters::{
    format_board, format_board_header, format_column_headers, format_model, format_row_prefix,
    DisplayOptions,
};
