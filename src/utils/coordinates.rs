//! Cell conversions for human-readable board coordinates.
//!
//! Converts between two-character coordinates (e.g., `b6`) and `Cell`
//! values. Files `a`-`h` map to columns 0-7; rank 8 is row 0 (Player Two's
//! home edge at the top of a rendered board) and rank 1 is row 7.

use crate::game_state::draughts_types::Cell;

/// Convert a coordinate (for example: "b6") to a cell.
#[inline]
pub fn coordinate_to_cell(coordinate: &str) -> Result<Cell, String> {
    let bytes = coordinate.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid coordinate: {coordinate}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid rank: {}", rank as char));
    }

    let col = file - b'a';
    let row = b'8' - rank;
    Ok(Cell::new(row, col))
}

/// Convert a cell to its coordinate (for example: "b6").
#[inline]
pub fn cell_to_coordinate(cell: Cell) -> String {
    let file_char = char::from(b'a' + cell.col);
    let rank_char = char::from(b'8' - cell.row);
    format!("{file_char}{rank_char}")
}
