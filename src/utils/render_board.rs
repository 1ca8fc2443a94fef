//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the interactive front-end,
//! tests, and diagnostics in text environments.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::{Cell, Piece, Player};

/// Render the board to a Unicode string for terminal output.
///
/// Row 0 is printed at the top as rank 8, matching `utils::coordinates`.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            match board.piece_at(Cell::new(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }
            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.owner, piece.is_king) {
        (Player::One, false) => '⛀',
        (Player::One, true) => '⛁',
        (Player::Two, false) => '⛂',
        (Player::Two, true) => '⛃',
    }
}
