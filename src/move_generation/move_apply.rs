//! Board mutation for one committed move.
//!
//! The engine validates the move against the current selection before
//! calling in here; this module performs the ordered effects on the board
//! (capture removal, relocation, promotion) and reports what happened so
//! the engine can update counts and decide chain continuation.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::{Cell, Piece};

/// Record of the effects a committed move had on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    /// Cell of the removed piece when the move was a jump.
    pub captured: Option<Cell>,
    /// The piece as it sits on the destination, crowning applied.
    pub moved_piece: Piece,
}

/// Move the piece at `origin` to `destination`, removing the jumped piece
/// on a two-step move and crowning on arrival at the far row.
///
/// The destination must already be known legal; this function only carries
/// out the effects.
pub fn apply_move_on_board(board: &mut Board, origin: Cell, destination: Cell) -> AppliedMove {
    let captured = if origin.row.abs_diff(destination.row) == 2 {
        let jumped = origin.midpoint(destination);
        board.remove(jumped);
        Some(jumped)
    } else {
        None
    };

    let mut piece = board
        .remove(origin)
        .expect("validated origin must hold a piece");
    if destination.row == piece.owner.crowning_row() {
        piece.is_king = true;
    }
    board.place(destination, piece);

    AppliedMove {
        captured,
        moved_piece: piece,
    }
}
