//! Whole-board capture scan.
//!
//! Finds every piece of one player that has at least one jump available.
//! The engine runs this scan once at the start of each turn to establish the
//! forced-capture obligation for that whole turn.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::{Cell, Player};
use crate::move_generation::destination_finder::has_capture;

/// Cells holding `owner`'s pieces that can capture, in row-major order.
pub fn cells_with_capture(board: &Board, owner: Player) -> Vec<Cell> {
    board
        .occupied_cells()
        .filter(|(_, piece)| piece.owner == owner)
        .filter(|(cell, _)| has_capture(board, *cell))
        .map(|(cell, _)| cell)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::cells_with_capture;
    use crate::game_state::board::Board;
    use crate::game_state::draughts_types::{Cell, Piece, Player};

    #[test]
    fn starting_position_has_no_captures() {
        let board = Board::new_game();
        assert!(cells_with_capture(&board, Player::One).is_empty());
        assert!(cells_with_capture(&board, Player::Two).is_empty());
    }

    #[test]
    fn scan_reports_only_the_side_asked_for() {
        let mut board = Board::empty();
        board.place(Cell::new(2, 1), Piece::man(Player::Two));
        board.place(Cell::new(3, 2), Piece::man(Player::One));
        // Both sides could jump the other here; each scan must stay one-sided.
        assert_eq!(cells_with_capture(&board, Player::Two), vec![Cell::new(2, 1)]);
        assert_eq!(cells_with_capture(&board, Player::One), vec![Cell::new(3, 2)]);
    }

    #[test]
    fn scan_collects_every_capturing_piece() {
        let mut board = Board::empty();
        board.place(Cell::new(2, 1), Piece::man(Player::Two));
        board.place(Cell::new(2, 5), Piece::man(Player::Two));
        board.place(Cell::new(3, 2), Piece::man(Player::One));
        board.place(Cell::new(3, 4), Piece::man(Player::One));
        assert_eq!(
            cells_with_capture(&board, Player::Two),
            vec![Cell::new(2, 1), Cell::new(2, 5)]
        );
    }
}
