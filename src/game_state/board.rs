//! 8x8 board grid.
//!
//! `Board` is the single source of truth for piece placement. Counting and
//! iteration helpers here are what the engine and the whole-board capture
//! scan are built on.

use crate::game_state::draughts_rules::{BOARD_SIZE, STARTING_POSITION_LAYOUT};
use crate::game_state::draughts_types::{Cell, Piece, Player};
use crate::utils::layout::parse_layout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard starting position, 12 pieces per side.
    #[inline]
    pub fn new_game() -> Self {
        parse_layout(STARTING_POSITION_LAYOUT)
            .expect("starting layout should always parse")
            .board
    }

    #[inline]
    pub fn piece_at(&self, cell: Cell) -> Option<Piece> {
        self.cells[cell.row as usize][cell.col as usize]
    }

    #[inline]
    pub fn place(&mut self, cell: Cell, piece: Piece) {
        self.cells[cell.row as usize][cell.col as usize] = Some(piece);
    }

    /// Clear a cell, returning the piece that occupied it.
    #[inline]
    pub fn remove(&mut self, cell: Cell) -> Option<Piece> {
        self.cells[cell.row as usize][cell.col as usize].take()
    }

    pub fn count_pieces(&self, owner: Player) -> u8 {
        self.occupied_cells()
            .filter(|(_, piece)| piece.owner == owner)
            .count() as u8
    }

    /// All `(cell, piece)` pairs in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE).filter_map(move |col| {
                let cell = Cell::new(row, col);
                self.piece_at(cell).map(|piece| (cell, piece))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::draughts_rules::PIECES_PER_SIDE;
    use crate::game_state::draughts_types::{Cell, Piece, Player};

    #[test]
    fn starting_position_has_twelve_pieces_per_side() {
        let board = Board::new_game();
        assert_eq!(board.count_pieces(Player::One), PIECES_PER_SIDE);
        assert_eq!(board.count_pieces(Player::Two), PIECES_PER_SIDE);
    }

    #[test]
    fn starting_position_leaves_middle_rows_empty() {
        let board = Board::new_game();
        for row in [3u8, 4] {
            for col in 0..8u8 {
                assert_eq!(board.piece_at(Cell::new(row, col)), None);
            }
        }
    }

    #[test]
    fn starting_pieces_sit_only_on_dark_playable_cells() {
        let board = Board::new_game();
        for (cell, piece) in board.occupied_cells() {
            assert!(cell.is_dark_playable(), "piece off dark cell at {cell:?}");
            assert!(!piece.is_king);
            let expected = if cell.row <= 2 { Player::Two } else { Player::One };
            assert_eq!(piece.owner, expected);
        }
    }

    #[test]
    fn place_and_remove_round_trip() {
        let mut board = Board::empty();
        let cell = Cell::new(4, 3);
        board.place(cell, Piece::king(Player::One));
        assert_eq!(board.piece_at(cell), Some(Piece::king(Player::One)));
        assert_eq!(board.remove(cell), Some(Piece::king(Player::One)));
        assert_eq!(board.piece_at(cell), None);
    }
}
