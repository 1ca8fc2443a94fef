//! Per-piece destination generation.
//!
//! Computes where a single piece may land: one-step simple moves and
//! two-step jump moves over an adjacent opponent piece. Callers that have
//! already established a capture obligation pass `captures_only` to suppress
//! the simple moves.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::{Cell, Piece};

/// Whether a destination is reached by a plain step or by jumping a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Simple,
    Capture,
}

/// A legal landing cell for one piece, tagged with how it is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub cell: Cell,
    pub kind: MoveKind,
}

/// Diagonal directions this piece may move in: two forward diagonals for a
/// man, all four for a king.
fn move_directions(piece: Piece) -> Vec<(i8, i8)> {
    let forward = piece.owner.forward_row_step();
    let mut directions = vec![(forward, -1), (forward, 1)];
    if piece.is_king {
        directions.push((-forward, -1));
        directions.push((-forward, 1));
    }
    directions
}

/// Destinations for the piece at `origin`, or an empty list when the cell
/// does not hold a piece.
///
/// With `captures_only` set, simple moves are suppressed; capture moves are
/// produced either way.
pub fn piece_destinations(board: &Board, origin: Cell, captures_only: bool) -> Vec<Destination> {
    let Some(piece) = board.piece_at(origin) else {
        return Vec::new();
    };

    let mut destinations = Vec::new();
    for (d_row, d_col) in move_directions(piece) {
        let Some(adjacent) = origin.offset(d_row, d_col) else {
            continue;
        };
        match board.piece_at(adjacent) {
            None => {
                if !captures_only {
                    destinations.push(Destination {
                        cell: adjacent,
                        kind: MoveKind::Simple,
                    });
                }
            }
            Some(blocker) if blocker.owner == piece.owner.opposite() => {
                let Some(landing) = origin.offset(d_row * 2, d_col * 2) else {
                    continue;
                };
                if board.piece_at(landing).is_none() {
                    destinations.push(Destination {
                        cell: landing,
                        kind: MoveKind::Capture,
                    });
                }
            }
            Some(_) => {}
        }
    }
    destinations
}

/// Whether the piece at `origin` has at least one capture destination.
#[inline]
pub fn has_capture(board: &Board, origin: Cell) -> bool {
    piece_destinations(board, origin, true)
        .iter()
        .any(|destination| destination.kind == MoveKind::Capture)
}

#[cfg(test)]
mod tests {
    use super::{has_capture, piece_destinations, Destination, MoveKind};
    use crate::game_state::board::Board;
    use crate::game_state::draughts_types::{Cell, Piece, Player};

    fn destination_cells(destinations: &[Destination]) -> Vec<Cell> {
        destinations.iter().map(|d| d.cell).collect()
    }

    #[test]
    fn man_moves_to_both_forward_diagonals() {
        let mut board = Board::empty();
        board.place(Cell::new(5, 2), Piece::man(Player::One));
        let found = piece_destinations(&board, Cell::new(5, 2), false);
        let mut cells = destination_cells(&found);
        cells.sort();
        assert_eq!(cells, vec![Cell::new(4, 1), Cell::new(4, 3)]);
        assert!(found.iter().all(|d| d.kind == MoveKind::Simple));
    }

    #[test]
    fn man_does_not_move_backward() {
        let mut board = Board::empty();
        board.place(Cell::new(4, 3), Piece::man(Player::Two));
        let cells = destination_cells(&piece_destinations(&board, Cell::new(4, 3), false));
        assert!(cells.iter().all(|cell| cell.row == 5));
    }

    #[test]
    fn king_moves_in_all_four_diagonals() {
        let mut board = Board::empty();
        board.place(Cell::new(4, 3), Piece::king(Player::One));
        let found = piece_destinations(&board, Cell::new(4, 3), false);
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn jump_over_opponent_into_empty_cell() {
        let mut board = Board::empty();
        board.place(Cell::new(2, 1), Piece::man(Player::Two));
        board.place(Cell::new(3, 2), Piece::man(Player::One));
        let found = piece_destinations(&board, Cell::new(2, 1), false);
        assert!(found.contains(&Destination {
            cell: Cell::new(4, 3),
            kind: MoveKind::Capture,
        }));
        assert!(has_capture(&board, Cell::new(2, 1)));
    }

    #[test]
    fn jump_blocked_when_landing_cell_is_occupied() {
        let mut board = Board::empty();
        board.place(Cell::new(2, 1), Piece::man(Player::Two));
        board.place(Cell::new(3, 2), Piece::man(Player::One));
        board.place(Cell::new(4, 3), Piece::man(Player::One));
        assert!(!has_capture(&board, Cell::new(2, 1)));
    }

    #[test]
    fn own_piece_is_not_jumpable() {
        let mut board = Board::empty();
        board.place(Cell::new(2, 1), Piece::man(Player::Two));
        board.place(Cell::new(3, 2), Piece::man(Player::Two));
        let cells = destination_cells(&piece_destinations(&board, Cell::new(2, 1), false));
        assert_eq!(cells, vec![Cell::new(3, 0)]);
    }

    #[test]
    fn captures_only_suppresses_simple_moves() {
        let mut board = Board::empty();
        board.place(Cell::new(5, 2), Piece::man(Player::One));
        assert!(piece_destinations(&board, Cell::new(5, 2), true).is_empty());
    }

    #[test]
    fn edge_piece_stays_in_bounds() {
        let mut board = Board::empty();
        board.place(Cell::new(5, 0), Piece::man(Player::One));
        let cells = destination_cells(&piece_destinations(&board, Cell::new(5, 0), false));
        assert_eq!(cells, vec![Cell::new(4, 1)]);
    }

    #[test]
    fn empty_origin_yields_nothing() {
        let board = Board::empty();
        assert!(piece_destinations(&board, Cell::new(5, 2), false).is_empty());
    }
}
