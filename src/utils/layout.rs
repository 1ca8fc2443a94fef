//! Board-diagram layout strings.
//!
//! A layout string describes the full board in eight `/`-separated ranks,
//! listed from row 0 to row 7, one character per column: `.` empty, `o`
//! Player One man, `O` Player One king, `x` Player Two man, `X` Player Two
//! king. An optional trailing field `1` or `2` names the side to move
//! (Player One when absent). Layouts are used by tests, benches, and the
//! interactive front-end to set up positions.

use crate::game_state::board::Board;
use crate::game_state::draughts_rules::BOARD_SIZE;
use crate::game_state::draughts_types::{Cell, Piece, Player};

/// A parsed layout string: the board plus the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLayout {
    pub board: Board,
    pub side_to_move: Player,
}

pub fn parse_layout(layout: &str) -> Result<ParsedLayout, String> {
    let mut parts = layout.split_whitespace();

    let board_part = parts.next().ok_or("Missing board ranks in layout")?;
    let side_part = parts.next();

    if parts.next().is_some() {
        return Err("Layout has extra trailing fields".to_owned());
    }

    let board = parse_board(board_part)?;
    let side_to_move = match side_part {
        None | Some("1") => Player::One,
        Some("2") => Player::Two,
        Some(other) => return Err(format!("Invalid side-to-move field: {other}")),
    };

    Ok(ParsedLayout {
        board,
        side_to_move,
    })
}

fn parse_board(board_part: &str) -> Result<Board, String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != BOARD_SIZE as usize {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        if rank_str.len() != BOARD_SIZE as usize {
            return Err(format!("Rank {row} does not have 8 columns"));
        }
        for (col, ch) in rank_str.chars().enumerate() {
            let piece = match ch {
                '.' => continue,
                'o' => Piece::man(Player::One),
                'O' => Piece::king(Player::One),
                'x' => Piece::man(Player::Two),
                'X' => Piece::king(Player::Two),
                _ => return Err(format!("Invalid piece character '{ch}' in layout")),
            };
            let cell = Cell::new(row as u8, col as u8);
            if !cell.is_dark_playable() {
                return Err(format!(
                    "Piece on non-playable cell ({row}, {col}) in layout"
                ));
            }
            board.place(cell, piece);
        }
    }

    Ok(board)
}

/// Render a board and side to move back into layout-string form.
pub fn generate_layout(board: &Board, side_to_move: Player) -> String {
    let mut out = String::with_capacity(73);

    for row in 0..8u8 {
        if row > 0 {
            out.push('/');
        }
        for col in 0..8u8 {
            out.push(match board.piece_at(Cell::new(row, col)) {
                None => '.',
                Some(piece) => match (piece.owner, piece.is_king) {
                    (Player::One, false) => 'o',
                    (Player::One, true) => 'O',
                    (Player::Two, false) => 'x',
                    (Player::Two, true) => 'X',
                },
            });
        }
    }

    out.push(' ');
    out.push(match side_to_move {
        Player::One => '1',
        Player::Two => '2',
    });

    out
}
