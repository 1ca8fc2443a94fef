//! Core value types for the draughts board model.
//!
//! Everything here is a small `Copy` value; position is always expressed as
//! a `Cell`, and a piece carries no identity beyond the cell that holds it.

/// One of the two players.
///
/// Player One starts on rows 5-7 and advances toward row 0; Player Two
/// starts on rows 0-2 and advances toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Row delta of a non-king move for this player.
    #[inline]
    pub const fn forward_row_step(self) -> i8 {
        match self {
            Player::One => -1,
            Player::Two => 1,
        }
    }

    /// Farthest row from this player's starting side; landing here crowns
    /// the piece.
    #[inline]
    pub const fn crowning_row(self) -> u8 {
        match self {
            Player::One => 0,
            Player::Two => 7,
        }
    }
}

/// A single checker on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub owner: Player,
    pub is_king: bool,
}

impl Piece {
    #[inline]
    pub const fn man(owner: Player) -> Self {
        Self {
            owner,
            is_king: false,
        }
    }

    #[inline]
    pub const fn king(owner: Player) -> Self {
        Self {
            owner,
            is_king: true,
        }
    }
}

/// Board coordinate with `row` and `col` both in `0..=7`.
///
/// Row 0 is Player Two's home edge; row 7 is Player One's home edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether this cell may ever hold a piece (standard checkers coloring).
    #[inline]
    pub const fn is_dark_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Displace by `(d_row, d_col)`, returning `None` when the result leaves
    /// the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Cell> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Cell::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Cell halfway between `self` and `other`. Meaningful only when both
    /// axes differ by an even amount, as in a jump move.
    #[inline]
    pub const fn midpoint(self, other: Cell) -> Cell {
        Cell::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Player};

    #[test]
    fn players_are_opposites_with_distinct_indices() {
        assert_eq!(Player::One.opposite(), Player::Two);
        assert_eq!(Player::Two.opposite(), Player::One);
        assert_ne!(Player::One.index(), Player::Two.index());
    }

    #[test]
    fn forward_steps_point_at_the_crowning_rows() {
        assert_eq!(Player::One.forward_row_step(), -1);
        assert_eq!(Player::One.crowning_row(), 0);
        assert_eq!(Player::Two.forward_row_step(), 1);
        assert_eq!(Player::Two.crowning_row(), 7);
    }

    #[test]
    fn offsets_are_bounds_checked() {
        let corner = Cell::new(0, 7);
        assert_eq!(corner.offset(-1, 1), None);
        assert_eq!(corner.offset(1, -1), Some(Cell::new(1, 6)));
    }

    #[test]
    fn midpoint_of_a_jump_is_the_jumped_cell() {
        assert_eq!(Cell::new(2, 1).midpoint(Cell::new(4, 3)), Cell::new(3, 2));
    }

    #[test]
    fn dark_parity_follows_row_plus_col() {
        assert!(Cell::new(0, 1).is_dark_playable());
        assert!(!Cell::new(0, 0).is_dark_playable());
        assert!(Cell::new(7, 0).is_dark_playable());
    }
}
