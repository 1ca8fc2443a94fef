//! Fixed rule constants for English draughts on the standard board.

pub const BOARD_SIZE: u8 = 8;
pub const PIECES_PER_SIDE: u8 = 12;

/// Starting position: Player Two on rows 0-2, Player One on rows 5-7,
/// pieces on dark cells only. Layout string format is defined in
/// `utils::layout`.
pub const STARTING_POSITION_LAYOUT: &str =
    ".x.x.x.x/x.x.x.x./.x.x.x.x/......../......../o.o.o.o./.o.o.o.o/o.o.o.o. 1";
