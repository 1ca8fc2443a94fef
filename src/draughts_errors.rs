//! Errors returned by the draughts engine.
//!
//! Every command on `GameEngine` reports precondition violations through the
//! single enum `DraughtsErrors`. All variants are local, recoverable
//! conditions: a rejected command never mutates engine state, and the caller
//! is expected to re-prompt rather than recover internally.

use std::error::Error;
use std::fmt;

use crate::game_state::draughts_types::Cell;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraughtsErrors {
    /// The cell could not be selected: it is empty, holds the opposing
    /// player's piece, holds a piece with no legal destination, or is not
    /// the piece that must continue a capture chain.
    ///
    /// Payload: the cell the caller tried to select.
    IllegalSelection(Cell),

    /// The destination is not in the legal set computed for the current
    /// selection (including a simple move attempted while any capture is
    /// available, and a move attempted with nothing selected).
    ///
    /// Payload: the offending destination cell.
    IllegalMove(Cell),

    /// A command was issued after one side's piece count reached zero.
    MoveAfterTerminal,
}

impl fmt::Display for DraughtsErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraughtsErrors::IllegalSelection(cell) => {
                write!(f, "cell ({}, {}) cannot be selected", cell.row, cell.col)
            }
            DraughtsErrors::IllegalMove(cell) => {
                write!(f, "cell ({}, {}) is not a legal destination", cell.row, cell.col)
            }
            DraughtsErrors::MoveAfterTerminal => {
                write!(f, "the game is over; no further moves are accepted")
            }
        }
    }
}

impl Error for DraughtsErrors {}
