//! Turn-based game engine for English draughts.
//!
//! `GameEngine` owns the board and every derived set: whose turn it is,
//! remaining piece counts, the turn-start must-capture set, and the current
//! selection with its cached legal destinations. All mutation flows through
//! `select_piece` / `apply_move`; rejected commands never change state.
//! The presentation layer is a pure caller: it queries destinations, issues
//! commands, and reads back turn and winner.

use crate::draughts_errors::DraughtsErrors;
use crate::game_state::board::Board;
use crate::game_state::draughts_types::{Cell, Piece, Player};
use crate::move_generation::capture_scan::cells_with_capture;
use crate::move_generation::destination_finder::{piece_destinations, Destination, MoveKind};
use crate::move_generation::move_apply::apply_move_on_board;

/// Where the engine is within one turn.
///
/// `ChainSelected` is entered after a capture that leaves the moved piece
/// with a further capture: the same piece must keep jumping, and the turn
/// does not switch until its chain ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    Selected {
        origin: Cell,
        destinations: Vec<Destination>,
    },
    ChainSelected {
        origin: Cell,
        destinations: Vec<Destination>,
    },
    Finished {
        winner: Player,
    },
}

/// How a committed move advanced the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnProgress {
    /// The moved piece must capture again; same side to move.
    ContinueChain,
    /// The turn passed to the opponent.
    TurnSwitched,
}

/// Result of a committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub progress: TurnProgress,
    /// Set when the move captured the opponent's last piece.
    pub winner: Option<Player>,
}

#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    turn: Player,
    remaining: [u8; 2],
    must_capture: Vec<Cell>,
    phase: TurnPhase,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameEngine {
    /// Engine at the standard starting position, Player One to move.
    pub fn new_game() -> Self {
        Self::from_position(Board::new_game(), Player::One)
    }

    /// Engine over an arbitrary position. Counts and the must-capture set
    /// are derived from the board; a side already without pieces makes the
    /// position terminal.
    pub fn from_position(board: Board, turn: Player) -> Self {
        let remaining = [
            board.count_pieces(Player::One),
            board.count_pieces(Player::Two),
        ];
        let must_capture = cells_with_capture(&board, turn);
        let phase = if remaining[turn.index()] == 0 {
            TurnPhase::Finished {
                winner: turn.opposite(),
            }
        } else if remaining[turn.opposite().index()] == 0 {
            TurnPhase::Finished { winner: turn }
        } else {
            TurnPhase::Idle
        };
        Self {
            board,
            turn,
            remaining,
            must_capture,
            phase,
        }
    }

    // --- Queries ---

    #[inline]
    pub fn piece_at(&self, cell: Cell) -> Option<Piece> {
        self.board.piece_at(cell)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn remaining_pieces(&self, owner: Player) -> u8 {
        self.remaining[owner.index()]
    }

    /// The turn-start must-capture set: current player's pieces that had a
    /// jump available when the turn began. Fixed for the whole turn.
    #[inline]
    pub fn must_capture_cells(&self) -> &[Cell] {
        &self.must_capture
    }

    #[inline]
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    /// Origin of the current selection, if any.
    pub fn selected_cell(&self) -> Option<Cell> {
        match self.phase {
            TurnPhase::Selected { origin, .. } | TurnPhase::ChainSelected { origin, .. } => {
                Some(origin)
            }
            _ => None,
        }
    }

    /// Winner once one side has no pieces left; `None` while play continues.
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            TurnPhase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Legal destinations for the piece at `cell` this turn.
    ///
    /// Simple moves are suppressed whenever the must-capture set is
    /// non-empty. Mid-chain, only the chain piece has destinations and they
    /// are capture-only.
    pub fn legal_destinations(&self, cell: Cell) -> Vec<Destination> {
        match &self.phase {
            TurnPhase::Finished { .. } => Vec::new(),
            TurnPhase::ChainSelected {
                origin,
                destinations,
            } => {
                if *origin == cell {
                    destinations.clone()
                } else {
                    Vec::new()
                }
            }
            _ => match self.board.piece_at(cell) {
                Some(piece) if piece.owner == self.turn => {
                    piece_destinations(&self.board, cell, !self.must_capture.is_empty())
                }
                _ => Vec::new(),
            },
        }
    }

    // --- Commands ---

    /// Select the piece at `cell` for the current player.
    ///
    /// Mid-chain, only the chain piece may be re-selected; otherwise any
    /// owned piece with at least one legal destination is accepted.
    pub fn select_piece(&mut self, cell: Cell) -> Result<(), DraughtsErrors> {
        match &self.phase {
            TurnPhase::Finished { .. } => Err(DraughtsErrors::MoveAfterTerminal),
            TurnPhase::ChainSelected { origin, .. } => {
                if *origin == cell {
                    Ok(())
                } else {
                    Err(DraughtsErrors::IllegalSelection(cell))
                }
            }
            _ => {
                match self.board.piece_at(cell) {
                    Some(piece) if piece.owner == self.turn => {}
                    _ => return Err(DraughtsErrors::IllegalSelection(cell)),
                }
                let destinations =
                    piece_destinations(&self.board, cell, !self.must_capture.is_empty());
                if destinations.is_empty() {
                    return Err(DraughtsErrors::IllegalSelection(cell));
                }
                self.phase = TurnPhase::Selected {
                    origin: cell,
                    destinations,
                };
                Ok(())
            }
        }
    }

    /// Abandon a free selection. A forced chain selection is kept: the
    /// chain piece still has to move.
    pub fn clear_selection(&mut self) {
        if matches!(self.phase, TurnPhase::Selected { .. }) {
            self.phase = TurnPhase::Idle;
        }
    }

    /// Commit the selected piece to `destination`.
    ///
    /// Effects in order: jumped piece removal and count decrement, piece
    /// relocation, crowning on the far row, then either chain continuation
    /// from the landing cell or a turn switch with a fresh must-capture
    /// scan for the new player.
    pub fn apply_move(&mut self, destination: Cell) -> Result<MoveOutcome, DraughtsErrors> {
        let (origin, chosen) = match &self.phase {
            TurnPhase::Finished { .. } => return Err(DraughtsErrors::MoveAfterTerminal),
            TurnPhase::Selected {
                origin,
                destinations,
            }
            | TurnPhase::ChainSelected {
                origin,
                destinations,
            } => {
                let Some(chosen) = destinations
                    .iter()
                    .find(|candidate| candidate.cell == destination)
                else {
                    return Err(DraughtsErrors::IllegalMove(destination));
                };
                (*origin, *chosen)
            }
            TurnPhase::Idle => return Err(DraughtsErrors::IllegalMove(destination)),
        };

        let applied = apply_move_on_board(&mut self.board, origin, destination);
        if applied.captured.is_some() {
            let opponent = self.turn.opposite();
            self.remaining[opponent.index()] -= 1;
            if self.remaining[opponent.index()] == 0 {
                // The turn still passes on the final capture; the losing side
                // has no pieces, so no capture scan is needed.
                let winner = self.turn;
                self.turn = opponent;
                self.must_capture.clear();
                self.phase = TurnPhase::Finished { winner };
                return Ok(MoveOutcome {
                    progress: TurnProgress::TurnSwitched,
                    winner: Some(winner),
                });
            }
        }

        if chosen.kind == MoveKind::Capture {
            let continuation: Vec<Destination> =
                piece_destinations(&self.board, destination, true)
                    .into_iter()
                    .filter(|candidate| candidate.kind == MoveKind::Capture)
                    .collect();
            if !continuation.is_empty() {
                self.phase = TurnPhase::ChainSelected {
                    origin: destination,
                    destinations: continuation,
                };
                return Ok(MoveOutcome {
                    progress: TurnProgress::ContinueChain,
                    winner: None,
                });
            }
        }

        self.turn = self.turn.opposite();
        self.must_capture = cells_with_capture(&self.board, self.turn);
        self.phase = TurnPhase::Idle;
        Ok(MoveOutcome {
            progress: TurnProgress::TurnSwitched,
            winner: None,
        })
    }
}
