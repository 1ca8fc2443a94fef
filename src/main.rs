//! Interactive terminal front-end for the draughts engine.
//!
//! Plays the role of the presentation layer: it queries the engine for
//! legal destinations and the must-capture set, issues select/move
//! commands, and displays board, turn, and winner. All rules live in the
//! engine; this loop only translates text commands and prints state.

use std::io::{self, BufRead, Write};

use oak_draughts::game_state::draughts_types::{Cell, Player};
use oak_draughts::game_state::game_engine::{GameEngine, TurnProgress};
use oak_draughts::utils::coordinates::{cell_to_coordinate, coordinate_to_cell};
use oak_draughts::utils::render_board::render_board;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new();

    session.print_board(&mut stdout)?;
    session.print_turn(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(line.trim(), &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct Session {
    engine: GameEngine,
}

impl Session {
    fn new() -> Self {
        Self {
            engine: GameEngine::new_game(),
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return Ok(false);
        };

        match command {
            "quit" | "exit" => return Ok(true),
            "help" => {
                writeln!(
                    out,
                    "commands: show, turn, forced, select <cell>, targets, move <cell>, cancel, new, quit"
                )?;
            }
            "show" => self.print_board(out)?,
            "turn" => self.print_turn(out)?,
            "forced" => {
                let forced: Vec<String> = self
                    .engine
                    .must_capture_cells()
                    .iter()
                    .map(|cell| cell_to_coordinate(*cell))
                    .collect();
                if forced.is_empty() {
                    writeln!(out, "no captures are forced")?;
                } else {
                    writeln!(out, "must capture with: {}", forced.join(" "))?;
                }
            }
            "select" => match self.parse_cell(tokens.next()) {
                Ok(cell) => match self.engine.select_piece(cell) {
                    Ok(()) => self.print_targets(out)?,
                    Err(error) => writeln!(out, "{error}")?,
                },
                Err(message) => writeln!(out, "{message}")?,
            },
            "targets" => self.print_targets(out)?,
            "move" => match self.parse_cell(tokens.next()) {
                Ok(cell) => match self.engine.apply_move(cell) {
                    Ok(outcome) => {
                        self.print_board(out)?;
                        if let Some(winner) = outcome.winner {
                            writeln!(out, "{} won!", player_name(winner))?;
                        } else if outcome.progress == TurnProgress::ContinueChain {
                            writeln!(out, "capture again with the same piece")?;
                        } else {
                            self.print_turn(out)?;
                        }
                    }
                    Err(error) => writeln!(out, "{error}")?,
                },
                Err(message) => writeln!(out, "{message}")?,
            },
            "cancel" => {
                self.engine.clear_selection();
                writeln!(out, "selection cleared")?;
            }
            "new" => {
                self.engine = GameEngine::new_game();
                self.print_board(out)?;
                self.print_turn(out)?;
            }
            other => writeln!(out, "unknown command: {other} (try 'help')")?,
        }

        Ok(false)
    }

    fn parse_cell(&self, token: Option<&str>) -> Result<Cell, String> {
        let token = token.ok_or("expected a cell coordinate, e.g. 'b6'")?;
        coordinate_to_cell(token)
    }

    fn print_board(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render_board(self.engine.board()))
    }

    fn print_turn(&self, out: &mut impl Write) -> io::Result<()> {
        match self.engine.winner() {
            Some(winner) => writeln!(out, "{} won!", player_name(winner)),
            None => writeln!(out, "{}'s turn", player_name(self.engine.current_turn())),
        }
    }

    fn print_targets(&self, out: &mut impl Write) -> io::Result<()> {
        let Some(origin) = self.engine.selected_cell() else {
            return writeln!(out, "nothing is selected");
        };
        let targets: Vec<String> = self
            .engine
            .legal_destinations(origin)
            .iter()
            .map(|destination| cell_to_coordinate(destination.cell))
            .collect();
        writeln!(
            out,
            "{} can move to: {}",
            cell_to_coordinate(origin),
            targets.join(" ")
        )
    }
}

fn player_name(player: Player) -> &'static str {
    match player {
        Player::One => "Player 1",
        Player::Two => "Player 2",
    }
}
