//! Terminal front-end.
//!
//! Reads moves such as `a2a3` line by line, hands them to the engine and prints
//! the board after every accepted move. Generic over the reader and writer so a
//! whole session can be scripted.

use std::io::{self, BufRead, Write};

use crate::board::{Cell, Side};
use crate::engine::EngineState;
use crate::error::MoveError;
use crate::square::Square;
use crate::terminal::GameOutcome;

const BORDER: &str = "  +---+---+---+---+---+---+---+---+";
const FILES: &str = "    a   b   c   d   e   f   g   h";

pub struct ChessUI {
    state: EngineState,
    white: Option<String>,
    black: Option<String>,
}

impl ChessUI {
    pub fn new(state: EngineState) -> Self {
        ChessUI { state, white: None, black: None }
    }

    /// Uses the given names instead of asking for them.
    pub fn with_players(mut self, white: Option<String>, black: Option<String>) -> Self {
        self.white = white;
        self.black = black;
        self
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Runs one game until it ends, `exit` is typed or input runs out.
    pub fn play_game<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "Pawns-Only Chess\n")?;
        writeln!(output, "How to play:")?;
        writeln!(output, "<initialColumn><initialRow><columnToMove><rowToMove>")?;
        writeln!(output, "ex. a2a3")?;
        writeln!(output, "the piece is in a2 and will move to a3")?;
        writeln!(output, "En Passant capture is also possible\n")?;

        let white = match self.white.clone() {
            Some(name) => name,
            None => prompt(&mut input, &mut output, "First Player's name:")?.unwrap_or_default(),
        };
        let black = match self.black.clone() {
            Some(name) => name,
            None => prompt(&mut input, &mut output, "Second Player's name:")?.unwrap_or_default(),
        };
        log::info!("new game: {white} (white) vs {black} (black), {:?}", self.state.stalemate_rule());

        writeln!(output, "{}", format_board(&self.state.render()))?;
        if announce(&mut output, self.state.outcome())? {
            return Ok(());
        }

        loop {
            let name = match self.state.side_to_move() {
                Side::White => &white,
                Side::Black => &black,
            };
            let Some(line) = prompt(&mut input, &mut output, &format!("{name}'s turn:"))? else {
                writeln!(output, "Bye!")?;
                return Ok(());
            };
            if line == "exit" {
                writeln!(output, "Bye!")?;
                return Ok(());
            }

            let Some((from, to)) = parse_move(&line) else {
                writeln!(output, "Invalid Input")?;
                continue;
            };

            match self.state.apply_move(from, to) {
                Ok(applied) => {
                    writeln!(output, "{}", format_board(&self.state.render()))?;
                    if announce(&mut output, applied.outcome)? {
                        log::info!("game over after {}: {:?}", applied.mv, applied.outcome);
                        return Ok(());
                    }
                }
                Err(MoveError::NoPieceAtSource { side, square }) => {
                    writeln!(output, "No {side} pawn at {square}")?;
                }
                Err(err) => {
                    log::debug!("{line}: {err}");
                    writeln!(output, "Invalid Input")?;
                }
            }
        }
    }
}

/// Prints the end-of-game message. Returns true when the game is over.
fn announce<W: Write>(output: &mut W, outcome: GameOutcome) -> io::Result<bool> {
    match outcome {
        GameOutcome::InProgress => return Ok(false),
        GameOutcome::Win(Side::White) => writeln!(output, "White Wins!")?,
        GameOutcome::Win(Side::Black) => writeln!(output, "Black Wins!")?,
        GameOutcome::Draw => writeln!(output, "Stalemate!")?,
    }
    writeln!(output, "Bye!")?;
    Ok(true)
}

/// Prints `message` and reads one trimmed line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<Option<String>> {
    writeln!(output, "{message}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parses `<file><rank><file><rank>`, e.g. `a2a3`. Anything else is `None`.
pub fn parse_move(input: &str) -> Option<(Square, Square)> {
    if input.len() != 4 || !input.is_ascii() {
        return None;
    }
    let from = input[..2].parse().ok()?;
    let to = input[2..].parse().ok()?;
    Some((from, to))
}

/// Draws the board with `W` and `B` for the pawns, rank 8 at the top.
pub fn format_board(grid: &[[Cell; 8]; 8]) -> String {
    let mut board = format!("{BORDER}\n");
    for (row, cells) in grid.iter().enumerate() {
        let cells: Vec<&str> = cells
            .iter()
            .map(|cell| match cell {
                Cell::Empty => " ",
                Cell::WhitePawn => "W",
                Cell::BlackPawn => "B",
            })
            .collect();
        board.push_str(&format!("{} | {} |\n{BORDER}\n", 8 - row, cells.join(" | ")));
    }
    board.push_str(FILES);
    board.push('\n');
    board
}
