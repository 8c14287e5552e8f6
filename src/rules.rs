//! Move legality.
//!
//! [`classify_move`] decides whether a pawn move is legal from the board and the
//! previous move alone, and says which kind of move it is. [`apply_move`] performs
//! a classified move on the board.

use std::fmt;

use crate::board::{Board, Cell, Side};
use crate::error::MoveError;
use crate::square::Square;

/// A move as played: who moved, from where, to where
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub side: Side,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// The four legal pawn moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    PlainAdvance,
    DoubleAdvance,
    NormalCapture,
    EnPassantCapture,
}

impl MoveKind {
    pub fn is_capture(self) -> bool {
        matches!(self, MoveKind::NormalCapture | MoveKind::EnPassantCapture)
    }
}

/// Classifies a move by `side` from `from` to `to`, or says why it is illegal.
///
/// Checks run in a fixed order: ownership of `from`, then the file delta, then the
/// rank delta, then occupancy. `last_move` is the opponent's previous move and only
/// matters for en passant.
pub fn classify_move(
    board: &Board,
    from: Square,
    to: Square,
    side: Side,
    last_move: Option<&Move>,
) -> Result<MoveKind, MoveError> {
    if !board.owned_by(from, side) {
        return Err(MoveError::NoPieceAtSource { side, square: from });
    }

    let file_delta = to.file() as i8 - from.file() as i8;
    let rank_delta = (to.rank() as i8 - from.rank() as i8) * side.forward();

    match file_delta.abs() {
        0 => classify_advance(board, from, to, side, rank_delta),
        1 => classify_capture(board, from, to, side, rank_delta, last_move),
        _ => Err(MoveError::IllegalShape { from, to }),
    }
}

fn classify_advance(
    board: &Board,
    from: Square,
    to: Square,
    side: Side,
    rank_delta: i8,
) -> Result<MoveKind, MoveError> {
    let kind = match rank_delta {
        1 => MoveKind::PlainAdvance,
        // the starting rank alone grants the double step; pawns never move back to it
        2 if from.rank() == side.start_rank() => MoveKind::DoubleAdvance,
        _ => return Err(MoveError::IllegalShape { from, to }),
    };

    for step in 1..=rank_delta {
        let Some(square) = from.offset(0, step * side.forward()) else {
            return Err(MoveError::IllegalShape { from, to });
        };
        if !board.is_empty(square) {
            return Err(MoveError::BlockedPath { from, to, blocker: square });
        }
    }
    Ok(kind)
}

fn classify_capture(
    board: &Board,
    from: Square,
    to: Square,
    side: Side,
    rank_delta: i8,
    last_move: Option<&Move>,
) -> Result<MoveKind, MoveError> {
    if rank_delta != 1 {
        return Err(MoveError::IllegalShape { from, to });
    }

    if is_en_passant(board, from, to, side, last_move) {
        return Ok(MoveKind::EnPassantCapture);
    }
    if board.owned_by(to, side.opponent()) {
        return Ok(MoveKind::NormalCapture);
    }
    Err(MoveError::NoCaptureTarget { to })
}

/// The pawn an en passant capture from `from` to `to` would take.
pub fn en_passant_victim(from: Square, to: Square) -> Square {
    Square::from_index((from.rank() as usize - 1) * 8 + to.file() as usize)
}

/// True when the opponent's last move was a double step landing beside `from` on
/// `to`'s file.
fn is_en_passant(
    board: &Board,
    from: Square,
    to: Square,
    side: Side,
    last_move: Option<&Move>,
) -> bool {
    let opponent = side.opponent();
    let victim = en_passant_victim(from, to);
    if !board.owned_by(victim, opponent) {
        return false;
    }
    let Some(origin) = victim.offset(0, 2 * side.forward()) else {
        return false;
    };
    let double_step = Move { from: origin, to: victim, side: opponent };
    last_move == Some(&double_step)
}

/// Performs a classified move on the board.
///
/// `from` is emptied and `to` receives the mover's pawn, which also removes a
/// normally captured pawn. En passant additionally clears the bypassed pawn.
pub fn apply_move(board: &mut Board, mv: &Move, kind: MoveKind) {
    board.place(mv.from, Cell::Empty);
    board.place(mv.to, mv.side.pawn());
    if kind == MoveKind::EnPassantCapture {
        board.place(en_passant_victim(mv.from, mv.to), Cell::Empty);
    }
}
