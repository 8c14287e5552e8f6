//! Legal move generation.
//!
//! Candidate destinations come from the pre-computed [`PawnAttacks`] tables and
//! each one is run through [`classify_move`], so generation can never disagree
//! with move validation.

use bitflags::bitflags;

use crate::board::{Board, Side};
use crate::pawnattacks::PawnAttacks;
use crate::rules::{classify_move, Move, MoveKind};
use crate::square::Square;
use crate::utils::*;

bitflags! {
    /// Which sides have at least one legal move
    pub struct Mobility: u8 {
        const NONE = 0;
        const WHITE = 1 << 0;
        const BLACK = 1 << 1;
        const BOTH = Self::WHITE.bits | Self::BLACK.bits;
    }
}

impl Mobility {
    pub fn of(side: Side) -> Mobility {
        match side {
            Side::White => Mobility::WHITE,
            Side::Black => Mobility::BLACK,
        }
    }
}

/// Legal moves of the pawn on `from`, in ascending destination order.
pub fn pawn_moves(
    board: &Board,
    from: Square,
    side: Side,
    last_move: Option<&Move>,
    attacks: &PawnAttacks,
) -> Vec<(Move, MoveKind)> {
    let candidates = attacks.forward(side, from) | attacks.diagonal(side, from);
    extract_bits(candidates)
        .into_iter()
        .map(Square::from_index)
        .filter_map(|to| {
            classify_move(board, from, to, side, last_move)
                .ok()
                .map(|kind| (Move { from, to, side }, kind))
        })
        .collect()
}

/// Every legal move of `side`.
pub fn legal_moves(
    board: &Board,
    side: Side,
    last_move: Option<&Move>,
    attacks: &PawnAttacks,
) -> Vec<(Move, MoveKind)> {
    extract_bits(board.pawns(side))
        .into_iter()
        .flat_map(|from| pawn_moves(board, Square::from_index(from), side, last_move, attacks))
        .collect()
}

/// True when any pawn of `side` has a legal move. Stops at the first one found.
pub fn has_legal_move(
    board: &Board,
    side: Side,
    last_move: Option<&Move>,
    attacks: &PawnAttacks,
) -> bool {
    extract_bits(board.pawns(side)).into_iter().any(|from| {
        let from = Square::from_index(from);
        let candidates = attacks.forward(side, from) | attacks.diagonal(side, from);
        extract_bits(candidates)
            .into_iter()
            .any(|to| classify_move(board, from, Square::from_index(to), side, last_move).is_ok())
    })
}

/// The sides that can still move in this position.
pub fn mobility(board: &Board, last_move: Option<&Move>, attacks: &PawnAttacks) -> Mobility {
    let mut mobility = Mobility::NONE;
    for side in [Side::White, Side::Black] {
        if has_legal_move(board, side, last_move, attacks) {
            mobility |= Mobility::of(side);
        }
    }
    mobility
}
