//! Pawn move and attack pattern tables.
//!
//! Pre-computes, for every square and both sides, the squares a pawn there could
//! step to and the squares it could capture on. The tables only describe shapes;
//! occupancy and en passant eligibility are decided by the rules module.

use crate::board::Side;
use crate::square::Square;
use crate::utils::*;

/// Pre-computed pawn move and attack patterns for both sides.
///
/// Forward moves and diagonal captures are kept apart so move generation can
/// feed each candidate through the matching legality check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PawnAttacks {
    /// Forward moves for white pawns from each square
    white_forward_moves: [Bitboard; 64],
    /// Diagonal capture moves for white pawns from each square
    white_diagonal_moves: [Bitboard; 64],
    /// Forward moves for black pawns from each square
    black_forward_moves: [Bitboard; 64],
    /// Diagonal capture moves for black pawns from each square
    black_diagonal_moves: [Bitboard; 64],
}

impl PawnAttacks {
    /// Creates the tables for all 64 squares.
    pub fn new() -> Self {
        let mut attacks = PawnAttacks {
            white_forward_moves: [0; 64],
            white_diagonal_moves: [0; 64],
            black_forward_moves: [0; 64],
            black_diagonal_moves: [0; 64],
        };

        for square in 0..64 {
            let row = (square / 8 + 1) as i32;
            let col = (square % 8 + 1) as i32;

            attacks.white_forward_moves[square] = forward_move(row, col, Side::White);
            attacks.white_diagonal_moves[square] = diagonal_move(row, col, Side::White);
            attacks.black_forward_moves[square] = forward_move(row, col, Side::Black);
            attacks.black_diagonal_moves[square] = diagonal_move(row, col, Side::Black);
        }

        attacks
    }

    /// Squares a pawn of `side` on `square` may advance to, ignoring occupancy.
    pub fn forward(&self, side: Side, square: Square) -> Bitboard {
        match side {
            Side::White => self.white_forward_moves[square.index()],
            Side::Black => self.black_forward_moves[square.index()],
        }
    }

    /// Squares a pawn of `side` on `square` attacks diagonally.
    pub fn diagonal(&self, side: Side, square: Square) -> Bitboard {
        match side {
            Side::White => self.white_diagonal_moves[square.index()],
            Side::Black => self.black_diagonal_moves[square.index()],
        }
    }
}

impl Default for PawnAttacks {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward pawn moves from a square: one step, plus two from the starting rank.
///
/// A pawn standing on its far rank has already won, so it gets no moves.
///
/// # Arguments
///
/// * `row` - The rank number (1-8) of the pawn's position
/// * `col` - The file number (1-8) of the pawn's position
/// * `side` - The side the pawn belongs to
fn forward_move(row: i32, col: i32, side: Side) -> Bitboard {
    if row == side.far_rank() as i32 {
        return 0;
    }
    let step = side.forward() as i32;
    let mut bitboard = set_bit(row + step, col);
    if row == side.start_rank() as i32 {
        bitboard |= set_bit(row + 2 * step, col);
    }
    bitboard
}

/// Diagonal pawn captures from a square, which also covers en passant targets.
///
/// `set_bit` drops the square that would fall off the a- or h-file.
fn diagonal_move(row: i32, col: i32, side: Side) -> Bitboard {
    if row == side.far_rank() as i32 {
        return 0;
    }
    let step = side.forward() as i32;
    set_bit(row + step, col - 1) | set_bit(row + step, col + 1)
}
