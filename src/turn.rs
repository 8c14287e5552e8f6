use crate::board::Side;
use crate::rules::Move;

/// Whose turn it is, and the one previous move en passant needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnController {
    side_to_move: Side,
    last_move: Option<Move>,
    /// Starts at 1 and increments after each black move
    fullmove_number: u32,
}

impl TurnController {
    pub fn new() -> Self {
        Self::resume(Side::White, None, 1)
    }

    /// Picks a game up mid-way, e.g. from a FEN string.
    pub fn resume(side_to_move: Side, last_move: Option<Move>, fullmove_number: u32) -> Self {
        TurnController {
            side_to_move,
            last_move,
            fullmove_number: fullmove_number.max(1),
        }
    }

    pub fn current_side(&self) -> Side {
        self.side_to_move
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Records an applied move and hands the turn to the other side.
    pub fn record_move(&mut self, mv: Move) {
        debug_assert_eq!(mv.side, self.side_to_move, "{mv} played out of turn");
        if mv.side == Side::Black {
            self.fullmove_number += 1;
        }
        self.last_move = Some(mv);
        self.side_to_move = mv.side.opponent();
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
