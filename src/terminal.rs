//! End-of-game detection.
//!
//! Runs after every applied move, from the point of view of the side that just
//! moved. Wins are checked before stalemate.

use crate::board::{Board, Side};
use crate::movegeneration::{has_legal_move, mobility, Mobility};
use crate::pawnattacks::PawnAttacks;
use crate::rules::Move;

/// State of the game after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Win(Side),
    Draw,
}

impl GameOutcome {
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// When a position without legal moves counts as stalemate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StalemateRule {
    /// Draw when the side to move has no legal move
    #[default]
    SideToMove,
    /// Draw when either side has no legal move
    EitherSide,
}

/// Decides win, draw or neither after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerminalDetector {
    rule: StalemateRule,
}

impl TerminalDetector {
    pub fn new(rule: StalemateRule) -> Self {
        TerminalDetector { rule }
    }

    pub fn rule(&self) -> StalemateRule {
        self.rule
    }

    /// Outcome after `last_move` has been applied to `board`.
    pub fn evaluate(&self, board: &Board, last_move: &Move, attacks: &PawnAttacks) -> GameOutcome {
        let mover = last_move.side;
        if last_move.to.rank() == mover.far_rank() {
            log::debug!("{mover} reached rank {} with {last_move}", mover.far_rank());
            return GameOutcome::Win(mover);
        }
        if board.pawn_count(mover.opponent()) == 0 {
            log::debug!("{} has no pawns left", mover.opponent());
            return GameOutcome::Win(mover);
        }
        if self.is_stalemate(board, mover.opponent(), Some(last_move), attacks) {
            log::debug!("stalemate after {last_move} ({:?})", self.rule);
            return GameOutcome::Draw;
        }
        GameOutcome::InProgress
    }

    /// Whether the position is drawn with `side_to_move` to play.
    pub fn is_stalemate(
        &self,
        board: &Board,
        side_to_move: Side,
        last_move: Option<&Move>,
        attacks: &PawnAttacks,
    ) -> bool {
        match self.rule {
            StalemateRule::SideToMove => !has_legal_move(board, side_to_move, last_move, attacks),
            StalemateRule::EitherSide => mobility(board, last_move, attacks) != Mobility::BOTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    fn mv(text: &str, side: Side) -> Move {
        Move { from: text[..2].parse().unwrap(), to: text[2..].parse().unwrap(), side }
    }

    fn evaluate(rule: StalemateRule, placement: &str, last: Move) -> GameOutcome {
        let board = Board::from_placement(placement).unwrap();
        TerminalDetector::new(rule).evaluate(&board, &last, &PawnAttacks::new())
    }

    #[test]
    fn reaching_far_rank_wins() {
        // the placement parser refuses back-rank pawns, so put it there by hand
        let mut board = Board::from_placement("8/8/8/8/8/8/pppppppp/8").unwrap();
        let to: Square = "a8".parse().unwrap();
        board.place(to, Side::White.pawn());
        let outcome = TerminalDetector::default().evaluate(&board, &mv("a7a8", Side::White), &PawnAttacks::new());
        assert_eq!(outcome, GameOutcome::Win(Side::White));

        let mut board = Board::from_placement("8/PPPPPPPP/8/8/8/8/8/8").unwrap();
        board.place("h1".parse().unwrap(), Side::Black.pawn());
        let outcome = TerminalDetector::default().evaluate(&board, &mv("h2h1", Side::Black), &PawnAttacks::new());
        assert_eq!(outcome, GameOutcome::Win(Side::Black));
    }

    #[test]
    fn capturing_last_pawn_wins() {
        let outcome = evaluate(StalemateRule::SideToMove, "8/8/8/3P4/8/8/8/8", mv("e4d5", Side::White));
        assert_eq!(outcome, GameOutcome::Win(Side::White));
    }

    #[test]
    fn win_beats_stalemate() {
        // black is left without pawns and so without moves; the win is reported
        let outcome = evaluate(StalemateRule::EitherSide, "8/8/8/3P4/3P4/8/8/8", mv("e4d5", Side::White));
        assert_eq!(outcome, GameOutcome::Win(Side::White));
    }

    #[test]
    fn side_to_move_without_moves_is_stalemate() {
        // black e5 is blocked by e4, white still has a2
        let outcome = evaluate(StalemateRule::SideToMove, "8/8/8/4p3/4P3/8/P7/8", mv("e3e4", Side::White));
        assert_eq!(outcome, GameOutcome::Draw);
    }

    #[test]
    fn only_mover_stuck_depends_on_rule() {
        // white is blocked, black still has a7
        let placement = "8/p7/8/4p3/4P3/8/8/8";
        let last = mv("e3e4", Side::White);
        assert_eq!(evaluate(StalemateRule::SideToMove, placement, last), GameOutcome::InProgress);
        assert_eq!(evaluate(StalemateRule::EitherSide, placement, last), GameOutcome::Draw);
    }

    #[test]
    fn en_passant_counts_as_a_move() {
        // white's only move is e5xd6 en passant
        let board = Board::from_placement("8/8/4p3/3pP3/8/8/8/8").unwrap();
        let last = mv("d7d5", Side::Black);
        let detector = TerminalDetector::default();
        assert_eq!(detector.evaluate(&board, &last, &PawnAttacks::new()), GameOutcome::InProgress);

        let stale = mv("d6d5", Side::Black);
        assert_eq!(detector.evaluate(&board, &stale, &PawnAttacks::new()), GameOutcome::Draw);
    }

    #[test]
    fn open_position_continues() {
        let outcome = evaluate(StalemateRule::EitherSide, "8/pppppppp/8/8/4P3/8/PPPP1PPP/8", mv("e2e4", Side::White));
        assert_eq!(outcome, GameOutcome::InProgress);
    }
}
