//! The game engine: board, turn order and end-of-game detection behind one API.
//!
//! Front-ends talk to the engine in squares and receive structured results;
//! parsing player input and drawing the board stay on their side.

use crate::board::{Board, Cell, Side};
use crate::error::{FenError, MoveError};
use crate::movegeneration::legal_moves;
use crate::pawnattacks::PawnAttacks;
use crate::rules::{apply_move, classify_move, Move, MoveKind};
use crate::square::Square;
use crate::terminal::{GameOutcome, StalemateRule, TerminalDetector};
use crate::turn::TurnController;

/// Everything needed to continue one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    board: Board,
    turn: TurnController,
    detector: TerminalDetector,
    outcome: GameOutcome,
    /// Pre-computed pawn move and attack patterns
    pawn_attacks: PawnAttacks,
}

/// A move the engine accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub mv: Move,
    pub kind: MoveKind,
    pub outcome: GameOutcome,
}

/// Answer to [`submit_move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    Applied(EngineState, GameOutcome),
    Rejected(MoveError),
}

impl EngineState {
    /// Starting position, white to move, default stalemate rule.
    pub fn new() -> Self {
        Self::with_rule(StalemateRule::default())
    }

    pub fn with_rule(rule: StalemateRule) -> Self {
        Self::from_parts(Board::new(), TurnController::new(), rule)
    }

    fn from_parts(board: Board, turn: TurnController, rule: StalemateRule) -> Self {
        let mut state = EngineState {
            board,
            turn,
            detector: TerminalDetector::new(rule),
            outcome: GameOutcome::InProgress,
            pawn_attacks: PawnAttacks::new(),
        };
        state.outcome = state.initial_outcome();
        state
    }

    /// Outcome of a position loaded from outside, before anyone has moved in it.
    fn initial_outcome(&self) -> GameOutcome {
        if let Some(mv) = self.turn.last_move() {
            return self.detector.evaluate(&self.board, mv, &self.pawn_attacks);
        }
        let side = self.turn.current_side();
        for side in [side, side.opponent()] {
            if self.board.pawn_count(side) == 0 {
                return GameOutcome::Win(side.opponent());
            }
        }
        if self.detector.is_stalemate(&self.board, side, None, &self.pawn_attacks) {
            return GameOutcome::Draw;
        }
        GameOutcome::InProgress
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.turn.current_side()
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.turn.last_move()
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn stalemate_rule(&self) -> StalemateRule {
        self.detector.rule()
    }

    /// Cell grid for display, rank 8 first.
    pub fn render(&self) -> [[Cell; 8]; 8] {
        self.board.grid()
    }

    /// Every legal move for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<(Move, MoveKind)> {
        if self.outcome.is_over() {
            return Vec::new();
        }
        legal_moves(&self.board, self.side_to_move(), self.last_move(), &self.pawn_attacks)
    }

    /// Validates a move for the side to move without playing it.
    pub fn classify(&self, from: Square, to: Square) -> Result<MoveKind, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver);
        }
        classify_move(&self.board, from, to, self.side_to_move(), self.last_move())
    }

    /// Plays a move for the side to move.
    ///
    /// On rejection nothing changes: board, last move and side to move are exactly
    /// as before.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<Applied, MoveError> {
        let kind = self.classify(from, to).map_err(|err| {
            log::trace!("rejected {from}{to}: {err}");
            err
        })?;

        let mv = Move { from, to, side: self.side_to_move() };
        apply_move(&mut self.board, &mv, kind);
        self.turn.record_move(mv);
        self.outcome = self.detector.evaluate(&self.board, &mv, &self.pawn_attacks);
        log::debug!("{} played {mv} ({kind:?}), outcome {:?}", mv.side, self.outcome);

        Ok(Applied { mv, kind, outcome: self.outcome })
    }

    /// Loads a pawn-only FEN string.
    ///
    /// Castling rights must be `-`. An en passant square is turned back into the
    /// double step that produced it, so the capture stays available.
    pub fn from_fen(fen: &str, rule: StalemateRule) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::FieldCount(parts.len()));
        }

        let board = Board::from_placement(parts[0])?;

        let side = match parts[1] {
            "w" => Side::White,
            "b" => Side::Black,
            other => return Err(FenError::Side(other.to_string())),
        };

        if parts[2] != "-" {
            return Err(FenError::Castling(parts[2].to_string()));
        }

        let last_move = match parts[3] {
            "-" => None,
            text => Some(double_step_through(&board, side, text)?),
        };

        parts[4]
            .parse::<u32>()
            .map_err(|_| FenError::Counter(parts[4].to_string()))?;
        let fullmove_number = parts[5]
            .parse::<u32>()
            .map_err(|_| FenError::Counter(parts[5].to_string()))?;

        let turn = TurnController::resume(side, last_move, fullmove_number);
        Ok(Self::from_parts(board, turn, rule))
    }

    /// Writes the position as FEN. The halfmove clock is always 0: every move is
    /// a pawn move.
    pub fn to_fen(&self) -> String {
        let side = match self.side_to_move() {
            Side::White => "w",
            Side::Black => "b",
        };
        let en_passant = self
            .last_move()
            .filter(|mv| mv.from.rank().abs_diff(mv.to.rank()) == 2)
            .and_then(|mv| mv.to.offset(0, -mv.side.forward()))
            .map_or_else(|| "-".to_string(), |square| square.to_string());
        format!(
            "{} {} - {} 0 {}",
            self.board.placement(),
            side,
            en_passant,
            self.turn.fullmove_number()
        )
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

/// The opponent's double step that passed over the en passant square `text`.
fn double_step_through(board: &Board, side_to_move: Side, text: &str) -> Result<Move, FenError> {
    let invalid = || FenError::EnPassant(text.to_string());
    let target: Square = text.parse().map_err(|_| invalid())?;
    let mover = side_to_move.opponent();
    let from = target.offset(0, -mover.forward()).ok_or_else(invalid)?;
    let to = target.offset(0, mover.forward()).ok_or_else(invalid)?;
    if from.rank() != mover.start_rank()
        || !board.owned_by(to, mover)
        || !board.is_empty(target)
        || !board.is_empty(from)
    {
        return Err(invalid());
    }
    Ok(Move { from, to, side: mover })
}

/// Starting position, white to move, no last move.
pub fn new_game() -> EngineState {
    EngineState::new()
}

/// Tries a move on a copy of `state`. A rejected move leaves `state` as it was.
pub fn submit_move(state: &EngineState, from: Square, to: Square) -> MoveResult {
    let mut next = state.clone();
    match next.apply_move(from, to) {
        Ok(applied) => MoveResult::Applied(next, applied.outcome),
        Err(err) => MoveResult::Rejected(err),
    }
}

/// Cell grid of `state` for display.
pub fn render(state: &EngineState) -> [[Cell; 8]; 8] {
    state.render()
}

pub fn outcome(state: &EngineState) -> GameOutcome {
    state.outcome()
}
