//! Pawns-only chess.
//!
//! An 8x8 board holding nothing but pawns. Pawns advance one square, or two from
//! their starting rank, capture diagonally (en passant included), and a side wins
//! by reaching the far rank or by capturing every enemy pawn. A side left without
//! a legal move is stalemated.
//!
//! [`engine`] is the entry point; [`ui`] and `gui` are front-ends built on it.

pub mod board;
pub mod engine;
pub mod error;
pub mod movegeneration;
pub mod pawnattacks;
pub mod perft;
pub mod rules;
pub mod square;
pub mod terminal;
pub mod turn;
pub mod ui;
pub mod utils;
#[cfg(feature = "gui")]
pub mod gui;

pub use board::{Board, Cell, Side};
pub use engine::{new_game, outcome, render, submit_move, Applied, EngineState, MoveResult};
pub use error::{FenError, MoveError};
pub use rules::{classify_move, Move, MoveKind};
pub use square::Square;
pub use terminal::{GameOutcome, StalemateRule, TerminalDetector};
pub use turn::TurnController;
