//! Error types for the pawns-only engine
//!
//! Every rejected move is reported as a [`MoveError`]; none of them is fatal and the
//! game continues with the same side to move.

use crate::board::Side;
use crate::square::Square;

/// Reasons a move request is rejected
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The source square holds no pawn of the side to move
    #[error("no {side} pawn at {square}")]
    NoPieceAtSource { side: Side, square: Square },

    /// File/rank delta matches neither a forward move nor a capture
    #[error("{from}{to} is not a pawn move")]
    IllegalShape { from: Square, to: Square },

    /// A forward move runs into an occupied square
    #[error("{from}{to} is blocked at {blocker}")]
    BlockedPath { from: Square, to: Square, blocker: Square },

    /// Diagonal move with nothing to capture, normally or en passant
    #[error("nothing to capture on {to}")]
    NoCaptureTarget { to: Square },

    /// Square notation that is not a file letter followed by a rank digit
    #[error("expected a square like e4, got {len} characters")]
    BadNotation { len: usize },

    /// Coordinates off the 8x8 board
    #[error("file {file}, rank {rank} is off the board")]
    OutOfBounds { file: u8, rank: u8 },

    /// The game already ended
    #[error("the game is over")]
    GameOver,
}

/// Errors while reading a pawn-only FEN string
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 6 fields, got {0}")]
    FieldCount(usize),

    #[error("expected 8 ranks, got {0}")]
    RankCount(usize),

    #[error("rank {rank} describes {files} files")]
    RankLength { rank: u8, files: usize },

    #[error("unsupported piece '{0}'")]
    Piece(char),

    #[error("pawn on back rank {0}")]
    PawnOnBackRank(Square),

    #[error("invalid side to move '{0}'")]
    Side(String),

    #[error("castling rights must be '-', got '{0}'")]
    Castling(String),

    #[error("invalid en passant square '{0}'")]
    EnPassant(String),

    #[error("invalid move counter '{0}'")]
    Counter(String),
}
