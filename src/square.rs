//! Board coordinates.

use std::fmt;
use std::str::FromStr;

use crate::error::MoveError;
use crate::utils::Bitboard;

static FILE_NAMES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// A square on the 8x8 board.
///
/// Stored as the bit index `(rank - 1) * 8 + file`, the same numbering the occupancy
/// bitboards use. Only in-range squares can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Builds a square from a 0-based file (a = 0) and a 1-based rank.
    pub fn new(file: u8, rank: u8) -> Result<Square, MoveError> {
        if file > 7 || !(1..=8).contains(&rank) {
            return Err(MoveError::OutOfBounds { file, rank });
        }
        Ok(Square((rank - 1) * 8 + file))
    }

    /// Builds a square from its bit index. Callers guarantee `index < 64`.
    pub(crate) fn from_index(index: usize) -> Square {
        debug_assert!(index < 64, "square index {index} off the board");
        Square(index as u8)
    }

    /// 0-based file, a = 0.
    pub fn file(self) -> u8 {
        self.0 % 8
    }

    /// 1-based rank as written in chess notation.
    pub fn rank(self) -> u8 {
        self.0 / 8 + 1
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Single-bit bitboard for this square.
    pub fn bit(self) -> Bitboard {
        1 << self.0
    }

    /// The square `files` and `ranks` away, if it is still on the board.
    pub fn offset(self, files: i8, ranks: i8) -> Option<Square> {
        let file = (self.file() as i8).checked_add(files)?;
        let rank = (self.rank() as i8).checked_add(ranks)?;
        if !(0..8).contains(&file) || !(1..=8).contains(&rank) {
            return None;
        }
        Some(Square((rank as u8 - 1) * 8 + file as u8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FILE_NAMES[self.file() as usize], self.rank())
    }
}

impl FromStr for Square {
    type Err = MoveError;

    /// Parses algebraic notation such as `e4` (lowercase file, rank 1-8).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(MoveError::BadNotation { len: s.chars().count() });
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'0');
        Square::new(file, rank)
    }
}
