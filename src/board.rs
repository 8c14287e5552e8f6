//! Pawn placement.
//!
//! The board keeps one occupancy bitboard per side. It is the single source of truth
//! for where pawns stand; the rules and the terminal detector only ever read it, and
//! the engine is the only caller of [`Board::place`].

use std::fmt;

use crate::error::FenError;
use crate::square::Square;
use crate::utils::*;

/// The two players. White moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Rank delta of one step forward.
    pub fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Rank the side's pawns start on; a pawn there may double-step.
    pub fn start_rank(self) -> u8 {
        match self {
            Side::White => 2,
            Side::Black => 7,
        }
    }

    /// Rank that wins the game when reached.
    pub fn far_rank(self) -> u8 {
        match self {
            Side::White => 8,
            Side::Black => 1,
        }
    }

    pub fn pawn(self) -> Cell {
        match self {
            Side::White => Cell::WhitePawn,
            Side::Black => Cell::BlackPawn,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("white"),
            Side::Black => f.write_str("black"),
        }
    }
}

/// Contents of one square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    WhitePawn,
    BlackPawn,
}

/// The 8x8 board, as one occupancy bitboard per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Bitboard of all white pawns
    white: Bitboard,
    /// Bitboard of all black pawns
    black: Bitboard,
}

impl Board {
    /// White pawns on rank 2, black pawns on rank 7.
    pub fn new() -> Board {
        Board {
            white: rank_mask(Side::White.start_rank() - 1),
            black: rank_mask(Side::Black.start_rank() - 1),
        }
    }

    /// A board with no pawns, for building custom positions.
    pub fn empty() -> Board {
        Board::default()
    }

    pub fn cell_at(&self, square: Square) -> Cell {
        let bit = square.bit();
        if self.white & bit != 0 {
            Cell::WhitePawn
        } else if self.black & bit != 0 {
            Cell::BlackPawn
        } else {
            Cell::Empty
        }
    }

    /// Overwrites a square. Only move application and position setup call this.
    pub fn place(&mut self, square: Square, cell: Cell) {
        let bit = square.bit();
        self.white &= !bit;
        self.black &= !bit;
        match cell {
            Cell::Empty => {}
            Cell::WhitePawn => self.white |= bit,
            Cell::BlackPawn => self.black |= bit,
        }
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.occupancy() & square.bit() == 0
    }

    pub fn owned_by(&self, square: Square, side: Side) -> bool {
        self.pawns(side) & square.bit() != 0
    }

    /// Occupancy bitboard of one side.
    pub fn pawns(&self, side: Side) -> Bitboard {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }

    pub fn occupancy(&self) -> Bitboard {
        self.white | self.black
    }

    pub fn pawn_count(&self, side: Side) -> u32 {
        self.pawns(side).count_ones()
    }

    /// Every square as a grid, rank 8 first and file a first within a rank.
    pub fn grid(&self) -> [[Cell; 8]; 8] {
        let mut grid = [[Cell::Empty; 8]; 8];
        for (row, cells) in grid.iter_mut().enumerate() {
            let rank = 8 - row as u8;
            for (file, cell) in cells.iter_mut().enumerate() {
                *cell = self.cell_at(Square::from_index((rank as usize - 1) * 8 + file));
            }
        }
        grid
    }

    /// Reads the piece placement field of a FEN string. Only pawns are accepted,
    /// and never on rank 1 or 8.
    pub fn from_placement(placement: &str) -> Result<Board, FenError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::RankCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let rank = 8 - row as u8;
            let mut file = 0usize;
            for ch in text.chars() {
                if let Some(skip) = ch.to_digit(10).filter(|n| (1..=8).contains(n)) {
                    file += skip as usize;
                    continue;
                }
                let cell = match ch {
                    'P' => Cell::WhitePawn,
                    'p' => Cell::BlackPawn,
                    other => return Err(FenError::Piece(other)),
                };
                if file >= 8 {
                    return Err(FenError::RankLength { rank, files: file + 1 });
                }
                let square = Square::from_index((rank as usize - 1) * 8 + file);
                if rank == 1 || rank == 8 {
                    return Err(FenError::PawnOnBackRank(square));
                }
                board.place(square, cell);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::RankLength { rank, files: file });
            }
        }
        Ok(board)
    }

    /// Writes the piece placement field of a FEN string.
    pub fn placement(&self) -> String {
        let mut fen = String::new();
        for (row, cells) in self.grid().iter().enumerate() {
            if row > 0 {
                fen.push('/');
            }
            let mut empty = 0;
            for cell in cells {
                let ch = match cell {
                    Cell::Empty => {
                        empty += 1;
                        continue;
                    }
                    Cell::WhitePawn => 'P',
                    Cell::BlackPawn => 'p',
                };
                if empty > 0 {
                    fen.push_str(&empty.to_string());
                    empty = 0;
                }
                fen.push(ch);
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
        }
        fen
    }
}
