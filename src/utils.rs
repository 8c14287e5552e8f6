//! Bitboard helpers.
//!
//! The board keeps one 64-bit occupancy set per side. Bit `rank_index * 8 + file`
//! stands for a square, so a1 is bit 0, h1 is bit 7 and h8 is bit 63.

/// Type alias for a 64-bit integer representing a set of squares
pub type Bitboard = u64;

/// Bitboard of every square on a given rank (0-based rank index).
pub const fn rank_mask(rank_index: u8) -> Bitboard {
    (0xFF as Bitboard) << (rank_index as u32 * 8)
}

/// Sets a bit in a bitboard based on board coordinates.
///
/// Takes 1-based coordinates (1-8 for both row and column) and returns a bitboard
/// with only that square set. Coordinates off the board give an empty bitboard,
/// which lets callers step off the edge without special-casing it.
///
/// # Arguments
///
/// * `row` - The rank number (1-8)
/// * `col` - The file number (1-8)
pub fn set_bit(row: i32, col: i32) -> Bitboard {
    if !(1..=8).contains(&row) || !(1..=8).contains(&col) {
        return 0;
    }
    let bit_index = (col - 1) + (row - 1) * 8;
    1 << bit_index
}

/// Index of the least significant set bit, `None` for an empty bitboard.
pub fn bit_scan(bitboard: Bitboard) -> Option<usize> {
    if bitboard == 0 {
        None
    } else {
        Some(bitboard.trailing_zeros() as usize)
    }
}

/// Extracts all set bits from a bitboard, lowest square first.
///
/// Used to walk every pawn of a side, or every candidate destination of a pawn.
pub fn extract_bits(mut bitboard: Bitboard) -> Vec<usize> {
    let mut bits = Vec::with_capacity(bitboard.count_ones() as usize);
    while let Some(lsb) = bit_scan(bitboard) {
        bits.push(lsb);
        bitboard &= bitboard - 1;
    }
    bits
}
