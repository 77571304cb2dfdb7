//! Square index / single-bit mask / algebraic label conversions.
//!
//! Squares are numbered rank-major from the top of the board: a8 is 0, h8 is 7,
//! a1 is 56 and h1 is 63. Every function rejects out-of-domain input with a
//! [`DomainError`] instead of clamping it.

use crate::{bitboard::Bitboard, error::DomainError, lookup::SquareTable, square::Square};

pub fn label_for_square(square: usize) -> Result<&'static str, DomainError> {
    let sq = Square::from_idx(square)?;
    Ok(SquareTable::get().label(sq))
}

pub fn label_for_mask(mask: u64) -> Result<&'static str, DomainError> {
    let sq = Bitboard(mask).single_square()?;
    label_for_square(sq.idx())
}

pub fn square_for_label(label: &str) -> Result<usize, DomainError> {
    SquareTable::get()
        .square(label)
        .map(|sq| sq.idx())
        .ok_or_else(|| DomainError::Label(label.to_owned()))
}

pub fn mask_for_label(label: &str) -> Result<u64, DomainError> {
    square_for_label(label).map(|idx| 1 << idx)
}
