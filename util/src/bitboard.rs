use std::{
    fmt::Display,
    ops::{BitAnd, BitOr},
};

use crate::{error::DomainError, square::Square};

impl Iterator for Bitboard {
    type Item = Square;
    fn next(&mut self) -> Option<Self::Item> {
        self.next_sq()
    }
}

/// One bit per square, bit `i` standing for `Square::from_u8(i)` (a8 is bit 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const FULL: Self = Self(u64::MAX);
    pub const EMPTY: Self = Self(0);

    pub fn sq_count(&self) -> u32 {
        self.0.count_ones()
    }

    /// The square of a mask with exactly one bit set.
    pub fn single_square(&self) -> Result<Square, DomainError> {
        match self.sq_count() {
            0 => Err(DomainError::EmptyMask),
            1 => Square::from_idx(self.0.trailing_zeros() as usize),
            _ => Err(DomainError::MultipleBits(self.0)),
        }
    }
    pub fn next_sq(&mut self) -> Option<Square> {
        if !self.is_empty() {
            let idx = self.0.trailing_zeros() as u8;
            self.0 ^= 1 << idx;
            Square::from_u8_checked(idx)
        } else {
            None
        }
    }
    pub const fn is_empty(&self) -> bool {
        self.0 == Self::EMPTY.0
    }
    pub fn has_sq(&self, sq: Square) -> bool {
        !(*self & sq.bitboard()).is_empty()
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for sq in Square::ALL {
            if sq.idx() > 0 && sq.idx() % 8 == 0 {
                writeln!(f)?;
            }
            if self.has_sq(sq) {
                write!(f, "x")?
            } else {
                write!(f, ".")?
            }
        }
        Ok(())
    }
}

macro_rules! impl_bitwise {
    ($t:ident, $f:ident) => {
        impl $t for Bitboard {
            type Output = Self;
            fn $f(self, rhs: Self) -> Self::Output {
                Self($t::$f(self.0, rhs.0))
            }
        }
    };
}

impl_bitwise! {BitAnd, bitand}
impl_bitwise! {BitOr, bitor}
