use std::{fmt::Display, str::FromStr};

use crate::{bitboard::Bitboard, error::DomainError, helper::impl_conv};

chess_macro::make_ranks_files_squares!();

impl Square {
    pub const COUNT: usize = 64;

    pub fn from_idx(idx: usize) -> Result<Self, DomainError> {
        u8::try_from(idx)
            .ok()
            .and_then(Self::from_u8_checked)
            .ok_or(DomainError::SquareOutOfRange(idx))
    }
    /// Row from the top of the board: 0 for the eighth rank, 7 for the first.
    pub const fn row(&self) -> u8 {
        *self as u8 / 8
    }
    pub const fn rank(&self) -> Rank {
        Rank::from_u8(7 - self.row())
    }
    pub const fn file(&self) -> File {
        File::from_u8(*self as u8 % 8)
    }
    pub const fn from_rank_file(rank: Rank, file: File) -> Self {
        Self::from_u8((7 - rank as u8) * 8 + file as u8)
    }
    pub const fn idx(&self) -> usize {
        *self as usize
    }
    pub const fn bitboard(&self) -> Bitboard {
        Bitboard(1 << *self as u8)
    }
}

impl FromStr for Square {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        match (chars.next(), chars.next(), chars.next()) {
            (Some(c1), Some(c2), None) => match (File::from_char(c1), Rank::from_char(c2)) {
                (Some(file), Some(rank)) => Ok(Self::from_rank_file(rank, file)),
                _ => Err(DomainError::Label(s.to_owned())),
            },
            _ => Err(DomainError::Label(s.to_owned())),
        }
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file().to_char(), self.rank().to_char())
    }
}

impl_conv! {
    Rank,
    char,
    from_char,
    to_char,
    '1'=First,
    '2'=Second,
    '3'=Third,
    '4'=Fourth,
    '5'=Fifth,
    '6'=Sixth,
    '7'=Seventh,
    '8'=Eighth
}

impl_conv! {
    File,
    char,
    from_char,
    to_char,
    'a'=A,
    'b'=B,
    'c'=C,
    'd'=D,
    'e'=E,
    'f'=F,
    'g'=G,
    'h'=H
}
