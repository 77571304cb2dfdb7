pub mod bitboard;
pub mod codec;
pub mod error;
pub mod lookup;
pub mod square;

mod helper;
