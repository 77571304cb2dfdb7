pub mod cli;
pub mod diff;
pub mod display;
pub mod error;
pub mod observation;
pub mod parse;
