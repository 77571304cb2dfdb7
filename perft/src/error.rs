use std::num::ParseIntError;

use thiserror::Error;
use util::error::DomainError;

use crate::observation::Side;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    #[error("{side} lists move '{label}' more than once")]
    DuplicateMove { side: Side, label: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("'{0}' has no count, expected '<move>: <count>'")]
    MissingCount(String),
    #[error("'{0}' is not a move")]
    NotAMove(String),
    #[error("'{0}' has no move label")]
    MissingLabel(String),
    #[error("'{entry}' has an invalid count")]
    BadCount {
        entry: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{side} input: {source}")]
    Parse {
        side: Side,
        #[source]
        source: ParseError,
    },
    #[error(transparent)]
    Diff(#[from] DiffError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
