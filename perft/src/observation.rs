use std::fmt::Display;

/// Node count reported for one root move of a perft divide run.
///
/// The label is whatever the move generator printed (usually `e2e4` style)
/// and is only used as a sort and match key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub label: String,
    pub count: u64,
}

impl Observation {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

impl<S: Into<String>> From<(S, u64)> for Observation {
    fn from((label, count): (S, u64)) -> Self {
        Self::new(label, count)
    }
}

/// Which of the two compared runs an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Baseline,
    Candidate,
}

impl Side {
    pub const fn other(&self) -> Self {
        match self {
            Self::Baseline => Self::Candidate,
            Self::Candidate => Self::Baseline,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Baseline => write!(f, "baseline"),
            Self::Candidate => write!(f, "candidate"),
        }
    }
}
