use thiserror::Error;

/// Rejected input to the square codec. Values are reported as given, never
/// clamped into range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("square index {0} is outside 0..=63")]
    SquareOutOfRange(usize),
    #[error("mask has no bit set")]
    EmptyMask,
    #[error("mask {0:#018x} has {n} bits set, expected exactly one", n = .0.count_ones())]
    MultipleBits(u64),
    #[error("'{0}' is not a square label, expected a file a-h followed by a rank 1-8")]
    Label(String),
}
