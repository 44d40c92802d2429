use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Seed cannot be empty")]
    EmptySeed,
    #[error("Seed must contain only digits: {0}")]
    InvalidSeed(String),
    #[error("Seed must not be zero-valued")]
    ZeroSeed,
    #[error("Invalid range: start={start}, end={end}, length={length}")]
    InvalidRange {
        start: usize,
        end: usize,
        length: usize,
    },
    #[error("Digit run does not fit in 64 bits: {0}")]
    LeafTooLarge(String),
}
