use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Non-exact division: {0} / {1}")]
    NonExactDivision(i64, i64),
    #[error("Arithmetic overflow")]
    Overflow,
}

/// Errors raised when reading an alias text back into an [`Expression`]
///
/// [`Expression`]: crate::expression::Expression
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("Trailing input at position {pos}")]
    TrailingInput { pos: usize },
    #[error("Number literal out of range: {0}")]
    NumberOutOfRange(String),
}
