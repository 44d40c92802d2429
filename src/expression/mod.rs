//! Expression module split into submodules

mod ast;
mod display;
mod errors;
mod eval;
mod parse;

pub use ast::Expression;
pub use errors::{ExpressionError, ParseError};
pub use parse::parse_expression;
