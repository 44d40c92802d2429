//! Parser for the alias texts the solver emits.
//!
//! Every composite sub-term the solver writes is fully parenthesized,
//! so the grammar needs no precedence handling:
//!
//! ```text
//! expr    := operand (op operand)?
//! op      := '+' | '-' | '*' | '/'
//! operand := '(' expr ')' | '-' digits | digits
//! ```

use crate::expression::ast::Expression;
use crate::expression::errors::ParseError;

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn expr(&mut self) -> Result<Expression, ParseError> {
        let left = self.operand()?;
        let op = match self.peek() {
            None | Some(b')') => return Ok(left),
            Some(op) => op,
        };
        self.pos += 1;
        let right = self.operand()?;
        match op {
            b'+' => Ok(Expression::Add(Box::new(left), Box::new(right))),
            b'-' => Ok(Expression::Sub(Box::new(left), Box::new(right))),
            b'*' => Ok(Expression::Mul(Box::new(left), Box::new(right))),
            b'/' => Ok(Expression::Div(Box::new(left), Box::new(right))),
            other => Err(ParseError::UnexpectedChar {
                ch: other as char,
                pos: self.pos - 1,
            }),
        }
    }

    fn operand(&mut self) -> Result<Expression, ParseError> {
        match self.peek() {
            Some(b'(') => {
                self.pos += 1;
                let inner = self.expr()?;
                match self.peek() {
                    Some(b')') => {
                        self.pos += 1;
                        Ok(inner)
                    }
                    Some(ch) => Err(ParseError::UnexpectedChar {
                        ch: ch as char,
                        pos: self.pos,
                    }),
                    None => Err(ParseError::UnexpectedEnd),
                }
            }
            Some(b'-') => {
                self.pos += 1;
                let digits = self.digits()?;
                Ok(Expression::Neg(Box::new(digits)))
            }
            Some(c) if c.is_ascii_digit() => self.digits(),
            Some(ch) => Err(ParseError::UnexpectedChar {
                ch: ch as char,
                pos: self.pos,
            }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn digits(&mut self) -> Result<Expression, ParseError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == start {
            return match self.peek() {
                Some(ch) => Err(ParseError::UnexpectedChar {
                    ch: ch as char,
                    pos: self.pos,
                }),
                None => Err(ParseError::UnexpectedEnd),
            };
        }
        let run = &self.input[start..self.pos];
        run.parse::<i64>()
            .map(Expression::Number)
            .map_err(|_| ParseError::NumberOutOfRange(run.to_string()))
    }
}

/// Parse one alias text back into an [`Expression`].
///
/// # Errors
///
/// Returns an error if the input is not a single well-formed expression
/// in the grammar above, or if a digit run overflows `i64`.
pub fn parse_expression(input: &str) -> Result<Expression, ParseError> {
    let mut parser = Parser::new(input);
    let expr = parser.expr()?;
    if parser.pos != parser.input.len() {
        return Err(ParseError::TrailingInput { pos: parser.pos });
    }
    Ok(expr)
}
