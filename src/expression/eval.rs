use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

impl Expression {
    /// Evaluate under checked 64-bit integer arithmetic with exact
    /// division only.
    ///
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero
    /// - Division with a nonzero remainder
    /// - Any operation whose result overflows `i64`
    pub fn evaluate(&self) -> Result<i64, ExpressionError> {
        match self {
            Expression::Number(n) => Ok(*n),
            Expression::Neg(e) => {
                let value = e.evaluate()?;
                value.checked_neg().ok_or(ExpressionError::Overflow)
            }
            Expression::Add(l, r) => {
                let (left, right) = (l.evaluate()?, r.evaluate()?);
                left.checked_add(right).ok_or(ExpressionError::Overflow)
            }
            Expression::Sub(l, r) => {
                let (left, right) = (l.evaluate()?, r.evaluate()?);
                left.checked_sub(right).ok_or(ExpressionError::Overflow)
            }
            Expression::Mul(l, r) => {
                let (left, right) = (l.evaluate()?, r.evaluate()?);
                left.checked_mul(right).ok_or(ExpressionError::Overflow)
            }
            Expression::Div(l, r) => {
                let (left, right) = (l.evaluate()?, r.evaluate()?);
                if right == 0 {
                    debug!("Division by zero in {}", self);
                    return Err(ExpressionError::DivisionByZero);
                }
                match left.checked_rem(right) {
                    Some(0) => left.checked_div(right).ok_or(ExpressionError::Overflow),
                    Some(_) => Err(ExpressionError::NonExactDivision(left, right)),
                    None => Err(ExpressionError::Overflow),
                }
            }
        }
    }
}
