use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    /// Writes the expression in the same shape the solver generates:
    /// no spaces, and every embedded operand parenthesized unless it is
    /// a bare non-negative literal. Precedence is never implicit.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn is_bare_literal(expr: &Expression) -> bool {
            matches!(expr, Expression::Number(n) if *n >= 0)
        }

        fn write_operand(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            if is_bare_literal(expr) {
                fmt_expression(f, expr)
            } else {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Neg(e) => {
                    write!(f, "-")?;
                    write_operand(f, e)
                }
                Expression::Add(l, r) => {
                    write_operand(f, l)?;
                    write!(f, "+")?;
                    write_operand(f, r)
                }
                Expression::Sub(l, r) => {
                    write_operand(f, l)?;
                    write!(f, "-")?;
                    write_operand(f, r)
                }
                Expression::Mul(l, r) => {
                    write_operand(f, l)?;
                    write!(f, "*")?;
                    write_operand(f, r)
                }
                Expression::Div(l, r) => {
                    write_operand(f, l)?;
                    write!(f, "/")?;
                    write_operand(f, r)
                }
            }
        }

        fmt_expression(f, self)
    }
}
