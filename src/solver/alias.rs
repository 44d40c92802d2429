/// How an alias text behaves when embedded in a larger expression.
///
/// The tag is fixed at construction time so the wrapping rule is a
/// plain match, never a re-inspection of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasKind {
    /// A bare non-negative digit run.
    Literal,
    /// A digit run carrying a leading unary minus.
    NegatedLiteral,
    /// Two sub-expressions joined by a binary operator.
    Composite,
}

/// One candidate expression text for some value.
#[derive(Debug, Clone)]
pub struct Alias {
    text: String,
    kind: AliasKind,
}

impl Alias {
    pub fn literal(digits: &str) -> Self {
        Self {
            text: digits.to_string(),
            kind: AliasKind::Literal,
        }
    }

    pub fn negated(digits: &str) -> Self {
        Self {
            text: format!("-{digits}"),
            kind: AliasKind::NegatedLiteral,
        }
    }

    /// Join two aliases with `op`, parenthesizing each side per the
    /// wrapping rule: only a bare non-negative literal stays unwrapped.
    pub fn combine(op: BinOp, left: &Alias, right: &Alias) -> Self {
        let mut text = String::with_capacity(left.text.len() + right.text.len() + 5);
        left.write_wrapped(&mut text);
        text.push(op.symbol());
        right.write_wrapped(&mut text);
        Self {
            text,
            kind: AliasKind::Composite,
        }
    }

    fn write_wrapped(&self, out: &mut String) {
        if self.kind == AliasKind::Literal {
            out.push_str(&self.text);
        } else {
            out.push('(');
            out.push_str(&self.text);
            out.push(')');
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The four binary operators the search composes with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub const ALL: [BinOp; 4] = [BinOp::Add, BinOp::Sub, BinOp::Mul, BinOp::Div];

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }

    /// Apply under checked arithmetic. `None` means the candidate is
    /// skipped: overflow, a zero divisor, or a quotient with remainder.
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            BinOp::Add => lhs.checked_add(rhs),
            BinOp::Sub => lhs.checked_sub(rhs),
            BinOp::Mul => lhs.checked_mul(rhs),
            BinOp::Div => match lhs.checked_rem(rhs) {
                Some(0) => lhs.checked_div(rhs),
                _ => None,
            },
        }
    }
}
