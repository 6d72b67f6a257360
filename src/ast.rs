/// A single term `coefficient * variable^exponent`.
///
/// An exponent of zero makes the term a plain constant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Atomic {
    pub coefficient: f64,
    pub exponent: u32,
}

impl Atomic {
    pub fn new(coefficient: f64, exponent: u32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(value, 0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
}

impl BinaryOperator {
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
        }
    }

    /// Binding strength, used to decide where printed output needs parentheses.
    pub(crate) fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul => 2,
        }
    }
}

/// A polynomial expression tree.
///
/// Children are owned exclusively by their parent, so a tree never shares nodes.
/// Malformed input never produces a tree at all; see [`crate::error::SyntaxError`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Atomic(Atomic),
    BinaryOp {
        op: BinaryOperator,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
}

impl Expression {
    pub fn binary(op: BinaryOperator, lhs: Expression, rhs: Expression) -> Self {
        Self::BinaryOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn atomic(coefficient: f64, exponent: u32) -> Self {
        Self::Atomic(Atomic::new(coefficient, exponent))
    }
}

impl From<Atomic> for Expression {
    fn from(atomic: Atomic) -> Self {
        Self::Atomic(atomic)
    }
}
