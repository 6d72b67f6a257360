use crate::{ast::BinaryOperator, token::TokenKind};

impl BinaryOperator {
    pub(crate) fn from_additive(op: &TokenKind) -> Option<Self> {
        match op {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),

            _ => None,
        }
    }

    pub(crate) fn from_multiplicative(op: &TokenKind) -> Option<Self> {
        match op {
            TokenKind::Star => Some(Self::Mul),

            _ => None,
        }
    }
}
