use std::fmt;

use crate::ast::{Atomic, BinaryOperator, Expression};

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Expression {
    /// Renders the expression in the notation it is written in, using `variable` as the
    /// name of the free variable.
    ///
    /// Unlike a plain `lhs op rhs` print, a nested operation is bracketed when precedence
    /// would otherwise change its meaning, as in `x - (2 + x)`. Only hand-built trees hit
    /// this: parsed expressions and their derivatives always print without brackets.
    pub fn display(&self, variable: char) -> Rendered<'_> {
        Rendered {
            expression: self,
            variable,
        }
    }

    /// Renders the bare tree structure: `[coefficient, exponent]` leaves and fully
    /// bracketed `(lhs op rhs)` nodes.
    pub fn tree(&self) -> Tree<'_> {
        Tree(self)
    }

    fn precedence(&self) -> Option<u8> {
        match self {
            Expression::Atomic(_) => None,
            Expression::BinaryOp { op, .. } => Some(op.precedence()),
        }
    }
}

pub struct Rendered<'a> {
    expression: &'a Expression,
    variable: char,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.expression {
            Expression::Atomic(atomic) => write_atomic(f, atomic, self.variable),
            Expression::BinaryOp { op, lhs, rhs } => {
                let precedence = op.precedence();

                let lhs_brackets = lhs.precedence().is_some_and(|p| p < precedence);
                let rhs_brackets = rhs.precedence().is_some_and(|p| {
                    p < precedence || (p == precedence && *op == BinaryOperator::Sub)
                });

                self.write_operand(f, lhs, lhs_brackets)?;
                write!(f, " {op} ")?;
                self.write_operand(f, rhs, rhs_brackets)
            }
        }
    }
}

impl Rendered<'_> {
    fn write_operand(
        &self,
        f: &mut fmt::Formatter<'_>,
        operand: &Expression,
        brackets: bool,
    ) -> fmt::Result {
        let operand = operand.display(self.variable);
        if brackets {
            write!(f, "({operand})")
        } else {
            write!(f, "{operand}")
        }
    }
}

fn write_atomic(f: &mut fmt::Formatter<'_>, atomic: &Atomic, variable: char) -> fmt::Result {
    // Avoid printing `-0`
    let coefficient = if atomic.coefficient == 0.0 {
        0.0
    } else {
        atomic.coefficient
    };

    if atomic.exponent == 0 || coefficient != 1.0 {
        write!(f, "{coefficient}")?;
    }

    match atomic.exponent {
        0 => Ok(()),
        1 => write!(f, "{variable}"),
        n => write!(f, "{variable}^{n}"),
    }
}

pub struct Tree<'a>(&'a Expression);

impl fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Expression::Atomic(atomic) => {
                write!(f, "[{}, {}]", atomic.coefficient, atomic.exponent)
            }
            Expression::BinaryOp { op, lhs, rhs } => {
                write!(f, "({} {op} {})", lhs.tree(), rhs.tree())
            }
        }
    }
}

/// A sum of terms, printed joined by `" + "`.
pub struct Terms<'a> {
    pub terms: &'a [Expression],
    pub variable: char,
}

impl fmt::Display for Terms<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{}", term.display(self.variable))?;
        }

        Ok(())
    }
}
