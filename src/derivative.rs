use log::debug;

use crate::ast::{Atomic, BinaryOperator, Expression};
use crate::error::DerivativeError;

impl Atomic {
    /// Power rule. Constants differentiate to a plain `0`, never to a negative exponent.
    pub fn derivative(self) -> Result<Atomic, DerivativeError> {
        match self.exponent {
            0 => Ok(Atomic::constant(0.0)),
            n => {
                let coefficient = self.coefficient * f64::from(n);
                if !coefficient.is_finite() {
                    return Err(DerivativeError::CoefficientOverflow {
                        coefficient: self.coefficient,
                        exponent: n,
                    });
                }

                Ok(Atomic::new(coefficient, n - 1))
            }
        }
    }
}

/// Differentiates `expression`, returning the derivative as a list of terms whose sum is
/// the result.
///
/// Nothing is simplified: a product always contributes one term per product rule branch,
/// so nested products grow the term count quickly. The input tree is left untouched.
///
/// Fails only when a coefficient grows past what an `f64` can hold.
pub fn differentiate(expression: &Expression) -> Result<Vec<Expression>, DerivativeError> {
    let terms = derive(expression)?;
    debug!("derivative has {} terms", terms.len());

    Ok(terms)
}

/// Differentiates every term of a sum and concatenates the results.
pub fn differentiate_terms(terms: &[Expression]) -> Result<Vec<Expression>, DerivativeError> {
    let mut derivative = Vec::with_capacity(terms.len());
    for term in terms {
        derivative.extend(derive(term)?);
    }

    Ok(derivative)
}

/// The `order`-th derivative of `expression`. Order zero gives back the expression itself.
pub fn nth_derivative(
    expression: &Expression,
    order: usize,
) -> Result<Vec<Expression>, DerivativeError> {
    let mut terms = vec![expression.clone()];
    for _ in 0..order {
        terms = differentiate_terms(&terms)?;
    }
    debug!("derivative of order {order} has {} terms", terms.len());

    Ok(terms)
}

fn derive(expression: &Expression) -> Result<Vec<Expression>, DerivativeError> {
    match expression {
        Expression::Atomic(atomic) => Ok(vec![atomic.derivative()?.into()]),
        Expression::BinaryOp {
            op: BinaryOperator::Mul,
            lhs,
            rhs,
        } => {
            // (f * g)' = f' * g + g' * f
            let mut terms = distribute(derive(lhs)?, rhs);
            terms.extend(distribute(derive(rhs)?, lhs));
            Ok(terms)
        }
        Expression::BinaryOp { op, lhs, rhs } => {
            let mut terms = derive(lhs)?;

            // The right-hand terms hang off the last left-hand term with the same
            // operator, so `f - g` keeps subtracting every term of g'.
            let last = terms.pop().unwrap_or_else(|| Expression::atomic(0.0, 0));
            let combined = derive(rhs)?
                .into_iter()
                .fold(last, |acc, term| Expression::binary(*op, acc, term));
            terms.push(combined);

            Ok(terms)
        }
    }
}

fn distribute(terms: Vec<Expression>, factor: &Expression) -> Vec<Expression> {
    terms
        .into_iter()
        .map(|term| Expression::binary(BinaryOperator::Mul, term, factor.clone()))
        .collect()
}
