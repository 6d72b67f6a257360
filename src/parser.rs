use log::debug;

use crate::ast::{Atomic, BinaryOperator, Expression};
use crate::error::SyntaxError;
use crate::token::{Span, Token, TokenKind};

/// Recursive descent parser over the tokens of one line.
///
/// ```text
/// expression := term END
/// term       := factor ( ('+' | '-') factor )*
/// factor     := unary ( '*' unary )*
/// unary      := '-'* atomic
/// atomic     := NUMBER [ '^' NUMBER | VARIABLE [ '^' NUMBER ] ]
///             | VARIABLE [ VARIABLE ] [ '^' NUMBER ]
/// ```
///
/// The first rule that cannot continue turns into a [`SyntaxError`]; no partial tree is
/// ever returned.
pub struct Parser<'source> {
    tokens: Vec<Token<'source>>,
    current: usize,
}

impl<'source> Parser<'source> {
    pub fn new(mut tokens: Vec<Token<'source>>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::End) {
            let end = tokens.last().map_or(0, |t| t.span.end);
            tokens.push(Token {
                kind: TokenKind::End,
                span: Span { start: end, end },
            });
        }

        Self { tokens, current: 0 }
    }

    pub fn parse(mut self) -> Result<Expression, SyntaxError> {
        let expression = self.parse_term()?;

        let token = self.peek();
        if token.kind != TokenKind::End {
            return Err(SyntaxError::ExpectedEnd {
                literal: token.kind.to_string(),
                span: token.span.into(),
            });
        }

        debug!("parsed expression {expression:?}");
        Ok(expression)
    }

    fn peek(&self) -> Token<'source> {
        // NOTE: The last token is always `End`, and `advance` never steps past it.
        self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token<'source> {
        let token = self.peek();
        if token.kind != TokenKind::End {
            self.current += 1;
        }

        token
    }

    fn parse_term(&mut self) -> Result<Expression, SyntaxError> {
        let mut lhs = self.parse_factor()?;
        while let Some(op) = BinaryOperator::from_additive(&self.peek().kind) {
            self.advance();
            let rhs = self.parse_factor()?;
            lhs = Expression::binary(op, lhs, rhs);
        }

        Ok(lhs)
    }

    fn parse_factor(&mut self) -> Result<Expression, SyntaxError> {
        let mut lhs = self.parse_unary()?;
        while let Some(op) = BinaryOperator::from_multiplicative(&self.peek().kind) {
            self.advance();
            let rhs = self.parse_unary()?;
            lhs = Expression::binary(op, lhs, rhs);
        }

        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expression, SyntaxError> {
        let mut negations = 0usize;
        while self.peek().kind == TokenKind::Minus {
            self.advance();
            negations += 1;
        }

        let mut atomic = self.parse_atomic()?;
        if negations % 2 == 1 {
            atomic.coefficient = -atomic.coefficient;
        }

        Ok(atomic.into())
    }

    fn parse_atomic(&mut self) -> Result<Atomic, SyntaxError> {
        let token = self.advance();
        match token.kind {
            TokenKind::Number(digits) => {
                let value = parse_number(digits, token.span)?;

                match self.peek().kind {
                    TokenKind::Caret => {
                        self.advance();
                        let exponent = self.expect_exponent()?;

                        // Constants raised to a power are folded right away
                        let folded = value.powf(f64::from(exponent));
                        if !folded.is_finite() {
                            return Err(SyntaxError::NumberOutOfRange {
                                literal: format!("{digits}^{exponent}"),
                                span: self.span_from(token.span.start).into(),
                            });
                        }

                        Ok(Atomic::constant(folded))
                    }
                    TokenKind::Variable(_) => {
                        self.advance();
                        let exponent = self.parse_power()?;
                        Ok(Atomic::new(value, exponent))
                    }
                    _ => Ok(Atomic::constant(value)),
                }
            }
            TokenKind::Variable(_) => {
                // A repeated variable is accepted but does not change the power:
                // `xx` is `x` and `xx^3` is `x^3`.
                if let TokenKind::Variable(_) = self.peek().kind {
                    self.advance();
                }

                let exponent = self.parse_power()?;
                Ok(Atomic::new(1.0, exponent))
            }
            _ => Err(SyntaxError::ExpectedOperand {
                literal: token.kind.to_string(),
                span: token.span.into(),
            }),
        }
    }

    /// Parses the optional `^ NUMBER` after a variable. A bare variable has power one.
    fn parse_power(&mut self) -> Result<u32, SyntaxError> {
        match self.peek().kind {
            TokenKind::Caret => {
                self.advance();
                self.expect_exponent()
            }
            _ => Ok(1),
        }
    }

    fn expect_exponent(&mut self) -> Result<u32, SyntaxError> {
        let token = self.advance();
        match token.kind {
            TokenKind::Number(digits) => {
                digits
                    .parse::<u32>()
                    .map_err(|_| SyntaxError::ExponentOutOfRange {
                        literal: digits.to_string(),
                        span: token.span.into(),
                    })
            }
            _ => Err(SyntaxError::ExpectedExponent {
                literal: token.kind.to_string(),
                span: token.span.into(),
            }),
        }
    }

    /// Span from `start` up to the end of the most recently consumed token.
    fn span_from(&self, start: usize) -> Span {
        let end = self
            .current
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(start, |t| t.span.end);

        Span { start, end }
    }
}

fn parse_number(digits: &str, span: Span) -> Result<f64, SyntaxError> {
    // Overlong digit runs parse to infinity rather than failing
    digits
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| SyntaxError::NumberOutOfRange {
            literal: digits.to_string(),
            span: span.into(),
        })
}
