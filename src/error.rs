use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Diagnostic, Error)]
pub enum LexError {
    #[error("Attempt to re-bind differentiating variable '{bound}' with '{found}'")]
    #[diagnostic(
        code = "symbdiff::rebind",
        help("only one variable may be used per session")
    )]
    Rebind {
        bound: char,
        found: char,
        #[label("a different variable is already bound")]
        span: SourceSpan,
    },

    #[error("Unknown symbol '{symbol}'")]
    #[diagnostic(code = "symbdiff::unknown_symbol")]
    UnknownSymbol {
        symbol: char,
        #[label("unexpected character")]
        span: SourceSpan,
    },
}

#[derive(Debug, Clone, PartialEq, Diagnostic, Error)]
pub enum SyntaxError {
    #[error("Unexpected symbol '{literal}'. Expected a number/variable instead")]
    #[diagnostic(code = "symbdiff::expected_operand")]
    ExpectedOperand {
        literal: String,
        #[label("expected a number or variable")]
        span: SourceSpan,
    },

    #[error("Unexpected symbol '{literal}' following '^'. Expected a number as exponent")]
    #[diagnostic(code = "symbdiff::expected_exponent")]
    ExpectedExponent {
        literal: String,
        #[label("expected an exponent")]
        span: SourceSpan,
    },

    #[error("Unexpected symbol '{literal}'. Expected the implicit end-of-expression token")]
    #[diagnostic(code = "symbdiff::expected_end")]
    ExpectedEnd {
        literal: String,
        #[label("expected end of expression")]
        span: SourceSpan,
    },

    #[error("Exponent '{literal}' is too large")]
    #[diagnostic(code = "symbdiff::exponent_out_of_range")]
    ExponentOutOfRange {
        literal: String,
        #[label("does not fit an unsigned 32-bit integer")]
        span: SourceSpan,
    },

    #[error("Number '{literal}' is too large")]
    #[diagnostic(code = "symbdiff::number_out_of_range")]
    NumberOutOfRange {
        literal: String,
        #[label("not representable as a finite number")]
        span: SourceSpan,
    },
}

#[derive(Debug, Clone, PartialEq, Diagnostic, Error)]
pub enum DerivativeError {
    #[error("Coefficient {coefficient} times exponent {exponent} is too large")]
    #[diagnostic(code = "symbdiff::coefficient_overflow")]
    CoefficientOverflow { coefficient: f64, exponent: u32 },
}

/// Anything that can go wrong while handling one line of input.
///
/// None of these are fatal: the read-loop reports them and moves on to the next line.
#[derive(Debug, Clone, PartialEq, Diagnostic, Error)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Derivative(#[from] DerivativeError),
}
