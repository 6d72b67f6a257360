use std::fmt;

use crate::ast::Expression;
use crate::derivative::nth_derivative;
use crate::error::{Error, LexError};
use crate::lexer::tokenize;
use crate::parser::Parser;
use crate::printer::Terms;
use crate::token::Token;

/// Name used for the variable when printing results of a session that has not bound one.
/// Only constants can be entered before a variable is bound, so it never shows up in output.
const DEFAULT_VARIABLE: char = 'x';

/// State shared by every line entered during one interactive session.
///
/// The only state is the differentiating variable: bound by the first letter ever lexed,
/// then fixed until the session ends. Failed lines leave it as it was when they failed.
#[derive(Debug, Default)]
pub struct Session {
    variable: Option<char>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variable(&self) -> Option<char> {
        self.variable
    }

    pub fn tokenize<'source>(
        &mut self,
        line: &'source str,
    ) -> Result<Vec<Token<'source>>, LexError> {
        tokenize(line, &mut self.variable)
    }

    pub fn parse(&mut self, line: &str) -> Result<Expression, Error> {
        let tokens = self.tokenize(line)?;
        Ok(Parser::new(tokens).parse()?)
    }

    /// Runs one line through the whole pipeline and returns its first derivative.
    pub fn differentiate(&mut self, line: &str) -> Result<Derivative, Error> {
        let expression = self.parse(line)?;
        self.derive(&expression, 1)
    }

    pub fn derive(&self, expression: &Expression, order: usize) -> Result<Derivative, Error> {
        Ok(Derivative {
            terms: nth_derivative(expression, order)?,
            variable: self.variable.unwrap_or(DEFAULT_VARIABLE),
        })
    }
}

/// The terms of a derivative, meant to be read as their sum.
#[derive(Debug, Clone, PartialEq)]
pub struct Derivative {
    pub terms: Vec<Expression>,
    pub variable: char,
}

impl fmt::Display for Derivative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = Terms {
            terms: &self.terms,
            variable: self.variable,
        };
        write!(f, "{terms}")
    }
}
