use log::{debug, info};

use crate::error::LexError;
use crate::token::{Span, Token, TokenKind};

/// Scans one line of input into tokens.
///
/// The lexer borrows the session's bound variable: the first letter it meets becomes the
/// variable of the session, and any later letter must match it. The token stream always
/// finishes with exactly one [`TokenKind::End`].
pub struct Lexer<'source, 'session> {
    source: &'source str,
    rest: &'source str,
    position: usize,
    variable: &'session mut Option<char>,
    finished: bool,
}

impl<'source, 'session> Lexer<'source, 'session> {
    pub fn new(source: &'source str, variable: &'session mut Option<char>) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            variable,
            finished: false,
        }
    }
}

/// Lexes a whole line, discarding every token if any character is rejected.
pub fn tokenize<'source>(
    source: &'source str,
    variable: &mut Option<char>,
) -> Result<Vec<Token<'source>>, LexError> {
    let tokens = Lexer::new(source, variable).collect::<Result<Vec<_>, _>>()?;
    debug!("lexed {} tokens from {source:?}", tokens.len());

    Ok(tokens)
}

macro_rules! token {
    ($kind:ident, $start:ident, $self:ident) => {
        return Some(Ok(Token {
            kind: TokenKind::$kind,
            span: Span {
                start: $start,
                end: $self.position,
            },
        }))
    };
}

impl<'source> Iterator for Lexer<'source, '_> {
    type Item = Result<Token<'source>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let mut chars = self.rest.chars();
            let c_start = self.position;
            let Some(c) = chars.next() else {
                self.finished = true;
                token!(End, c_start, self);
            };

            self.rest = chars.as_str();
            self.position += c.len_utf8();

            break Some(match c {
                '+' => token!(Plus, c_start, self),
                '-' => token!(Minus, c_start, self),
                '*' => token!(Star, c_start, self),
                '^' => token!(Caret, c_start, self),

                '0'..='9' => Ok(self.parse_number(c_start)),
                'a'..='z' | 'A'..='Z' => self.parse_variable(c, c_start),

                c if c.is_whitespace() => continue,

                _ => {
                    self.finished = true;
                    Err(LexError::UnknownSymbol {
                        symbol: c,
                        span: (c_start..self.position).into(),
                    })
                }
            });
        }
    }
}

impl<'source> Lexer<'source, '_> {
    fn parse_number(&mut self, start: usize) -> Token<'source> {
        let digits = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        self.position += digits;
        self.rest = &self.rest[digits..];

        Token {
            kind: TokenKind::Number(&self.source[start..self.position]),
            span: Span {
                start,
                end: self.position,
            },
        }
    }

    fn parse_variable(&mut self, c: char, start: usize) -> Result<Token<'source>, LexError> {
        let span = Span {
            start,
            end: self.position,
        };

        let found = c.to_ascii_lowercase();
        match *self.variable {
            Some(bound) if bound != found => {
                self.finished = true;
                return Err(LexError::Rebind {
                    bound,
                    found,
                    span: span.into(),
                });
            }
            Some(_) => {}
            None => {
                info!("binding differentiating variable '{found}'");
                *self.variable = Some(found);
            }
        }

        Ok(Token {
            kind: TokenKind::Variable(found),
            span,
        })
    }
}
