use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start..span.end).into()
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Token<'source> {
    pub kind: TokenKind<'source>,
    pub span: Span,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TokenKind<'source> {
    // Operands
    Variable(char), // NOTE: Always folded to lowercase.
    Number(&'source str),

    // Punctuation
    Plus,
    Minus,
    Star,
    Caret,

    // Implicit marker closing every token stream
    End,
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Variable(c) => write!(f, "{c}"),
            TokenKind::Number(digits) => f.write_str(digits),
            TokenKind::Plus => f.write_str("+"),
            TokenKind::Minus => f.write_str("-"),
            TokenKind::Star => f.write_str("*"),
            TokenKind::Caret => f.write_str("^"),
            TokenKind::End => f.write_str("$"),
        }
    }
}
