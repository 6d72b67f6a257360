pub mod ast;
pub mod derivative;
pub mod error;
mod helpers;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod repl;
pub mod session;
pub mod token;
