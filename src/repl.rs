use std::io::{self, BufRead, Write};

use miette::{miette, LabeledSpan};

use crate::error::Error;
use crate::session::Session;

pub const BANNER: &str = "SymbDiff ('q'/'exit'/'quit'/CTRL-C to exit)";

#[derive(Debug, Clone)]
pub struct Options {
    /// Print the tokens of each line instead of differentiating it.
    pub debug_lexer: bool,
    /// Print the bracketed tree of each line before its derivative.
    pub debug_parser: bool,
    /// Render errors as labelled diagnostics instead of a single line.
    pub fancy: bool,
    /// How many times to differentiate.
    pub order: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            debug_lexer: false,
            debug_parser: false,
            fancy: false,
            order: 1,
        }
    }
}

/// Prompts for lines on `input` until a quit command or the end of input, writing every
/// result and error to `output`.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, options: &Options) -> io::Result<()> {
    let mut session = Session::new();
    let mut lines = input.lines();

    writeln!(output, "{BANNER}")?;
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output, "quit...")?;
            return Ok(());
        };

        match line.as_str() {
            "q" => {
                writeln!(output, "quit..")?;
                return Ok(());
            }
            "quit" | "exit" => {
                writeln!(output, "quit...")?;
                return Ok(());
            }
            blank if blank.trim().is_empty() => continue,
            _ => {}
        }

        evaluate_line(&mut session, &line, output, options)?;
    }
}

/// Handles a single line within `session`. Returns whether the line was accepted.
pub fn evaluate_line<W: Write>(
    session: &mut Session,
    line: &str,
    output: &mut W,
    options: &Options,
) -> io::Result<bool> {
    if options.debug_lexer {
        return match session.tokenize(line) {
            Ok(tokens) => {
                for token in tokens {
                    if options.fancy {
                        let diag = miette!(
                            labels = vec![LabeledSpan::at(
                                token.span.start..token.span.end,
                                format!("{:?}", token.kind)
                            )],
                            severity = miette::Severity::Advice,
                            "found a token",
                        )
                        .with_source_code(line.to_string());
                        writeln!(output, "{diag:?}")?;
                    } else {
                        writeln!(
                            output,
                            "{:?} '{}' at {}..{}",
                            token.kind, token.kind, token.span.start, token.span.end
                        )?;
                    }
                }
                Ok(true)
            }
            Err(e) => {
                report(output, e.into(), line, options.fancy)?;
                Ok(false)
            }
        };
    }

    let expression = match session.parse(line) {
        Ok(expression) => expression,
        Err(e) => {
            report(output, e, line, options.fancy)?;
            return Ok(false);
        }
    };

    if options.debug_parser {
        writeln!(output, "{}", expression.tree())?;
    }

    match session.derive(&expression, options.order) {
        Ok(derivative) => {
            writeln!(output, "{derivative}")?;
            Ok(true)
        }
        Err(e) => {
            report(output, e, line, options.fancy)?;
            Ok(false)
        }
    }
}

fn report<W: Write>(output: &mut W, error: Error, line: &str, fancy: bool) -> io::Result<()> {
    if fancy {
        let report = miette::Report::new(error).with_source_code(line.to_string());
        writeln!(output, "{report:?}")
    } else {
        writeln!(output, "Error: {error}")
    }
}
