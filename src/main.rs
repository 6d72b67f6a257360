use std::io;

use clap::Parser;
use miette::IntoDiagnostic;
use symbdiff::{repl, session::Session};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Input {
    /// Expressions to differentiate, all within one session. Starts an interactive prompt
    /// when none are given.
    expressions: Vec<String>,

    /// Debug the lexer, printing out the tokens of each line. Does not differentiate.
    #[clap(long, default_value = "false")]
    debug_lexer: bool,

    /// Debug the parser, printing out the tree of each line before its derivative.
    #[clap(long, default_value = "false")]
    debug_parser: bool,

    /// Render errors as diagnostics pointing into the offending line.
    #[clap(long, default_value = "false")]
    fancy: bool,

    /// How many times to differentiate.
    #[clap(short = 'n', long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    order: u32,

    /// Log what each stage is doing to stderr.
    #[clap(short, long, default_value = "false")]
    verbose: bool,
}

fn main() -> miette::Result<()> {
    let Input {
        expressions,
        debug_lexer,
        debug_parser,
        fancy,
        order,
        verbose,
    } = Input::parse();

    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let options = repl::Options {
        debug_lexer,
        debug_parser,
        fancy,
        order: order as usize,
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();

    if expressions.is_empty() {
        return repl::run(io::stdin().lock(), &mut output, &options).into_diagnostic();
    }

    let mut session = Session::new();
    let mut failed = false;
    for expression in expressions.iter().filter(|e| !e.trim().is_empty()) {
        if !repl::evaluate_line(&mut session, expression, &mut output, &options).into_diagnostic()? {
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }

    Ok(())
}
