use rstest::rstest;
use symbdiff::repl::{evaluate_line, run, Options, BANNER};
use symbdiff::session::Session;

fn transcript(input: &str, options: &Options) -> String {
    let mut output = Vec::new();
    run(input.as_bytes(), &mut output, options).expect("writing to memory should succeed");
    String::from_utf8(output).expect("output should be utf-8")
}

#[rstest]
#[case("3x^2 + 2x", "6x + 2")]
#[case("x * x", "1 * x + 1 * x")]
#[case("2x * x^2", "2 * x^2 + 2x * 2x")]
#[case("7", "0")]
#[case("-x^3", "-3x^2")]
#[case("X^2 - 4x + 1", "2x - 4 + 0")]
#[case("x - x * x", "1 - 1 * x - 1 * x")]
#[case("x^4294967295", "4294967295x^4294967294")]
#[case("xx^2", "2x")]
#[case("2 +", "Error: Unexpected symbol '$'. Expected a number/variable instead")]
#[case("x^", "Error: Unexpected symbol '$' following '^'. Expected a number as exponent")]
#[case("x 2", "Error: Unexpected symbol '2'. Expected the implicit end-of-expression token")]
#[case("4xx", "Error: Unexpected symbol 'x'. Expected the implicit end-of-expression token")]
#[case("x^4294967296", "Error: Exponent '4294967296' is too large")]
#[case("5 & 2", "Error: Unknown symbol '&'")]
#[case("x / 2", "Error: Unknown symbol '/'")]
fn single_line(#[case] input: &str, #[case] expected: &str) {
    let output = transcript(&format!("{input}\n"), &Options::default());
    assert_eq!(output, format!("{BANNER}\n> {expected}\n> quit...\n"));
}

#[rstest]
#[case("q\nx\n", "quit..")]
#[case("quit\nx\n", "quit...")]
#[case("exit\nx\n", "quit...")]
#[case("", "quit...")]
fn quit_commands(#[case] input: &str, #[case] farewell: &str) {
    let output = transcript(input, &Options::default());
    assert_eq!(output, format!("{BANNER}\n> {farewell}\n"));
}

#[test]
fn blank_lines_are_ignored() {
    let output = transcript("\n   \nx\n", &Options::default());
    assert_eq!(output, format!("{BANNER}\n> > > 1\n> quit...\n"));
}

#[test]
fn variable_is_bound_for_the_whole_session() {
    let output = transcript("x\ny\nX^2\n", &Options::default());
    assert_eq!(
        output,
        format!(
            "{BANNER}\n> 1\n> Error: Attempt to re-bind differentiating variable 'x' with 'y'\n> 2x\n> quit...\n"
        )
    );
}

#[test]
fn failed_line_still_binds_its_variable() {
    let output = transcript("t + &\nx\n", &Options::default());
    assert_eq!(
        output,
        format!(
            "{BANNER}\n> Error: Unknown symbol '&'\n> Error: Attempt to re-bind differentiating variable 't' with 'x'\n> quit...\n"
        )
    );
}

#[test]
fn debug_parser_prints_the_tree() {
    let options = Options {
        debug_parser: true,
        ..Options::default()
    };
    let output = transcript("3x^2 + 2x\n", &options);
    assert_eq!(
        output,
        format!("{BANNER}\n> ([3, 2] + [2, 1])\n6x + 2\n> quit...\n")
    );
}

#[test]
fn debug_lexer_prints_tokens() {
    let options = Options {
        debug_lexer: true,
        ..Options::default()
    };
    let output = transcript("2x\n", &options);
    assert_eq!(
        output,
        format!(
            "{BANNER}\n> Number(\"2\") '2' at 0..1\nVariable('x') 'x' at 1..2\nEnd '$' at 2..2\n> quit...\n"
        )
    );
}

#[rstest]
#[case(1, "x^3 * 2", "3x^2 * 2 + 0 * x^3")]
#[case(2, "x^3", "6x")]
#[case(3, "x^3", "6")]
fn repeated_differentiation(#[case] order: usize, #[case] input: &str, #[case] expected: &str) {
    let options = Options {
        order,
        ..Options::default()
    };
    let mut session = Session::new();
    let mut output = Vec::new();
    assert!(evaluate_line(&mut session, input, &mut output, &options).unwrap());
    assert_eq!(String::from_utf8(output).unwrap(), format!("{expected}\n"));
}

#[test]
fn fancy_errors_carry_the_message() {
    let options = Options {
        fancy: true,
        ..Options::default()
    };
    let mut session = Session::new();
    let mut output = Vec::new();
    assert!(!evaluate_line(&mut session, "5 & 2", &mut output, &options).unwrap());

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Unknown symbol '&'"), "got: {output}");
}

#[test]
fn overflowing_coefficients_are_reported() {
    let huge = format!("1{}", "0".repeat(308));
    let output = transcript(&format!("{huge}x^2\n{huge}x\n"), &Options::default());
    assert_eq!(
        output,
        format!(
            "{BANNER}\n> Error: Coefficient {huge} times exponent 2 is too large\n> {huge}\n> quit...\n"
        )
    );
}
