use std::fs;

use calcexpr::{
    error::{Error, ErrorKind, ParseError, RuntimeError},
    evaluate, evaluate_with,
    interpreter::{environment::Environment, scanner::MAX_NESTING},
    util::num::approx_eq,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    init_logger();
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (code, expected)) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            match evaluate(&code) {
                Ok(value) => {
                    if let Some(expected) = expected {
                        assert!(approx_eq(value, expected),
                                "DSL example {} in {:?} evaluated to {}, expected {}:\n{}",
                                i + 1,
                                path,
                                value,
                                expected,
                                code);
                    }
                },
                Err(e) => panic!("DSL example {} in {:?} failed:\n{}\nError: {:?}",
                                 i + 1,
                                 path,
                                 code,
                                 e),
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

/// Collects fenced `calcexpr` blocks. A number after the fence tag is the
/// value the block must evaluate to.
fn extract_dsl_blocks(content: &str) -> Vec<(String, Option<f64>)> {
    let mut blocks = Vec::new();
    let mut current: Option<(String, Option<f64>)> = None;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if current.is_none()
           && let Some(info) = trimmed.strip_prefix("```calcexpr")
        {
            let expected = info.trim().parse().ok();
            current = Some((String::new(), expected));
            continue;
        }
        if let Some((buf, expected)) = current.take() {
            if trimmed.starts_with("```") {
                blocks.push((buf, expected));
            } else {
                let mut buf = buf;
                buf.push_str(line);
                buf.push('\n');
                current = Some((buf, expected));
            }
        }
    }

    blocks
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!(approx_eq(value, expected),
                             "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(value) => panic!("Script {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "{src:?} failed with the wrong error: {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("2 + 2 + 2", 6.0);
    assert_value("2 * 3 + 4", 10.0);
    assert_value("10 - 4", 6.0);
    assert_value("7 / 2", 3.5);
    assert_value("(1 + 2) * (3 + 4)", 21.0);
    assert_value("((((5))))", 5.0);
}

#[test]
fn subtraction_and_division_read_left_to_right() {
    assert_value("10 - 4 - 3", 3.0);
    assert_value("100 / 10 / 5", 2.0);
    assert_value("1 - 2 + 3 - 4", -2.0);
    assert_value("2 * 6 / 3 / 4", 1.0);
}

#[test]
fn matches_floating_point_arithmetic() {
    assert_value("0.1 + 0.2", 0.1 + 0.2);
    assert_value("1 / 3", 1.0 / 3.0);
    assert_value("1.5 * 1.5 - 0.25", 2.0);
    assert_value("(3.3 - 1.1) * 2.5", (3.3 - 1.1) * 2.5);
}

#[test]
fn numeric_literal_forms() {
    assert_value(".5 + 2.", 2.5);
    assert_value("2e3", 2000.0);
    assert_value("1.5e2", 150.0);
    assert_value("-3 * 2", -6.0);
    assert_value("-.5 * 4", -2.0);
    assert_value("(-2) ^ 2", 4.0);
}

#[test]
fn minus_sign_and_minus_operator() {
    assert_value("5 - -3", 8.0);
    assert_value("5--3", 8.0);
    assert_value("5 - (2 - 1)", 4.0);
    // `-3` scans as a literal, which cannot follow the term `5`.
    assert_failure("5-3", ErrorKind::Syntax);
    assert_failure("2 -5", ErrorKind::Syntax);
}

#[test]
fn exponent_replaces_the_rest_of_its_term() {
    assert_value("2 + 2 ^ 2", 6.0);
    assert_value("3 ^ 2 + 1", 10.0);
    assert_value("2 * 3 ^ 2", 4.0);
    assert_value("8 / 2 ^ 2", 64.0);
    assert_value("2 ^ 3 ^ 2", 8.0);
    assert_value("4 ^ .5", 2.0);
}

#[test]
fn assignments_bind_sequentially() {
    assert_value("a = 2 ^ 2 b = 4 c = 2 (a + b) * c", 16.0);
    assert_value("x = 1 x = x + 1 x * 10", 20.0);
    assert_value("a=2 a*3", 6.0);
    assert_value("a = 1\n\tb = 2\r\n a + b", 3.0);
}

#[test]
fn program_of_assignments_yields_last_value() {
    assert_value("a = 5", 5.0);
    assert_value("a = 1 b = a + 1", 2.0);
}

#[test]
fn input_after_the_result_is_a_syntax_error() {
    assert_failure("1 + 1 x", ErrorKind::Syntax);
    assert_failure("2 ^ 3 * 4", ErrorKind::Syntax);
    assert_failure("a = 1 a + 1 (b)", ErrorKind::Syntax);
    assert_failure("2 )", ErrorKind::Syntax);
    assert_value("1 + 1 \n\t ", 2.0);

    let err = evaluate("1 + 1 x").unwrap_err();
    assert_eq!(err,
               Error::Parse(ParseError::UnexpectedTrailingTokens { offset:  6,
                                                                   snippet: "x".to_string(), }));

    let err = evaluate("a = 1 a + 1 (b)").unwrap_err();
    assert_eq!(err.offset(), 12);
}

#[test]
fn only_the_first_leftover_token_is_scanned() {
    let err = evaluate("1 + 1 x $").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.offset(), 6);

    let err = evaluate("1 + 1 $").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lexical);
    assert_eq!(err.offset(), 6);
}

#[test]
fn long_chains_do_not_recurse() {
    init_logger();
    assert_value(&vec!["1"; 10_000].join(" + "), 10_000.0);
    assert_value(&format!("10 {}", " - 1".repeat(10_000)), -9_990.0);
    assert_value(&vec!["2"; 10_000].join(" * "), f64::INFINITY);
    assert_value(&format!("1e300 {}", " / 10".repeat(10_000)), 0.0);
    assert_value(&vec!["2"; 10_000].join(" ^ "), 4.0);
}

#[test]
fn nesting_is_limited() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_value(&nested(MAX_NESTING), 1.0);
    assert_value(&format!("{}16", "sqrt ".repeat(MAX_NESTING)), 16.0_f64.powf(0.5_f64.powi(128)));

    let err = evaluate(&nested(2_000)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.offset(), MAX_NESTING);
    assert!(err.to_string().contains("Nesting exceeds"));

    let err = evaluate(&format!("{}16", "sqrt ".repeat(2_000))).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::NestingTooDeep { .. })));
    assert_eq!(err.offset(), MAX_NESTING * 5);
}

#[test]
fn builtin_functions() {
    assert_value("x = 1 sin(x + 1) + 2", 2.0_f64.sin() + 2.0);
    assert_value("sqrt 16", 4.0);
    assert_value("sqrt(9) * 2", 6.0);
    assert_value("sqrt sqrt 16", 2.0);
    assert_value("log 1000", 3.0);
    assert_value("cos 0", 1.0);
    assert_value("tan 0", 0.0);
    assert_value("cos(0) ^ 2", 1.0);
}

#[test]
fn assignment_shadows_builtin() {
    assert_value("sin = 3 sin + 1", 4.0);
    assert_value("sqrt = 2 sqrt * sqrt", 4.0);
}

#[test]
fn identifiers_are_case_sensitive() {
    assert_failure("Sin(0)", ErrorKind::UnboundIdentifier);
    assert_value("x = 1 X = 2 x - X", -1.0);
}

#[test]
fn ieee_results_are_not_errors() {
    assert!(evaluate("1 / 0").unwrap().is_infinite());
    assert!(evaluate("sqrt(-1)").unwrap().is_nan());
    assert!(evaluate("log 0").unwrap().is_infinite());
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("unboundname", ErrorKind::UnboundIdentifier);
    assert_failure("x = 1 y", ErrorKind::UnboundIdentifier);

    let err = evaluate("x = y + 1").unwrap_err();
    assert_eq!(err,
               Error::Runtime(RuntimeError::UnknownVariable { name:    "y".to_string(),
                                                              offset:  4,
                                                              snippet: "y + 1".to_string(), }));
}

#[test]
fn syntax_errors() {
    assert_failure("(2 + 3", ErrorKind::Syntax);
    assert_failure("2 + ", ErrorKind::Syntax);
    assert_failure("", ErrorKind::Syntax);
    assert_failure("   ", ErrorKind::Syntax);
    assert_failure("2 * + 3", ErrorKind::Syntax);
    assert_failure("1 2", ErrorKind::Syntax);
    assert_failure(")", ErrorKind::Syntax);
    assert_failure("sqrt", ErrorKind::Syntax);
    assert_failure("a = ", ErrorKind::Syntax);
    assert_failure("-x", ErrorKind::Syntax);
}

#[test]
fn unbalanced_parenthesis_reports_both_offsets() {
    let err = evaluate("1 + (2 * 3").unwrap_err();

    assert_eq!(err,
               Error::Parse(ParseError::ExpectedClosingParen { offset:    10,
                                                               opened_at: 4,
                                                               snippet:   String::new(), }));
    assert!(err.to_string().contains("Unbalanced parenthesis"));
}

#[test]
fn lexical_errors_carry_offset_and_snippet() {
    assert_failure("2 $ 3", ErrorKind::Lexical);

    let err = evaluate("1 + 2 # comment here").unwrap_err();
    assert_eq!(err.offset(), 6);
    match err {
        Error::Parse(ParseError::InvalidCharacter { character, snippet, .. }) => {
            assert_eq!(character, "#");
            assert_eq!(snippet, "# comment ");
        },
        other => panic!("expected an invalid character error, found {other:?}"),
    }
}

#[test]
fn evaluation_is_deterministic() {
    let source = "r = 1.5 h = 4 3.14159 * r * r * h + sin(r)";
    assert_eq!(evaluate(source).unwrap(), evaluate(source).unwrap());

    // Nothing leaks from one call to the next.
    assert_value("a = 1 a", 1.0);
    assert_failure("a", ErrorKind::UnboundIdentifier);
}

#[test]
fn caller_owned_environment_persists() {
    let mut env = Environment::new();

    assert_eq!(evaluate_with("r = 3", &mut env).unwrap(), 3.0);
    assert_eq!(evaluate_with("r * r", &mut env).unwrap(), 9.0);

    assert!(evaluate_with("a = 1 b = zz a", &mut env).is_err());
    assert_eq!(env.value("a"), Some(1.0));
    assert_eq!(env.value("b"), None);
}

#[test]
fn empty_environment_has_no_builtins() {
    let mut env = Environment::empty();

    let err = evaluate_with("sqrt 4", &mut env).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnboundIdentifier);
}

#[test]
fn example_script_works() {
    init_logger();
    let contents = fs::read_to_string("tests/example.calc").expect("missing file");
    let value = evaluate(&contents).unwrap_or_else(|e| panic!("Script failed: {e}"));
    assert!(approx_eq(value, 42.0), "example.calc evaluated to {value}");
}
