use crate::{ParseError, Span, analyze, lex, parse};

fn parse_err(input: &str) -> ParseError {
    match parse(&lex(input)) {
        Ok(expr) => panic!("expected {input:?} to fail, got {expr:?}"),
        Err(err) => err,
    }
}

#[test]
fn test_unexpected_end_of_input() {
    let err = parse_err("2+");
    assert_eq!(
        err,
        ParseError::UnexpectedEof {
            expected: "expression"
        }
    );
    assert!(
        err.to_string().starts_with("unexpected end of input"),
        "unexpected message: {err}"
    );

    assert_eq!(
        parse_err(""),
        ParseError::UnexpectedEof {
            expected: "expression"
        }
    );
}

#[test]
fn test_trailing_tokens_error() {
    let err = parse_err("2 3");
    assert_eq!(
        err,
        ParseError::TrailingToken {
            found: "number",
            index: 1
        }
    );
    assert_eq!(err.to_string(), "unexpected token number after expression");
}

#[test]
fn test_missing_close_paren() {
    assert_eq!(
        parse_err("(x+1"),
        ParseError::UnexpectedEof { expected: "`)`" }
    );
    assert_eq!(
        parse_err("(x+1 2"),
        ParseError::UnexpectedToken {
            expected: "`)`",
            found: "number",
            index: 4
        }
    );
}

#[test]
fn test_function_requires_parentheses() {
    assert_eq!(
        parse_err("sin x"),
        ParseError::UnexpectedToken {
            expected: "`(`",
            found: "variable",
            index: 1
        }
    );
}

#[test]
fn test_operator_where_operand_expected() {
    assert_eq!(
        parse_err(")"),
        ParseError::UnexpectedToken {
            expected: "expression",
            found: "`)`",
            index: 0
        }
    );
    assert_eq!(
        parse_err("x * / 2"),
        ParseError::UnexpectedToken {
            expected: "expression",
            found: "`/`",
            index: 2
        }
    );
}

#[test]
fn test_incomplete_stream_is_rejected() {
    let lexed = lex("x + $");
    assert!(!lexed.complete);
    assert_eq!(parse(&lexed), Err(ParseError::Incomplete));
    assert_eq!(ParseError::Incomplete.to_string(), "incomplete token stream");
}

#[test]
fn test_diagnostic_spans() {
    let analysis = analyze("2 3");
    let diags = analysis.diagnostics();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].span, Span::new(2, 3));

    // End-of-input errors point just past the last token.
    let analysis = analyze("x +  ");
    assert_eq!(analysis.diagnostics()[0].span, Span::new(3, 3));

    assert!(analyze("x + 1").diagnostics().is_empty());
}
