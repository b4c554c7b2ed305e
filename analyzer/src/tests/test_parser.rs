use crate::ast::{BinOpKind, Constant, ExprKind, Function, UnOp};
use crate::tests::common::parse_ok;
use crate::{Grammar, NumberSyntax, analyze_with};

#[test]
fn test_precedence() {
    let ast = parse_ok("2+3*4");
    let (left, right) = assert_bin!(ast, BinOpKind::Plus);
    assert_num!(left, 2);
    let (left, right) = assert_bin!(right, BinOpKind::Star);
    assert_num!(left, 3);
    assert_num!(right, 4);
}

#[test]
fn test_parentheses_override_precedence() {
    let ast = parse_ok("(2+3)*4");
    let (left, right) = assert_bin!(ast, BinOpKind::Star);
    assert_num!(right, 4);
    let (left, right) = assert_bin!(left, BinOpKind::Plus);
    assert_num!(left, 2);
    assert_num!(right, 3);
}

#[test]
fn test_exponent_is_right_associative() {
    let ast = parse_ok("2^3^2");
    let (left, right) = assert_bin!(ast, BinOpKind::Caret);
    assert_num!(left, 2);
    let (left, right) = assert_bin!(right, BinOpKind::Caret);
    assert_num!(left, 3);
    assert_num!(right, 2);
}

#[test]
fn test_subtraction_and_division_are_left_associative() {
    let ast = parse_ok("8/4/2");
    let (left, right) = assert_bin!(ast, BinOpKind::Slash);
    assert_num!(right, 2);
    let (left, right) = assert_bin!(left, BinOpKind::Slash);
    assert_num!(left, 8);
    assert_num!(right, 4);

    let ast = parse_ok("x-1-x");
    let (left, right) = assert_bin!(ast, BinOpKind::Minus);
    assert_var!(right);
    let (left, right) = assert_bin!(left, BinOpKind::Minus);
    assert_var!(left);
    assert_num!(right, 1);
}

#[test]
fn test_unary_nests() {
    let ast = parse_ok("--x");
    let inner = assert_unary!(ast, UnOp::Neg);
    let inner = assert_unary!(inner, UnOp::Neg);
    assert_var!(inner);

    let ast = parse_ok("+x");
    let inner = assert_unary!(ast, UnOp::Plus);
    assert_var!(inner);
}

#[test]
fn test_unary_binds_tighter_than_exponent() {
    let ast = parse_ok("-x^2");
    let (left, right) = assert_bin!(ast, BinOpKind::Caret);
    let inner = assert_unary!(left, UnOp::Neg);
    assert_var!(inner);
    assert_num!(right, 2);
}

#[test]
fn test_unary_operands_of_binary_operators() {
    let ast = parse_ok("x * -3");
    let (left, right) = assert_bin!(ast, BinOpKind::Star);
    assert_var!(left);
    let inner = assert_unary!(right, UnOp::Neg);
    assert_num!(inner, 3);

    let ast = parse_ok("2 ^ -x");
    let (_, right) = assert_bin!(ast, BinOpKind::Caret);
    assert_unary!(right, UnOp::Neg);
}

#[test]
fn test_function_calls() {
    let ast = parse_ok("sqrt(x + 1)");
    let arg = assert_call!(ast, Function::Sqrt);
    let (left, right) = assert_bin!(arg, BinOpKind::Plus);
    assert_var!(left);
    assert_num!(right, 1);

    let ast = parse_ok("ABS(Log(x))");
    let arg = assert_call!(ast, Function::Abs);
    let arg = assert_call!(arg, Function::Log);
    assert_var!(arg);
}

#[test]
fn test_constants() {
    let ast = parse_ok("PI * e");
    let (left, right) = assert_bin!(ast, BinOpKind::Star);
    assert!(matches!(left.kind, ExprKind::Constant(Constant::Pi)));
    assert!(matches!(right.kind, ExprKind::Constant(Constant::E)));
}

#[test]
fn test_redundant_parentheses_collapse() {
    let ast = parse_ok("((x))");
    assert_var!(ast);
}

#[test]
fn test_decimal_literals_parse_with_decimal_grammar() {
    let grammar = Grammar {
        numbers: NumberSyntax::Decimal,
        ..Grammar::DEFAULT
    };
    let analysis = analyze_with(&grammar, "2.5 * 120");
    let ast = analysis.expr.unwrap();
    let (left, right) = assert_bin!(ast, BinOpKind::Star);
    assert_num!(left, 2.5);
    assert_num!(right, 120);
}
