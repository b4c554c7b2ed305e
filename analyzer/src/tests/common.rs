use crate::ast::Expr;
use crate::{lex, parse};

pub fn parse_ok(input: &str) -> Expr {
    let lexed = lex(input);
    parse(&lexed).unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"))
}

macro_rules! assert_bin {
    ($e:expr, $op:pat) => {{
        match &($e).kind {
            ExprKind::Binary { op, left, right } if matches!(op, $op) => {
                (left.as_ref(), right.as_ref())
            }
            other => panic!("expected Binary({}), got {:?}", stringify!($op), other),
        }
    }};
}

macro_rules! assert_unary {
    ($e:expr, $op:pat) => {{
        match &($e).kind {
            ExprKind::Unary { op, expr } if matches!(op, $op) => expr.as_ref(),
            other => panic!("expected Unary({}), got {:?}", stringify!($op), other),
        }
    }};
}

macro_rules! assert_num {
    ($e:expr, $value:expr) => {{
        match &($e).kind {
            ExprKind::Number(n) => assert_eq!(*n, $value as f64),
            other => panic!("expected Number, got {:?}", other),
        }
    }};
}

macro_rules! assert_var {
    ($e:expr) => {{
        match &($e).kind {
            ExprKind::Variable => {}
            other => panic!("expected Variable, got {:?}", other),
        }
    }};
}

macro_rules! assert_call {
    ($e:expr, $func:pat) => {{
        match &($e).kind {
            ExprKind::Call { func, arg } if matches!(func, $func) => arg.as_ref(),
            other => panic!("expected Call({}), got {:?}", stringify!($func), other),
        }
    }};
}
