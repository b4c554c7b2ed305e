//! Numeric evaluation of parsed expressions and guess/target comparison.
//!
//! Everything here is pure: the same expression, sample points and threshold always
//! give the same numbers and the same hints.
use analyzer::ast::{BinOpKind, Expr, ExprKind, Function, UnOp};

mod hints;
mod sample;
mod tests;

pub use hints::{Hint, Hints, compute_hints, is_match, partial_hints};
pub use sample::sample_points;

/// Evaluates `expr` with the variable bound to `x`.
///
/// Plain IEEE-754 double arithmetic: division by zero gives ±∞ or NaN, and
/// functions outside their domain (`log(-1)`, `sqrt(-1)`) give NaN.
pub fn evaluate(expr: &Expr, x: f64) -> f64 {
    match &expr.kind {
        ExprKind::Number(value) => *value,
        ExprKind::Variable => x,
        ExprKind::Constant(c) => c.value(),
        ExprKind::Unary { op, expr } => {
            let value = evaluate(expr, x);
            match op {
                UnOp::Plus => value,
                UnOp::Neg => -value,
            }
        }
        ExprKind::Binary { op, left, right } => {
            let l = evaluate(left, x);
            let r = evaluate(right, x);
            match op {
                BinOpKind::Plus => l + r,
                BinOpKind::Minus => l - r,
                BinOpKind::Star => l * r,
                BinOpKind::Slash => l / r,
                BinOpKind::Caret => l.powf(r),
            }
        }
        ExprKind::Call { func, arg } => apply(*func, evaluate(arg, x)),
    }
}

/// `log` is the natural logarithm.
fn apply(func: Function, value: f64) -> f64 {
    match func {
        Function::Sin => value.sin(),
        Function::Cos => value.cos(),
        Function::Tan => value.tan(),
        Function::Log => value.ln(),
        Function::Sqrt => value.sqrt(),
        Function::Abs => value.abs(),
    }
}
