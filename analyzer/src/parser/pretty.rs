use std::fmt;

use super::ast::{BinOpKind, Expr, ExprKind, Precedence};

/// Which operand of a binary operator is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Whether an operand whose top-level construct has precedence `child` must be
/// parenthesised on `side` of `op` to parse back into the same tree.
///
/// Looser operands are always wrapped. Equally loose operands are wrapped on the
/// side associativity would regroup: the right side of `-`, `/` (and `+`, `*`)
/// and the left side of `^`.
pub fn needs_parens(op: BinOpKind, side: Side, child: Precedence) -> bool {
    let prec = op.precedence();
    if child != prec {
        return child < prec;
    }
    match side {
        Side::Left => op.is_right_assoc(),
        Side::Right => !op.is_right_assoc(),
    }
}

impl Expr {
    /// Renders the expression with single spaces around binary operators and the
    /// minimum parentheses needed to parse back into the same tree.
    ///
    /// ```text
    /// `(2+3)*4`  -> `(2 + 3) * 4`
    /// `2^(3^2)`  -> `2 ^ 3 ^ 2`
    /// `(2^3)^2`  -> `(2 ^ 3) ^ 2`
    /// `--x`      -> `--x`
    /// ```
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.pretty_into(&mut out);
        out
    }

    fn pretty_into(&self, out: &mut String) {
        match &self.kind {
            ExprKind::Number(value) => out.push_str(&value.to_string()),
            ExprKind::Variable => out.push('x'),
            ExprKind::Constant(c) => out.push_str(c.as_str()),
            ExprKind::Unary { op, expr } => {
                out.push_str(op.as_str());
                wrap_if(out, expr, expr.precedence() < Precedence::Unary);
            }
            ExprKind::Binary { op, left, right } => {
                wrap_if(out, left, needs_parens(*op, Side::Left, left.precedence()));
                out.push(' ');
                out.push_str(op.as_str());
                out.push(' ');
                wrap_if(out, right, needs_parens(*op, Side::Right, right.precedence()));
            }
            ExprKind::Call { func, arg } => {
                out.push_str(func.as_str());
                out.push('(');
                arg.pretty_into(out);
                out.push(')');
            }
        }
    }
}

fn wrap_if(out: &mut String, expr: &Expr, parens: bool) {
    if parens {
        out.push('(');
        expr.pretty_into(out);
        out.push(')');
    } else {
        expr.pretty_into(out);
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}
