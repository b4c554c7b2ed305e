use analyzer::ast::{BinOpKind, Constant, Function, Precedence};
use analyzer::{Side, needs_parens};

/// An expression under construction, before it is rendered to text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Draft {
    Variable,
    Constant(Constant),
    Number(i32),
    Call(Function, Box<Draft>),
    Binary(BinOpKind, Box<Draft>, Box<Draft>),
}

/// Leaf kinds that can be swapped for the variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LeafKind {
    Number,
    Constant,
}

impl Draft {
    pub(crate) fn has_variable(&self) -> bool {
        match self {
            Draft::Variable => true,
            Draft::Constant(_) | Draft::Number(_) => false,
            Draft::Call(_, arg) => arg.has_variable(),
            Draft::Binary(_, left, right) => left.has_variable() || right.has_variable(),
        }
    }

    /// Replaces the leftmost leaf of `kind` with the variable.
    /// Returns `false` if there was none.
    pub(crate) fn replace_first(&mut self, kind: LeafKind) -> bool {
        match self {
            Draft::Number(_) if kind == LeafKind::Number => {
                *self = Draft::Variable;
                true
            }
            Draft::Constant(_) if kind == LeafKind::Constant => {
                *self = Draft::Variable;
                true
            }
            Draft::Variable | Draft::Constant(_) | Draft::Number(_) => false,
            Draft::Call(_, arg) => arg.replace_first(kind),
            Draft::Binary(_, left, right) => left.replace_first(kind) || right.replace_first(kind),
        }
    }

    /// A negative literal renders as a prefix minus, so it parses back as a unary node.
    fn precedence(&self) -> Precedence {
        match self {
            Draft::Binary(op, ..) => op.precedence(),
            Draft::Number(n) if *n < 0 => Precedence::Unary,
            _ => Precedence::Primary,
        }
    }

    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Draft::Variable => out.push('x'),
            Draft::Constant(c) => out.push_str(c.as_str()),
            Draft::Number(n) => out.push_str(&n.to_string()),
            Draft::Call(func, arg) => {
                out.push_str(func.as_str());
                out.push('(');
                arg.render_into(out);
                out.push(')');
            }
            Draft::Binary(op, left, right) => {
                left.render_operand(out, needs_parens(*op, Side::Left, left.precedence()));
                out.push(' ');
                out.push_str(op.as_str());
                out.push(' ');
                right.render_operand(out, needs_parens(*op, Side::Right, right.precedence()));
            }
        }
    }

    fn render_operand(&self, out: &mut String, parens: bool) {
        if parens {
            out.push('(');
            self.render_into(out);
            out.push(')');
        } else {
            self.render_into(out);
        }
    }
}
