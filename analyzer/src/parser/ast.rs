use crate::lexer::{TokenIdx, TokenRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOpKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
}

impl BinOpKind {
    pub const ALL: [BinOpKind; 5] = [
        BinOpKind::Plus,
        BinOpKind::Minus,
        BinOpKind::Star,
        BinOpKind::Slash,
        BinOpKind::Caret,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BinOpKind::Plus => "+",
            BinOpKind::Minus => "-",
            BinOpKind::Star => "*",
            BinOpKind::Slash => "/",
            BinOpKind::Caret => "^",
        }
    }

    /// Binding strength; larger numbers bind tighter.
    pub fn precedence(&self) -> Precedence {
        match self {
            BinOpKind::Plus | BinOpKind::Minus => Precedence::Additive,
            BinOpKind::Star | BinOpKind::Slash => Precedence::Multiplicative,
            BinOpKind::Caret => Precedence::Exponent,
        }
    }

    /// `^` is right-associative (`2^3^2` is `2^(3^2)`); the rest group to the left.
    pub fn is_right_assoc(&self) -> bool {
        matches!(self, BinOpKind::Caret)
    }
}

/// Grammar levels from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Additive,
    Multiplicative,
    Exponent,
    Unary,
    Primary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnOp {
    /// `+`
    Plus,
    /// `-`
    Neg,
}

impl UnOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnOp::Plus => "+",
            UnOp::Neg => "-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Log,
    Sqrt,
    Abs,
}

impl Function {
    pub const ALL: [Function; 6] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Log,
        Function::Sqrt,
        Function::Abs,
    ];

    /// Resolves a function name token, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Function> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Log => "log",
            Function::Sqrt => "sqrt",
            Function::Abs => "abs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub const ALL: [Constant; 2] = [Constant::Pi, Constant::E];

    /// Resolves a constant name token, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Constant> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }
}

/// Token ranges used to highlight a node in the guess grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundaries {
    /// The node's distinguishing token alone (operator, function name or leaf).
    pub similar: TokenRange,
    /// Every token of the node's subtree.
    pub matched: TokenRange,
}

/// An expression node.
///
/// `anchor` is the index of the token that identifies the node (its operator,
/// function name or the leaf token itself) and `tokens` spans its whole subtree.
/// A parenthesised expression keeps its parentheses inside `tokens`, so only a
/// leaf written without parentheses has `tokens` equal to its anchor token.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub anchor: TokenIdx,
    pub tokens: TokenRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Number(f64),
    Variable,
    Constant(Constant),
    Unary {
        op: UnOp,
        expr: Box<Expr>,
    },
    Binary {
        op: BinOpKind,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        func: Function,
        arg: Box<Expr>,
    },
}

impl Expr {
    /// Direct children, in source order.
    pub fn sub_expressions(&self) -> Vec<&Expr> {
        match &self.kind {
            ExprKind::Number(_) | ExprKind::Variable | ExprKind::Constant(_) => vec![],
            ExprKind::Unary { expr, .. } => vec![expr.as_ref()],
            ExprKind::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            ExprKind::Call { arg, .. } => vec![arg.as_ref()],
        }
    }

    /// This node followed by all of its descendants, in pre-order.
    pub fn preorder(&self) -> Vec<&Expr> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            out.push(expr);
            // Push in reverse so the leftmost child is visited first.
            stack.extend(expr.sub_expressions().into_iter().rev());
        }
        out
    }

    pub fn boundaries(&self) -> Boundaries {
        Boundaries {
            similar: TokenRange::single(self.anchor),
            matched: self.tokens,
        }
    }

    /// Shallow structural equality: same variant and same operator, function,
    /// literal or constant. Children are not compared.
    pub fn is_similar(&self, other: &Expr) -> bool {
        match (&self.kind, &other.kind) {
            (ExprKind::Number(a), ExprKind::Number(b)) => a == b,
            (ExprKind::Variable, ExprKind::Variable) => true,
            (ExprKind::Constant(a), ExprKind::Constant(b)) => a == b,
            (ExprKind::Unary { op: a, .. }, ExprKind::Unary { op: b, .. }) => a == b,
            (ExprKind::Binary { op: a, .. }, ExprKind::Binary { op: b, .. }) => a == b,
            (ExprKind::Call { func: a, .. }, ExprKind::Call { func: b, .. }) => a == b,
            _ => false,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self.kind, ExprKind::Variable)
    }

    /// Whether the variable occurs anywhere in this subtree.
    pub fn mentions_variable(&self) -> bool {
        self.preorder().into_iter().any(Expr::is_variable)
    }

    /// The grammar level of this node's top-level construct.
    pub fn precedence(&self) -> Precedence {
        match &self.kind {
            ExprKind::Binary { op, .. } => op.precedence(),
            ExprKind::Unary { .. } => Precedence::Unary,
            ExprKind::Number(_)
            | ExprKind::Variable
            | ExprKind::Constant(_)
            | ExprKind::Call { .. } => Precedence::Primary,
        }
    }

    /// Same node, covering a wider token range (used for parenthesised groups).
    pub(crate) fn with_tokens(mut self, tokens: TokenRange) -> Expr {
        self.tokens = tokens;
        self
    }
}
