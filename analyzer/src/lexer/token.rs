//! Lexer tokens and spans.
//!
//! [`Span`] uses byte offsets into the original source and is half-open `[start, end)`.
//! The lexer only accepts ASCII, so for every recognised token byte offsets are also
//! character offsets. Token indices are ordinal positions in the token stream and are
//! what AST boundaries refer to.

pub type TokenIdx = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Half-open byte span into the source string: `[start, end)`.
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Half-open range of token indices: `[lo, hi)`.
pub struct TokenRange {
    pub lo: TokenIdx,
    pub hi: TokenIdx,
}

impl TokenRange {
    /// Construct a token range `[lo, hi)`.
    pub fn new(lo: TokenIdx, hi: TokenIdx) -> Self {
        Self { lo, hi }
    }

    /// The range covering exactly one token.
    pub fn single(idx: TokenIdx) -> Self {
        Self { lo: idx, hi: idx + 1 }
    }

    pub fn len(&self) -> u32 {
        self.hi.saturating_sub(self.lo)
    }

    pub fn is_empty(&self) -> bool {
        self.lo >= self.hi
    }

    pub fn contains(&self, idx: TokenIdx) -> bool {
        self.lo <= idx && idx < self.hi
    }

    /// Smallest range covering both `self` and `other`.
    pub fn cover(&self, other: TokenRange) -> TokenRange {
        TokenRange {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer (or decimal, depending on the grammar) literal.
    Number,
    /// The variable `x`.
    Variable,
    /// `pi` or `e`.
    Constant,
    /// `sin`, `cos`, `tan`, `log`, `sqrt` or `abs`.
    Function,
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
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
}

impl TokenKind {
    /// Human readable name used in parse diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::Variable => "variable",
            TokenKind::Constant => "constant",
            TokenKind::Function => "function",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Caret => "`^`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A classified token.
///
/// `text` is the exact source slice (original casing), `span` its byte range and
/// `index` its ordinal position in the token stream.
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
    pub index: TokenIdx,
}

