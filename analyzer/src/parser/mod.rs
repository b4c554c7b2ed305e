//! Parser for arithmetic expressions.
//!
//! Input: a complete [`LexOutput`]. Output: an [`Expr`] whose nodes carry token-index
//! ranges into that same token stream, or the first [`ParseError`] encountered.
//! There is no error recovery.

use crate::diagnostics::{Diagnostic, DiagnosticKind, Label};
use crate::lexer::{LexOutput, Span, Token, TokenIdx, TokenKind};

pub mod ast;
mod expr;
pub mod pretty;

use ast::Expr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("incomplete token stream")]
    Incomplete,

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
        index: TokenIdx,
    },

    #[error("unexpected token {found} after expression")]
    TrailingToken { found: &'static str, index: TokenIdx },
}

impl ParseError {
    /// Index of the offending token, if the error points at one.
    pub fn token_index(&self) -> Option<TokenIdx> {
        match self {
            ParseError::UnexpectedToken { index, .. } | ParseError::TrailingToken { index, .. } => {
                Some(*index)
            }
            ParseError::Incomplete | ParseError::UnexpectedEof { .. } => None,
        }
    }

    /// Maps the error back onto source bytes.
    ///
    /// Errors without an offending token point at an empty span just after the
    /// last recognised token.
    pub fn to_diagnostic(&self, lex: &LexOutput) -> Diagnostic {
        let end = lex.tokens.last().map(|t| t.span.end).unwrap_or(0);
        let span = self
            .token_index()
            .and_then(|idx| lex.tokens.get(idx as usize))
            .map(|t| t.span)
            .unwrap_or(Span::new(end, end));

        let labels = match self {
            ParseError::UnexpectedToken { expected, .. } => vec![Label {
                span,
                message: Some(format!("expected {expected} here")),
            }],
            _ => vec![],
        };

        Diagnostic {
            kind: DiagnosticKind::Error,
            message: self.to_string(),
            span,
            labels,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    fn cur(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn cur_kind(&self) -> Option<TokenKind> {
        self.cur().map(|t| t.kind)
    }

    fn bump(&mut self) -> Option<&'a Token> {
        let tok = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(tok)
    }

    /// Consumes the current token if it has one of `kinds`.
    fn eat_any(&mut self, kinds: &[TokenKind]) -> Option<&'a Token> {
        match self.cur() {
            Some(tok) if kinds.contains(&tok.kind) => self.bump(),
            _ => None,
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> ParseResult<&'a Token> {
        match self.cur() {
            Some(tok) if tok.kind == kind => {
                self.pos += 1;
                Ok(tok)
            }
            Some(tok) => Err(ParseError::UnexpectedToken {
                expected,
                found: tok.kind.describe(),
                index: tok.index,
            }),
            None => Err(ParseError::UnexpectedEof { expected }),
        }
    }
}

/// Parses a complete token stream into an expression.
pub fn parse(lex: &LexOutput) -> ParseResult<Expr> {
    if !lex.complete {
        tracing::debug!(tokens = lex.tokens.len(), "refusing to parse incomplete token stream");
        return Err(ParseError::Incomplete);
    }

    tracing::trace!(tokens = lex.tokens.len(), "parsing");
    let result = Parser::new(&lex.tokens).parse();
    if let Err(err) = &result {
        tracing::debug!(%err, "parse failed");
    }
    result
}
