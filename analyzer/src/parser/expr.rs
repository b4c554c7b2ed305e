//! Expression parsing (recursive descent).
//!
//! One function per grammar level, loosest first:
//!
//! ```text
//! expr     := mul (('+' | '-') mul)*        left-associative
//! mul      := exponent (('*' | '/') exponent)*   left-associative
//! exponent := unary ('^' exponent)?         right-associative
//! unary    := ('+' | '-') unary | primary
//! primary  := number | 'x' | constant | function '(' expr ')' | '(' expr ')'
//! ```

use super::ast::{BinOpKind, Constant, Expr, ExprKind, Function, UnOp};
use super::{ParseError, ParseResult, Parser};
use crate::lexer::{Token, TokenKind, TokenRange};

const EXPECTED_EXPR: &str = "expression";

impl<'a> Parser<'a> {
    /// Parser's entry point.
    ///
    /// ```text
    /// `2 + 3 * 4`  parses as `2 + (3 * 4)`
    /// `2 ^ 3 ^ 2`  parses as `2 ^ (3 ^ 2)`   // right-associative
    /// `8 / 4 / 2`  parses as `(8 / 4) / 2`   // left-associative
    /// `--x`        parses as `-(-(x))`
    /// `-x ^ 2`     parses as `(-x) ^ 2`      // unary binds tighter than `^`
    /// ```
    pub fn parse(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_expr()?;

        if let Some(tok) = self.cur() {
            return Err(ParseError::TrailingToken {
                found: tok.kind.describe(),
                index: tok.index,
            });
        }
        Ok(expr)
    }

    /// Parses an additive expression.
    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_mul()?;
        while let Some(op_tok) = self.eat_any(&[TokenKind::Plus, TokenKind::Minus]) {
            let rhs = self.parse_mul()?;
            lhs = mk_binary(op_tok, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_mul(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_exponent()?;
        while let Some(op_tok) = self.eat_any(&[TokenKind::Star, TokenKind::Slash]) {
            let rhs = self.parse_exponent()?;
            lhs = mk_binary(op_tok, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_exponent(&mut self) -> ParseResult<Expr> {
        let base = self.parse_unary()?;
        match self.eat_any(&[TokenKind::Caret]) {
            // Recurse on the right for right-associativity.
            Some(op_tok) => {
                let exponent = self.parse_exponent()?;
                Ok(mk_binary(op_tok, base, exponent))
            }
            None => Ok(base),
        }
    }

    fn parse_unary(&mut self) -> ParseResult<Expr> {
        let Some(op_tok) = self.eat_any(&[TokenKind::Plus, TokenKind::Minus]) else {
            return self.parse_primary();
        };

        let op = match op_tok.kind {
            TokenKind::Minus => UnOp::Neg,
            _ => UnOp::Plus,
        };
        let expr = self.parse_unary()?;
        Ok(Expr {
            tokens: TokenRange::new(op_tok.index, expr.tokens.hi),
            anchor: op_tok.index,
            kind: ExprKind::Unary {
                op,
                expr: Box::new(expr),
            },
        })
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let Some(tok) = self.bump() else {
            return Err(ParseError::UnexpectedEof {
                expected: EXPECTED_EXPR,
            });
        };

        let kind = match tok.kind {
            TokenKind::Number => match tok.text.parse::<f64>() {
                Ok(value) => ExprKind::Number(value),
                Err(_) => return Err(unexpected(tok, "number literal")),
            },
            TokenKind::Variable => ExprKind::Variable,
            TokenKind::Constant => match Constant::from_name(&tok.text) {
                Some(c) => ExprKind::Constant(c),
                None => return Err(unexpected(tok, "constant")),
            },
            TokenKind::Function => return self.parse_call(tok),
            TokenKind::OpenParen => {
                let inner = self.parse_expr()?;
                let close = self.expect(TokenKind::CloseParen, "`)`")?;
                return Ok(inner.with_tokens(TokenRange::new(tok.index, close.index + 1)));
            }
            _ => return Err(unexpected(tok, EXPECTED_EXPR)),
        };

        Ok(Expr {
            kind,
            anchor: tok.index,
            tokens: TokenRange::single(tok.index),
        })
    }

    /// `name '(' expr ')'`, with `name` already consumed.
    fn parse_call(&mut self, name: &Token) -> ParseResult<Expr> {
        let Some(func) = Function::from_name(&name.text) else {
            return Err(unexpected(name, "function name"));
        };

        self.expect(TokenKind::OpenParen, "`(`")?;
        let arg = self.parse_expr()?;
        let close = self.expect(TokenKind::CloseParen, "`)`")?;

        Ok(Expr {
            kind: ExprKind::Call {
                func,
                arg: Box::new(arg),
            },
            anchor: name.index,
            tokens: TokenRange::new(name.index, close.index + 1),
        })
    }
}

fn mk_binary(op_tok: &Token, left: Expr, right: Expr) -> Expr {
    let op = match op_tok.kind {
        TokenKind::Plus => BinOpKind::Plus,
        TokenKind::Minus => BinOpKind::Minus,
        TokenKind::Star => BinOpKind::Star,
        TokenKind::Slash => BinOpKind::Slash,
        TokenKind::Caret => BinOpKind::Caret,
        other => unreachable!("{other:?} is not a binary operator"),
    };

    Expr {
        tokens: left.tokens.cover(right.tokens),
        anchor: op_tok.index,
        kind: ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
    }
}

fn unexpected(tok: &Token, expected: &'static str) -> ParseError {
    ParseError::UnexpectedToken {
        expected,
        found: tok.kind.describe(),
        index: tok.index,
    }
}
