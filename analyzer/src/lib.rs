//! Lexer, AST and parser for single-variable arithmetic expressions.
//!
//! Pipeline: lex → parse. Token spans are byte offsets into the source, `[start, end)`.
//! AST nodes refer to tokens by index (`[lo, hi)`), which is what hint highlighting uses.
mod diagnostics;
mod lexer;
mod parser;
mod tests;

pub use diagnostics::{Diagnostic, DiagnosticKind, Label, SourceMap, format_diagnostics};
pub use lexer::{
    CONSTANT_NAMES, FUNCTION_NAMES, Grammar, LexOutput, NumberSyntax, Span, Token, TokenIdx,
    TokenKind, TokenRange, lex,
};
pub use parser::ast;
pub use parser::pretty::{Side, needs_parens};
pub use parser::{ParseError, ParseResult, Parser, parse};

/// Result of running the whole pipeline over a source string.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub lex: LexOutput,
    pub expr: ParseResult<ast::Expr>,
}

impl Analysis {
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match &self.expr {
            Ok(_) => vec![],
            Err(err) => vec![err.to_diagnostic(&self.lex)],
        }
    }
}

/// Lex and parse `text` with the default grammar.
pub fn analyze(text: &str) -> Analysis {
    analyze_with(&Grammar::DEFAULT, text)
}

pub fn analyze_with(grammar: &Grammar, text: &str) -> Analysis {
    let lex = grammar.lex(text);
    let expr = parse(&lex);
    Analysis { lex, expr }
}
