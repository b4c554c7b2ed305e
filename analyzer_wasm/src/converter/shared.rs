use analyzer::{
    Diagnostic as ByteDiagnostic, DiagnosticKind as ByteDiagnosticKind, LexOutput, SourceMap,
    Token as ByteToken, TokenKind,
};

use crate::dto::v1::{Diagnostic, DiagnosticKind, Token};
use crate::span::byte_span_to_utf16_span;

pub(crate) fn diagnostic_view(source: &str, sm: &SourceMap, diag: &ByteDiagnostic) -> Diagnostic {
    let (line, col) = sm.line_col(diag.span.start);

    Diagnostic {
        kind: diagnostic_kind_view(&diag.kind),
        message: diag.message.clone(),
        span: byte_span_to_utf16_span(source, diag.span),
        line,
        col,
    }
}

pub(crate) fn token_view(source: &str, token: &ByteToken) -> Token {
    Token {
        kind: token_kind_string(&token.kind).to_string(),
        text: token.text.clone(),
        span: byte_span_to_utf16_span(source, token.span),
        index: token.index,
    }
}

pub(crate) fn token_views(source: &str, lex: &LexOutput) -> Vec<Token> {
    lex.tokens.iter().map(|t| token_view(source, t)).collect()
}

fn diagnostic_kind_view(kind: &ByteDiagnosticKind) -> DiagnosticKind {
    match kind {
        ByteDiagnosticKind::Error => DiagnosticKind::Error,
    }
}

fn token_kind_string(kind: &TokenKind) -> &'static str {
    use TokenKind::*;

    match kind {
        Number => "Number",
        Variable => "Variable",
        Constant => "Constant",
        Function => "Function",
        Plus => "Plus",
        Minus => "Minus",
        Star => "Star",
        Slash => "Slash",
        Caret => "Caret",
        OpenParen => "OpenParen",
        CloseParen => "CloseParen",
    }
}
