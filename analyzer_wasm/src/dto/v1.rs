use serde::Serialize;
use ts_rs::TS;

/// JS/editor-facing span in UTF-16 code units.
///
/// Ranges are half-open `[start, end)`; `end` is exclusive.
#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    #[serde(rename = "error")]
    Error,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub span: Span,
    pub line: usize,
    pub col: usize,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: String,
    pub text: String,
    pub span: Span,
    pub index: u32,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct LexResult {
    pub tokens: Vec<Token>,
    pub complete: bool,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct ParseResult {
    pub tokens: Vec<Token>,
    pub complete: bool,
    pub diagnostics: Vec<Diagnostic>,
    /// Canonical rendering of the parsed expression; `None` when parsing failed.
    pub pretty: Option<String>,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq)]
pub struct EvaluateResult {
    /// One entry per requested x; non-finite values are `None`.
    pub values: Vec<Option<f64>>,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hint {
    pub start: u32,
    pub end: u32,
    pub matched: bool,
}

#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    #[serde(rename = "empty")]
    Empty,
    #[serde(rename = "similar")]
    Similar,
    #[serde(rename = "matched")]
    Matched,
    #[serde(rename = "fullMatch")]
    FullMatch,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct HintsResult {
    pub full_match: bool,
    pub hints: Vec<Hint>,
    /// Per guess token, the highlight the grid should show.
    pub cells: Vec<CellState>,
    pub guess_diagnostics: Vec<Diagnostic>,
    pub target_diagnostics: Vec<Diagnostic>,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct AcceptedInput {
    pub text: String,
    pub tokens: Vec<Token>,
    pub complete: bool,
}
