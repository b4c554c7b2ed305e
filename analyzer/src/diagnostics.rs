use crate::lexer::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub span: Span,
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub span: Span,
    pub message: Option<String>,
}

/// Line starts of a source string, for byte offset → (line, col) lookups.
pub struct SourceMap {
    line_starts: Vec<usize>,
}

impl SourceMap {
    pub fn new(src: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(src.bytes().enumerate().filter(|&(_, b)| b == b'\n').map(|(i, _)| i + 1))
            .collect();
        Self { line_starts }
    }

    /// Returns (line, col), both 1-based.
    pub fn line_col(&self, byte: u32) -> (usize, usize) {
        let b = byte as usize;
        let line_idx = match self.line_starts.binary_search(&b) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        (line_idx + 1, b - self.line_starts[line_idx] + 1)
    }
}

/// Renders diagnostics in a stable, compiler-like text form.
///
/// ```text
/// error: expected `)`, found number
///   --> <input>:1:7 [6..7]
///   = label: 1:7 [6..7] expected `)` here
/// ```
pub fn format_diagnostics(source: &str, mut diags: Vec<Diagnostic>) -> String {
    use std::fmt::Write;

    diags.sort_by(|a, b| {
        (a.span.start, a.span.end, &a.message).cmp(&(b.span.start, b.span.end, &b.message))
    });
    let sm = SourceMap::new(source);

    let mut out = String::new();
    for d in diags {
        let (line, col) = sm.line_col(d.span.start);
        let _ = writeln!(&mut out, "error: {}", d.message);
        let _ = writeln!(
            &mut out,
            "  --> <input>:{}:{} [{}..{}]",
            line, col, d.span.start, d.span.end
        );
        for label in d.labels {
            let (line, col) = sm.line_col(label.span.start);
            let _ = writeln!(
                &mut out,
                "  = label: {}:{} [{}..{}] {}",
                line,
                col,
                label.span.start,
                label.span.end,
                label.message.unwrap_or_default()
            );
        }
    }
    out
}
