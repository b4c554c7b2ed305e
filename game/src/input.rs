//! Editing rules for the guess text field.
//!
//! Characters no lexer rule accepts are dropped as they are typed when a token
//! follows them, and backspace removes a whole token.
use analyzer::LexOutput;

/// What the field shows after an edit, and its tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedInput {
    pub text: String,
    pub lex: LexOutput,
}

/// Sanitises freshly `typed` field contents.
///
/// Text that lexes completely is kept as is. Otherwise the recognised prefix is
/// kept and characters are dropped from the front of the remainder until the
/// remainder starts with a token again; the two are joined and sanitised again.
/// If the remainder never does, the typed text is kept as is, with its incomplete
/// lex.
pub fn accept_input(typed: &str) -> AcceptedInput {
    let lex = analyzer::lex(typed);
    if lex.complete {
        return AcceptedInput {
            text: typed.to_string(),
            lex,
        };
    }

    let prefix_end = lex.tokens.last().map_or(0, |t| t.span.end as usize);
    let (prefix, mut rest) = typed.split_at(prefix_end);

    while let Some(first) = rest.chars().next() {
        if !analyzer::lex(rest).is_empty() {
            // At least one character was dropped, so this terminates.
            return accept_input(&format!("{prefix}{rest}"));
        }
        tracing::trace!(dropped = %first, "dropping unrecognised input");
        rest = &rest[first.len_utf8()..];
    }

    AcceptedInput {
        text: typed.to_string(),
        lex,
    }
}

/// Removes the last token. The field text becomes the remaining tokens, joined.
pub fn backspace(lex: &LexOutput) -> AcceptedInput {
    let lex = lex.without_last();
    AcceptedInput {
        text: lex.consumed_text(),
        lex,
    }
}
