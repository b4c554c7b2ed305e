mod token;

pub use token::{Span, Token, TokenIdx, TokenKind, TokenRange};

/// Function names recognised by the lexer, in matching order.
pub const FUNCTION_NAMES: [&str; 6] = ["sin", "cos", "tan", "log", "sqrt", "abs"];
/// Constant names recognised by the lexer, in matching order.
pub const CONSTANT_NAMES: [&str; 2] = ["pi", "e"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    /// `true` iff the whole input (ignoring whitespace) was turned into tokens.
    pub complete: bool,
}

impl LexOutput {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The recognised tokens joined back together, without whitespace.
    pub fn consumed_text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Drops the last token. The result is always complete: it is exactly the
    /// token run that was recognised, minus one.
    pub fn without_last(&self) -> LexOutput {
        let mut tokens = self.tokens.clone();
        tokens.pop();
        LexOutput {
            tokens,
            complete: true,
        }
    }
}

/// How numeric literals are spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberSyntax {
    /// `0` or a non-zero integer of at most two digits (`7`, `42`).
    ///
    /// Longer digit runs split into several literals: `100` lexes as `10`, `0`.
    BoundedInteger,
    /// Any digit run with an optional fractional part (`3`, `120`, `2.75`).
    Decimal,
}

/// Immutable lexer rule table.
///
/// Rules are tried in a fixed order at every position: function names, numeric
/// literal, constant names, the variable `x`, then single-character operators and
/// parentheses. Names are matched as prefixes, so `sinx` lexes as `sin`, `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    pub numbers: NumberSyntax,
    /// Match function and constant names regardless of ASCII case.
    pub case_insensitive_names: bool,
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar::DEFAULT
    }
}

impl Grammar {
    pub const DEFAULT: Grammar = Grammar {
        numbers: NumberSyntax::BoundedInteger,
        case_insensitive_names: true,
    };

    /// Lex the input into tokens.
    ///
    /// Whitespace is discarded. Lexing stops at the first character no rule
    /// accepts; the output then holds every token recognised so far and
    /// `complete` is `false`. This never fails.
    pub fn lex(&self, input: &str) -> LexOutput {
        let mut tokens = Vec::new();
        let mut pos = 0usize;
        let mut complete = true;

        while let Some(ch) = input[pos..].chars().next() {
            if ch.is_whitespace() {
                pos += ch.len_utf8();
                continue;
            }

            let rest = &input[pos..];
            let Some((kind, len)) = self.match_rule(rest) else {
                complete = false;
                break;
            };

            tokens.push(Token {
                kind,
                text: rest[..len].to_string(),
                span: Span {
                    start: pos as u32,
                    end: (pos + len) as u32,
                },
                index: tokens.len() as TokenIdx,
            });
            pos += len;
        }

        LexOutput { tokens, complete }
    }

    fn match_rule(&self, rest: &str) -> Option<(TokenKind, usize)> {
        if let Some(len) = self.match_name(rest, &FUNCTION_NAMES) {
            return Some((TokenKind::Function, len));
        }
        if let Some(len) = self.match_number(rest) {
            return Some((TokenKind::Number, len));
        }
        if let Some(len) = self.match_name(rest, &CONSTANT_NAMES) {
            return Some((TokenKind::Constant, len));
        }

        let kind = match rest.as_bytes().first()? {
            b'x' => TokenKind::Variable,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'^' => TokenKind::Caret,
            b'(' => TokenKind::OpenParen,
            b')' => TokenKind::CloseParen,
            _ => return None,
        };
        Some((kind, 1))
    }

    fn match_name(&self, rest: &str, names: &[&str]) -> Option<usize> {
        names
            .iter()
            .find(|name| {
                rest.get(..name.len()).is_some_and(|head| {
                    if self.case_insensitive_names {
                        head.eq_ignore_ascii_case(name)
                    } else {
                        head == **name
                    }
                })
            })
            .map(|name| name.len())
    }

    fn match_number(&self, rest: &str) -> Option<usize> {
        let bytes = rest.as_bytes();
        match self.numbers {
            NumberSyntax::BoundedInteger => match bytes.first()? {
                b'0' => Some(1),
                b'1'..=b'9' => match bytes.get(1) {
                    Some(b) if b.is_ascii_digit() => Some(2),
                    _ => Some(1),
                },
                _ => None,
            },
            NumberSyntax::Decimal => {
                let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
                if int_len == 0 {
                    return None;
                }
                // A fractional part needs at least one digit after the point.
                if bytes.get(int_len) == Some(&b'.') {
                    let frac_len = bytes[int_len + 1..]
                        .iter()
                        .take_while(|b| b.is_ascii_digit())
                        .count();
                    if frac_len > 0 {
                        return Some(int_len + 1 + frac_len);
                    }
                }
                Some(int_len)
            }
        }
    }
}

/// Lex with [`Grammar::DEFAULT`].
pub fn lex(input: &str) -> LexOutput {
    Grammar::DEFAULT.lex(input)
}
