use analyzer::{Analysis, SourceMap};

use crate::converter::Converter;
use crate::converter::shared::{diagnostic_view, token_views};
use crate::dto::v1::{AcceptedInput, LexResult, ParseResult};

impl Converter {
    pub fn lex_result(source: &str) -> LexResult {
        let lex = analyzer::lex(source);
        LexResult {
            tokens: token_views(source, &lex),
            complete: lex.complete,
        }
    }

    pub fn parse_result(source: &str) -> ParseResult {
        Self::analysis_result(source, &analyzer::analyze(source))
    }

    pub(crate) fn analysis_result(source: &str, analysis: &Analysis) -> ParseResult {
        let source_map = SourceMap::new(source);

        ParseResult {
            tokens: token_views(source, &analysis.lex),
            complete: analysis.lex.complete,
            diagnostics: analysis
                .diagnostics()
                .iter()
                .map(|d| diagnostic_view(source, &source_map, d))
                .collect(),
            pretty: analysis.expr.as_ref().ok().map(|expr| expr.pretty()),
        }
    }

    pub fn accepted_input(typed: &str) -> AcceptedInput {
        let accepted = game::accept_input(typed);
        AcceptedInput {
            tokens: token_views(&accepted.text, &accepted.lex),
            complete: accepted.lex.complete,
            text: accepted.text,
        }
    }
}
