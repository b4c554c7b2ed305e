use analyzer::SourceMap;
use evaluator::Hints;
use game::Cell;

use crate::converter::Converter;
use crate::converter::shared::diagnostic_view;
use crate::dto::v1::{CellState, Diagnostic, EvaluateResult, Hint, HintsResult};

impl Converter {
    pub fn evaluate_result(source: &str, xs: &[f64]) -> EvaluateResult {
        let analysis = analyzer::analyze(source);
        match &analysis.expr {
            Ok(expr) => EvaluateResult {
                values: xs
                    .iter()
                    .map(|&x| Some(evaluator::evaluate(expr, x)).filter(|v| v.is_finite()))
                    .collect(),
                diagnostics: Vec::new(),
            },
            Err(_) => EvaluateResult {
                values: Vec::new(),
                diagnostics: diagnostics(source, &analysis),
            },
        }
    }

    pub fn hints_result(guess: &str, target: &str, samples: &[f64], threshold: f64) -> HintsResult {
        let guess_analysis = analyzer::analyze(guess);
        let target_analysis = analyzer::analyze(target);

        let (Ok(guess_expr), Ok(target_expr)) = (&guess_analysis.expr, &target_analysis.expr)
        else {
            return HintsResult {
                full_match: false,
                hints: Vec::new(),
                cells: Vec::new(),
                guess_diagnostics: diagnostics(guess, &guess_analysis),
                target_diagnostics: diagnostics(target, &target_analysis),
            };
        };

        let hints = evaluator::compute_hints(guess_expr, target_expr, samples, threshold);
        HintsResult {
            full_match: hints.is_full_match(),
            hints: hints
                .hints()
                .iter()
                .map(|h| Hint {
                    start: h.start,
                    end: h.end,
                    matched: h.matched,
                })
                .collect(),
            cells: cell_views(&hints, guess_analysis.lex.len()),
            guess_diagnostics: Vec::new(),
            target_diagnostics: Vec::new(),
        }
    }
}

fn diagnostics(source: &str, analysis: &analyzer::Analysis) -> Vec<Diagnostic> {
    let source_map = SourceMap::new(source);
    analysis
        .diagnostics()
        .iter()
        .map(|d| diagnostic_view(source, &source_map, d))
        .collect()
}

fn cell_views(hints: &Hints, len: usize) -> Vec<CellState> {
    game::cell_states(hints, len)
        .into_iter()
        .map(|cell| match cell {
            Cell::Empty => CellState::Empty,
            Cell::Similar => CellState::Similar,
            Cell::Matched => CellState::Matched,
            Cell::FullMatch => CellState::FullMatch,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::converter::Converter;
    use crate::dto::v1::{CellState, Hint};

    #[test]
    fn evaluate_maps_non_finite_to_none() {
        let result = Converter::evaluate_result("1/x", &[-2.0, 0.0, 4.0]);
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.values, vec![Some(-0.5), None, Some(0.25)]);
    }

    #[test]
    fn evaluate_reports_parse_errors() {
        let result = Converter::evaluate_result("2+", &[1.0]);
        assert!(result.values.is_empty());
        assert_eq!(
            result.diagnostics[0].message,
            "unexpected end of input, expected expression"
        );
    }

    #[test]
    fn hints_full_match() {
        let samples = evaluator::sample_points(-50.0, 50.0, 1000);
        let result = Converter::hints_result("4+x^2", "x^2+4", &samples, 1e-4);
        assert!(result.full_match);
        assert!(result.hints.is_empty());
        assert_eq!(result.cells, vec![CellState::FullMatch; 5]);
    }

    #[test]
    fn hints_partial() {
        let samples = evaluator::sample_points(-5.0, 5.0, 11);
        let result = Converter::hints_result("x^3+4", "x^2+4", &samples, 1e-4);
        assert!(!result.full_match);
        assert_eq!(
            result.hints,
            vec![
                Hint {
                    start: 3,
                    end: 4,
                    matched: false,
                },
                Hint {
                    start: 1,
                    end: 2,
                    matched: false,
                },
                Hint {
                    start: 4,
                    end: 5,
                    matched: true,
                },
            ]
        );
        assert_eq!(
            result.cells,
            vec![
                CellState::Empty,
                CellState::Similar,
                CellState::Empty,
                CellState::Similar,
                CellState::Matched,
            ]
        );
    }

    #[test]
    fn hints_with_invalid_guess() {
        let result = Converter::hints_result("x+", "x+1", &[0.0], 1e-4);
        assert!(!result.full_match);
        assert_eq!(result.guess_diagnostics.len(), 1);
        assert!(result.target_diagnostics.is_empty());
    }
}
