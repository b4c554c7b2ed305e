use analyzer::ast::Expr;
use serde::Serialize;

/// One x position of the chart. Non-finite values are gaps in the line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: f64,
    pub target: Option<f64>,
    pub guess: Option<f64>,
}

pub fn plot(samples: &[f64], target: &Expr, guess: Option<&Expr>) -> Vec<PlotPoint> {
    samples
        .iter()
        .map(|&x| PlotPoint {
            x,
            target: finite(evaluator::evaluate(target, x)),
            guess: guess.and_then(|g| finite(evaluator::evaluate(g, x))),
        })
        .collect()
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
