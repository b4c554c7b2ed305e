//! Partial-match feedback between a guess and a target expression.
//!
//! A guess either matches the target numerically at every sample point
//! ([`Hints::FullMatch`]), or each of its sub-expressions is compared against every
//! sub-expression of the target. Pairs that are shallowly similar (same operator,
//! function, literal or constant) produce a [`Hint`]: over the node's whole token
//! range when the two also agree numerically, over just its anchor token otherwise.

use std::collections::HashMap;

use analyzer::TokenIdx;
use analyzer::TokenRange;
use analyzer::ast::Expr;

use crate::evaluate;

/// A highlighted token range of the guess, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub start: TokenIdx,
    pub end: TokenIdx,
    /// The sub-expression agrees numerically with a target sub-expression.
    pub matched: bool,
}

impl Hint {
    fn new(range: TokenRange, matched: bool) -> Self {
        Hint {
            start: range.lo,
            end: range.hi,
            matched,
        }
    }

    pub fn range(&self) -> TokenRange {
        TokenRange::new(self.start, self.end)
    }

    pub fn covers(&self, idx: TokenIdx) -> bool {
        self.range().contains(idx)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hints {
    /// The guess is numerically indistinguishable from the target at every sample.
    FullMatch,
    /// Possibly empty, possibly overlapping.
    Partial(Vec<Hint>),
}

impl Hints {
    pub fn is_full_match(&self) -> bool {
        matches!(self, Hints::FullMatch)
    }

    /// The partial hints; empty for a full match.
    pub fn hints(&self) -> &[Hint] {
        match self {
            Hints::FullMatch => &[],
            Hints::Partial(hints) => hints,
        }
    }
}

/// Two sampled values agree when both are NaN or they differ by less than `threshold`.
///
/// Infinities never agree: `∞ - ∞` is NaN.
pub fn is_match(a: f64, b: f64, threshold: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    (a - b).abs() < threshold
}

/// Compares a guess against the target.
pub fn compute_hints(guess: &Expr, target: &Expr, samples: &[f64], threshold: f64) -> Hints {
    let mut cache = SampleCache::new(samples);
    if cache.agree(guess, target, threshold) {
        tracing::trace!(samples = samples.len(), "full match");
        return Hints::FullMatch;
    }
    Hints::Partial(collect_hints(&mut cache, guess, target, threshold))
}

/// The per-sub-expression comparison alone, without the full-match short-circuit.
pub fn partial_hints(guess: &Expr, target: &Expr, samples: &[f64], threshold: f64) -> Vec<Hint> {
    let mut cache = SampleCache::new(samples);
    collect_hints(&mut cache, guess, target, threshold)
}

fn collect_hints(
    cache: &mut SampleCache<'_>,
    guess: &Expr,
    target: &Expr,
    threshold: f64,
) -> Vec<Hint> {
    let guess_subs = guess.preorder();
    let target_subs = target.preorder();
    let mut hints = Vec::new();

    for &g in &guess_subs {
        // The variable would match any sub-expression that happens to equal the
        // sample point, so it takes no part in the comparison.
        if g.is_variable() {
            continue;
        }
        for &t in &target_subs {
            if t.is_variable() || !g.is_similar(t) {
                continue;
            }
            let matched = cache.agree(g, t, threshold);
            let boundaries = g.boundaries();
            let range = if matched {
                boundaries.matched
            } else {
                boundaries.similar
            };
            hints.push(Hint::new(range, matched));
        }
    }

    tracing::trace!(
        guess_nodes = guess_subs.len(),
        target_nodes = target_subs.len(),
        hints = hints.len(),
        "computed partial hints"
    );
    hints
}

/// Sampled values per node, keyed by node address.
///
/// Lives for one comparison only, while every node it has seen is borrowed.
struct SampleCache<'s> {
    samples: &'s [f64],
    values: HashMap<*const Expr, Vec<f64>>,
}

impl<'s> SampleCache<'s> {
    fn new(samples: &'s [f64]) -> Self {
        Self {
            samples,
            values: HashMap::new(),
        }
    }

    fn fill(&mut self, expr: &Expr) {
        let samples = self.samples;
        self.values
            .entry(std::ptr::from_ref(expr))
            .or_insert_with(|| samples.iter().map(|&x| evaluate(expr, x)).collect());
    }

    /// Whether `a` and `b` agree at every sample point.
    fn agree(&mut self, a: &Expr, b: &Expr, threshold: f64) -> bool {
        self.fill(a);
        self.fill(b);
        let va = &self.values[&std::ptr::from_ref(a)];
        let vb = &self.values[&std::ptr::from_ref(b)];
        va.iter().zip(vb).all(|(&x, &y)| is_match(x, y, threshold))
    }
}
