//! Random target expressions for the guessing game.
//!
//! A generated expression always lexes and parses with the default grammar,
//! mentions `x`, and has a token count within the requested window unless the
//! retry loop gives up and falls back to `"x"`.
use analyzer::ast::{BinOpKind, Constant, Function};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

mod draft;

use draft::{Draft, LeafKind};

pub const MAX_ATTEMPTS: usize = 50;
/// Returned when no attempt lands inside the token window.
pub const FALLBACK: &str = "x";

const MIN_DEPTH: u32 = 2;
const MAX_DEPTH: u32 = 5;
const MIN_NUMBER: i32 = -10;
const MAX_NUMBER: i32 = 10;

// Cumulative thresholds on a uniform draw in [0, 1).
const TERMINAL_VARIABLE: f64 = 0.4;
/// Wider variable bucket used while no `x` has been placed yet.
const TERMINAL_VARIABLE_NEEDED: f64 = 0.5;
const TERMINAL_CONSTANT: f64 = 0.6;
const BINARY: f64 = 0.5;
const FUNCTION: f64 = 0.8;

/// Generate an expression of `min..=max` tokens using the thread-local RNG.
#[cfg(feature = "thread-rng")]
pub fn generate(min: usize, max: usize) -> String {
    generate_with(&mut rand::rng(), min, max)
}

/// Generate an expression of `min..=max` tokens drawing from `rng`.
pub fn generate_with<R: Rng>(rng: &mut R, min: usize, max: usize) -> String {
    if min > max {
        tracing::debug!(min, max, "empty token window, using fallback");
        return FALLBACK.to_string();
    }

    for attempt in 0..MAX_ATTEMPTS {
        let budget = rng.random_range(min..=max);
        let depth = rng.random_range(MIN_DEPTH..=MAX_DEPTH);

        let mut draft = build(rng, depth, budget, false);
        if !draft.has_variable()
            && !draft.replace_first(LeafKind::Number)
            && !draft.replace_first(LeafKind::Constant)
        {
            draft = Draft::Binary(BinOpKind::Plus, Box::new(Draft::Variable), Box::new(draft));
        }

        let text = draft.render();
        let count = analyzer::lex(&text).len();
        tracing::trace!(attempt, budget, depth, %text, count, "generated candidate");
        if (min..=max).contains(&count) {
            return text;
        }
    }

    tracing::debug!(min, max, "no candidate within token window, using fallback");
    FALLBACK.to_string()
}

/// A generator that owns its random source.
///
/// Two generators seeded alike produce the same sequence of expressions.
#[derive(Debug, Clone)]
pub struct Generator<R = StdRng> {
    rng: R,
}

impl Generator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Generator {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Generator<R> {
    pub fn from_rng(rng: R) -> Self {
        Generator { rng }
    }

    pub fn generate(&mut self, min: usize, max: usize) -> String {
        generate_with(&mut self.rng, min, max)
    }
}

fn build<R: Rng>(rng: &mut R, depth: u32, budget: usize, has_variable: bool) -> Draft {
    if depth == 0 || budget <= 1 {
        return terminal(rng, has_variable);
    }

    let choice: f64 = rng.random();

    if choice < BINARY && budget > 2 {
        let op = BinOpKind::ALL[rng.random_range(0..BinOpKind::ALL.len())];
        let jitter: i64 = rng.random_range(-1..=1);
        let left_budget = ((budget / 2) as i64 + jitter).max(1) as usize;
        let right_budget = budget.saturating_sub(left_budget + 1).max(1);

        let left = build(rng, depth - 1, left_budget, has_variable);
        let right_has_variable = has_variable || left.has_variable();
        let right = build(rng, depth - 1, right_budget, right_has_variable);
        return Draft::Binary(op, Box::new(left), Box::new(right));
    }

    if choice < FUNCTION && budget > 3 {
        let func = Function::ALL[rng.random_range(0..Function::ALL.len())];
        let arg = build(rng, depth - 1, budget - 3, has_variable);
        return Draft::Call(func, Box::new(arg));
    }

    terminal(rng, has_variable)
}

fn terminal<R: Rng>(rng: &mut R, has_variable: bool) -> Draft {
    let r: f64 = rng.random();
    let variable_bucket = if has_variable {
        TERMINAL_VARIABLE
    } else {
        TERMINAL_VARIABLE_NEEDED
    };

    if r < variable_bucket {
        Draft::Variable
    } else if r < TERMINAL_CONSTANT {
        Draft::Constant(Constant::ALL[rng.random_range(0..Constant::ALL.len())])
    } else {
        Draft::Number(rng.random_range(MIN_NUMBER..=MAX_NUMBER))
    }
}
