use crate::tests::common::{init_tracing, parse_ok};
use crate::{Hint, Hints, compute_hints, is_match, partial_hints, sample_points};

const THRESHOLD: f64 = 1e-4;

fn hint(start: u32, end: u32, matched: bool) -> Hint {
    Hint {
        start,
        end,
        matched,
    }
}

fn hints_for(guess: &str, target: &str) -> Hints {
    init_tracing();
    let samples = sample_points(-5.0, 5.0, 11);
    compute_hints(&parse_ok(guess), &parse_ok(target), &samples, THRESHOLD)
}

#[test]
fn test_is_match() {
    assert!(is_match(1.0, 1.00001, THRESHOLD));
    assert!(!is_match(1.0, 1.001, THRESHOLD));
    assert!(is_match(f64::NAN, f64::NAN, THRESHOLD));
    assert!(!is_match(f64::NAN, 0.0, THRESHOLD));
    assert!(!is_match(f64::INFINITY, f64::INFINITY, THRESHOLD));
    assert!(!is_match(f64::INFINITY, f64::NEG_INFINITY, THRESHOLD));
}

#[test]
fn test_full_match_over_game_samples() {
    let samples = sample_points(-50.0, 50.0, 1001);
    let target = parse_ok("x^2+4");
    let guess = parse_ok("4+x*x");
    assert_eq!(
        compute_hints(&guess, &target, &samples, THRESHOLD),
        Hints::FullMatch
    );
}

#[test]
fn test_reordered_sum_is_a_full_match() {
    assert!(hints_for("1+x", "x+1").is_full_match());
}

#[test]
fn test_reordered_sum_partial_hints() {
    let samples = sample_points(-5.0, 5.0, 11);
    let hints = partial_hints(&parse_ok("1+x"), &parse_ok("x+1"), &samples, THRESHOLD);
    assert_eq!(hints, vec![hint(0, 3, true), hint(0, 1, true)]);
}

#[test]
fn test_similar_and_matched_ranges() {
    // 3 * ( 1 + x )
    // 0 1 2 3 4 5 6
    let hints = hints_for("3*(1+x)", "2*(x+1)");
    assert_eq!(
        hints,
        Hints::Partial(vec![hint(1, 2, false), hint(2, 7, true), hint(3, 4, true)])
    );
    assert!(hints.hints()[1].covers(6));
    assert!(!hints.hints()[0].covers(0));
}

#[test]
fn test_unrelated_guess_has_no_hints() {
    assert_eq!(hints_for("sin(x)", "x^2"), Hints::Partial(vec![]));
}

#[test]
fn test_variable_pairs_are_skipped() {
    let samples = sample_points(-5.0, 5.0, 11);
    let x = parse_ok("x");
    assert!(partial_hints(&x, &x, &samples, THRESHOLD).is_empty());
}

#[test]
fn test_function_mismatch_highlights_call_anchor() {
    // cos ( x ) + 1
    // 0   1 2 3 4 5
    let hints = hints_for("cos(x)+1", "cos(2*x)+1");
    assert_eq!(
        hints,
        Hints::Partial(vec![hint(4, 5, false), hint(0, 1, false), hint(5, 6, true)])
    );
}

#[test]
fn test_nan_everywhere_is_a_full_match() {
    let samples = [-1.0];
    let expr = parse_ok("log(x)");
    assert!(compute_hints(&expr, &expr, &samples, THRESHOLD).is_full_match());
}

#[test]
fn test_infinite_values_never_match() {
    let samples = [0.0];
    let expr = parse_ok("1/x");
    assert_eq!(
        compute_hints(&expr, &expr, &samples, THRESHOLD),
        Hints::Partial(vec![hint(1, 2, false), hint(0, 1, true)])
    );
}
