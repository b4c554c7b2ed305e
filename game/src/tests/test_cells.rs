use evaluator::{Hint, Hints};

use crate::{Cell, cell_states};

fn hint(start: u32, end: u32, matched: bool) -> Hint {
    Hint {
        start,
        end,
        matched,
    }
}

#[test]
fn test_full_match_fills_every_cell() {
    assert_eq!(cell_states(&Hints::FullMatch, 3), vec![Cell::FullMatch; 3]);
}

#[test]
fn test_matched_wins_over_similar() {
    let hints = Hints::Partial(vec![hint(1, 2, false), hint(2, 7, true), hint(4, 5, false)]);
    assert_eq!(
        cell_states(&hints, 8),
        vec![
            Cell::Empty,
            Cell::Similar,
            Cell::Matched,
            Cell::Matched,
            Cell::Matched,
            Cell::Matched,
            Cell::Matched,
            Cell::Empty,
        ]
    );
}

#[test]
fn test_hints_past_the_row_are_clipped() {
    let hints = Hints::Partial(vec![hint(1, 9, false)]);
    assert_eq!(
        cell_states(&hints, 3),
        vec![Cell::Empty, Cell::Similar, Cell::Similar]
    );
    assert_eq!(cell_states(&Hints::Partial(vec![]), 2), vec![Cell::Empty; 2]);
}
