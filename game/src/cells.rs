use evaluator::Hints;
use serde::Serialize;

/// Highlight state of one cell in a guess row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Cell {
    Empty,
    /// Covered by at least one hint, none of them matched.
    Similar,
    /// Covered by at least one matched hint.
    Matched,
    FullMatch,
}

/// Folds (possibly overlapping) hints into one state per token cell.
pub fn cell_states(hints: &Hints, len: usize) -> Vec<Cell> {
    let hints = match hints {
        Hints::FullMatch => return vec![Cell::FullMatch; len],
        Hints::Partial(hints) => hints,
    };

    let mut cells = vec![Cell::Empty; len];
    for hint in hints {
        let state = if hint.matched {
            Cell::Matched
        } else {
            Cell::Similar
        };
        let end = (hint.end as usize).min(len);
        for cell in cells.iter_mut().take(end).skip(hint.start as usize) {
            *cell = (*cell).max(state);
        }
    }
    cells
}
