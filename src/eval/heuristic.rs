//! Heuristic evaluation for Gomoku board positions
//!
//! Three layers, all built on the shared line enumeration:
//! - [`score_line`]: score one line per color (the line scorer)
//! - [`evaluate`]: full-board static evaluation for the negamax leaves
//! - [`evaluate_point`]: cheap per-candidate score used only to order
//!   moves before the tree search (the degree heuristic)

use crate::board::lines::{for_each_line, for_each_line_through};
use crate::board::{Board, Pos, Stone};

use super::patterns::PatternScore;

/// Per-color score contribution of a single line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineScore {
    pub black: i32,
    pub white: i32,
}

impl LineScore {
    /// Score for one side
    #[inline]
    pub fn side(&self, color: Stone) -> i32 {
        match color {
            Stone::Black => self.black,
            Stone::White => self.white,
            Stone::Empty => 0,
        }
    }
}

/// Score a single line for both colors.
///
/// Walks the maximal same-color runs in the line and scores each by
/// `(run length, open ends)`. Pure, and non-negative per color.
pub fn score_line(line: &[Stone]) -> LineScore {
    let mut score = LineScore::default();
    let mut i = 0;

    while i < line.len() {
        let stone = line[i];
        if stone == Stone::Empty {
            i += 1;
            continue;
        }

        let start = i;
        while i < line.len() && line[i] == stone {
            i += 1;
        }
        let count = i - start;

        let mut open_ends = 0;
        if start > 0 && line[start - 1] == Stone::Empty {
            open_ends += 1;
        }
        if i < line.len() && line[i] == Stone::Empty {
            open_ends += 1;
        }

        let value = match (count, open_ends) {
            (5.., _) => PatternScore::FIVE,
            (4, 2) => PatternScore::OPEN_FOUR,
            (4, 1) => PatternScore::CLOSED_FOUR,
            (3, 2) => PatternScore::OPEN_THREE,
            (3, 1) => PatternScore::CLOSED_THREE,
            (2, 2) => PatternScore::OPEN_TWO,
            (2, 1) => PatternScore::CLOSED_TWO,
            _ => 0,
        };

        match stone {
            Stone::Black => score.black += value,
            Stone::White => score.white += value,
            Stone::Empty => unreachable!("runs start on a stone"),
        }
    }

    score
}

/// Evaluate the board from the perspective of the given color.
///
/// Sums `own - opponent` over every line on the board, so the result is
/// antisymmetric by construction:
/// `evaluate(board, Black) == -evaluate(board, White)`.
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    let opponent = color.opponent();
    let mut total = 0;

    for_each_line(board, |line| {
        let sc = score_line(line);
        total += sc.side(color) - sc.side(opponent);
    });

    total
}

/// Degree heuristic: score of the lines through one point, own color only.
///
/// Evaluated on the board as-is (before any hypothetical placement); the
/// move generator uses it to order candidates, nothing else.
#[must_use]
pub fn evaluate_point(board: &Board, color: Stone, pos: Pos) -> i32 {
    let mut total = 0;

    for_each_line_through(board, pos, |line| {
        total += score_line(line).side(color);
    });

    total
}
