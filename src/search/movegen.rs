//! Candidate move generation with adjacency pruning and ordering
//!
//! Gomoku stones only matter near other stones, so the generator offers
//! a cell as a candidate only when an occupied cell sits on one of its
//! four axes within two steps. Candidates are then ordered by the degree
//! heuristic, weakest first, before the tree search consumes them.

use crate::board::{Board, Pos, Stone, TOTAL_CELLS};
use crate::eval::evaluate_point;

/// Direction vectors for the adjacency probe (4 axes, negated for the
/// opposite directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Does `pos` have an occupied cell within two steps on one of its axes?
///
/// Only the 8 axis cells at offsets 1 and 2 per direction are probed,
/// not the full radius-2 neighborhood; a direction is abandoned at the
/// first offset that leaves the board. This restricted probe is the
/// generation contract: a cell failing it is never offered as a move.
#[must_use]
pub fn has_neighbor(board: &Board, pos: Pos) -> bool {
    for &(dr, dc) in &DIRECTIONS {
        for (dr, dc) in [(dr, dc), (-dr, -dc)] {
            for step in 1..=2 {
                let r = i32::from(pos.row) + dr * step;
                let c = i32::from(pos.col) + dc * step;
                if !Pos::is_valid(r, c) {
                    break;
                }
                #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
                if board.get(Pos::new(r as u8, c as u8)) != Stone::Empty {
                    return true;
                }
            }
        }
    }
    false
}

/// Generate candidate moves for `color`, ordered for the search.
///
/// Scans the board row-major, keeps empty cells passing [`has_neighbor`],
/// scores each with the mover's own degree heuristic on the pre-move
/// board, and sorts ascending by that score. The sort is stable, so
/// equally scored candidates keep their row-major order — that ordering
/// is the deterministic tie-break the search relies on.
///
/// Returns an empty vector on a board with no stones.
#[must_use]
pub fn generate(board: &Board, color: Stone) -> Vec<Pos> {
    let mut candidates = Vec::with_capacity(64);

    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if !board.is_empty(pos) {
            continue;
        }
        if !has_neighbor(board, pos) {
            continue;
        }
        candidates.push((pos, evaluate_point(board, color, pos)));
    }

    candidates.sort_by_key(|&(_, score)| score);
    candidates.into_iter().map(|(pos, _)| pos).collect()
}
