//! Threat detection: immediate wins and unstoppable fours
//!
//! All checks here are exact pattern tests, not heuristics. The two
//! hypothetical checks (`has_checkmate`, `has_check`) never mutate the
//! board; they reason about a stone that would be placed on an empty
//! cell. The current-board scan (`has_five`) feeds both win detection
//! and the safety gate before a forcing move is committed.

use crate::board::lines::for_each_line;
use crate::board::{Board, Pos, Stone};
use crate::eval::{five_template, open_four_template};

/// Direction vectors for line checking (4 axes, negated for the
/// opposite directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Would placing `color` at empty `pos` complete five or more in a row?
///
/// For each axis, counts the contiguous same-color runs extending
/// outward in both directions (each capped at 4 steps) plus the
/// hypothetical stone itself.
#[must_use]
pub fn has_checkmate(board: &Board, color: Stone, pos: Pos) -> bool {
    debug_assert!(board.is_empty(pos));

    for &(dr, dc) in &DIRECTIONS {
        let total = 1 + run_length(board, pos, dr, dc, color) + run_length(board, pos, -dr, -dc, color);
        if total >= 5 {
            return true;
        }
    }
    false
}

/// Would placing `color` at empty `pos` create an open four?
///
/// For each of the 8 directions, builds the 6-cell window at steps
/// -1..=4 from `pos` (abandoned if any step leaves the board), applies
/// the hypothetical placement, and compares against the open-four
/// template. An open four cannot be blocked on both ends at once.
#[must_use]
pub fn has_check(board: &Board, color: Stone, pos: Pos) -> bool {
    debug_assert!(board.is_empty(pos));
    let template = open_four_template(color);

    for &(dr, dc) in &DIRECTIONS {
        for (dr, dc) in [(dr, dc), (-dr, -dc)] {
            if let Some(mut window) = window_around(board, pos, dr, dc) {
                // The hypothetical stone sits at step 0, slot 1 of the window
                window[1] = color;
                if window == template {
                    return true;
                }
            }
        }
    }
    false
}

/// Does `color` already hold five in a row on the current board?
#[must_use]
pub fn has_five(board: &Board, color: Stone) -> bool {
    let template = five_template(color);
    let mut found = false;

    for_each_line(board, |line| {
        if !found && line.windows(5).any(|w| w == template) {
            found = true;
        }
    });

    found
}

/// Safety gate for forcing moves: does the opponent of `color` already
/// hold a completed five on the current, unmodified board?
#[must_use]
pub fn opponent_has_checkmate(board: &Board, color: Stone) -> bool {
    has_five(board, color.opponent())
}

/// Length of the contiguous `color` run starting one step from `pos`
/// along (dr, dc), capped at 4 steps.
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> i32 {
    let mut count = 0;
    for step in 1..=4 {
        let r = i32::from(pos.row) + dr * step;
        let c = i32::from(pos.col) + dc * step;
        if !Pos::is_valid(r, c) {
            break;
        }
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        if board.get(Pos::new(r as u8, c as u8)) != color {
            break;
        }
        count += 1;
    }
    count
}

/// The 6-cell window at steps -1..=4 from `pos` along (dr, dc), or
/// `None` if any step falls off the board.
fn window_around(board: &Board, pos: Pos, dr: i32, dc: i32) -> Option<[Stone; 6]> {
    let mut window = [Stone::Empty; 6];
    for (slot, step) in (-1..=4).enumerate() {
        let r = i32::from(pos.row) + dr * step;
        let c = i32::from(pos.col) + dc * step;
        if !Pos::is_valid(r, c) {
            return None;
        }
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        {
            window[slot] = board.get(Pos::new(r as u8, c as u8));
        }
    }
    Some(window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_checkmate_completes_five() {
        let mut board = Board::new();
        for j in 4..8 {
            board.place_stone(Pos::new(7, j), Stone::Black);
        }

        assert!(has_checkmate(&board, Stone::Black, Pos::new(7, 3)));
        assert!(has_checkmate(&board, Stone::Black, Pos::new(7, 8)));
        assert!(!has_checkmate(&board, Stone::Black, Pos::new(7, 2)));
        assert!(!has_checkmate(&board, Stone::White, Pos::new(7, 3)));
    }

    #[test]
    fn test_has_checkmate_joins_split_runs() {
        let mut board = Board::new();
        // OO_OO : the middle cell completes five
        for j in [3u8, 4, 6, 7] {
            board.place_stone(Pos::new(7, j), Stone::White);
        }
        assert!(has_checkmate(&board, Stone::White, Pos::new(7, 5)));
    }

    #[test]
    fn test_has_checkmate_vertical_and_diagonal() {
        let mut board = Board::new();
        for i in 2..6 {
            board.place_stone(Pos::new(i, 9), Stone::Black);
        }
        assert!(has_checkmate(&board, Stone::Black, Pos::new(6, 9)));

        let mut board = Board::new();
        for k in 0..4 {
            board.place_stone(Pos::new(5 + k, 5 + k), Stone::White);
        }
        assert!(has_checkmate(&board, Stone::White, Pos::new(9, 9)));
    }

    #[test]
    fn test_has_checkmate_counts_beyond_five() {
        let mut board = Board::new();
        // Three on each side: placing in the gap makes seven in a row
        for j in [2u8, 3, 4, 6, 7, 8] {
            board.place_stone(Pos::new(7, j), Stone::Black);
        }
        assert!(has_checkmate(&board, Stone::Black, Pos::new(7, 5)));
    }

    #[test]
    fn test_has_check_open_four() {
        let mut board = Board::new();
        // _?OOO_ : placing at (7,4) makes _OOOO_
        for j in 5..8 {
            board.place_stone(Pos::new(7, j), Stone::White);
        }

        assert!(has_check(&board, Stone::White, Pos::new(7, 4)));
        assert!(has_check(&board, Stone::White, Pos::new(7, 8)));
        assert!(!has_check(&board, Stone::Black, Pos::new(7, 4)));
    }

    #[test]
    fn test_has_check_blocked_end() {
        let mut board = Board::new();
        for j in 5..8 {
            board.place_stone(Pos::new(7, j), Stone::White);
        }
        // Black blocks one extension end; the four is no longer open
        board.place_stone(Pos::new(7, 8), Stone::Black);

        assert!(!has_check(&board, Stone::White, Pos::new(7, 4)));
    }

    #[test]
    fn test_has_check_needs_room() {
        let mut board = Board::new();
        // Three at the edge: no empty cell beyond col 0
        for j in 1..4 {
            board.place_stone(Pos::new(7, j), Stone::Black);
        }
        assert!(!has_check(&board, Stone::Black, Pos::new(7, 0)));
        // The other end has room on both sides
        assert!(has_check(&board, Stone::Black, Pos::new(7, 4)));
    }

    #[test]
    fn test_has_five() {
        let mut board = Board::new();
        assert!(!has_five(&board, Stone::Black));

        for j in 4..9 {
            board.place_stone(Pos::new(0, j), Stone::Black);
        }
        assert!(has_five(&board, Stone::Black));
        assert!(!has_five(&board, Stone::White));
    }

    #[test]
    fn test_has_five_diagonal() {
        let mut board = Board::new();
        for k in 0..5 {
            board.place_stone(Pos::new(10 + k as u8, 6 - k as u8), Stone::White);
        }
        assert!(has_five(&board, Stone::White));
    }

    #[test]
    fn test_opponent_has_checkmate() {
        let mut board = Board::new();
        for j in 0..5 {
            board.place_stone(Pos::new(0, j), Stone::Black);
        }

        assert!(opponent_has_checkmate(&board, Stone::White));
        assert!(!opponent_has_checkmate(&board, Stone::Black));
    }
}
