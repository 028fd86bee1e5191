//! Fixed-depth negamax search with alpha-beta pruning
//!
//! The search runs the standard negamax convention: every node's score
//! is from the perspective of the player to move at that node, and a
//! parent negates its child's score. Instead of cloning the board per
//! ply, moves are applied and undone around each recursive call in
//! strict LIFO order, so sibling branches never observe each other's
//! in-flight mutation.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&board, Stone::White, 2);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate, PatternScore};

use super::movegen::generate;

/// Infinity sentinel for alpha-beta bounds. Larger in magnitude than any
/// reachable evaluation (at most 72 lines each capped by FIVE) and safe
/// to negate.
pub const INF: i32 = PatternScore::FIVE * 1_000;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Evaluation score of the best move
    pub score: i32,
    /// Depth the search was run at
    pub depth: i8,
    /// Total nodes visited
    pub nodes: u64,
}

/// Fixed-depth negamax searcher.
///
/// Holds nothing but the node counter; a fresh search resets it. The
/// root is always called with the full `(-INF, INF)` window.
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Search for the best move at exactly `depth` plies.
    ///
    /// The board is copied once at the root; all deeper plies reuse that
    /// copy through make/unmake. Returns `best_move: None` when no
    /// candidate exists (empty board or no cell passes the adjacency
    /// filter).
    #[must_use]
    pub fn search(&mut self, board: &Board, color: Stone, depth: i8) -> SearchResult {
        self.nodes = 0;

        let mut work_board = board.clone();
        let (score, best_move) = self.negamax(&mut work_board, color, depth, -INF, INF);
        debug_assert_eq!(work_board, *board, "make/unmake left the board dirty");

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    /// Recursive negamax. Returns `(score, best_move)` from the
    /// perspective of `color`, the player to move at this node.
    fn negamax(
        &mut self,
        board: &mut Board,
        color: Stone,
        depth: i8,
        mut alpha: i32,
        beta: i32,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        // Depth limit reached - static evaluation from the mover's view
        if depth <= 0 {
            return (evaluate(board, color), None);
        }

        let mut best_move = None;

        for mov in generate(board, color) {
            board.place_stone(mov, color);
            let (child_score, _) = self.negamax(board, color.opponent(), depth - 1, -beta, -alpha);
            board.remove_stone(mov);

            let score = -child_score;

            if score > beta {
                // Fail-high: the opponent already has a better option
                // above this node, remaining candidates are irrelevant
                return (beta, best_move);
            }
            if score > alpha {
                alpha = score;
                best_move = Some(mov);
            }
            // Ties do not replace the recorded move: first-encountered
            // maximal candidate wins
        }

        (alpha, best_move)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
