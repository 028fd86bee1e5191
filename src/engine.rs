//! Main AI engine integrating the search components
//!
//! The engine orchestrates move selection as a three-phase policy, the
//! cheap exact checks running before the expensive tree search:
//!
//! 1. **Immediate win**: first empty cell (row-major) that completes
//!    five or more in a row is played on the spot
//! 2. **Safe forcing move**: first neighbor-adjacent empty cell that
//!    creates an open four is played, unless the opponent already holds
//!    a completed five - taking a forcing move then would just hand
//!    them the game
//! 3. **Alpha-beta fallback**: fixed-depth negamax over the ordered
//!    candidates
//!
//! Exactly one stone is placed on the board per successful call.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let mut engine = AIEngine::with_depth(2).unwrap();
//! let result = engine.select_move(&mut board, Stone::White).unwrap();
//! println!("AI plays at {}", result.pos);
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::board::{Board, Pos, Stone, TOTAL_CELLS};
use crate::error::EngineError;
use crate::eval::PatternScore;
use crate::search::{
    has_check, has_checkmate, has_neighbor, opponent_has_checkmate, Searcher,
};

/// Default search depth for the alpha-beta fallback
const DEFAULT_DEPTH: i8 = 3;

/// Which phase of the selection policy produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Found a cell completing five-in-a-row
    ImmediateWin,
    /// Played a safe open-four forcing move
    ForcingMove,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move selection with search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// The committed move
    pub pos: Pos,
    /// Score associated with the move
    pub score: i32,
    /// Phase of the policy that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched (0 for tactical shortcuts)
    pub nodes: u64,
}

/// Main AI engine for Gomoku move selection.
///
/// Configured with a fixed search depth; the tactical phases are
/// depth-independent. Construction validates the configuration, search
/// never does.
pub struct AIEngine {
    searcher: Searcher,
    depth: i8,
}

impl AIEngine {
    /// Create an engine with the default search depth.
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
            depth: DEFAULT_DEPTH,
        }
    }

    /// Create an engine with a custom search depth.
    ///
    /// # Errors
    ///
    /// `EngineError::InvalidDepth` if `depth` is less than 1.
    pub fn with_depth(depth: i8) -> Result<Self, EngineError> {
        if depth < 1 {
            return Err(EngineError::InvalidDepth(depth));
        }
        Ok(Self {
            searcher: Searcher::new(),
            depth,
        })
    }

    /// Get the configured search depth.
    #[must_use]
    pub fn depth(&self) -> i8 {
        self.depth
    }

    /// Select and commit the next move for `color`.
    ///
    /// Runs the three-phase policy and places exactly one stone on
    /// `board` at the chosen coordinate.
    ///
    /// # Errors
    ///
    /// - `EngineError::NoMoveAvailable` when no phase yields a move
    ///   (full board, or no cell passes the adjacency filter)
    /// - `EngineError::CellOccupied` on an internal invariant break at
    ///   commit time; the caller must treat this as fatal
    pub fn select_move(
        &mut self,
        board: &mut Board,
        color: Stone,
    ) -> Result<MoveResult, EngineError> {
        let start = Instant::now();

        // Phase 1: immediate win scan over every empty cell
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            if !board.is_empty(pos) {
                continue;
            }
            if has_checkmate(board, color, pos) {
                debug!(%pos, ?color, "immediate winning move");
                self.commit(board, pos, color)?;
                return Ok(MoveResult {
                    pos,
                    score: PatternScore::FIVE,
                    search_type: SearchType::ImmediateWin,
                    time_ms: elapsed_ms(start),
                    nodes: 0,
                });
            }
        }

        // Phase 2: safe forcing move over neighbor-adjacent empty cells
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            if !board.is_empty(pos) || !has_neighbor(board, pos) {
                continue;
            }
            if has_check(board, color, pos) {
                if opponent_has_checkmate(board, color) {
                    debug!(%pos, ?color, "forcing move rejected, opponent holds a five");
                    continue;
                }
                debug!(%pos, ?color, "safe forcing move");
                self.commit(board, pos, color)?;
                return Ok(MoveResult {
                    pos,
                    score: PatternScore::OPEN_FOUR,
                    search_type: SearchType::ForcingMove,
                    time_ms: elapsed_ms(start),
                    nodes: 0,
                });
            }
        }

        // Phase 3: full alpha-beta search
        let result = self.searcher.search(board, color, self.depth);
        let pos = result.best_move.ok_or(EngineError::NoMoveAvailable)?;
        self.commit(board, pos, color)?;

        Ok(MoveResult {
            pos,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms: elapsed_ms(start),
            nodes: result.nodes,
        })
    }

    /// Single commit path: verify the target is empty, then place the
    /// stone. Every phase funnels through here.
    fn commit(&self, board: &mut Board, pos: Pos, color: Stone) -> Result<(), EngineError> {
        if !board.is_empty(pos) {
            return Err(EngineError::CellOccupied { pos });
        }
        board.place_stone(pos, color);
        info!(%pos, ?color, "committed move");
        Ok(())
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
