//! Search module for the Gomoku AI
//!
//! Contains:
//! - Threat detection (immediate fives, open fours)
//! - Candidate generation with adjacency pruning and ordering
//! - Fixed-depth negamax search with alpha-beta pruning

pub mod movegen;
pub mod negamax;
pub mod threat;

pub use movegen::{generate, has_neighbor};
pub use negamax::{SearchResult, Searcher};
pub use threat::{has_check, has_checkmate, has_five, opponent_has_checkmate};
