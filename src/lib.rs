//! Gomoku AI engine
//!
//! A move-selection engine for five-in-a-row on a 15x15 board. The crate
//! is layered bottom-up:
//!
//! - [`board`]: bitboard-backed board state and the shared line
//!   enumeration every scorer walks
//! - [`eval`]: pattern weights, the line scorer and the static
//!   evaluation driving the search
//! - [`search`]: threat detection, adjacency-pruned candidate
//!   generation, and fixed-depth negamax with alpha-beta pruning
//! - [`engine`]: the three-phase selection policy that commits exactly
//!   one stone per call
//!
//! # Quick start
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let mut engine = AIEngine::with_depth(2).unwrap();
//! let result = engine.select_move(&mut board, Stone::White).unwrap();
//! assert_ne!(board.get(result.pos), Stone::Empty);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod search;

pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::EngineError;
