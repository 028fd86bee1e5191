//! Position evaluation for Gomoku
//!
//! Contains:
//! - Pattern weight table and fixed shape templates
//! - Line scorer and full-board static evaluation
//! - Degree heuristic for move ordering

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_point, score_line, LineScore};
pub use patterns::{five_template, open_four_template, PatternScore};
