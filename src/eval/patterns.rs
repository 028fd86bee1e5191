//! Pattern scores and fixed shape templates for Gomoku evaluation

use crate::board::Stone;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win
    pub const FIVE: i32 = 100_000;

    // Strong attacking patterns
    /// Open four: _OOOO_ (unstoppable)
    pub const OPEN_FOUR: i32 = 10_000;
    /// Closed four: XOOOO_ or _OOOOX (one way to extend)
    pub const CLOSED_FOUR: i32 = 5_000;

    // Moderate threats
    /// Open three: _OOO_ (becomes open four if not blocked)
    pub const OPEN_THREE: i32 = 1_000;
    /// Closed three: XOOO_ or _OOOX (one side blocked)
    pub const CLOSED_THREE: i32 = 150;

    // Building patterns
    /// Open two: _OO_ (potential to grow)
    pub const OPEN_TWO: i32 = 100;
    /// Closed two: XOO_ or _OOX (one side blocked)
    pub const CLOSED_TWO: i32 = 20;
}

/// Five-in-a-row template for exact sub-sequence matching.
pub const fn five_template(color: Stone) -> [Stone; 5] {
    [color; 5]
}

/// Open-four template: an empty cell, four stones, an empty cell.
///
/// Matched against the 6-cell window a threat scan builds around a
/// hypothetical placement; the scan overwrites the placement slot with
/// `color` before comparing, so the template itself carries no wildcard.
pub const fn open_four_template(color: Stone) -> [Stone; 6] {
    [Stone::Empty, color, color, color, color, Stone::Empty]
}
