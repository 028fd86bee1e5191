//! Shared line enumeration over the four axis families
//!
//! Every consumer of full-board line data (static evaluation, the degree
//! heuristic, the five-in-a-row scan) goes through this module, so the
//! axis bookkeeping lives in exactly one place.

use super::{Board, Pos, Stone, BOARD_SIZE};

/// Minimum useful line length: anything shorter cannot hold a five.
pub const MIN_LINE_LEN: usize = 5;

/// Number of maximal lines of length >= 5 on the board:
/// 15 rows + 15 columns + 21 + 21 diagonals.
pub const LINE_COUNT: usize = 2 * BOARD_SIZE + 4 * (BOARD_SIZE - MIN_LINE_LEN) + 2;

/// Visit every maximal line of length >= 5, one slice per line.
///
/// Lines are rebuilt from the board on every call; the slice passed to
/// the callback is only valid for the duration of that call.
pub fn for_each_line(board: &Board, mut f: impl FnMut(&[Stone])) {
    let mut buf = Vec::with_capacity(BOARD_SIZE);
    let n = BOARD_SIZE as i32;

    // Rows and columns
    for i in 0..n {
        collect(board, i, 0, 0, 1, &mut buf);
        f(&buf);
    }
    for j in 0..n {
        collect(board, 0, j, 1, 0, &mut buf);
        f(&buf);
    }

    // Down-right diagonals, starting on the left and top edges
    for i in 0..=n - MIN_LINE_LEN as i32 {
        collect(board, i, 0, 1, 1, &mut buf);
        f(&buf);
    }
    for j in 1..=n - MIN_LINE_LEN as i32 {
        collect(board, 0, j, 1, 1, &mut buf);
        f(&buf);
    }

    // Down-left diagonals, starting on the top and right edges
    for j in MIN_LINE_LEN as i32 - 1..n {
        collect(board, 0, j, 1, -1, &mut buf);
        f(&buf);
    }
    for i in 1..=n - MIN_LINE_LEN as i32 {
        collect(board, i, n - 1, 1, -1, &mut buf);
        f(&buf);
    }
}

/// Visit the full lines through `pos`, skipping diagonals shorter than 5.
///
/// Yields at most four lines: the row, the column, and the two diagonals.
pub fn for_each_line_through(board: &Board, pos: Pos, mut f: impl FnMut(&[Stone])) {
    let mut buf = Vec::with_capacity(BOARD_SIZE);
    let n = BOARD_SIZE as i32;
    let (i, j) = (i32::from(pos.row), i32::from(pos.col));

    collect(board, i, 0, 0, 1, &mut buf);
    f(&buf);
    collect(board, 0, j, 1, 0, &mut buf);
    f(&buf);

    let back = i.min(j);
    collect(board, i - back, j - back, 1, 1, &mut buf);
    if buf.len() >= MIN_LINE_LEN {
        f(&buf);
    }

    let back = i.min(n - 1 - j);
    collect(board, i - back, j + back, 1, -1, &mut buf);
    if buf.len() >= MIN_LINE_LEN {
        f(&buf);
    }
}

/// Walk from (r, c) along (dr, dc) until the edge, collecting cell states.
fn collect(board: &Board, mut r: i32, mut c: i32, dr: i32, dc: i32, buf: &mut Vec<Stone>) {
    buf.clear();
    while Pos::is_valid(r, c) {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        buf.push(board.get(Pos::new(r as u8, c as u8)));
        r += dr;
        c += dc;
    }
}
