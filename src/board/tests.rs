//! Board layer tests

use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_index_roundtrip() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.to_index(), 7 * BOARD_SIZE + 7);
    assert_eq!(Pos::from_index(pos.to_index()), pos);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 14).to_index(), 14);
    assert_eq!(Pos::new(14, 0).to_index(), 210);
    assert_eq!(Pos::new(14, 14).to_index(), TOTAL_CELLS - 1);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
}

#[test]
fn test_pos_ordering_is_row_major() {
    assert!(Pos::new(0, 14) < Pos::new(1, 0));
    assert!(Pos::new(3, 5) < Pos::new(3, 6));
    assert_eq!(Pos::new(7, 7).cmp(&Pos::new(7, 7)), std::cmp::Ordering::Equal);
}

#[test]
fn test_pos_display() {
    assert_eq!(Pos::new(7, 3).to_string(), "(7, 3)");
}

#[test]
fn test_board_starts_empty() {
    let board = Board::new();
    assert!(board.is_board_empty());
    assert_eq!(board.stone_count(), 0);
    assert_eq!(board.get(Pos::new(7, 7)), Stone::Empty);
    assert_eq!(board.size(), BOARD_SIZE);
}

#[test]
fn test_board_place_and_get() {
    let mut board = Board::new();
    board.place_stone(Pos::new(7, 7), Stone::Black);
    board.place_stone(Pos::new(0, 14), Stone::White);

    assert_eq!(board.get(Pos::new(7, 7)), Stone::Black);
    assert_eq!(board.get(Pos::new(0, 14)), Stone::White);
    assert_eq!(board.get(Pos::new(7, 8)), Stone::Empty);
    assert_eq!(board.stone_count(), 2);
    assert!(!board.is_empty(Pos::new(7, 7)));
    assert!(board.is_empty(Pos::new(7, 8)));
}

#[test]
fn test_board_place_empty_is_noop() {
    let mut board = Board::new();
    board.place_stone(Pos::new(5, 5), Stone::Empty);
    assert!(board.is_board_empty());
}

#[test]
fn test_board_remove_stone() {
    let mut board = Board::new();
    let pos = Pos::new(3, 9);
    board.place_stone(pos, Stone::White);
    board.remove_stone(pos);

    assert_eq!(board.get(pos), Stone::Empty);
    assert!(board.is_board_empty());
}

#[test]
fn test_board_make_unmake_restores_state() {
    let mut board = Board::new();
    board.place_stone(Pos::new(7, 7), Stone::Black);
    let snapshot = board.clone();

    board.place_stone(Pos::new(8, 8), Stone::White);
    board.place_stone(Pos::new(9, 9), Stone::Black);
    board.remove_stone(Pos::new(9, 9));
    board.remove_stone(Pos::new(8, 8));

    assert_eq!(board, snapshot);
}

#[test]
fn test_board_clone_is_independent() {
    let mut board = Board::new();
    board.place_stone(Pos::new(7, 7), Stone::Black);

    let mut copy = board.clone();
    copy.place_stone(Pos::new(8, 8), Stone::White);

    assert_eq!(board.get(Pos::new(8, 8)), Stone::Empty);
    assert_eq!(copy.get(Pos::new(8, 8)), Stone::White);
}

#[test]
fn test_bitboard_set_clear_count() {
    let mut bb = Bitboard::new();
    assert!(bb.is_empty());

    bb.set(Pos::new(0, 0));
    bb.set(Pos::new(14, 14));
    assert!(bb.get(Pos::new(0, 0)));
    assert!(bb.get(Pos::new(14, 14)));
    assert!(!bb.get(Pos::new(7, 7)));
    assert_eq!(bb.count(), 2);

    bb.clear(Pos::new(0, 0));
    assert!(!bb.get(Pos::new(0, 0)));
    assert_eq!(bb.count(), 1);
}

#[test]
fn test_bitboard_iter_ones() {
    let mut bb = Bitboard::new();
    bb.set(Pos::new(0, 1));
    bb.set(Pos::new(7, 7));
    bb.set(Pos::new(14, 14));

    let cells: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(
        cells,
        vec![Pos::new(0, 1), Pos::new(7, 7), Pos::new(14, 14)]
    );
}
