use super::*;
use crate::error::ConfigError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
}

#[test]
fn test_stone_display() {
    assert_eq!(Stone::White.to_string(), "White");
    assert_eq!(Stone::Black.to_string(), "Black");
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(3, 7);
    assert_eq!(pos.col, 3);
    assert_eq!(pos.row, 7);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(4, 5);
    assert_eq!(pos.to_index(10), 54);

    let pos2 = Pos::from_index(54, 10);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 10));
    assert!(Pos::is_valid(9, 9, 10));
    assert!(!Pos::is_valid(-1, 0, 10));
    assert!(!Pos::is_valid(0, -1, 10));
    assert!(!Pos::is_valid(10, 0, 10));
    assert!(!Pos::is_valid(0, 10, 10));
}

#[test]
fn test_pos_offset_stays_on_board() {
    let corner = Pos::new(0, 9);
    assert_eq!(corner.offset(1, -1, 10), Some(Pos::new(1, 8)));
    assert_eq!(corner.offset(-1, 0, 10), None);
    assert_eq!(corner.offset(0, 1, 10), None);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(1, 0);
    let pos3 = Pos::new(0, 1);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(10), 0);
    assert_eq!(Pos::new(9, 0).to_index(10), 9);
    assert_eq!(Pos::new(0, 9).to_index(10), 90);
    assert_eq!(Pos::new(9, 9).to_index(10), 99);
}

#[test]
fn test_board_constants() {
    let config = BoardConfig::default();
    assert_eq!(config.size(), BOARD_SIZE);
    assert_eq!(config.win_length(), WIN_LENGTH);
    assert_eq!(config.total_cells(), 100);
}

#[test]
fn test_config_validation() {
    assert!(BoardConfig::new(15, 5).is_ok());
    assert_eq!(BoardConfig::new(1, 1), Err(ConfigError::BoardSize(1)));
    assert_eq!(BoardConfig::new(33, 5), Err(ConfigError::BoardSize(33)));
    assert_eq!(
        BoardConfig::new(4, 5),
        Err(ConfigError::WinLength { win_length: 5, size: 4 })
    );
    assert_eq!(
        BoardConfig::new(10, 1),
        Err(ConfigError::WinLength { win_length: 1, size: 10 })
    );
}

#[test]
fn test_config_pos_rejects_out_of_range() {
    let config = BoardConfig::default();
    assert_eq!(config.pos(2, 3), Some(Pos::new(2, 3)));
    assert_eq!(config.pos(10, 3), None);
    assert_eq!(config.pos(-1, 3), None);
}

#[test]
fn test_stone_set_keeps_insertion_order() {
    let mut set = StoneSet::new(10);
    assert!(set.insert(Pos::new(5, 5)));
    assert!(set.insert(Pos::new(0, 0)));
    assert!(set.insert(Pos::new(9, 1)));
    assert!(!set.insert(Pos::new(0, 0)));

    assert_eq!(set.len(), 3);
    assert_eq!(
        set.as_slice(),
        &[Pos::new(5, 5), Pos::new(0, 0), Pos::new(9, 1)]
    );
    assert_eq!(set.last(), Some(Pos::new(9, 1)));
}

#[test]
fn test_stone_set_rejects_off_board() {
    let mut set = StoneSet::new(10);
    set.insert(Pos::new(0, 1));
    // (10, 0) would pack to the same key as (0, 1)
    assert!(!set.contains(Pos::new(10, 0)));
    assert!(!set.insert(Pos::new(10, 0)));
}

#[test]
fn test_stone_set_clear() {
    let mut set = StoneSet::new(10);
    set.insert(Pos::new(1, 1));
    set.clear();
    assert!(set.is_empty());
    assert!(!set.contains(Pos::new(1, 1)));
    assert_eq!(set.last(), None);
}

#[test]
fn test_board_place_and_get() {
    let mut board = Board::default();
    assert!(board.is_board_empty());

    assert!(board.place_stone(Pos::new(2, 3), Stone::White));
    assert!(board.place_stone(Pos::new(3, 3), Stone::Black));
    assert!(!board.place_stone(Pos::new(2, 3), Stone::Black));

    assert_eq!(board.get(Pos::new(2, 3)), Some(Stone::White));
    assert_eq!(board.get(Pos::new(3, 3)), Some(Stone::Black));
    assert_eq!(board.get(Pos::new(4, 3)), None);
    assert_eq!(board.stone_count(), 2);
    assert!(!board.black.contains(Pos::new(2, 3)));
}

#[test]
fn test_board_clear_keeps_config() {
    let config = BoardConfig::new(15, 5).unwrap();
    let mut board = Board::new(config);
    board.place_stone(Pos::new(14, 14), Stone::White);
    board.clear();
    assert!(board.is_board_empty());
    assert_eq!(board.size(), 15);
}
