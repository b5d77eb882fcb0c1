use thiserror::Error;

use crate::board::{Pos, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Why a placement was rejected. The board is left unchanged in every case.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlaceError {
    #[error("invalid coordinate ({x}, {y})")]
    InvalidCoordinate { x: i32, y: i32 },
    #[error("cell occupied")]
    CellOccupied(Pos),
    #[error("game already over")]
    GameAlreadyOver,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size {0} is outside {min}..={max}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    BoardSize(u8),
    #[error("win length {win_length} must be between {min} and the board size {size}", min = MIN_BOARD_SIZE)]
    WinLength { win_length: u8, size: u8 },
}
