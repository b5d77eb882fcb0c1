//! Board representation for two-player Gomoku

pub mod board;
pub mod stone_set;

#[cfg(test)]
mod tests;

use std::fmt;

use crate::error::ConfigError;

// Re-exports
pub use board::Board;
pub use stone_set::StoneSet;

/// Default board size (10x10)
pub const BOARD_SIZE: u8 = 10;
/// Default run length needed to win
pub const WIN_LENGTH: u8 = 5;
/// Largest accepted board dimension
pub const MAX_BOARD_SIZE: u8 = 32;
/// Smallest accepted board dimension and run length
pub const MIN_BOARD_SIZE: u8 = 2;

/// Stone colors. White moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    White,
    Black,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::White => Stone::Black,
            Stone::Black => Stone::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::White => "White",
            Stone::Black => "Black",
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cell on the board as `(column, row)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub col: u8,
    pub row: u8,
}

impl Pos {
    #[inline]
    pub fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Packed key `row * size + col`
    #[inline]
    pub fn to_index(self, size: u8) -> u16 {
        self.row as u16 * size as u16 + self.col as u16
    }

    #[inline]
    pub fn from_index(idx: u16, size: u8) -> Self {
        Self {
            col: (idx % size as u16) as u8,
            row: (idx / size as u16) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32, size: u8) -> bool {
        x >= 0 && x < size as i32 && y >= 0 && y < size as i32
    }

    #[inline]
    pub fn in_bounds(self, size: u8) -> bool {
        self.col < size && self.row < size
    }

    /// Step by `(dx, dy)`, staying on a `size` x `size` board
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, size: u8) -> Option<Pos> {
        let x = self.col as i32 + dx;
        let y = self.row as i32 + dy;
        Pos::is_valid(x, y, size).then(|| Pos::new(x as u8, y as u8))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// Construction-time board parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    size: u8,
    win_length: u8,
}

impl BoardConfig {
    pub fn new(size: u8, win_length: u8) -> Result<Self, ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(ConfigError::BoardSize(size));
        }
        if !(MIN_BOARD_SIZE..=size).contains(&win_length) {
            return Err(ConfigError::WinLength { win_length, size });
        }
        Ok(Self { size, win_length })
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn win_length(&self) -> u8 {
        self.win_length
    }

    #[inline]
    pub fn total_cells(&self) -> u16 {
        self.size as u16 * self.size as u16
    }

    /// Map raw coordinates to a cell, if they lie on the board
    #[inline]
    pub fn pos(&self, x: i32, y: i32) -> Option<Pos> {
        Pos::is_valid(x, y, self.size).then(|| Pos::new(x as u8, y as u8))
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            win_length: WIN_LENGTH,
        }
    }
}
