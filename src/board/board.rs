//! Board structure holding both stone sets

use super::stone_set::StoneSet;
use super::{BoardConfig, Pos, Stone};

/// Game board: one stone set per color on a fixed grid
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    /// White stones in placement order
    pub white: StoneSet,
    /// Black stones in placement order
    pub black: StoneSet,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            white: StoneSet::new(config.size()),
            black: StoneSet::new(config.size()),
        }
    }

    #[inline]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.config.size()
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        if self.white.contains(pos) {
            Some(Stone::White)
        } else if self.black.contains(pos) {
            Some(Stone::Black)
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.white.contains(pos) && !self.black.contains(pos)
    }

    /// Place a stone without any rule checks.
    /// Returns false if the cell is taken or off the board.
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) -> bool {
        if !self.is_empty(pos) {
            return false;
        }
        self.stones_mut(stone).insert(pos)
    }

    /// Get stone set for a color
    #[inline]
    pub fn stones(&self, stone: Stone) -> &StoneSet {
        match stone {
            Stone::White => &self.white,
            Stone::Black => &self.black,
        }
    }

    #[inline]
    fn stones_mut(&mut self, stone: Stone) -> &mut StoneSet {
        match stone {
            Stone::White => &mut self.white,
            Stone::Black => &mut self.black,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.white.len() + self.black.len()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }

    /// Remove every stone, keeping the configuration
    pub fn clear(&mut self) {
        self.white.clear();
        self.black.clear();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
