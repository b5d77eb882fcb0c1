//! Board state engine for two-player Gomoku
//!
//! Owns the board, whose turn it is, and whether the game has ended.
//! The engine performs no I/O. Every mutation goes through [`GameEngine::place`]
//! or [`GameEngine::reset`].
//!
//! # Example
//!
//! ```
//! use gomoku::{GameEngine, Placement, PlaceError, Stone};
//!
//! let mut engine = GameEngine::default();
//! assert_eq!(engine.place(5, 5), Ok(Placement::MoveMade));
//! assert_eq!(engine.current_turn(), Stone::Black);
//!
//! // Occupied cells are rejected and the turn does not change
//! assert!(matches!(engine.place(5, 5), Err(PlaceError::CellOccupied(_))));
//! assert_eq!(engine.current_turn(), Stone::Black);
//! ```

use std::fmt;

use tracing::{debug, info};

use crate::board::{Board, BoardConfig, Pos, Stone};
use crate::error::PlaceError;
use crate::rules::{find_run, has_run_at};

/// Outcome of an accepted placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Stone placed, turn passes to the other color
    MoveMade,
    /// Stone placed and it completed a winning run
    Won(Stone),
}

impl Placement {
    #[inline]
    pub fn is_win(self) -> bool {
        matches!(self, Placement::Won(_))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::MoveMade => f.write_str("move made"),
            Placement::Won(stone) => write!(f, "game won by {}", stone),
        }
    }
}

/// Result of [`GameEngine::place`]. Rejections never touch the board.
pub type PlaceResult = Result<Placement, PlaceError>;

/// Two-player game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current_turn: Stone,
    game_over: bool,
    winner: Option<Stone>,
}

impl GameEngine {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            board: Board::new(config),
            current_turn: Stone::White,
            game_over: false,
            winner: None,
        }
    }

    #[inline]
    pub fn config(&self) -> BoardConfig {
        self.board.config()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Place a stone for the side to move at column `x`, row `y`.
    ///
    /// Checked in order: game over, coordinate range, occupancy.
    /// On success the turn flips unless the move wins, in which case the
    /// game is frozen with the mover as winner.
    pub fn place(&mut self, x: i32, y: i32) -> PlaceResult {
        let result = self.try_place(x, y);
        match result {
            Ok(Placement::MoveMade) => {
                debug!(x, y, next = %self.current_turn, "move made");
            }
            Ok(Placement::Won(stone)) => {
                info!(x, y, winner = %stone, moves = self.move_count(), "game won");
            }
            Err(err) => {
                debug!(x, y, turn = %self.current_turn, %err, "placement rejected");
            }
        }
        result
    }

    /// Same as [`place`](Self::place) for an already-typed cell
    #[inline]
    pub fn place_pos(&mut self, pos: Pos) -> PlaceResult {
        self.place(pos.col as i32, pos.row as i32)
    }

    fn try_place(&mut self, x: i32, y: i32) -> PlaceResult {
        if self.game_over {
            return Err(PlaceError::GameAlreadyOver);
        }

        let pos = self
            .config()
            .pos(x, y)
            .ok_or(PlaceError::InvalidCoordinate { x, y })?;

        let color = self.current_turn;
        if !self.board.place_stone(pos, color) {
            return Err(PlaceError::CellOccupied(pos));
        }

        if has_run_at(self.board.stones(color), pos, self.config().win_length()) {
            self.game_over = true;
            self.winner = Some(color);
            return Ok(Placement::Won(color));
        }

        self.current_turn = color.opponent();
        Ok(Placement::MoveMade)
    }

    /// Clear the board and hand the first move back to White
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_turn = Stone::White;
        self.game_over = false;
        self.winner = None;
        info!("game reset");
    }

    /// White stones in placement order
    #[inline]
    pub fn white_stones(&self) -> &[Pos] {
        self.board.white.as_slice()
    }

    /// Black stones in placement order
    #[inline]
    pub fn black_stones(&self) -> &[Pos] {
        self.board.black.as_slice()
    }

    #[inline]
    pub fn stones(&self, stone: Stone) -> &[Pos] {
        self.board.stones(stone).as_slice()
    }

    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Winning color, only set once the game is over
    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.board.stone_count()
    }

    /// Cell of the most recent accepted placement
    pub fn last_move(&self) -> Option<Pos> {
        // The mover keeps the turn after a winning move
        let mover = match self.winner {
            Some(stone) => stone,
            None => self.current_turn.opponent(),
        };
        self.board.stones(mover).last()
    }

    /// Stones of the winning run, if the game has been won
    pub fn winning_run(&self) -> Option<Vec<Pos>> {
        let winner = self.winner?;
        find_run(self.board.stones(winner), self.config().win_length())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
