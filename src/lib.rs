//! Two-player Gomoku on a touch panel
//!
//! Free-style five-in-a-row for two people sharing one screen:
//! - 10x10 board by default, configurable at construction
//! - White moves first, turns alternate on every accepted stone
//! - Five or more stones in a line (horizontal, vertical or diagonal) wins
//!
//! # Architecture
//!
//! - [`board`]: Board representation with hash-backed stone sets
//! - [`rules`]: Win detection
//! - [`engine`]: Board state engine (placement, turns, game over)
//! - [`ui`]: Presentation adapter and the egui/eframe shell
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameEngine, Placement, Stone};
//!
//! let mut engine = GameEngine::default();
//! for (x, y) in [(0, 0), (9, 9), (1, 0), (9, 8), (2, 0), (9, 7), (3, 0), (9, 6)] {
//!     assert_eq!(engine.place(x, y), Ok(Placement::MoveMade));
//! }
//! assert_eq!(engine.place(4, 0), Ok(Placement::Won(Stone::White)));
//! assert!(engine.is_game_over());
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardConfig, Pos, Stone, BOARD_SIZE, WIN_LENGTH};
pub use engine::{GameEngine, PlaceResult, Placement};
pub use error::{ConfigError, PlaceError};
