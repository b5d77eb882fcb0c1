//! Game rules for two-player Gomoku
//!
//! Free-style rules: any line of `win_length` or more stones wins.
//! There are no captures and no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{find_run, find_run_at, has_run_at, has_run_in_set};
