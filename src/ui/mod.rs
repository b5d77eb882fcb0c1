//! GUI module for the Gomoku game
//!
//! [`GamePanel`] is the toolkit-independent adapter: it maps pointer pixels
//! to cells, drives the engine, and renders through a [`Surface`]. The rest
//! of the module is the egui/eframe shell around it.

mod app;
mod board_view;
mod layout;
mod panel;
mod theme;

pub use app::GomokuApp;
pub use layout::{PanelLayout, PIECE_RATIO};
pub use panel::{GamePanel, Surface};
