//! Gomoku GUI
//!
//! Two players take turns placing stones on one shared board.

use clap::Parser;
use gomoku::ui::GomokuApp;
use gomoku::{BoardConfig, BOARD_SIZE, WIN_LENGTH};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Two-player five-in-a-row
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Two-player five-in-a-row on a shared board", long_about = None)]
#[command(version)]
struct Cli {
    /// Grid lines per axis
    #[arg(long, default_value_t = BOARD_SIZE)]
    size: u8,

    /// Stones in a row needed to win
    #[arg(long, default_value_t = WIN_LENGTH)]
    win_length: u8,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = BoardConfig::new(cli.size, cli.win_length)?;
    info!(size = config.size(), win_length = config.win_length(), "starting gomoku");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )?;

    Ok(())
}
