//! Main application for the Gomoku GUI

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::info;

use super::board_view::BoardView;
use super::panel::GamePanel;
use super::theme::*;
use crate::{BoardConfig, Stone};

/// Transient message shown over the board
struct Toast {
    text: String,
    shown_at: Instant,
}

impl Toast {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    fn remaining(&self) -> Option<Duration> {
        Duration::from_secs_f32(TOAST_SECONDS).checked_sub(self.shown_at.elapsed())
    }
}

/// Main Gomoku application
pub struct GomokuApp {
    panel: GamePanel,
    board_view: BoardView,
    toast: Option<Toast>,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self::with_config(BoardConfig::default())
    }
}

impl GomokuApp {
    /// Create the app for the given board configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: BoardConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            panel: GamePanel::new(config),
            board_view: BoardView,
            toast: None,
        }
    }

    fn restart(&mut self) {
        self.panel.on_restart_command();
        self.toast = None;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Restart (N)").clicked() {
                        self.restart();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("About").clicked() {
                        self.toast = Some(Toast::new(format!(
                            "Gomoku v{}, two players, one board",
                            env!("CARGO_PKG_VERSION")
                        )));
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = self.panel.engine().config();
                    ui.label(format!(
                        "{0}x{0} - {1} in a row",
                        config.size(),
                        config.win_length()
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);

                if let Some(winner) = self.panel.engine().winner() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let engine = self.panel.engine();

        Self::card_frame().show(ui, |ui| {
            let turn = engine.current_turn();
            let (fill, text_color) = match turn {
                Stone::White => (WHITE_STONE, BLACK_STONE),
                Stone::Black => (BLACK_STONE, TEXT_PRIMARY),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, fill);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    &turn.name()[..1],
                    egui::FontId::proportional(16.0),
                    text_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(turn.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if engine.is_game_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("to move", STATUS_ACTIVE)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", engine.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render game over card with a restart button
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: Stone) {
        let mut restart = false;

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("{} WINS!", winner.name().to_uppercase()))
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(BUTTON_BG)
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let label = egui::Label::new(
                                RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY),
                            )
                            .sense(egui::Sense::click());
                            if ui.add(label).clicked() {
                                restart = true;
                            }
                        });
                });
            });

        if restart {
            self.restart();
        }
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            // Rejections leave the board as it was
            let _ = self.board_view.show(ui, &mut self.panel);
        });

        if let Some(winner) = self.panel.take_win_notice() {
            info!(%winner, "announcing winner");
            self.toast = Some(Toast::new(format!("{} wins!", winner)));
        }
    }

    /// Render the toast, dropping it once it has expired
    fn render_toast(&mut self, ctx: &Context) {
        let Some(toast) = &self.toast else {
            return;
        };
        let Some(remaining) = toast.remaining() else {
            self.toast = None;
            return;
        };

        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::CENTER_BOTTOM, Vec2::new(0.0, -32.0))
            .show(ctx, |ui| {
                Frame::new()
                    .fill(TOAST_BG)
                    .corner_radius(CornerRadius::same(8))
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new(&toast.text).size(14.0).color(TEXT_PRIMARY));
                    });
            });

        ctx.request_repaint_after(remaining);
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // N - New game
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.restart();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.render_toast(ctx);
    }
}
