//! Board rendering and pointer wiring for the egui shell

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::panel::{GamePanel, Surface};
use super::theme::*;
use crate::{PlaceResult, Stone};

/// Board view hands egui pointer input to the panel and paints it
#[derive(Default)]
pub struct BoardView;

impl BoardView {
    /// Render the board and return the outcome of a pointer release, if any
    pub fn show(&mut self, ui: &mut egui::Ui, panel: &mut GamePanel) -> Option<PlaceResult> {
        let available = ui.available_size() - Vec2::splat(BOARD_PADDING);
        let side = panel.resize(available.max(Vec2::ZERO));

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        let origin = response.rect.min;

        let mut surface = PainterSurface {
            painter: &painter,
            origin,
        };
        panel.render(&mut surface);

        // Hover preview
        if let Some(pointer) = response.hover_pos() {
            let local = (pointer - origin).to_pos2();
            if let Some(pos) = panel.preview_cell(local) {
                let color = match panel.engine().current_turn() {
                    Stone::White => hover_white(),
                    Stone::Black => hover_black(),
                };
                let center = surface.to_screen(panel.layout().cell_center(pos));
                painter.circle_filled(center, panel.layout().stone_radius(), color);
            }
        }

        // `clicked` fires on release, so a press is a placement only once lifted
        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                return panel.on_pointer_up((pointer - origin).to_pos2());
            }
        }

        None
    }
}

/// Surface backed by an egui painter, offset to the board's screen rect
struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl PainterSurface<'_> {
    #[inline]
    fn to_screen(&self, p: Pos2) -> Pos2 {
        self.origin + p.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn background(&mut self, side: f32) {
        let rect = Rect::from_min_size(self.origin, Vec2::splat(side));
        self.painter.rect_filled(rect, CornerRadius::same(4), BOARD_BG);
    }

    fn line(&mut self, from: Pos2, to: Pos2) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(GRID_LINE_WIDTH, GRID_LINE),
        );
    }

    fn stone(&mut self, center: Pos2, radius: f32, stone: Stone) {
        let center = self.to_screen(center);
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                self.painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                self.painter.circle_filled(center, radius, BLACK_STONE);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                self.painter
                    .circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                self.painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                self.painter.circle_filled(center, radius, WHITE_STONE);

                // Inner shadow for depth
                self.painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
        }
    }

    fn last_move(&mut self, center: Pos2, radius: f32) {
        self.painter.circle_filled(
            self.to_screen(center),
            radius * LAST_MOVE_MARKER_RATIO,
            LAST_MOVE_MARKER,
        );
    }

    fn winning_run(&mut self, centers: &[Pos2], radius: f32) {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);

        for pair in centers.windows(2) {
            self.painter
                .line_segment([self.to_screen(pair[0]), self.to_screen(pair[1])], stroke);
        }

        for &center in centers {
            self.painter
                .circle_stroke(self.to_screen(center), radius + 3.0, stroke);
        }
    }
}
