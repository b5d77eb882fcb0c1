//! Presentation adapter between pointer input, the engine and a drawing surface

use egui::{Pos2, Vec2};
use tracing::{debug, trace};

use super::layout::PanelLayout;
use crate::{BoardConfig, GameEngine, PlaceResult, Placement, Pos, Stone};

/// 2D drawing target. Coordinates are panel-relative pixels.
pub trait Surface {
    /// Fill the square board area
    fn background(&mut self, side: f32);

    fn line(&mut self, from: Pos2, to: Pos2);

    fn stone(&mut self, center: Pos2, radius: f32, stone: Stone);

    /// Mark the latest stone
    fn last_move(&mut self, _center: Pos2, _radius: f32) {}

    /// Outline the stones of the winning run, in line order
    fn winning_run(&mut self, _centers: &[Pos2], _radius: f32) {}
}

/// Board panel: maps pixels to cells, forwards moves, renders state
pub struct GamePanel {
    engine: GameEngine,
    layout: PanelLayout,
    /// Winner not yet announced to the user
    win_notice: Option<Stone>,
}

impl GamePanel {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            engine: GameEngine::new(config),
            layout: PanelLayout::new(0.0, config),
            win_notice: None,
        }
    }

    #[inline]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    #[inline]
    pub fn layout(&self) -> PanelLayout {
        self.layout
    }

    /// Recompute the square layout for the space available. Returns the side.
    pub fn resize(&mut self, available: Vec2) -> f32 {
        let layout = PanelLayout::fit(available, self.engine.config());
        if layout != self.layout {
            trace!(side = layout.side(), spacing = layout.spacing(), "panel resized");
            self.layout = layout;
        }
        layout.side()
    }

    /// Pointer released at a panel-relative pixel.
    ///
    /// Returns `None` when the pixel is off the board, otherwise the
    /// engine's verdict for the cell under it.
    pub fn on_pointer_up(&mut self, pixel: Pos2) -> Option<PlaceResult> {
        let Some(pos) = self.layout.cell_at(pixel) else {
            trace!(x = pixel.x, y = pixel.y, "pointer up outside board");
            return None;
        };
        trace!(x = pixel.x, y = pixel.y, cell = %pos, "pointer up");

        let result = self.engine.place_pos(pos);
        if let Ok(Placement::Won(stone)) = result {
            self.win_notice = Some(stone);
        }
        Some(result)
    }

    /// Restart command from the host shell
    pub fn on_restart_command(&mut self) {
        debug!(moves = self.engine.move_count(), "restart requested");
        self.engine.reset();
        self.win_notice = None;
    }

    /// Winner to announce, handed out once per won game
    pub fn take_win_notice(&mut self) -> Option<Stone> {
        self.win_notice.take()
    }

    /// Cell a stone would go to if the pointer were released here
    pub fn preview_cell(&self, pixel: Pos2) -> Option<Pos> {
        if self.engine.is_game_over() {
            return None;
        }
        self.layout
            .cell_at(pixel)
            .filter(|&pos| self.engine.board().is_empty(pos))
    }

    /// Draw grid, stones (in placement order) and markers
    pub fn render(&self, surface: &mut impl Surface) {
        let layout = &self.layout;
        let radius = layout.stone_radius();

        surface.background(layout.side());
        for [from, to] in layout.grid_lines() {
            surface.line(from, to);
        }

        for stone in [Stone::White, Stone::Black] {
            for &pos in self.engine.stones(stone) {
                surface.stone(layout.cell_center(pos), radius, stone);
            }
        }

        if let Some(pos) = self.engine.last_move() {
            surface.last_move(layout.cell_center(pos), radius);
        }

        if let Some(run) = self.engine.winning_run() {
            let centers: Vec<Pos2> = run.iter().map(|&pos| layout.cell_center(pos)).collect();
            surface.winning_run(&centers, radius);
        }
    }
}

impl Default for GamePanel {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
