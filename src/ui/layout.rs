//! Square panel geometry: pixel <-> cell mapping

use egui::{Pos2, Vec2};

use crate::{BoardConfig, Pos};

/// Stone diameter as a fraction of the line spacing
pub const PIECE_RATIO: f32 = 0.75;

/// Layout of an `N` x `N` grid on a square panel.
///
/// Pixel coordinates are relative to the panel's top-left corner. Each cell
/// is a `spacing` x `spacing` square with its grid intersection at the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    side: f32,
    lines: u8,
}

impl PanelLayout {
    pub fn new(side: f32, config: BoardConfig) -> Self {
        Self {
            side: side.max(0.0),
            lines: config.size(),
        }
    }

    /// Largest square that fits in `available`
    pub fn fit(available: Vec2, config: BoardConfig) -> Self {
        Self::new(available.x.min(available.y), config)
    }

    #[inline]
    pub fn side(&self) -> f32 {
        self.side
    }

    /// Distance between neighbouring grid lines
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.side / self.lines as f32
    }

    #[inline]
    pub fn stone_radius(&self) -> f32 {
        self.spacing() * PIECE_RATIO / 2.0
    }

    /// Cell under a pixel: `floor(pixel / spacing)` per axis.
    /// Pixels outside the panel map to `None`.
    pub fn cell_at(&self, pixel: Pos2) -> Option<Pos> {
        let spacing = self.spacing();
        if !(spacing > 0.0) || !pixel.x.is_finite() || !pixel.y.is_finite() {
            return None;
        }
        if pixel.x < 0.0 || pixel.y < 0.0 {
            return None;
        }

        let col = (pixel.x / spacing).floor();
        let row = (pixel.y / spacing).floor();
        let lines = self.lines as f32;
        if col >= lines || row >= lines {
            return None;
        }
        Some(Pos::new(col as u8, row as u8))
    }

    /// Pixel centre of a cell
    #[inline]
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        let spacing = self.spacing();
        Pos2::new(
            (pos.col as f32 + 0.5) * spacing,
            (pos.row as f32 + 0.5) * spacing,
        )
    }

    /// Horizontal then vertical segment for each of the `N` grid lines
    pub fn grid_lines(&self) -> impl Iterator<Item = [Pos2; 2]> + '_ {
        let spacing = self.spacing();
        let start = spacing / 2.0;
        let end = self.side - spacing / 2.0;

        (0..self.lines).flat_map(move |i| {
            let offset = (i as f32 + 0.5) * spacing;
            [
                [Pos2::new(start, offset), Pos2::new(end, offset)],
                [Pos2::new(offset, start), Pos2::new(offset, end)],
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(side: f32) -> PanelLayout {
        PanelLayout::new(side, BoardConfig::default())
    }

    #[test]
    fn test_fit_uses_shorter_side() {
        let l = PanelLayout::fit(Vec2::new(800.0, 500.0), BoardConfig::default());
        assert_eq!(l.side(), 500.0);
        assert_eq!(l.spacing(), 50.0);
        assert_eq!(l.stone_radius(), 18.75);
    }

    #[test]
    fn test_cell_at_floors() {
        let l = layout(500.0);
        assert_eq!(l.cell_at(Pos2::new(0.0, 0.0)), Some(Pos::new(0, 0)));
        assert_eq!(l.cell_at(Pos2::new(49.9, 50.0)), Some(Pos::new(0, 1)));
        assert_eq!(l.cell_at(Pos2::new(275.0, 120.0)), Some(Pos::new(5, 2)));
        assert_eq!(l.cell_at(Pos2::new(499.9, 499.9)), Some(Pos::new(9, 9)));
    }

    #[test]
    fn test_cell_at_rejects_outside() {
        let l = layout(500.0);
        assert_eq!(l.cell_at(Pos2::new(500.0, 10.0)), None);
        assert_eq!(l.cell_at(Pos2::new(10.0, 730.0)), None);
        assert_eq!(l.cell_at(Pos2::new(-0.5, 10.0)), None);
        assert_eq!(l.cell_at(Pos2::new(f32::NAN, 10.0)), None);
    }

    #[test]
    fn test_zero_sized_panel_maps_nothing() {
        let l = layout(0.0);
        assert_eq!(l.cell_at(Pos2::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_cell_center_round_trips() {
        let l = layout(400.0);
        let pos = Pos::new(3, 8);
        assert_eq!(l.cell_center(pos), Pos2::new(140.0, 340.0));
        assert_eq!(l.cell_at(l.cell_center(pos)), Some(pos));
    }

    #[test]
    fn test_grid_lines() {
        let l = layout(100.0);
        let lines: Vec<_> = l.grid_lines().collect();
        assert_eq!(lines.len(), 20);
        assert_eq!(lines[0], [Pos2::new(5.0, 5.0), Pos2::new(95.0, 5.0)]);
        assert_eq!(lines[1], [Pos2::new(5.0, 5.0), Pos2::new(5.0, 95.0)]);
        assert_eq!(lines[19], [Pos2::new(95.0, 5.0), Pos2::new(95.0, 95.0)]);
    }
}
