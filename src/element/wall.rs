use egui::{Color32, Painter, Pos2, Rect, pos2};
use serde::{Deserialize, Serialize};

use super::Element;
use crate::config::WALL_THICKNESS_M;
use crate::geometry::CanvasTransform;

const WALL_COLOR: Color32 = Color32::from_gray(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl WallSide {
    pub const ALL: [WallSide; 4] = [
        WallSide::Left,
        WallSide::Right,
        WallSide::Top,
        WallSide::Bottom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WallSide::Left => "left wall",
            WallSide::Right => "right wall",
            WallSide::Top => "top wall",
            WallSide::Bottom => "bottom wall",
        }
    }
}

/// Fixed boundary of the room. Walls sit outside the interior and never take
/// part in object hit testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    side: WallSide,
    rect: Rect,
}

impl Wall {
    /// Build the wall on `side` of an interior rectangle
    pub fn around(interior: Rect, side: WallSide) -> Self {
        let t = WALL_THICKNESS_M;
        let rect = match side {
            WallSide::Left => Rect::from_min_max(
                pos2(interior.min.x - t, interior.min.y - t),
                pos2(interior.min.x, interior.max.y + t),
            ),
            WallSide::Right => Rect::from_min_max(
                pos2(interior.max.x, interior.min.y - t),
                pos2(interior.max.x + t, interior.max.y + t),
            ),
            WallSide::Top => Rect::from_min_max(
                pos2(interior.min.x, interior.min.y - t),
                pos2(interior.max.x, interior.min.y),
            ),
            WallSide::Bottom => Rect::from_min_max(
                pos2(interior.min.x, interior.max.y),
                pos2(interior.max.x, interior.max.y + t),
            ),
        };
        Self { side, rect }
    }

    pub fn side(&self) -> WallSide {
        self.side
    }
}

impl Element for Wall {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn draw(&self, painter: &Painter, view: &CanvasTransform) {
        painter.rect_filled(view.to_screen_rect(self.rect), 0.0, WALL_COLOR);
    }

    fn hit_test(&self, _pos: Pos2) -> bool {
        false
    }
}
