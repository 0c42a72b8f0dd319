use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_ROOM_HEIGHT_M, DEFAULT_ROOM_WIDTH_M};
use crate::element::{Wall, WallSide, validate_length};
use crate::error::LayoutResult;

/// The room boundary, in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    width: f32,
    height: f32,
}

impl Default for Room {
    fn default() -> Self {
        Self {
            width: DEFAULT_ROOM_WIDTH_M,
            height: DEFAULT_ROOM_HEIGHT_M,
        }
    }
}

impl Room {
    pub fn new(width: f32, height: f32) -> LayoutResult<Self> {
        Ok(Self {
            width: validate_length(width)?,
            height: validate_length(height)?,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Leaves the room untouched when either value is rejected
    pub fn set_size(&mut self, width: f32, height: f32) -> LayoutResult<()> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    /// The floor area, anchored at the origin
    pub fn interior(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size())
    }

    pub fn walls(&self) -> [Wall; 4] {
        let interior = self.interior();
        WallSide::ALL.map(|side| Wall::around(interior, side))
    }
}
