use egui::{Painter, Pos2, Rect};

use crate::geometry::CanvasTransform;

mod common;
mod furniture;
mod wall;

pub(crate) use common::{validate_length, validate_size};
pub use furniture::{Furniture, FurnitureId};
pub use wall::{Wall, WallSide};

/// Common trait for everything drawn on the room canvas
pub trait Element {
    /// Bounding rectangle in room coordinates (meters)
    fn rect(&self) -> Rect;

    /// Draw the element using the provided painter
    fn draw(&self, painter: &Painter, view: &CanvasTransform);

    /// Test if the element contains the given room position
    fn hit_test(&self, pos: Pos2) -> bool {
        self.rect().contains(pos)
    }
}
