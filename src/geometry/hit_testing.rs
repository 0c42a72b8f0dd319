use egui::Pos2;

use crate::element::{Element, Furniture};

/// The top-most object under `pos`. Later objects are drawn over earlier ones.
pub fn topmost_at(objects: &[Furniture], pos: Pos2) -> Option<&Furniture> {
    objects.iter().rev().find(|object| object.hit_test(pos))
}
