use std::fmt;

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Element;
use super::common::validate_size;
use crate::config::{LABEL_FONT_SIZE, LABEL_OFFSET_PX, OBJECT_OUTLINE_PX, UNNAMED_OBJECT};
use crate::error::LayoutResult;
use crate::geometry::CanvasTransform;

/// Stable identity of a furniture object, kept across undo/redo and restarts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FurnitureId(Uuid);

impl FurnitureId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FurnitureId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FurnitureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The first group is plenty to tell objects apart in logs
        let full = self.0.to_string();
        f.write_str(full.split('-').next().unwrap_or(&full))
    }
}

/// A named, coloured rectangle placed in the room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    id: FurnitureId,
    name: String,
    rect: Rect,
    color: Color32,
}

impl Furniture {
    /// Create an object at `min` (top-left corner, meters).
    ///
    /// Blank names fall back to "Unnamed Object".
    pub fn new(name: &str, min: Pos2, size: Vec2, color: Color32) -> LayoutResult<Self> {
        let size = validate_size(size)?;
        Ok(Self {
            id: FurnitureId::new(),
            name: normalize_name(name).unwrap_or_else(|| UNNAMED_OBJECT.to_owned()),
            rect: Rect::from_min_size(min, size),
            color,
        })
    }

    pub fn id(&self) -> FurnitureId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn size(&self) -> Vec2 {
        self.rect.size()
    }

    pub fn min(&self) -> Pos2 {
        self.rect.min
    }

    /// Text shown above the object, e.g. `Desk (2m x 1m)`
    pub fn label(&self) -> String {
        let size = self.size();
        format!("{} ({}m x {}m)", self.name, size.x, size.y)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.rect = self.rect.translate(delta);
    }

    pub fn move_to(&mut self, min: Pos2) {
        self.rect = Rect::from_min_size(min, self.rect.size());
    }

    /// Resize in place, keeping the top-left corner
    pub fn resize(&mut self, size: Vec2) -> LayoutResult<()> {
        let size = validate_size(size)?;
        self.rect = Rect::from_min_size(self.rect.min, size);
        Ok(())
    }

    /// Returns false (and keeps the old name) when `name` is blank
    pub fn rename(&mut self, name: &str) -> bool {
        match normalize_name(name) {
            Some(name) => {
                self.name = name;
                true
            }
            None => false,
        }
    }

    /// Apply the same name rules as [`Furniture::new`] to a name read from
    /// outside, e.g. an imported layout
    pub(crate) fn tidy_name(&mut self) {
        self.name = normalize_name(&self.name).unwrap_or_else(|| UNNAMED_OBJECT.to_owned());
    }

    /// Swap width and height around the top-left corner
    pub fn flip(&mut self) {
        let size = self.rect.size();
        self.rect = Rect::from_min_size(self.rect.min, Vec2::new(size.y, size.x));
    }
}

fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

impl Element for Furniture {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn draw(&self, painter: &Painter, view: &CanvasTransform) {
        let screen_rect = view.to_screen_rect(self.rect);
        painter.rect(
            screen_rect,
            0.0,
            self.color,
            Stroke::new(OBJECT_OUTLINE_PX, Color32::BLACK),
        );

        let galley = painter.layout_no_wrap(
            self.label(),
            FontId::proportional(LABEL_FONT_SIZE),
            Color32::BLACK,
        );
        let anchor = screen_rect.left_top() - Vec2::new(0.0, LABEL_OFFSET_PX);
        let label_rect = Align2::LEFT_TOP.anchor_size(anchor, galley.size());
        painter.rect_filled(label_rect.expand(2.0), 0.0, Color32::WHITE);
        painter.galley(label_rect.min, galley, Color32::BLACK);
    }
}
