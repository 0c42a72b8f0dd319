use egui::{Pos2, Rect, Vec2};

/// Maps room coordinates (meters, origin at the interior's top-left corner)
/// to screen pixels and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    /// Screen position of the room origin
    pub origin: Pos2,
    pub pixels_per_meter: f32,
}

impl CanvasTransform {
    pub fn new(origin: Pos2, pixels_per_meter: f32) -> Self {
        Self {
            origin,
            pixels_per_meter,
        }
    }

    pub fn to_screen_pos(&self, pos: Pos2) -> Pos2 {
        self.origin + pos.to_vec2() * self.pixels_per_meter
    }

    pub fn to_screen_vec(&self, vec: Vec2) -> Vec2 {
        vec * self.pixels_per_meter
    }

    pub fn to_screen_rect(&self, rect: Rect) -> Rect {
        Rect::from_min_max(self.to_screen_pos(rect.min), self.to_screen_pos(rect.max))
    }

    pub fn to_room_pos(&self, pos: Pos2) -> Pos2 {
        ((pos - self.origin) / self.pixels_per_meter).to_pos2()
    }

    pub fn to_room_vec(&self, vec: Vec2) -> Vec2 {
        vec / self.pixels_per_meter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn screen_and_room_positions_invert() {
        let view = CanvasTransform::new(pos2(40.0, 40.0), 50.0);
        let screen = view.to_screen_pos(pos2(2.0, 1.0));
        assert_eq!(screen, pos2(140.0, 90.0));
        assert_eq!(view.to_room_pos(screen), pos2(2.0, 1.0));
    }
}
