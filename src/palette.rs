use egui::Color32;
use serde::{Deserialize, Serialize};

/// Fill colours handed out to new objects, in order
pub const RAINBOW: [Color32; 7] = [
    Color32::RED,
    Color32::from_rgb(255, 165, 0),
    Color32::YELLOW,
    Color32::from_rgb(0, 128, 0),
    Color32::BLUE,
    Color32::from_rgb(75, 0, 130),
    Color32::from_rgb(238, 130, 238),
];

/// Cycles through [`RAINBOW`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    next: usize,
}

impl Palette {
    pub fn next_color(&mut self) -> Color32 {
        let color = RAINBOW[self.next % RAINBOW.len()];
        self.next = (self.next + 1) % RAINBOW.len();
        color
    }
}
