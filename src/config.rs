//! Tweakable values shared by the model, the canvas and the dialogs.

use serde::{Deserialize, Serialize};

// Scale
/// Default canvas scale.
pub const PIXELS_PER_METER: f32 = 50.0;
/// Range offered by the zoom slider.
pub const MIN_PIXELS_PER_METER: f32 = 20.0;
pub const MAX_PIXELS_PER_METER: f32 = 120.0;
/// Screen space kept free around the room for walls and labels.
pub const CANVAS_MARGIN_PX: f32 = 40.0;

// Room
pub const DEFAULT_ROOM_WIDTH_M: f32 = 10.0;
pub const DEFAULT_ROOM_HEIGHT_M: f32 = 8.0;
/// Walls are drawn outside the interior, so they never eat floor space.
pub const WALL_THICKNESS_M: f32 = 0.1;

// Objects
pub const DEFAULT_OBJECT_WIDTH_M: f32 = 2.0;
pub const DEFAULT_OBJECT_HEIGHT_M: f32 = 1.0;
pub const UNNAMED_OBJECT: &str = "Unnamed Object";
/// Horizontal step between freshly added objects.
pub const SPAWN_STEP_M: f32 = 1.2;
pub const SPAWN_ROW_STEP_M: f32 = 1.6;
pub const SPAWN_Y_M: f32 = 1.0;

// Labels and outlines (screen pixels)
pub const LABEL_OFFSET_PX: f32 = 20.0;
pub const LABEL_FONT_SIZE: f32 = 12.0;
pub const OBJECT_OUTLINE_PX: f32 = 2.0;

// Measurement glyphs (screen pixels)
pub const ARROW_HEAD_LENGTH_PX: f32 = 10.0;
pub const ARROW_HEAD_HALF_WIDTH_PX: f32 = 5.0;
pub const MEASURE_LABEL_OFFSET_PX: f32 = 12.0;
pub const DASH_LENGTH_PX: f32 = 6.0;
pub const DASH_GAP_PX: f32 = 4.0;

/// Largest room or object side accepted anywhere. Keeps the grid and the
/// spawn layout within a sane number of steps.
pub const MAX_DIMENSION_M: f32 = 1000.0;

/// Two lengths closer than this are considered equal.
pub const SIZE_EPSILON_M: f32 = 1e-3;

// Undo/redo
/// Maximum number of undo history entries to retain.
pub const MAX_UNDO_HISTORY: usize = 100;

/// View preferences that survive restarts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub pixels_per_meter: f32,
    pub show_grid: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            pixels_per_meter: PIXELS_PER_METER,
            show_grid: true,
        }
    }
}

/// Window options for the native app.
pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Room Planner")
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    }
}
