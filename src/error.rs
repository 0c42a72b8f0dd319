use egui::Vec2;
use thiserror::Error;

use crate::element::FurnitureId;

/// Errors produced while editing a layout
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    #[error("dimensions must be greater than zero (got {0})")]
    NonPositiveDimension(f32),

    #[error("dimensions must not exceed {max} m (got {value})")]
    DimensionTooLarge { value: f32, max: f32 },

    #[error("no object with id {0}")]
    ObjectNotFound(FurnitureId),

    #[error("objects must have the same size to align ({moving:?} vs {anchor:?})")]
    SizeMismatch { moving: Vec2, anchor: Vec2 },

    #[error("an object cannot be aligned to itself")]
    SelfAlignment,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,

    #[error("layout contains object id {0} more than once")]
    DuplicateObjectId(FurnitureId),

    #[error("invalid layout data: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
