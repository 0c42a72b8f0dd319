use egui::Vec2;

use crate::config::MAX_DIMENSION_M;
use crate::error::{LayoutError, LayoutResult};

/// Validates a single length entered by the user or carried by a command
pub(crate) fn validate_length(value: f32) -> LayoutResult<f32> {
    if !(value.is_finite() && value > 0.0) {
        return Err(LayoutError::NonPositiveDimension(value));
    }
    if value > MAX_DIMENSION_M {
        return Err(LayoutError::DimensionTooLarge {
            value,
            max: MAX_DIMENSION_M,
        });
    }
    Ok(value)
}

/// Validates that a size has positive, finite dimensions
pub(crate) fn validate_size(size: Vec2) -> LayoutResult<Vec2> {
    validate_length(size.x)?;
    validate_length(size.y)?;
    Ok(size)
}
