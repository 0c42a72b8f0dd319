//! Screen-space geometry for distance annotations: a double-headed arrow with
//! a label beside its midpoint.

use egui::{Pos2, Vec2};

use crate::config::{ARROW_HEAD_HALF_WIDTH_PX, ARROW_HEAD_LENGTH_PX, MEASURE_LABEL_OFFSET_PX};

/// Triangle pointing at `tip`, coming from the direction of `from`.
///
/// Returns `None` when the two points coincide.
pub fn arrow_head(tip: Pos2, from: Pos2, length: f32, half_width: f32) -> Option<[Pos2; 3]> {
    let dir = (tip - from).normalized();
    if !dir.x.is_finite() || !dir.y.is_finite() || dir == Vec2::ZERO {
        return None;
    }
    let base = tip - dir * length;
    let perp = dir.rot90() * half_width;
    Some([tip, base + perp, base - perp])
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGlyph {
    pub shaft: [Pos2; 2],
    pub heads: [[Pos2; 3]; 2],
    /// Where the distance text goes
    pub label_pos: Pos2,
}

impl ArrowGlyph {
    /// Double-headed arrow from `start` to `end`.
    ///
    /// Heads never take more than a third of the shaft each.
    pub fn between(start: Pos2, end: Pos2) -> Option<Self> {
        let length = start.distance(end);
        let head_length = ARROW_HEAD_LENGTH_PX.min(length / 3.0);
        let half_width = ARROW_HEAD_HALF_WIDTH_PX * head_length / ARROW_HEAD_LENGTH_PX;

        let head_at_end = arrow_head(end, start, head_length, half_width)?;
        let head_at_start = arrow_head(start, end, head_length, half_width)?;

        Some(Self {
            shaft: [start, end],
            heads: [head_at_start, head_at_end],
            label_pos: label_anchor(start, end, MEASURE_LABEL_OFFSET_PX),
        })
    }
}

/// Midpoint of `start..end` pushed sideways by `offset` pixels, always towards
/// the upper side for horizontal shafts.
pub fn label_anchor(start: Pos2, end: Pos2, offset: f32) -> Pos2 {
    let mid = start + (end - start) / 2.0;
    let dir = (end - start).normalized();
    if !dir.x.is_finite() || !dir.y.is_finite() {
        return mid - Vec2::new(0.0, offset);
    }
    let mut normal = dir.rot90();
    if normal.y > 0.0 || (normal.y == 0.0 && normal.x < 0.0) {
        normal = -normal;
    }
    mid + normal * offset
}
