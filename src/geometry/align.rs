use egui::{Pos2, Rect, pos2};
use serde::{Deserialize, Serialize};

use crate::config::SIZE_EPSILON_M;
use crate::error::{LayoutError, LayoutResult};

/// Where the moving object ends up relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlignSide {
    Left,
    Right,
    Above,
    Below,
}

impl AlignSide {
    pub const ALL: [AlignSide; 4] = [
        AlignSide::Left,
        AlignSide::Right,
        AlignSide::Above,
        AlignSide::Below,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AlignSide::Left => "Left of this",
            AlignSide::Right => "Right of this",
            AlignSide::Above => "Above this",
            AlignSide::Below => "Below this",
        }
    }
}

pub fn same_size(a: Rect, b: Rect) -> bool {
    (a.width() - b.width()).abs() <= SIZE_EPSILON_M
        && (a.height() - b.height()).abs() <= SIZE_EPSILON_M
}

/// Top-left corner that puts `moving` flush against `anchor` on `side`.
///
/// Only objects of identical size can be aligned.
pub fn aligned_position(moving: Rect, anchor: Rect, side: AlignSide) -> LayoutResult<Pos2> {
    if !same_size(moving, anchor) {
        return Err(LayoutError::SizeMismatch {
            moving: moving.size(),
            anchor: anchor.size(),
        });
    }
    let size = moving.size();
    Ok(match side {
        AlignSide::Left => pos2(anchor.min.x - size.x, anchor.min.y),
        AlignSide::Right => pos2(anchor.max.x, anchor.min.y),
        AlignSide::Above => pos2(anchor.min.x, anchor.min.y - size.y),
        AlignSide::Below => pos2(anchor.min.x, anchor.max.y),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::from_min_size(pos2(x, y), vec2(w, h))
    }

    #[test]
    fn places_flush_on_each_side() {
        let anchor = rect(4.0, 3.0, 2.0, 1.0);
        let moving = rect(0.0, 0.0, 2.0, 1.0);

        let cases = [
            (AlignSide::Left, pos2(2.0, 3.0)),
            (AlignSide::Right, pos2(6.0, 3.0)),
            (AlignSide::Above, pos2(4.0, 2.0)),
            (AlignSide::Below, pos2(4.0, 4.0)),
        ];
        for (side, expected) in cases {
            assert_eq!(aligned_position(moving, anchor, side).unwrap(), expected);
        }
    }

    #[test]
    fn refuses_different_sizes() {
        let anchor = rect(4.0, 3.0, 2.0, 1.0);
        let flipped = rect(0.0, 0.0, 1.0, 2.0);
        assert!(matches!(
            aligned_position(flipped, anchor, AlignSide::Right),
            Err(LayoutError::SizeMismatch { .. })
        ));
    }
}
