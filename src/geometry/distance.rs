//! Nearest-edge distances between axis-aligned rectangles.
//!
//! All inputs and outputs are in room coordinates (meters).

use egui::{Pos2, Rect, pos2};

use crate::element::WallSide;

/// A measured gap, with the two points the annotation arrow connects
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub start: Pos2,
    pub end: Pos2,
    pub distance: f32,
}

impl Measurement {
    fn new(start: Pos2, end: Pos2) -> Self {
        Self {
            start,
            end,
            distance: start.distance(end),
        }
    }

    /// Both rectangles touch or overlap
    pub fn is_contact(&self) -> bool {
        self.distance <= f32::EPSILON
    }
}

/// Midpoint of the shared span of `[a0, a1]` and `[b0, b1]`
fn overlap_center(a0: f32, a1: f32, b0: f32, b1: f32) -> f32 {
    (a0.max(b0) + a1.min(b1)) / 2.0
}

/// Edge of `a` facing `b` and edge of `b` facing `a`, along one axis
fn facing_edges(a0: f32, a1: f32, b0: f32, b1: f32) -> (f32, f32) {
    if b0 >= a1 { (a1, b0) } else { (a0, b1) }
}

/// Shortest distance between two rectangles.
///
/// When the rectangles share a span on one axis the result is a straight
/// segment across the gap, centred on the shared span. Diagonal neighbours are
/// joined corner to corner. Overlapping or touching rectangles measure zero.
pub fn between_rects(a: Rect, b: Rect) -> Measurement {
    let gap_x = (b.min.x - a.max.x).max(a.min.x - b.max.x);
    let gap_y = (b.min.y - a.max.y).max(a.min.y - b.max.y);

    match (gap_x > 0.0, gap_y > 0.0) {
        (true, false) => {
            let y = overlap_center(a.min.y, a.max.y, b.min.y, b.max.y);
            let (xa, xb) = facing_edges(a.min.x, a.max.x, b.min.x, b.max.x);
            Measurement::new(pos2(xa, y), pos2(xb, y))
        }
        (false, true) => {
            let x = overlap_center(a.min.x, a.max.x, b.min.x, b.max.x);
            let (ya, yb) = facing_edges(a.min.y, a.max.y, b.min.y, b.max.y);
            Measurement::new(pos2(x, ya), pos2(x, yb))
        }
        (true, true) => {
            let (xa, xb) = facing_edges(a.min.x, a.max.x, b.min.x, b.max.x);
            let (ya, yb) = facing_edges(a.min.y, a.max.y, b.min.y, b.max.y);
            Measurement::new(pos2(xa, ya), pos2(xb, yb))
        }
        (false, false) => {
            let contact = a.intersect(b).center();
            Measurement::new(contact, contact)
        }
    }
}

/// Distance from the inside face of every wall to `rect`, ordered left,
/// right, top, bottom. A rect that crosses a wall measures zero to it.
pub fn to_walls(rect: Rect, interior: Rect) -> [(WallSide, Measurement); 4] {
    let center = rect.center();
    WallSide::ALL.map(|side| {
        let (wall, edge) = match side {
            WallSide::Left => (pos2(interior.min.x, center.y), pos2(rect.min.x, center.y)),
            WallSide::Right => (pos2(interior.max.x, center.y), pos2(rect.max.x, center.y)),
            WallSide::Top => (pos2(center.x, interior.min.y), pos2(center.x, rect.min.y)),
            WallSide::Bottom => (pos2(center.x, interior.max.y), pos2(center.x, rect.max.y)),
        };
        let crosses = match side {
            WallSide::Left => rect.min.x < interior.min.x,
            WallSide::Right => rect.max.x > interior.max.x,
            WallSide::Top => rect.min.y < interior.min.y,
            WallSide::Bottom => rect.max.y > interior.max.y,
        };
        let measurement = if crosses {
            Measurement::new(wall, wall)
        } else {
            Measurement::new(wall, edge)
        };
        (side, measurement)
    })
}

/// The closest wall to `rect`
pub fn nearest_wall(rect: Rect, interior: Rect) -> (WallSide, Measurement) {
    let [first, rest @ ..] = to_walls(rect, interior);
    rest.into_iter()
        .fold(first, |best, candidate| {
            if candidate.1.distance < best.1.distance {
                candidate
            } else {
                best
            }
        })
}

pub fn format_meters(distance: f32) -> String {
    format!("{distance:.2} m")
}
