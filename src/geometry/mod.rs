pub mod align;
pub mod arrow;
pub mod distance;
pub mod hit_testing;
mod view;

pub use align::{AlignSide, aligned_position};
pub use arrow::{ArrowGlyph, arrow_head};
pub use distance::{Measurement, between_rects, format_meters, nearest_wall, to_walls};
pub use view::CanvasTransform;
