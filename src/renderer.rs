use egui::{Align2, Color32, FontId, Painter, Shape, Stroke, Vec2, pos2};

use crate::config::{DASH_GAP_PX, DASH_LENGTH_PX, LABEL_FONT_SIZE, OBJECT_OUTLINE_PX};
use crate::element::{Element, FurnitureId};
use crate::geometry::{ArrowGlyph, CanvasTransform, Measurement, format_meters};
use crate::state::EditorModel;

const FLOOR_COLOR: Color32 = Color32::from_rgb(245, 240, 230);
const GRID_COLOR: Color32 = Color32::from_rgb(220, 214, 200);
const SELECTED_OUTLINE: Color32 = Color32::RED;
const MEASURE_COLOR: Color32 = Color32::from_rgb(20, 20, 140);

/// Paints the room and everything in it onto the canvas
#[derive(Debug, Default)]
pub struct Renderer {
    show_grid: bool,
    /// Object being dragged and its offset from the stored position
    drag_preview: Option<(FurnitureId, Vec2)>,
    measurements: Vec<Measurement>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            show_grid: true,
            ..Default::default()
        }
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.show_grid = show;
    }

    pub fn set_drag_preview(&mut self, preview: Option<(FurnitureId, Vec2)>) {
        self.drag_preview = preview;
    }

    pub fn set_measurements(&mut self, measurements: Vec<Measurement>) {
        self.measurements = measurements;
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Renders the current frame
    pub fn render(&self, painter: &Painter, view: &CanvasTransform, model: &EditorModel) {
        let room = model.room();
        let floor = view.to_screen_rect(room.interior());
        painter.rect_filled(floor, 0.0, FLOOR_COLOR);

        if self.show_grid {
            self.draw_grid(painter, view, room.width(), room.height());
        }

        for wall in room.walls() {
            wall.draw(painter, view);
        }

        for object in model.objects() {
            match self.drag_preview {
                Some((id, offset)) if id == object.id() => {
                    let mut moved = object.clone();
                    moved.translate(offset);
                    moved.draw(painter, view);
                }
                _ => object.draw(painter, view),
            }
        }

        if let Some(selected) = model.selected_object() {
            let mut rect = selected.rect();
            if let Some((id, offset)) = self.drag_preview {
                if id == selected.id() {
                    rect = rect.translate(offset);
                }
            }
            painter.rect_stroke(
                view.to_screen_rect(rect),
                0.0,
                Stroke::new(OBJECT_OUTLINE_PX, SELECTED_OUTLINE),
            );
        }

        for measurement in &self.measurements {
            self.draw_measurement(painter, view, measurement);
        }
    }

    fn draw_grid(&self, painter: &Painter, view: &CanvasTransform, width: f32, height: f32) {
        let stroke = Stroke::new(1.0, GRID_COLOR);
        // Only whole meters inside both the floor and the visible area
        let clip = painter.clip_rect();
        let visible_min = view.to_room_pos(clip.min);
        let visible_max = view.to_room_pos(clip.max);
        for x in grid_lines(visible_min.x, visible_max.x.min(width)) {
            painter.line_segment(
                [view.to_screen_pos(pos2(x, 0.0)), view.to_screen_pos(pos2(x, height))],
                stroke,
            );
        }
        for y in grid_lines(visible_min.y, visible_max.y.min(height)) {
            painter.line_segment(
                [view.to_screen_pos(pos2(0.0, y)), view.to_screen_pos(pos2(width, y))],
                stroke,
            );
        }
    }

    fn draw_measurement(&self, painter: &Painter, view: &CanvasTransform, measurement: &Measurement) {
        let start = view.to_screen_pos(measurement.start);
        let end = view.to_screen_pos(measurement.end);
        let stroke = Stroke::new(1.5, MEASURE_COLOR);

        let Some(glyph) = ArrowGlyph::between(start, end) else {
            // Touching objects: mark the contact point only
            painter.circle_filled(start, 3.0, MEASURE_COLOR);
            return;
        };

        painter.extend(Shape::dashed_line(
            &glyph.shaft,
            stroke,
            DASH_LENGTH_PX,
            DASH_GAP_PX,
        ));
        for head in glyph.heads {
            painter.add(Shape::convex_polygon(head.to_vec(), MEASURE_COLOR, Stroke::NONE));
        }

        let galley = painter.layout_no_wrap(
            format_meters(measurement.distance),
            FontId::proportional(LABEL_FONT_SIZE),
            MEASURE_COLOR,
        );
        let label_rect = Align2::CENTER_CENTER.anchor_size(glyph.label_pos, galley.size());
        painter.rect_filled(label_rect.expand(2.0), 2.0, Color32::WHITE);
        painter.galley(label_rect.min, galley, MEASURE_COLOR);
    }
}

/// Whole meters strictly between the floor edge and `end`, starting at `start`
fn grid_lines(start: f32, end: f32) -> impl Iterator<Item = f32> {
    let first = start.max(0.0).floor() as u32 + 1;
    let last = if end.is_finite() && end > 0.0 {
        end.ceil() as u32
    } else {
        0
    };
    (first..last).map(|m| m as f32).filter(move |m| *m < end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Furniture;
    use crate::geometry::between_rects;
    use egui::vec2;

    #[test]
    fn renders_a_layout_inside_a_frame() {
        let mut model = EditorModel::new();
        let a = Furniture::new("Desk", pos2(1.0, 1.0), vec2(2.0, 1.0), Color32::RED).unwrap();
        let b = Furniture::new("Shelf", pos2(5.0, 1.0), vec2(2.0, 1.0), Color32::BLUE).unwrap();
        let a_id = a.id();
        let gap = between_rects(a.rect(), b.rect());
        model.add_object(a);
        model.add_object(b);
        model.select(Some(a_id));

        let mut renderer = Renderer::new();
        renderer.set_drag_preview(Some((a_id, vec2(0.5, 0.0))));
        renderer.set_measurements(vec![gap]);
        assert_eq!(renderer.measurements().len(), 1);

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let view = CanvasTransform::new(ui.max_rect().min, 50.0);
                renderer.render(ui.painter(), &view, &model);
            });
        });
    }

    #[test]
    fn grid_lines_stay_inside_the_visible_floor() {
        let lines: Vec<f32> = grid_lines(-2.0, 4.5).collect();
        assert_eq!(lines, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(grid_lines(0.0, 3.0).collect::<Vec<_>>(), vec![1.0, 2.0]);
        assert_eq!(grid_lines(2.3, 5.0).collect::<Vec<_>>(), vec![3.0, 4.0]);
        assert_eq!(grid_lines(0.0, -1.0).count(), 0);
    }

    #[test]
    fn huge_room_only_grids_what_is_on_screen() {
        let mut model = EditorModel::new();
        // Stored state bypasses size validation
        *model.room_mut() =
            serde_json::from_str(r#"{ "width": 2000000.0, "height": 2.0 }"#).unwrap();
        let renderer = Renderer::new();

        let ctx = egui::Context::default();
        let raw = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, vec2(800.0, 600.0))),
            ..Default::default()
        };
        let output = ctx.run(raw, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let view = CanvasTransform::new(ui.max_rect().min, 50.0);
                renderer.render(ui.painter(), &view, &model);
            });
        });
        // 800 px at 50 px/m is at most 16 vertical lines plus one horizontal
        assert!(output.shapes.len() < 100, "{} shapes", output.shapes.len());
    }

    #[test]
    fn grid_can_be_hidden() {
        let mut renderer = Renderer::new();
        assert!(renderer.show_grid);
        renderer.set_show_grid(false);
        assert!(!renderer.show_grid);
    }
}
