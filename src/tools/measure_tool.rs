use egui::{Pos2, Ui};

use super::Tool;
use crate::command::Command;
use crate::element::{Element, FurnitureId, WallSide};
use crate::geometry::{Measurement, between_rects, format_meters, to_walls};
use crate::state::EditorModel;

/// What the measure tool is currently annotating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureTarget {
    /// One object against all four walls
    Walls(FurnitureId),
    /// Nearest-edge gap between two objects
    Objects(FurnitureId, FurnitureId),
}

/// Where a measurement ends, for the readout
#[derive(Debug, Clone, PartialEq)]
pub enum MeasureEnd {
    Wall(WallSide),
    Object(String),
}

/// First click measures an object to the walls, a click on a second object
/// measures the gap between the two. Clicking the floor clears.
#[derive(Debug, Clone, Default)]
pub struct MeasureTool {
    target: Option<MeasureTarget>,
}

impl MeasureTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<MeasureTarget> {
        self.target
    }

    pub fn set_target(&mut self, target: Option<MeasureTarget>) {
        self.target = target;
    }

    pub fn clear(&mut self) {
        self.target = None;
    }

    /// Current measurements against the live model. Empty when an object
    /// involved has been deleted.
    pub fn measurements(&self, model: &EditorModel) -> Vec<(MeasureEnd, Measurement)> {
        match self.target {
            Some(MeasureTarget::Walls(id)) => model
                .find(id)
                .map(|object| {
                    to_walls(object.rect(), model.room().interior())
                        .into_iter()
                        .map(|(side, m)| (MeasureEnd::Wall(side), m))
                        .collect()
                })
                .unwrap_or_default(),
            Some(MeasureTarget::Objects(a, b)) => match (model.find(a), model.find(b)) {
                (Some(a), Some(b)) => vec![(
                    MeasureEnd::Object(b.name().to_owned()),
                    between_rects(a.rect(), b.rect()),
                )],
                _ => Vec::new(),
            },
            None => Vec::new(),
        }
    }

    pub fn current_state_name(&self) -> &'static str {
        match self.target {
            None => "Idle",
            Some(MeasureTarget::Walls(_)) => "Walls",
            Some(MeasureTarget::Objects(..)) => "Objects",
        }
    }
}

impl Tool for MeasureTool {
    fn name(&self) -> &'static str {
        "Measure"
    }

    fn deactivate(&mut self, _model: &EditorModel) {
        self.target = None;
    }

    fn on_pointer_down(&mut self, pos: Pos2, model: &EditorModel) -> Option<Command> {
        let hit = model.object_at(pos).map(|object| object.id());
        self.target = match (self.target, hit) {
            (_, None) => None,
            (Some(MeasureTarget::Walls(first)), Some(second)) if first != second => {
                Some(MeasureTarget::Objects(first, second))
            }
            (_, Some(id)) => Some(MeasureTarget::Walls(id)),
        };
        log::debug!("Measure target: {:?}", self.target);
        None
    }

    fn on_pointer_move(&mut self, _pos: Pos2, _model: &EditorModel) -> Option<Command> {
        None
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _model: &EditorModel) -> Option<Command> {
        None
    }

    fn ui(&mut self, ui: &mut Ui, model: &EditorModel) -> Option<Command> {
        ui.label("Click an object to measure it to the walls, then another object to measure the gap.");

        let subject = match self.target {
            Some(MeasureTarget::Walls(id)) | Some(MeasureTarget::Objects(id, _)) => model.find(id),
            None => None,
        };
        if let Some(subject) = subject {
            ui.strong(subject.name());
            for (end, measurement) in self.measurements(model) {
                let to = match end {
                    MeasureEnd::Wall(side) => side.as_str().to_owned(),
                    MeasureEnd::Object(name) => name,
                };
                ui.label(format!("to {to}: {}", format_meters(measurement.distance)));
            }
        }
        if self.target.is_some() && ui.button("Clear").clicked() {
            self.clear();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Furniture;
    use egui::{Color32, pos2, vec2};

    fn two_desks() -> (EditorModel, FurnitureId, FurnitureId) {
        let mut model = EditorModel::new();
        let a = Furniture::new("A", pos2(1.0, 1.0), vec2(2.0, 1.0), Color32::RED).unwrap();
        let b = Furniture::new("B", pos2(5.0, 1.0), vec2(2.0, 1.0), Color32::BLUE).unwrap();
        let (ida, idb) = (a.id(), b.id());
        model.add_object(a);
        model.add_object(b);
        (model, ida, idb)
    }

    #[test]
    fn click_sequence_walls_then_objects() {
        let (mut model, a, b) = two_desks();
        let mut tool = MeasureTool::new();

        tool.on_pointer_down(pos2(1.5, 1.5), &model);
        assert_eq!(tool.target(), Some(MeasureTarget::Walls(a)));
        assert_eq!(tool.measurements(&model).len(), 4);

        tool.on_pointer_down(pos2(5.5, 1.5), &model);
        assert_eq!(tool.target(), Some(MeasureTarget::Objects(a, b)));
        let measured = tool.measurements(&model);
        assert_eq!(measured.len(), 1);
        assert!((measured[0].1.distance - 2.0).abs() < 1e-5);

        // Deleting one side drops the annotation
        model.remove_object(b).unwrap();
        assert!(tool.measurements(&model).is_empty());

        tool.on_pointer_down(pos2(9.0, 7.0), &model);
        assert_eq!(tool.target(), None);
    }
}
