use egui::{Pos2, Ui, Vec2};

use super::Tool;
use crate::command::Command;
use crate::element::FurnitureId;
use crate::state::EditorModel;

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionState {
    Idle,
    Dragging {
        id: FurnitureId,
        start_pos: Pos2,
        current_pos: Pos2,
    },
}

/// Click to select, drag to move.
///
/// The drag is only previewed while the button is held; the model changes
/// once, on release, so the whole drag is a single undo step.
#[derive(Debug, Clone)]
pub struct SelectTool {
    pub state: SelectionState,
}

impl Default for SelectTool {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectTool {
    pub fn new() -> Self {
        Self {
            state: SelectionState::Idle,
        }
    }

    /// Object being dragged and how far it has moved so far
    pub fn drag_preview(&self) -> Option<(FurnitureId, Vec2)> {
        match &self.state {
            SelectionState::Dragging {
                id,
                start_pos,
                current_pos,
            } => Some((*id, *current_pos - *start_pos)),
            SelectionState::Idle => None,
        }
    }

    pub fn current_state_name(&self) -> &'static str {
        match self.state {
            SelectionState::Idle => "Idle",
            SelectionState::Dragging { .. } => "Dragging",
        }
    }
}

impl Tool for SelectTool {
    fn name(&self) -> &'static str {
        "Select"
    }

    fn deactivate(&mut self, _model: &EditorModel) {
        self.state = SelectionState::Idle;
    }

    fn on_pointer_down(&mut self, pos: Pos2, model: &EditorModel) -> Option<Command> {
        let hit = model.object_at(pos).map(|object| object.id());
        if let Some(id) = hit {
            log::debug!("Start dragging object {id}");
            self.state = SelectionState::Dragging {
                id,
                start_pos: pos,
                current_pos: pos,
            };
        }
        Some(Command::SelectObject(hit))
    }

    fn on_pointer_move(&mut self, pos: Pos2, _model: &EditorModel) -> Option<Command> {
        if let SelectionState::Dragging { current_pos, .. } = &mut self.state {
            *current_pos = pos;
        }
        None
    }

    fn on_pointer_up(&mut self, pos: Pos2, model: &EditorModel) -> Option<Command> {
        let SelectionState::Dragging { id, start_pos, .. } =
            std::mem::replace(&mut self.state, SelectionState::Idle)
        else {
            return None;
        };

        let delta = pos - start_pos;
        if delta == Vec2::ZERO || model.find(id).is_none() {
            return None;
        }
        log::debug!("Finished dragging object {id} by {delta:?}");
        Some(Command::MoveObject { id, delta })
    }

    fn ui(&mut self, ui: &mut Ui, _model: &EditorModel) -> Option<Command> {
        ui.label("Click an object to select it, drag to move it.");
        ui.label("Right-click an object for more actions.");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, Furniture};
    use egui::{Color32, pos2, vec2};

    fn model_with_desk() -> (EditorModel, FurnitureId) {
        let mut model = EditorModel::new();
        let desk = Furniture::new("Desk", pos2(1.0, 1.0), vec2(2.0, 1.0), Color32::RED).unwrap();
        let id = desk.id();
        model.add_object(desk);
        (model, id)
    }

    #[test]
    fn drag_produces_single_move() {
        let (model, id) = model_with_desk();
        let mut tool = SelectTool::new();

        assert_eq!(
            tool.on_pointer_down(pos2(1.5, 1.5), &model),
            Some(Command::SelectObject(Some(id)))
        );
        assert!(tool.on_pointer_move(pos2(2.0, 1.5), &model).is_none());
        assert!(tool.on_pointer_move(pos2(2.5, 2.0), &model).is_none());
        assert_eq!(tool.drag_preview(), Some((id, vec2(1.0, 0.5))));

        assert_eq!(
            tool.on_pointer_up(pos2(2.5, 2.0), &model),
            Some(Command::MoveObject {
                id,
                delta: vec2(1.0, 0.5)
            })
        );
        assert!(tool.drag_preview().is_none());
        // The tool never touches the model itself
        assert_eq!(model.find(id).unwrap().rect().min, pos2(1.0, 1.0));
    }

    #[test]
    fn click_without_movement_only_selects() {
        let (model, _id) = model_with_desk();
        let mut tool = SelectTool::new();
        tool.on_pointer_down(pos2(1.5, 1.5), &model);
        assert!(tool.on_pointer_up(pos2(1.5, 1.5), &model).is_none());
    }

    #[test]
    fn click_on_floor_clears_selection() {
        let (model, _id) = model_with_desk();
        let mut tool = SelectTool::new();
        assert_eq!(
            tool.on_pointer_down(pos2(8.0, 7.0), &model),
            Some(Command::SelectObject(None))
        );
        assert_eq!(tool.state, SelectionState::Idle);
    }
}
