use egui::{Pos2, Ui};

use crate::command::Command;
use crate::state::EditorModel;

mod measure_tool;
mod select_tool;

pub use measure_tool::{MeasureEnd, MeasureTarget, MeasureTool};
pub use select_tool::{SelectTool, SelectionState};

/// Tool trait defines the interface for all canvas tools.
///
/// Positions are in room coordinates (meters).
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Called when the tool is selected (activated).
    fn activate(&mut self, _model: &EditorModel) {}

    /// Called when the tool is deselected; drop any in-progress interaction.
    fn deactivate(&mut self, _model: &EditorModel);

    /// Handle pointer press on the canvas.
    /// Return a Command to **begin** an action if applicable, or None.
    fn on_pointer_down(&mut self, pos: Pos2, model: &EditorModel) -> Option<Command>;

    /// Handle pointer movement while the primary button is held.
    fn on_pointer_move(&mut self, pos: Pos2, model: &EditorModel) -> Option<Command>;

    /// Handle pointer release.
    /// Return a Command to **finalize** an action if applicable.
    fn on_pointer_up(&mut self, pos: Pos2, model: &EditorModel) -> Option<Command>;

    /// Tool-specific hints or controls in the side panel
    fn ui(&mut self, ui: &mut Ui, model: &EditorModel) -> Option<Command>;
}

/// Enum representing all available tool types
#[derive(Debug, Clone)]
pub enum ToolType {
    Select(SelectTool),
    Measure(MeasureTool),
}

impl Default for ToolType {
    fn default() -> Self {
        Self::Select(SelectTool::new())
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Select(tool) => tool.name(),
            Self::Measure(tool) => tool.name(),
        }
    }

    fn activate(&mut self, model: &EditorModel) {
        match self {
            Self::Select(tool) => tool.activate(model),
            Self::Measure(tool) => tool.activate(model),
        }
    }

    fn deactivate(&mut self, model: &EditorModel) {
        match self {
            Self::Select(tool) => tool.deactivate(model),
            Self::Measure(tool) => tool.deactivate(model),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, model: &EditorModel) -> Option<Command> {
        match self {
            Self::Select(tool) => tool.on_pointer_down(pos, model),
            Self::Measure(tool) => tool.on_pointer_down(pos, model),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, model: &EditorModel) -> Option<Command> {
        match self {
            Self::Select(tool) => tool.on_pointer_move(pos, model),
            Self::Measure(tool) => tool.on_pointer_move(pos, model),
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2, model: &EditorModel) -> Option<Command> {
        match self {
            Self::Select(tool) => tool.on_pointer_up(pos, model),
            Self::Measure(tool) => tool.on_pointer_up(pos, model),
        }
    }

    fn ui(&mut self, ui: &mut Ui, model: &EditorModel) -> Option<Command> {
        match self {
            Self::Select(tool) => tool.ui(ui, model),
            Self::Measure(tool) => tool.ui(ui, model),
        }
    }
}

/// Names offered in the tools panel, in display order
pub const TOOL_NAMES: [&str; 2] = ["Select", "Measure"];

/// Create a tool by its display name
pub fn new_tool(tool_type: &str) -> Option<ToolType> {
    match tool_type {
        "Select" => Some(ToolType::Select(SelectTool::new())),
        "Measure" => Some(ToolType::Measure(MeasureTool::new())),
        _ => None,
    }
}

impl ToolType {
    pub fn as_select_tool(&self) -> Option<&SelectTool> {
        match self {
            Self::Select(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn as_measure_tool(&self) -> Option<&MeasureTool> {
        match self {
            Self::Measure(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn as_measure_tool_mut(&mut self) -> Option<&mut MeasureTool> {
        match self {
            Self::Measure(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn current_state_name(&self) -> &'static str {
        match self {
            Self::Select(tool) => tool.current_state_name(),
            Self::Measure(tool) => tool.current_state_name(),
        }
    }
}
