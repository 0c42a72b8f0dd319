use super::{Command, CommandResult};
use crate::config::MAX_UNDO_HISTORY;
use crate::error::LayoutError;
use crate::state::EditorModel;

/// Manages the history of executed commands for undo/redo functionality
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// Stack of commands that can be undone
    undo_stack: Vec<Command>,
    /// Stack of commands that can be redone
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a command and add it to the history if successful
    pub fn execute(&mut self, command: Command, model: &mut EditorModel) -> CommandResult {
        command.execute(model)?;
        log::info!("Executed {}", command.label());

        if command.can_undo() {
            if self.undo_stack.len() == MAX_UNDO_HISTORY {
                self.undo_stack.remove(0);
            }
            self.undo_stack.push(command);
            // A new edit invalidates whatever was undone before it
            self.redo_stack.clear();
        }
        Ok(())
    }

    /// Undo the last executed command
    pub fn undo(&mut self, model: &mut EditorModel) -> CommandResult {
        let command = self.undo_stack.pop().ok_or(LayoutError::NothingToUndo)?;
        if let Err(err) = command.undo(model) {
            self.undo_stack.push(command);
            return Err(err);
        }
        log::info!("Undid {}", command.label());
        self.redo_stack.push(command);
        Ok(())
    }

    /// Redo the last undone command
    pub fn redo(&mut self, model: &mut EditorModel) -> CommandResult {
        let command = self.redo_stack.pop().ok_or(LayoutError::NothingToRedo)?;
        if let Err(err) = command.execute(model) {
            self.redo_stack.push(command);
            return Err(err);
        }
        log::info!("Redid {}", command.label());
        self.undo_stack.push(command);
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Command] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
