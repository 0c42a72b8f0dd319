use egui::{Pos2, Vec2};

use super::CommandResult;
use crate::config::{DEFAULT_OBJECT_HEIGHT_M, DEFAULT_OBJECT_WIDTH_M};
use crate::element::{Element, Furniture, FurnitureId, validate_size};
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::{AlignSide, aligned_position};
use crate::state::EditorModel;

/// Edits that can be applied to an [`EditorModel`].
///
/// Every variant carries what it needs to be reversed, so the constructors
/// below snapshot the current state before anything changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Change the selection (not recorded in history)
    SelectObject(Option<FurnitureId>),

    AddObject(Furniture),

    DeleteObject {
        /// Draw position the object is restored to on undo
        index: usize,
        furniture: Furniture,
    },

    MoveObject {
        id: FurnitureId,
        delta: Vec2,
    },

    ResizeObject {
        id: FurnitureId,
        old_size: Vec2,
        new_size: Vec2,
    },

    RenameObject {
        id: FurnitureId,
        old_name: String,
        new_name: String,
    },

    /// Swap width and height
    FlipObject {
        id: FurnitureId,
    },

    AlignObject {
        id: FurnitureId,
        old_min: Pos2,
        new_min: Pos2,
    },

    ResizeRoom {
        old: Vec2,
        new: Vec2,
    },
}

impl Command {
    /// A new default-sized object at the next free spot, in the next colour
    pub fn add_object(model: &mut EditorModel, name: &str) -> LayoutResult<Self> {
        let min = model.next_spawn_position();
        let color = model.next_color();
        let size = Vec2::new(DEFAULT_OBJECT_WIDTH_M, DEFAULT_OBJECT_HEIGHT_M);
        Ok(Command::AddObject(Furniture::new(name, min, size, color)?))
    }

    pub fn delete_object(model: &EditorModel, id: FurnitureId) -> LayoutResult<Self> {
        let index = model.index_of(id).ok_or(LayoutError::ObjectNotFound(id))?;
        Ok(Command::DeleteObject {
            index,
            furniture: model.get(id)?.clone(),
        })
    }

    pub fn resize_object(model: &EditorModel, id: FurnitureId, new_size: Vec2) -> LayoutResult<Self> {
        let new_size = validate_size(new_size)?;
        Ok(Command::ResizeObject {
            id,
            old_size: model.get(id)?.size(),
            new_size,
        })
    }

    /// `None` when the new name is blank or unchanged
    pub fn rename_object(model: &EditorModel, id: FurnitureId, name: &str) -> LayoutResult<Option<Self>> {
        let old_name = model.get(id)?.name().to_owned();
        let new_name = name.trim();
        if new_name.is_empty() || new_name == old_name {
            return Ok(None);
        }
        Ok(Some(Command::RenameObject {
            id,
            old_name,
            new_name: new_name.to_owned(),
        }))
    }

    pub fn flip_object(model: &EditorModel, id: FurnitureId) -> LayoutResult<Self> {
        model.get(id)?;
        Ok(Command::FlipObject { id })
    }

    /// Move `id` so it sits flush against `anchor` on `side`
    pub fn align_object(
        model: &EditorModel,
        id: FurnitureId,
        anchor: FurnitureId,
        side: AlignSide,
    ) -> LayoutResult<Self> {
        if id == anchor {
            return Err(LayoutError::SelfAlignment);
        }
        let moving = model.get(id)?.rect();
        let anchor_rect = model.get(anchor)?.rect();
        Ok(Command::AlignObject {
            id,
            old_min: moving.min,
            new_min: aligned_position(moving, anchor_rect, side)?,
        })
    }

    pub fn resize_room(model: &EditorModel, width: f32, height: f32) -> LayoutResult<Self> {
        let new = validate_size(Vec2::new(width, height))?;
        Ok(Command::ResizeRoom {
            old: model.room().size(),
            new,
        })
    }

    pub fn execute(&self, model: &mut EditorModel) -> CommandResult {
        match self {
            Command::SelectObject(id) => {
                model.select(*id);
            }
            Command::AddObject(furniture) => {
                model.add_object(furniture.clone());
            }
            Command::DeleteObject { furniture, .. } => {
                model.remove_object(furniture.id())?;
            }
            Command::MoveObject { id, delta } => {
                model.get_mut(*id)?.translate(*delta);
            }
            Command::ResizeObject { id, new_size, .. } => {
                model.get_mut(*id)?.resize(*new_size)?;
            }
            Command::RenameObject { id, new_name, .. } => {
                model.get_mut(*id)?.rename(new_name);
            }
            Command::FlipObject { id } => {
                model.get_mut(*id)?.flip();
            }
            Command::AlignObject { id, new_min, .. } => {
                model.get_mut(*id)?.move_to(*new_min);
            }
            Command::ResizeRoom { new, .. } => {
                model.room_mut().set_size(new.x, new.y)?;
            }
        }
        Ok(())
    }

    pub fn undo(&self, model: &mut EditorModel) -> CommandResult {
        match self {
            Command::SelectObject(_) => {}
            Command::AddObject(furniture) => {
                model.remove_object(furniture.id())?;
            }
            Command::DeleteObject { index, furniture } => {
                model.insert_object(*index, furniture.clone());
            }
            Command::MoveObject { id, delta } => {
                model.get_mut(*id)?.translate(-*delta);
            }
            Command::ResizeObject { id, old_size, .. } => {
                model.get_mut(*id)?.resize(*old_size)?;
            }
            Command::RenameObject { id, old_name, .. } => {
                model.get_mut(*id)?.rename(old_name);
            }
            Command::FlipObject { id } => {
                model.get_mut(*id)?.flip();
            }
            Command::AlignObject { id, old_min, .. } => {
                model.get_mut(*id)?.move_to(*old_min);
            }
            Command::ResizeRoom { old, .. } => {
                model.room_mut().set_size(old.x, old.y)?;
            }
        }
        Ok(())
    }

    /// Returns true if the command is recorded in history
    pub fn can_undo(&self) -> bool {
        !matches!(self, Command::SelectObject(_))
    }

    /// Short description for the history list
    pub fn label(&self) -> &'static str {
        match self {
            Command::SelectObject(_) => "Select",
            Command::AddObject(_) => "Add Object",
            Command::DeleteObject { .. } => "Delete Object",
            Command::MoveObject { .. } => "Move Object",
            Command::ResizeObject { .. } => "Resize Object",
            Command::RenameObject { .. } => "Rename Object",
            Command::FlipObject { .. } => "Flip Object",
            Command::AlignObject { .. } => "Align Object",
            Command::ResizeRoom { .. } => "Resize Room",
        }
    }
}
