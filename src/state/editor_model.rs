use egui::{Color32, Pos2, pos2};
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_OBJECT_WIDTH_M, MAX_DIMENSION_M, SPAWN_ROW_STEP_M, SPAWN_STEP_M, SPAWN_Y_M,
};
use crate::element::{Furniture, FurnitureId};
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::hit_testing::topmost_at;
use crate::palette::Palette;
use crate::room::Room;

/// Everything the user is editing: the room, the objects in it and what is
/// currently selected.
///
/// Objects are kept in draw order; the last one is on top.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorModel {
    room: Room,
    objects: Vec<Furniture>,
    palette: Palette,
    #[serde(skip)]
    selected: Option<FurnitureId>,
}

impl EditorModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn room_mut(&mut self) -> &mut Room {
        &mut self.room
    }

    pub fn objects(&self) -> &[Furniture] {
        &self.objects
    }

    pub fn add_object(&mut self, object: Furniture) {
        self.objects.push(object);
    }

    /// Put an object back at a specific draw position (clamped to the end)
    pub fn insert_object(&mut self, index: usize, object: Furniture) {
        let index = index.min(self.objects.len());
        self.objects.insert(index, object);
    }

    /// Remove an object, returning its draw position and the object itself
    pub fn remove_object(&mut self, id: FurnitureId) -> LayoutResult<(usize, Furniture)> {
        let index = self
            .index_of(id)
            .ok_or(LayoutError::ObjectNotFound(id))?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok((index, self.objects.remove(index)))
    }

    pub fn index_of(&self, id: FurnitureId) -> Option<usize> {
        self.objects.iter().position(|object| object.id() == id)
    }

    pub fn find(&self, id: FurnitureId) -> Option<&Furniture> {
        self.objects.iter().find(|object| object.id() == id)
    }

    pub fn find_mut(&mut self, id: FurnitureId) -> Option<&mut Furniture> {
        self.objects.iter_mut().find(|object| object.id() == id)
    }

    pub(crate) fn get(&self, id: FurnitureId) -> LayoutResult<&Furniture> {
        self.find(id).ok_or(LayoutError::ObjectNotFound(id))
    }

    pub(crate) fn get_mut(&mut self, id: FurnitureId) -> LayoutResult<&mut Furniture> {
        self.find_mut(id).ok_or(LayoutError::ObjectNotFound(id))
    }

    /// The top-most object under a room position
    pub fn object_at(&self, pos: Pos2) -> Option<&Furniture> {
        topmost_at(&self.objects, pos)
    }

    /// Selecting an id that is not in the layout clears the selection
    pub fn select(&mut self, id: Option<FurnitureId>) {
        self.selected = id.filter(|id| self.find(*id).is_some());
    }

    pub fn selected(&self) -> Option<FurnitureId> {
        self.selected
    }

    pub fn selected_object(&self) -> Option<&Furniture> {
        self.selected.and_then(|id| self.find(id))
    }

    pub fn next_color(&mut self) -> Color32 {
        self.palette.next_color()
    }

    /// Where the next new object is placed: a row along the top of the room,
    /// wrapping to a new row before leaving the room.
    pub fn next_spawn_position(&self) -> Pos2 {
        let count = self.objects.len();
        // Rooms restored from storage skip validation, so clamp here as well
        let usable = (self.room.width() - DEFAULT_OBJECT_WIDTH_M).clamp(0.0, MAX_DIMENSION_M);
        let per_row = ((usable / SPAWN_STEP_M).floor() as usize).saturating_add(1);
        let column = count % per_row;
        let row = count / per_row;
        pos2(
            column as f32 * SPAWN_STEP_M,
            SPAWN_Y_M + row as f32 * SPAWN_ROW_STEP_M,
        )
    }

    /// Swap in a whole new layout. The selection does not survive.
    pub(crate) fn replace_layout(&mut self, room: Room, objects: Vec<Furniture>) {
        self.room = room;
        self.objects = objects;
        self.selected = None;
    }
}
