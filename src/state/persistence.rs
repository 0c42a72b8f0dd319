use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::EditorModel;
use crate::element::{Furniture, validate_size};
use crate::error::{LayoutError, LayoutResult};
use crate::room::Room;

/// A portable copy of a layout, exchanged as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// Version of the application that wrote the snapshot
    pub version: String,
    pub room: Room,
    pub objects: Vec<Furniture>,
}

impl LayoutSnapshot {
    pub fn capture(model: &EditorModel) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_owned(),
            room: *model.room(),
            objects: model.objects().to_vec(),
        }
    }

    pub fn to_json(&self) -> LayoutResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a snapshot; sizes and names are checked like user
    /// input and every object id must be unique
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        let mut snapshot: Self = serde_json::from_str(json)?;
        Room::new(snapshot.room.width(), snapshot.room.height())?;
        let mut seen = HashSet::new();
        for object in &mut snapshot.objects {
            validate_size(object.size())?;
            if !seen.insert(object.id()) {
                return Err(LayoutError::DuplicateObjectId(object.id()));
            }
            object.tidy_name();
        }
        Ok(snapshot)
    }

    /// Replace the model's room and objects with this snapshot
    pub fn restore(self, model: &mut EditorModel) {
        if self.version != env!("CARGO_PKG_VERSION") {
            log::warn!(
                "Layout was written by version {}, running {}",
                self.version,
                env!("CARGO_PKG_VERSION")
            );
        }
        log::info!("Restoring layout with {} objects", self.objects.len());
        model.replace_layout(self.room, self.objects);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Color32, pos2, vec2};

    fn layout_json(objects: Vec<Furniture>) -> String {
        let snapshot = LayoutSnapshot {
            version: env!("CARGO_PKG_VERSION").to_owned(),
            room: Room::default(),
            objects,
        };
        snapshot.to_json().unwrap()
    }

    #[test]
    fn json_restores_room_and_objects() {
        let mut model = EditorModel::new();
        model.room_mut().set_size(6.0, 4.5).unwrap();
        let color = model.next_color();
        let bed = Furniture::new("Bed", pos2(1.0, 1.0), vec2(2.0, 1.6), color).unwrap();
        let bed_id = bed.id();
        model.add_object(bed);
        model.select(Some(bed_id));

        let json = LayoutSnapshot::capture(&model).to_json().unwrap();

        let mut restored = EditorModel::new();
        LayoutSnapshot::from_json(&json).unwrap().restore(&mut restored);

        assert_eq!(restored.room(), model.room());
        assert_eq!(restored.objects(), model.objects());
        assert_eq!(restored.find(bed_id).map(|o| o.name()), Some("Bed"));
        assert!(restored.selected().is_none());
    }

    #[test]
    fn negative_room_is_rejected() {
        let json = r#"{ "version": "0.1.0", "room": { "width": -3.0, "height": 4.0 }, "objects": [] }"#;
        assert!(matches!(
            LayoutSnapshot::from_json(json),
            Err(LayoutError::NonPositiveDimension(_))
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            LayoutSnapshot::from_json("{ not json"),
            Err(LayoutError::Snapshot(_))
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let desk = Furniture::new("Desk", pos2(1.0, 1.0), vec2(2.0, 1.0), Color32::RED).unwrap();
        let mut copy = desk.clone();
        copy.move_to(pos2(5.0, 5.0));
        let json = layout_json(vec![desk.clone(), copy]);

        assert!(matches!(
            LayoutSnapshot::from_json(&json),
            Err(LayoutError::DuplicateObjectId(id)) if id == desk.id()
        ));
    }

    #[test]
    fn imported_names_are_tidied() {
        let desk = Furniture::new("Desk", pos2(1.0, 1.0), vec2(2.0, 1.0), Color32::RED).unwrap();
        let json = layout_json(vec![desk]).replace("\"Desk\"", "\"   \"");

        let snapshot = LayoutSnapshot::from_json(&json).unwrap();
        assert_eq!(snapshot.objects[0].name(), "Unnamed Object");
        assert_eq!(snapshot.objects[0].label(), "Unnamed Object (2m x 1m)");

        let padded = json.replace("\"   \"", "\"  Sofa \"");
        let snapshot = LayoutSnapshot::from_json(&padded).unwrap();
        assert_eq!(snapshot.objects[0].name(), "Sofa");
    }
}
