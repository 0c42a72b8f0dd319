mod editor_model;
mod persistence;

pub use editor_model::EditorModel;
pub use persistence::LayoutSnapshot;
