#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod dialogs;
pub mod element;
pub mod error;
pub mod geometry;
pub mod input;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod room;
pub mod state;
pub mod tools;

pub use app::RoomPlannerApp;
pub use command::{Command, CommandHistory};
pub use element::{Element, Furniture, FurnitureId};
pub use error::{LayoutError, LayoutResult};
pub use input::{InputEvent, InputLocation};
pub use renderer::Renderer;
pub use room::Room;
pub use state::{EditorModel, LayoutSnapshot};
pub use tools::{Tool, ToolType};
