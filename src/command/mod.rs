mod commands;
mod history;

use crate::error::LayoutResult;

pub use commands::Command;
pub use history::CommandHistory;

/// Result type for command operations
pub type CommandResult = LayoutResult<()>;
