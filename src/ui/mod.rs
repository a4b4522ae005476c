pub mod commands;
pub mod display;
pub mod view_models;

pub use commands::{Command, CommandError};
pub use view_models::{BoardSnapshot, MoveHints, MoveListEntry, SquareView};
