mod error;
mod game;

pub use error::GameError;
pub use game::{GameEvent, GameModel, GameStatus, Phase};
