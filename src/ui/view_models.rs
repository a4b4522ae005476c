//! View models for rendering the board, move hints, and the move list.
//!
//! These types are DTOs (Data Transfer Objects) that prepare game state
//! for display in the UI. They live in the UI layer, not the domain layer.

use schemars::JsonSchema;
use serde::Serialize;

use crate::domain::{Piece, PieceColor, Square};
use crate::models::GameStatus;

/// Complete picture of the board for one frame
#[derive(Clone, Debug, PartialEq, Eq, Serialize, JsonSchema)]
pub struct BoardSnapshot {
    /// All 64 squares, rank by rank from the top-left corner
    pub squares: Vec<SquareView>,
    pub side_to_move: PieceColor,
    pub status: GameStatus,
    pub selection: Option<Square>,
    pub hints: MoveHints,
}

/// Display data for a single square
#[derive(Clone, Debug, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SquareView {
    pub square: Square,
    /// Algebraic name, e.g. `e4`
    pub name: String,
    pub piece: Option<Piece>,
    pub is_light: bool,
    /// Whether this is the selected piece's square
    pub is_selected: bool,
}

/// Legal destinations of the selection, split the way they are drawn:
/// dots on empty squares, rings on captures
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct MoveHints {
    pub quiet: Vec<Square>,
    pub captures: Vec<Square>,
}

impl MoveHints {
    pub fn is_empty(&self) -> bool {
        self.quiet.is_empty() && self.captures.is_empty()
    }
}

/// Display data for one row of the move list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, JsonSchema)]
pub struct MoveListEntry {
    pub move_num: usize,
    pub white: String,
    pub black: Option<String>,
}
