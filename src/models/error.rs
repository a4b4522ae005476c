use thiserror::Error;

use crate::domain::{PieceColor, PieceKind};

/// Misuse of the game state machine. Illegal destination clicks are not
/// errors; they just clear the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no promotion is pending")]
    NoPendingPromotion,

    #[error("cannot promote to {0}")]
    InvalidPromotion(PieceKind),

    #[error("a promotion choice is pending")]
    PromotionPending,

    #[error("the game is over, {winner} won")]
    GameOver { winner: PieceColor },
}
