//! Record of completed moves, in the order they were played.
//!
//! This is the data the move-history and clock collaborators consume. The
//! engine only appends to it; it never reads it back to decide legality.

use std::fmt;

use schemars::JsonSchema;
use serde::Serialize;

use super::chess::{Piece, PieceKind, Square};
use super::executor::{MoveKind, MoveOutcome, Promotion};

/// One completed move. Ply 1 is White's first move.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, JsonSchema)]
pub struct MoveRecord {
    pub ply: usize,
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
    /// Kind the pawn became, for promoting moves.
    pub promotion: Option<PieceKind>,
}

impl MoveRecord {
    /// Build a record from a finished outcome. A still-pending promotion is
    /// recorded as no promotion.
    pub fn from_outcome(ply: usize, outcome: &MoveOutcome) -> Self {
        let promotion = match outcome.promotion {
            Some(Promotion::Promoted(kind)) => Some(kind),
            Some(Promotion::Pending) | None => None,
        };
        Self {
            ply,
            from: outcome.from,
            to: outcome.to,
            piece: outcome.piece,
            captured: outcome.captured,
            kind: outcome.kind,
            promotion,
        }
    }

    /// Get the move number (1-based, for display)
    /// Returns (move_number, is_black_move)
    pub fn move_number(&self) -> (usize, bool) {
        move_number(self.ply)
    }

    /// Coordinate notation, e.g. `e2 -> e4`.
    pub fn notation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, " ={}", kind.letter().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

/// Get the move number for a ply. Ply 0 has no move number.
/// Returns (move_number, is_black_move)
pub fn move_number(ply: usize) -> (usize, bool) {
    if ply == 0 {
        (0, false)
    } else {
        let move_num = (ply + 1) / 2;
        let is_black = ply % 2 == 0; // ply 2, 4, 6... are black's moves
        (move_num, is_black)
    }
}

/// Append-only list of completed moves for the current game.
#[derive(Clone, Debug, Default)]
pub struct MoveLog {
    records: Vec<MoveRecord>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished move and return its record.
    pub fn push(&mut self, outcome: &MoveOutcome) -> MoveRecord {
        let record = MoveRecord::from_outcome(self.records.len() + 1, outcome);
        self.records.push(record);
        record
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Records grouped into (White, Black) pairs for a two-column move list.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, &MoveRecord, Option<&MoveRecord>)> + '_ {
        self.records
            .chunks(2)
            .enumerate()
            .map(|(i, chunk)| (i + 1, &chunk[0], chunk.get(1)))
    }
}
