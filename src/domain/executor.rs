//! Applying moves to a board.
//!
//! The executor is the single place that interprets what a `(from, to)` pair
//! means: ordinary move, capture, castling, or promotion. It trusts its
//! caller to have run the move through `rules::legal_moves` first.

use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::chess::{Piece, PieceKind, Square};
use super::movegen::CastleSide;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, JsonSchema)]
pub enum MoveKind {
    Ordinary,
    Capture,
    CastleKingside,
    CastleQueenside,
}

/// What happened to a pawn that reached its last rank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, JsonSchema)]
pub enum Promotion {
    /// Replaced by a piece of this kind.
    Promoted(PieceKind),
    /// Still a pawn; waiting for the caller to supply a kind.
    Pending,
}

/// Result of `apply`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, JsonSchema)]
pub struct MoveOutcome {
    pub from: Square,
    pub to: Square,
    /// The mover as it was before the move.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
    pub promotion: Option<Promotion>,
}

impl MoveOutcome {
    pub fn is_promotion_pending(&self) -> bool {
        self.promotion == Some(Promotion::Pending)
    }
}

/// Apply `from -> to` to the board in place.
///
/// A king moving two files castles with the rook on that side. A pawn that
/// lands on its farthest rank is replaced by `promotion_choice` when that is
/// a valid promotion kind; otherwise it stays a pawn and the outcome reports
/// `Promotion::Pending` until `promote` is called.
///
/// # Panics
/// Panics if `from` is empty.
pub fn apply(
    board: &mut Board,
    from: Square,
    to: Square,
    promotion_choice: Option<PieceKind>,
) -> MoveOutcome {
    let Some(piece) = board.get(from) else {
        panic!("apply: no piece on {from}");
    };

    if piece.kind == PieceKind::King {
        if let Some(side) = CastleSide::from_king_move(from, to) {
            return castle(board, from, to, piece, side);
        }
    }

    let captured = board.take(to);
    board.take(from);
    let landed = match piece.kind {
        PieceKind::Rook | PieceKind::King => piece.moved(),
        _ => piece,
    };
    board.place(to, landed);

    let mut promotion = None;
    if piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank() {
        promotion = Some(match promotion_choice {
            Some(kind) if kind.is_promotion_choice() => {
                board.place(to, Piece::new(kind, piece.color).moved());
                Promotion::Promoted(kind)
            }
            _ => Promotion::Pending,
        });
    }

    let outcome = MoveOutcome {
        from,
        to,
        piece,
        captured,
        kind: if captured.is_some() {
            MoveKind::Capture
        } else {
            MoveKind::Ordinary
        },
        promotion,
    };
    debug!("applied {from} -> {to}: {:?}", outcome.kind);
    outcome
}

fn castle(
    board: &mut Board,
    from: Square,
    to: Square,
    king: Piece,
    side: CastleSide,
) -> MoveOutcome {
    board.take(from);
    board.place(to, king.moved());

    if let (Some(rook_from), Some(rook_to)) = (side.rook_from(from), side.rook_to(from)) {
        if let Some(rook) = board.take(rook_from) {
            board.place(rook_to, rook.moved());
        }
    }

    debug!("castled {side:?} {from} -> {to}");
    MoveOutcome {
        from,
        to,
        piece: king,
        captured: None,
        kind: match side {
            CastleSide::Kingside => MoveKind::CastleKingside,
            CastleSide::Queenside => MoveKind::CastleQueenside,
        },
        promotion: None,
    }
}

/// Replace the pawn waiting on `square` with a piece of `kind`.
///
/// Returns the new piece, or `None` if `kind` is not a promotion kind or
/// there is no pawn on its farthest rank at `square`.
pub fn promote(board: &mut Board, square: Square, kind: PieceKind) -> Option<Piece> {
    if !kind.is_promotion_choice() {
        return None;
    }
    let pawn = board
        .get(square)
        .filter(|p| p.kind == PieceKind::Pawn && square.rank() == p.color.promotion_rank())?;
    let promoted = Piece::new(kind, pawn.color).moved();
    board.place(square, promoted);
    debug!("promoted pawn on {square} to {kind}");
    Some(promoted)
}
