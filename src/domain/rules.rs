//! Legality filtering and the check / checkmate oracle.
//!
//! Probing a candidate move happens on a scratch copy of the board, so the
//! caller's board is never observed in a half-moved state.

use log::trace;

use super::board::Board;
use super::chess::{PieceColor, PieceKind, Square};
use super::movegen::pseudo_moves;

/// Square of the king of `color`, if there is one.
pub fn find_king(board: &Board, color: PieceColor) -> Option<Square> {
    board
        .pieces_of(color)
        .find(|(_, p)| p.kind == PieceKind::King)
        .map(|(sq, _)| sq)
}

/// True if any piece of `by` has `target` among its pseudo-legal moves.
pub fn is_attacked_by(board: &Board, target: Square, by: PieceColor) -> bool {
    board
        .pieces_of(by)
        .any(|(from, _)| pseudo_moves(board, from).contains(&target))
}

/// True if the king of `color` is attacked. A board without that king is
/// never in check.
pub fn is_in_check(board: &Board, color: PieceColor) -> bool {
    match find_king(board, color) {
        Some(king) => is_attacked_by(board, king, color.other()),
        None => false,
    }
}

/// The board after relocating the piece on `from` to `to`, with no other
/// side effects. Castling moves only the king here, so only the king's
/// landing square is tested by `legal_moves`.
fn probe(board: &Board, from: Square, to: Square) -> Board {
    let mut scratch = board.clone();
    scratch.relocate(from, to);
    scratch
}

/// Would moving `from -> to` leave the mover's own king attacked?
pub fn leaves_king_in_check(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };
    is_in_check(&probe(board, from, to), piece.color)
}

/// Pseudo-legal moves of the piece on `from` that do not leave its own king
/// in check.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let moves: Vec<Square> = pseudo_moves(board, from)
        .into_iter()
        .filter(|&to| {
            let rejected = leaves_king_in_check(board, from, to);
            if rejected {
                trace!("rejecting {from} -> {to}: king left in check");
            }
            !rejected
        })
        .collect();
    moves
}

/// Every legal `(from, to)` pair for `color`.
pub fn all_legal_moves(board: &Board, color: PieceColor) -> Vec<(Square, Square)> {
    board
        .pieces_of(color)
        .flat_map(|(from, _)| legal_moves(board, from).into_iter().map(move |to| (from, to)))
        .collect()
}

pub fn has_legal_move(board: &Board, color: PieceColor) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| !legal_moves(board, from).is_empty())
}

/// In check with no legal reply. A side with no legal moves that is not in
/// check is not flagged: there is no stalemate rule.
pub fn is_checkmate(board: &Board, color: PieceColor) -> bool {
    is_in_check(board, color) && !has_legal_move(board, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chess::Piece;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_start_position_not_in_check() {
        let board = Board::standard();
        assert!(!is_in_check(&board, PieceColor::White));
        assert!(!is_in_check(&board, PieceColor::Black));
        assert_eq!(all_legal_moves(&board, PieceColor::White).len(), 20);
        assert_eq!(all_legal_moves(&board, PieceColor::Black).len(), 20);
    }

    #[test]
    fn test_missing_king_is_not_in_check() {
        let mut board = Board::empty();
        board.place(sq("e8"), Piece::black(PieceKind::Queen));
        assert!(!is_in_check(&board, PieceColor::White));
        assert_eq!(find_king(&board, PieceColor::White), None);
    }

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        let mut board = Board::empty();
        board.place(sq("e1"), Piece::white(PieceKind::King).moved());
        board.place(sq("e2"), Piece::white(PieceKind::Bishop));
        board.place(sq("e8"), Piece::black(PieceKind::Rook));
        board.place(sq("a8"), Piece::black(PieceKind::King));
        assert!(!pseudo_moves(&board, sq("e2")).is_empty());
        assert!(legal_moves(&board, sq("e2")).is_empty());
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let mut board = Board::empty();
        board.place(sq("e1"), Piece::white(PieceKind::King).moved());
        board.place(sq("d8"), Piece::black(PieceKind::Rook));
        board.place(sq("h8"), Piece::black(PieceKind::King));
        let moves = legal_moves(&board, sq("e1"));
        assert!(!moves.contains(&sq("d1")));
        assert!(!moves.contains(&sq("d2")));
        assert!(moves.contains(&sq("e2")));
        assert!(moves.contains(&sq("f1")));
    }

    #[test]
    fn test_capture_of_checker_is_legal() {
        let mut board = Board::empty();
        board.place(sq("e1"), Piece::white(PieceKind::King).moved());
        board.place(sq("e2"), Piece::black(PieceKind::Queen));
        board.place(sq("h8"), Piece::black(PieceKind::King));
        assert!(is_in_check(&board, PieceColor::White));
        assert!(legal_moves(&board, sq("e1")).contains(&sq("e2")));
        assert!(!is_checkmate(&board, PieceColor::White));
    }

    #[test]
    fn test_legal_moves_leave_board_untouched() {
        let mut board = Board::standard();
        board.place(sq("e6"), Piece::white(PieceKind::Knight));
        let before = board.clone();
        for (from, _) in before.pieces() {
            let _ = legal_moves(&board, from);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_no_legal_moves_without_check_is_not_mate() {
        // Black king a8 boxed in by a queen on b6; no check.
        let mut board = Board::empty();
        board.place(sq("a8"), Piece::black(PieceKind::King).moved());
        board.place(sq("b6"), Piece::white(PieceKind::Queen));
        board.place(sq("h1"), Piece::white(PieceKind::King).moved());
        assert!(!is_in_check(&board, PieceColor::Black));
        assert!(!has_legal_move(&board, PieceColor::Black));
        assert!(!is_checkmate(&board, PieceColor::Black));
    }
}
