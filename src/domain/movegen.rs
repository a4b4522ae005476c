//! Pseudo-legal move generation.
//!
//! Generation is purely geometric: it never asks whether the mover's own king
//! is left attacked (that is `rules::legal_moves`), and it never mutates the
//! board.

use super::board::Board;
use super::chess::{Piece, PieceColor, PieceKind, Square};

pub const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Which rook a castling move uses.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CastleSide {
    /// Toward file 7.
    Kingside,
    /// Toward file 0.
    Queenside,
}

impl CastleSide {
    /// Classify a king move by its file distance. Only a two-file move along
    /// the rank is a castle.
    pub fn from_king_move(from: Square, to: Square) -> Option<Self> {
        if from.rank() != to.rank() {
            return None;
        }
        match to.file() as i8 - from.file() as i8 {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    fn step(self) -> i8 {
        match self {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        }
    }

    /// File distance from the king to its castling rook.
    fn rook_distance(self) -> i8 {
        match self {
            CastleSide::Kingside => 3,
            CastleSide::Queenside => 4,
        }
    }

    /// Where the castling rook stands, relative to the king's square.
    pub fn rook_from(self, king_from: Square) -> Option<Square> {
        king_from.offset(self.step() * self.rook_distance(), 0)
    }

    /// Where the castling rook lands: the square the king passes over.
    pub fn rook_to(self, king_from: Square) -> Option<Square> {
        king_from.offset(self.step(), 0)
    }

    /// Where the king lands.
    pub fn king_to(self, king_from: Square) -> Option<Square> {
        king_from.offset(self.step() * 2, 0)
    }
}

/// Geometrically reachable destinations for the piece on `from`.
///
/// An empty `from` yields no moves; callers are expected to check first.
pub fn pseudo_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color, &mut out),
        PieceKind::Rook => slide(board, from, piece.color, &ROOK_DIRS, &mut out),
        PieceKind::Bishop => slide(board, from, piece.color, &BISHOP_DIRS, &mut out),
        PieceKind::Queen => {
            slide(board, from, piece.color, &ROOK_DIRS, &mut out);
            slide(board, from, piece.color, &BISHOP_DIRS, &mut out);
        }
        PieceKind::Knight => leap(board, from, piece.color, &KNIGHT_DELTAS, &mut out),
        PieceKind::King => {
            leap(board, from, piece.color, &KING_DELTAS, &mut out);
            castling_moves(board, from, piece, &mut out);
        }
    }
    out
}

fn is_enemy(board: &Board, square: Square, color: PieceColor) -> bool {
    matches!(board.get(square), Some(p) if p.color != color)
}

fn pawn_moves(board: &Board, from: Square, color: PieceColor, out: &mut Vec<Square>) {
    let dir = color.forward();

    if let Some(one) = from.offset(0, dir) {
        if board.is_empty(one) {
            out.push(one);
            if from.rank() == color.pawn_rank() {
                if let Some(two) = one.offset(0, dir) {
                    if board.is_empty(two) {
                        out.push(two);
                    }
                }
            }
        }
    }

    // Diagonals only capture; there is no en passant.
    for df in [-1, 1] {
        if let Some(target) = from.offset(df, dir) {
            if is_enemy(board, target, color) {
                out.push(target);
            }
        }
    }
}

fn slide(
    board: &Board,
    from: Square,
    color: PieceColor,
    dirs: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(df, dr) in dirs {
        let mut cur = from.offset(df, dr);
        while let Some(sq) = cur {
            match board.get(sq) {
                None => out.push(sq),
                Some(p) => {
                    if p.color != color {
                        out.push(sq);
                    }
                    break;
                }
            }
            cur = sq.offset(df, dr);
        }
    }
}

fn leap(
    board: &Board,
    from: Square,
    color: PieceColor,
    deltas: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(df, dr) in deltas {
        if let Some(sq) = from.offset(df, dr) {
            if board.is_empty(sq) || is_enemy(board, sq, color) {
                out.push(sq);
            }
        }
    }
}

/// Castling targets for an unmoved king: the matching rook must be an
/// unmoved rook of the same color, with every square between them empty.
/// Attacks on the king's path are not considered here.
fn castling_moves(board: &Board, from: Square, king: Piece, out: &mut Vec<Square>) {
    if king.has_moved {
        return;
    }

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        let Some(rook_sq) = side.rook_from(from) else {
            continue;
        };
        let rook_ready = matches!(
            board.get(rook_sq),
            Some(p) if p.kind == PieceKind::Rook && p.color == king.color && !p.has_moved
        );
        if !rook_ready {
            continue;
        }

        let path_clear = (1..side.rook_distance())
            .all(|i| from.offset(side.step() * i, 0).is_some_and(|sq| board.is_empty(sq)));
        if !path_clear {
            continue;
        }

        if let Some(target) = side.king_to(from) {
            out.push(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn sorted(mut v: Vec<Square>) -> Vec<Square> {
        v.sort();
        v
    }

    #[test]
    fn test_pawn_start_moves() {
        let board = Board::standard();
        let moves = sorted(pseudo_moves(&board, sq("e2")));
        assert_eq!(moves, sorted(vec![sq("e3"), sq("e4")]));

        let moves = sorted(pseudo_moves(&board, sq("d7")));
        assert_eq!(moves, sorted(vec![sq("d6"), sq("d5")]));
    }

    #[test]
    fn test_pawn_blocked_double_step() {
        let mut board = Board::standard();
        board.place(sq("e3"), Piece::black(PieceKind::Knight));
        assert!(pseudo_moves(&board, sq("e2")).is_empty());

        let mut board = Board::standard();
        board.place(sq("e4"), Piece::black(PieceKind::Knight));
        assert_eq!(pseudo_moves(&board, sq("e2")), vec![sq("e3")]);
    }

    #[test]
    fn test_pawn_captures_only_enemies() {
        let mut board = Board::empty();
        board.place(sq("d4"), Piece::white(PieceKind::Pawn));
        board.place(sq("c5"), Piece::black(PieceKind::Rook));
        board.place(sq("e5"), Piece::white(PieceKind::Rook));
        let moves = sorted(pseudo_moves(&board, sq("d4")));
        assert_eq!(moves, sorted(vec![sq("d5"), sq("c5")]));
    }

    #[test]
    fn test_pawn_off_start_rank_single_step() {
        let mut board = Board::empty();
        board.place(sq("a3"), Piece::white(PieceKind::Pawn));
        assert_eq!(pseudo_moves(&board, sq("a3")), vec![sq("a4")]);
    }

    #[test]
    fn test_rook_rays_stop_at_blockers() {
        let mut board = Board::empty();
        board.place(sq("d4"), Piece::white(PieceKind::Rook));
        board.place(sq("d6"), Piece::black(PieceKind::Pawn));
        board.place(sq("f4"), Piece::white(PieceKind::Pawn));
        let moves = pseudo_moves(&board, sq("d4"));

        assert!(moves.contains(&sq("d5")));
        assert!(moves.contains(&sq("d6")));
        assert!(!moves.contains(&sq("d7")));
        assert!(moves.contains(&sq("e4")));
        assert!(!moves.contains(&sq("f4")));
        assert!(moves.contains(&sq("a4")));
        assert!(moves.contains(&sq("d1")));
        assert_eq!(moves.len(), 2 + 1 + 3 + 3);
    }

    #[test]
    fn test_queen_in_open_center() {
        let mut board = Board::empty();
        board.place(sq("d4"), Piece::black(PieceKind::Queen));
        assert_eq!(pseudo_moves(&board, sq("d4")).len(), 27);
    }

    #[test]
    fn test_bishop_corner() {
        let mut board = Board::empty();
        board.place(sq("a1"), Piece::white(PieceKind::Bishop));
        assert_eq!(pseudo_moves(&board, sq("a1")).len(), 7);
    }

    #[test]
    fn test_knight_offsets() {
        let board = Board::standard();
        let moves = sorted(pseudo_moves(&board, sq("g1")));
        assert_eq!(moves, sorted(vec![sq("f3"), sq("h3")]));

        let mut board = Board::empty();
        board.place(sq("d4"), Piece::white(PieceKind::Knight));
        assert_eq!(pseudo_moves(&board, sq("d4")).len(), 8);
    }

    #[test]
    fn test_king_castling_targets() {
        let mut board = Board::empty();
        board.place(sq("e1"), Piece::white(PieceKind::King));
        board.place(sq("h1"), Piece::white(PieceKind::Rook));
        board.place(sq("a1"), Piece::white(PieceKind::Rook));
        let moves = pseudo_moves(&board, sq("e1"));
        assert!(moves.contains(&sq("g1")));
        assert!(moves.contains(&sq("c1")));
    }

    #[test]
    fn test_no_castling_when_blocked_or_moved() {
        let mut board = Board::empty();
        board.place(sq("e1"), Piece::white(PieceKind::King));
        board.place(sq("h1"), Piece::white(PieceKind::Rook).moved());
        board.place(sq("a1"), Piece::white(PieceKind::Rook));
        board.place(sq("b1"), Piece::white(PieceKind::Knight));
        let moves = pseudo_moves(&board, sq("e1"));
        assert!(!moves.contains(&sq("g1")));
        assert!(!moves.contains(&sq("c1")));

        let mut board = Board::empty();
        board.place(sq("e1"), Piece::white(PieceKind::King).moved());
        board.place(sq("h1"), Piece::white(PieceKind::Rook));
        assert!(!pseudo_moves(&board, sq("e1")).contains(&sq("g1")));
    }

    #[test]
    fn test_no_castling_with_enemy_rook() {
        let mut board = Board::empty();
        board.place(sq("e1"), Piece::white(PieceKind::King));
        board.place(sq("h1"), Piece::black(PieceKind::Rook));
        assert!(!pseudo_moves(&board, sq("e1")).contains(&sq("g1")));
    }

    #[test]
    fn test_castle_side_geometry() {
        let e1 = sq("e1");
        assert_eq!(CastleSide::from_king_move(e1, sq("g1")), Some(CastleSide::Kingside));
        assert_eq!(CastleSide::from_king_move(e1, sq("c1")), Some(CastleSide::Queenside));
        assert_eq!(CastleSide::from_king_move(e1, sq("f1")), None);
        assert_eq!(CastleSide::from_king_move(e1, sq("g2")), None);
        assert_eq!(CastleSide::Kingside.rook_from(e1), Some(sq("h1")));
        assert_eq!(CastleSide::Kingside.rook_to(e1), Some(sq("f1")));
        assert_eq!(CastleSide::Queenside.rook_from(e1), Some(sq("a1")));
        assert_eq!(CastleSide::Queenside.rook_to(e1), Some(sq("d1")));
    }

    #[test]
    fn test_empty_square_has_no_moves() {
        assert!(pseudo_moves(&Board::standard(), sq("e4")).is_empty());
    }

    /// Board from a FEN-style placement string, first row on rank 0.
    fn board_from_rows(placement: &str) -> Board {
        let mut board = Board::empty();
        for (rank, row) in placement.split('/').enumerate() {
            let mut file = 0u8;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as u8;
                    continue;
                }
                let kind = PieceKind::from_letter(c).unwrap();
                let color = if c.is_ascii_uppercase() {
                    PieceColor::White
                } else {
                    PieceColor::Black
                };
                board.place(Square::at(file, rank as u8), Piece::new(kind, color));
                file += 1;
            }
        }
        board
    }

    #[test]
    fn test_never_targets_friendly_pieces() {
        let placements = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
            "r3k2r/8/8/3Qq3/3Bb3/8/8/R3K2R",
        ];

        let mut castles_seen = 0;
        for placement in placements {
            let board = board_from_rows(placement);
            for (from, piece) in board.pieces() {
                let pseudo = pseudo_moves(&board, from);
                for &to in &pseudo {
                    assert!(
                        !matches!(board.get(to), Some(p) if p.color == piece.color),
                        "{placement}: {from} -> {to} lands on a friendly piece"
                    );
                    let castles = CastleSide::from_king_move(from, to).is_some();
                    if piece.kind == PieceKind::King && castles {
                        castles_seen += 1;
                    }
                }
                for to in crate::domain::rules::legal_moves(&board, from) {
                    assert!(
                        pseudo.contains(&to),
                        "{placement}: legal {from} -> {to} is not pseudo-legal"
                    );
                }
            }
        }
        assert!(castles_seen > 0);
    }
}
