//! Cross-checks legal move generation against shakmaty on positions without
//! castling rights or en passant targets.

use std::collections::BTreeSet;

use chess_rules::domain::{Board, Piece, PieceColor, PieceKind, Square, all_legal_moves};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Move, Position};

const POSITIONS: &[(&str, &[PieceColor])] = &[
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        &[PieceColor::White, PieceColor::Black],
    ),
    (
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R",
        &[PieceColor::White, PieceColor::Black],
    ),
    (
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        &[PieceColor::White, PieceColor::Black],
    ),
    (
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        &[PieceColor::White, PieceColor::Black],
    ),
    (
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1",
        &[PieceColor::White],
    ),
    (
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R",
        &[PieceColor::White],
    ),
    // Checks, pins, and a king boxed in by its own pieces.
    ("4k3/8/8/8/8/8/8/4K2r", &[PieceColor::White]),
    ("4k3/4r3/8/8/8/8/4B3/4K3", &[PieceColor::White]),
    ("7k/6Q1/5K2/8/8/8/8/8", &[PieceColor::Black]),
    ("k7/8/1Q6/8/8/8/8/7K", &[PieceColor::Black]),
    ("3rk3/8/8/8/8/8/3P4/3QK3", &[PieceColor::White]),
];

/// Build a board from the placement field of a FEN string. Kings and rooks
/// are marked as moved so neither side can castle.
fn board_from_placement(placement: &str) -> Board {
    let mut board = Board::empty();
    for (rank, row) in placement.split('/').enumerate() {
        let mut file = 0u8;
        for c in row.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as u8;
                continue;
            }
            let kind = PieceKind::from_letter(c.to_ascii_lowercase()).unwrap();
            let color = if c.is_ascii_uppercase() {
                PieceColor::White
            } else {
                PieceColor::Black
            };
            let mut piece = Piece::new(kind, color);
            if matches!(kind, PieceKind::King | PieceKind::Rook) {
                piece = piece.moved();
            }
            board.place(Square::at(file, rank as u8), piece);
            file += 1;
        }
    }
    board
}

fn oracle_moves(placement: &str, color: PieceColor) -> BTreeSet<(String, String)> {
    let side = match color {
        PieceColor::White => "w",
        PieceColor::Black => "b",
    };
    let fen: Fen = format!("{placement} {side} - - 0 1").parse().unwrap();
    let position: Chess = fen.into_position(CastlingMode::Standard).unwrap();

    let mut moves = BTreeSet::new();
    for m in &position.legal_moves() {
        let (from, to) = match m {
            Move::Normal { from, to, .. } => (*from, *to),
            other => panic!("unexpected move kind {other:?} in {placement}"),
        };
        // Promotions to different kinds share one (from, to) pair.
        moves.insert((from.to_string(), to.to_string()));
    }
    moves
}

fn our_moves(board: &Board, color: PieceColor) -> BTreeSet<(String, String)> {
    all_legal_moves(board, color)
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}

#[test]
fn test_legal_moves_match_shakmaty() {
    for (placement, colors) in POSITIONS {
        let board = board_from_placement(placement);
        for &color in *colors {
            let expected = oracle_moves(placement, color);
            let actual = our_moves(&board, color);
            let missing: Vec<_> = expected.difference(&actual).collect();
            let extra: Vec<_> = actual.difference(&expected).collect();
            assert!(
                missing.is_empty() && extra.is_empty(),
                "{placement} ({color} to move): missing {missing:?}, extra {extra:?}"
            );
        }
    }
}

#[test]
fn test_placement_parser() {
    let board = board_from_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
    for (square, piece) in Board::standard().pieces() {
        let parsed = board.get(square).unwrap();
        assert_eq!((parsed.kind, parsed.color), (piece.kind, piece.color));
    }
    assert_eq!(board.pieces().count(), 32);
}
