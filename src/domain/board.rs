//! The 8x8 grid of optional piece occupants.

use super::chess::{BOARD_SIZE, Piece, PieceColor, PieceKind, Square};

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Board cells own their pieces by value; capture and promotion are plain
/// assignment.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    /// Indexed `[rank][file]`.
    cells: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// The standard initial arrangement, White at the bottom (ranks 6 and 7).
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [PieceColor::White, PieceColor::Black] {
            for (file, kind) in BACK_ROW.iter().enumerate() {
                board.place(
                    Square::at(file as u8, color.back_rank()),
                    Piece::new(*kind, color),
                );
                board.place(
                    Square::at(file as u8, color.pawn_rank()),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.rank() as usize][square.file() as usize]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Put a piece on a square, returning whatever was there before.
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.cell_mut(square).replace(piece)
    }

    /// Remove and return the piece on a square.
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cell_mut(square).take()
    }

    /// Move the piece on `from` to `to`, returning the piece it replaced.
    /// Does nothing if `from` is empty.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.take(from)?;
        self.place(to, piece)
    }

    /// Every occupied square with its piece, rank by rank from the top.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    pub fn pieces_of(&self, color: PieceColor) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    fn cell_mut(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.cells[square.rank() as usize][square.file() as usize]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
