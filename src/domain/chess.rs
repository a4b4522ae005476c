//! Pure chess domain types and utilities.
//! No I/O or UI dependencies - this is the domain layer.
//!
//! Coordinates follow the on-screen layout the board is drawn in: file 0 is
//! the a-file, rank 0 is the top row (Black's back rank) and rank 7 is the
//! bottom row (White's back rank).

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of files and ranks on the board.
pub const BOARD_SIZE: u8 = 8;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, JsonSchema)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may be promoted to, in the order a picker offers them.
    pub const PROMOTION_CHOICES: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn is_promotion_choice(self) -> bool {
        Self::PROMOTION_CHOICES.contains(&self)
    }

    /// Lowercase letter used by the command protocol and text rendering.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, JsonSchema)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn other(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Rank step of a pawn move: White moves toward rank 0, Black toward rank 7.
    pub fn forward(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// Rank the pawns of this color start on.
    pub fn pawn_rank(self) -> u8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }

    /// Rank the king and rooks of this color start on.
    pub fn back_rank(self) -> u8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }

    /// Farthest rank for this color's pawns.
    pub fn promotion_rank(self) -> u8 {
        self.other().back_rank()
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => f.write_str("White"),
            PieceColor::Black => f.write_str("Black"),
        }
    }
}

/// A chess piece as stored in a board cell.
///
/// `has_moved` only matters for kings and rooks (castling eligibility). It is
/// set the first time the piece is relocated and never cleared.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, JsonSchema)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
    pub has_moved: bool,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    pub const fn white(kind: PieceKind) -> Self {
        Self::new(kind, PieceColor::White)
    }

    pub const fn black(kind: PieceKind) -> Self {
        Self::new(kind, PieceColor::Black)
    }

    /// Same piece, flagged as already moved.
    pub const fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }

    /// Uppercase letter for White, lowercase for Black.
    pub fn symbol(&self) -> char {
        let c = self.kind.letter();
        match self.color {
            PieceColor::White => c.to_ascii_uppercase(),
            PieceColor::Black => c,
        }
    }
}

/// A board coordinate. Both components are always in `0..8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, JsonSchema)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Checked constructor for coordinates coming from outside the engine.
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < BOARD_SIZE && rank < BOARD_SIZE {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Constructor for coordinates known to be on the board.
    ///
    /// # Panics
    /// Panics if either component is `>= 8`.
    pub const fn at(file: u8, rank: u8) -> Self {
        assert!(file < BOARD_SIZE && rank < BOARD_SIZE, "square out of range");
        Self { file, rank }
    }

    pub const fn file(self) -> u8 {
        self.file
    }

    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Square displaced by `(df, dr)`, or `None` if that leaves the board.
    pub fn offset(self, df: i8, dr: i8) -> Option<Self> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if (0..BOARD_SIZE as i8).contains(&file) && (0..BOARD_SIZE as i8).contains(&rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, rank by rank from the top-left corner.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Square { file, rank }))
    }

    /// Parse a square name such as `e2`.
    pub fn from_algebraic(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        let file_char = chars.next()?.to_ascii_lowercase();
        let rank_char = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file_char) {
            return None;
        }
        let rank_digit = rank_char.to_digit(10)? as u8;
        if !(1..=BOARD_SIZE).contains(&rank_digit) {
            return None;
        }
        Self::new(file_char as u8 - b'a', BOARD_SIZE - rank_digit)
    }

    /// Light squares are the ones where file + rank is even (a8, h1).
    pub fn is_light(self) -> bool {
        (self.file + self.rank) % 2 == 0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, BOARD_SIZE - self.rank)
    }
}
