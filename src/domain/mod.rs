//! Chess rules: pieces, the board, move generation, legality, and move
//! execution. Everything here is pure data and functions over it.

pub mod board;
pub mod chess;
pub mod executor;
pub mod move_log;
pub mod movegen;
pub mod rules;

pub use board::Board;
pub use chess::{BOARD_SIZE, Piece, PieceColor, PieceKind, Square};
pub use executor::{MoveKind, MoveOutcome, Promotion, apply, promote};
pub use move_log::{MoveLog, MoveRecord};
pub use movegen::{CastleSide, pseudo_moves};
pub use rules::{all_legal_moves, find_king, is_checkmate, is_in_check, legal_moves};
