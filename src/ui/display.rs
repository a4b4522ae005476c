//! Display generation for the board and the move list.
//!
//! This module transforms game state into display-ready view models.
//! It lives in the UI layer and depends on domain + models, not vice versa.

use crate::domain::{BOARD_SIZE, Square};
use crate::models::{GameEvent, GameModel, GameStatus};
use crate::ui::view_models::{BoardSnapshot, MoveHints, MoveListEntry, SquareView};

/// Build the full board view model for a game.
pub fn board_snapshot(game: &GameModel) -> BoardSnapshot {
    let selection = game.selection();
    let squares = Square::all()
        .map(|square| SquareView {
            square,
            name: square.to_string(),
            piece: game.piece_at(square),
            is_light: square.is_light(),
            is_selected: selection == Some(square),
        })
        .collect();

    BoardSnapshot {
        squares,
        side_to_move: game.side_to_move(),
        status: game.status(),
        selection,
        hints: move_hints(game),
    }
}

/// Split the selection's legal targets into quiet moves and captures.
pub fn move_hints(game: &GameModel) -> MoveHints {
    let (captures, quiet): (Vec<Square>, Vec<Square>) = game
        .legal_targets()
        .iter()
        .copied()
        .partition(|&sq| game.piece_at(sq).is_some());
    MoveHints { quiet, captures }
}

/// Get the move list for display, one row per full move.
pub fn move_list(game: &GameModel) -> Vec<MoveListEntry> {
    game.log()
        .pairs()
        .map(|(move_num, white, black)| MoveListEntry {
            move_num,
            white: white.notation(),
            black: black.map(|b| b.notation()),
        })
        .collect()
}

/// One-line status message.
pub fn status_line(game: &GameModel) -> String {
    match game.status() {
        GameStatus::Ongoing {
            to_move,
            in_check: true,
        } => format!("{to_move} to move (check)"),
        GameStatus::Ongoing { to_move, .. } => format!("{to_move} to move"),
        GameStatus::AwaitingPromotion { square, color } => {
            format!("{color} pawn on {square} awaits promotion")
        }
        GameStatus::Checkmate { winner } => format!("checkmate, {winner} wins"),
    }
}

/// One-line description of an event for text output.
pub fn describe_event(event: &GameEvent) -> String {
    match event {
        GameEvent::Selected { square, targets } => {
            let names: Vec<String> = targets.iter().map(|t| t.to_string()).collect();
            if names.is_empty() {
                format!("selected {square}: no legal moves")
            } else {
                format!("selected {square}: {}", names.join(" "))
            }
        }
        GameEvent::SelectionCleared => "selection cleared".to_string(),
        GameEvent::PromotionRequired { square, color } => {
            format!("{color} promotes on {square}: choose q, r, b or n")
        }
        GameEvent::MoveCompleted { record } => {
            let (num, is_black) = record.move_number();
            let dots = if is_black { "..." } else { "." };
            format!("{num}{dots} {record}")
        }
        GameEvent::Check { color } => format!("{color} is in check"),
        GameEvent::Checkmate { winner } => format!("checkmate, {winner} wins"),
        GameEvent::Restarted => "new game".to_string(),
    }
}

/// Plain-text board with rank and file labels. White pieces are uppercase;
/// `*` marks a selected piece, `.`/`x` mark quiet and capture targets.
pub fn render_text(game: &GameModel) -> String {
    let hints = move_hints(game);
    let selection = game.selection();
    let mut out = String::new();

    for rank in 0..BOARD_SIZE {
        out.push_str(&format!("{} ", BOARD_SIZE - rank));
        for file in 0..BOARD_SIZE {
            let square = Square::at(file, rank);
            let symbol = match game.piece_at(square) {
                Some(piece) => piece.symbol(),
                None if hints.quiet.contains(&square) => '.',
                None if square.is_light() => ' ',
                None => '-',
            };
            let marker = if selection == Some(square) {
                '*'
            } else if hints.captures.contains(&square) {
                'x'
            } else {
                ' '
            };
            out.push(symbol);
            out.push(marker);
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    out
}
