//! Game state model - the application layer for chess game state.
//!
//! `GameModel` owns the board, whose turn it is, and the click-driven
//! selection state. A UI feeds it normalized square clicks, promotion
//! choices, and restarts, and renders whatever it reports back.

use log::{debug, info};
use schemars::JsonSchema;
use serde::Serialize;

use super::error::GameError;
use crate::domain::executor::{self, MoveOutcome, Promotion};
use crate::domain::rules::{self, is_checkmate, is_in_check};
use crate::domain::{Board, MoveLog, MoveRecord, Piece, PieceColor, PieceKind, Square};

/// Where the turn cycle currently stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the side to move to pick a piece.
    Idle,
    /// A piece is picked and its legal destinations are known.
    Selecting { from: Square, targets: Vec<Square> },
    /// A pawn reached its last rank; the move completes once a kind is chosen.
    AwaitingPromotion { outcome: MoveOutcome },
    /// Checkmate. Only a restart leaves this state.
    GameOver { winner: PieceColor },
}

/// Everything the excluded UI layer may react to after an input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    Selected { square: Square, targets: Vec<Square> },
    SelectionCleared,
    PromotionRequired { square: Square, color: PieceColor },
    MoveCompleted { record: MoveRecord },
    Check { color: PieceColor },
    Checkmate { winner: PieceColor },
    Restarted,
}

/// Summary of the game for status displays and dialogs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameStatus {
    Ongoing { to_move: PieceColor, in_check: bool },
    AwaitingPromotion { square: Square, color: PieceColor },
    Checkmate { winner: PieceColor },
}

/// The main game model containing all chess game state
#[derive(Clone, Debug)]
pub struct GameModel {
    board: Board,
    side_to_move: PieceColor,
    phase: Phase,
    log: MoveLog,
}

impl GameModel {
    /// A new game from the standard position, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), PieceColor::White)
    }

    /// A game from an arbitrary position. The board must hold exactly one
    /// king per color.
    pub fn from_board(board: Board, side_to_move: PieceColor) -> Self {
        debug_assert!(rules::find_king(&board, PieceColor::White).is_some());
        debug_assert!(rules::find_king(&board, PieceColor::Black).is_some());
        Self {
            board,
            side_to_move,
            phase: Phase::Idle,
            log: MoveLog::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.side_to_move
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Completed moves of the current game.
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    /// The selected square, if a piece is picked.
    pub fn selection(&self) -> Option<Square> {
        match &self.phase {
            Phase::Selecting { from, .. } => Some(*from),
            _ => None,
        }
    }

    /// Legal destinations of the selected piece (empty without a selection).
    pub fn legal_targets(&self) -> &[Square] {
        match &self.phase {
            Phase::Selecting { targets, .. } => targets,
            _ => &[],
        }
    }

    pub fn is_in_check(&self, color: PieceColor) -> bool {
        is_in_check(&self.board, color)
    }

    pub fn is_checkmate(&self, color: PieceColor) -> bool {
        is_checkmate(&self.board, color)
    }

    pub fn winner(&self) -> Option<PieceColor> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    pub fn status(&self) -> GameStatus {
        match &self.phase {
            Phase::GameOver { winner } => GameStatus::Checkmate { winner: *winner },
            Phase::AwaitingPromotion { outcome } => GameStatus::AwaitingPromotion {
                square: outcome.to,
                color: outcome.piece.color,
            },
            Phase::Idle | Phase::Selecting { .. } => GameStatus::Ongoing {
                to_move: self.side_to_move,
                in_check: self.is_in_check(self.side_to_move),
            },
        }
    }

    /// Handle a click on a board square.
    ///
    /// With nothing selected, a piece of the side to move becomes the
    /// selection. With a selection, a legal destination plays the move and
    /// anything else just drops the selection. Clicks are ignored while a
    /// promotion is pending or the game is over.
    pub fn click(&mut self, square: Square) -> Vec<GameEvent> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => self.select(square),
            Phase::Selecting { from, targets } => {
                if targets.contains(&square) {
                    self.execute(from, square)
                } else {
                    debug!("{square} is not a legal target for {from}, clearing selection");
                    vec![GameEvent::SelectionCleared]
                }
            }
            phase @ (Phase::AwaitingPromotion { .. } | Phase::GameOver { .. }) => {
                debug!("ignoring click on {square} in phase {phase:?}");
                self.phase = phase;
                Vec::new()
            }
        }
    }

    /// Drop the current selection, if any.
    pub fn clear_selection(&mut self) -> Vec<GameEvent> {
        if let Phase::Selecting { .. } = self.phase {
            self.phase = Phase::Idle;
            vec![GameEvent::SelectionCleared]
        } else {
            Vec::new()
        }
    }

    /// Pick `from` and drop it on `to` in one step, dropping any earlier
    /// selection. Returns the events of both clicks; an empty list means
    /// there was no piece of the side to move on `from`.
    pub fn play_move(&mut self, from: Square, to: Square) -> Result<Vec<GameEvent>, GameError> {
        match self.phase {
            Phase::GameOver { winner } => return Err(GameError::GameOver { winner }),
            Phase::AwaitingPromotion { .. } => return Err(GameError::PromotionPending),
            Phase::Idle | Phase::Selecting { .. } => {}
        }

        let mut events = self.clear_selection();
        let picked = self.select(from);
        if picked.is_empty() {
            return Ok(events);
        }
        events.extend(picked);
        events.extend(self.click(to));
        Ok(events)
    }

    /// Try to make a move from one square to another. Returns true if it was
    /// played (including a move now waiting for its promotion choice).
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<bool, GameError> {
        let events = self.play_move(from, to)?;
        Ok(events.iter().any(|e| {
            matches!(
                e,
                GameEvent::MoveCompleted { .. } | GameEvent::PromotionRequired { .. }
            )
        }))
    }

    /// Supply the piece kind for a pending promotion and finish the move.
    pub fn promote(&mut self, kind: PieceKind) -> Result<Vec<GameEvent>, GameError> {
        let mut outcome = match &self.phase {
            Phase::AwaitingPromotion { outcome } => *outcome,
            Phase::GameOver { winner } => return Err(GameError::GameOver { winner: *winner }),
            Phase::Idle | Phase::Selecting { .. } => return Err(GameError::NoPendingPromotion),
        };

        executor::promote(&mut self.board, outcome.to, kind)
            .ok_or(GameError::InvalidPromotion(kind))?;
        outcome.promotion = Some(Promotion::Promoted(kind));
        Ok(self.finish_move(outcome))
    }

    /// Reset to the standard position with White to move.
    pub fn restart(&mut self) -> Vec<GameEvent> {
        info!("restarting game");
        self.board = Board::standard();
        self.side_to_move = PieceColor::White;
        self.phase = Phase::Idle;
        self.log.clear();
        vec![GameEvent::Restarted]
    }

    fn select(&mut self, square: Square) -> Vec<GameEvent> {
        match self.board.get(square) {
            Some(piece) if piece.color == self.side_to_move => {
                let targets = rules::legal_moves(&self.board, square);
                debug!("selected {square} with {} legal targets", targets.len());
                self.phase = Phase::Selecting {
                    from: square,
                    targets: targets.clone(),
                };
                vec![GameEvent::Selected { square, targets }]
            }
            _ => Vec::new(),
        }
    }

    fn execute(&mut self, from: Square, to: Square) -> Vec<GameEvent> {
        let outcome = executor::apply(&mut self.board, from, to, None);
        if outcome.is_promotion_pending() {
            debug!("{from} -> {to} waits for a promotion choice");
            let color = outcome.piece.color;
            self.phase = Phase::AwaitingPromotion { outcome };
            return vec![GameEvent::PromotionRequired { square: to, color }];
        }
        self.finish_move(outcome)
    }

    /// Log the move, then look for checkmate (White first, then Black) before
    /// handing the turn over. A mating move keeps the turn with the winner.
    fn finish_move(&mut self, outcome: MoveOutcome) -> Vec<GameEvent> {
        let record = self.log.push(&outcome);
        debug!("move {} completed: {record}", record.ply);
        let mut events = vec![GameEvent::MoveCompleted { record }];

        self.phase = Phase::Idle;
        for color in [PieceColor::White, PieceColor::Black] {
            if is_checkmate(&self.board, color) {
                let winner = color.other();
                info!("checkmate, {winner} wins");
                self.phase = Phase::GameOver { winner };
                events.push(GameEvent::Checkmate { winner });
                return events;
            }
        }

        self.side_to_move = outcome.piece.color.other();
        if is_in_check(&self.board, self.side_to_move) {
            events.push(GameEvent::Check {
                color: self.side_to_move,
            });
        }
        events
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new()
    }
}
