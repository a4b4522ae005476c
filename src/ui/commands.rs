//! Line-oriented command protocol for driving a game without a window.
//!
//! Each line is one input event. Squares are written either by name (`e2`)
//! or as `file rank` coordinates in `0..8`, rank 0 being the top row:
//!
//! ```text
//! click e2
//! click 4 4
//! move g1 f3
//! promote q
//! restart
//! ```

use thiserror::Error;

use crate::domain::{PieceKind, Square};

/// Commands understood by the headless driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A click on a board square
    Click(Square),
    /// Two clicks: pick `from`, then drop on `to`
    Move { from: Square, to: Square },
    /// Answer a pending promotion
    Promote(PieceKind),
    /// Start over from the initial position
    Restart,
    /// Print the board
    Board,
    /// Print the selection's move hints
    Hints,
    /// Print the move list
    History,
    /// Print the game status
    Status,
    /// End the session
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("invalid square `{0}`")]
    InvalidSquare(String),

    #[error("invalid promotion piece `{0}`")]
    InvalidPiece(String),

    #[error("unexpected trailing input `{0}`")]
    Trailing(String),
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.split('#').next().unwrap_or("").trim();
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "click" | "c" => Command::Click(parse_square(&mut tokens, "click")?),
            "move" | "m" => {
                let from = parse_square(&mut tokens, "move")?;
                let to = parse_square(&mut tokens, "move")?;
                Command::Move { from, to }
            }
            "promote" | "p" => {
                let token = tokens.next().ok_or(CommandError::MissingArgument {
                    command: "promote",
                    expected: "a piece (q, r, b, n)",
                })?;
                Command::Promote(parse_piece(token)?)
            }
            "restart" => Command::Restart,
            "board" => Command::Board,
            "hints" => Command::Hints,
            "history" => Command::History,
            "status" => Command::Status,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        let rest: Vec<&str> = tokens.collect();
        if !rest.is_empty() {
            return Err(CommandError::Trailing(rest.join(" ")));
        }
        Ok(Some(command))
    }

    /// Convert command back to its protocol string
    pub fn to_command_string(&self) -> String {
        match self {
            Command::Click(sq) => format!("click {sq}"),
            Command::Move { from, to } => format!("move {from} {to}"),
            Command::Promote(kind) => format!("promote {}", kind.letter()),
            Command::Restart => "restart".to_string(),
            Command::Board => "board".to_string(),
            Command::Hints => "hints".to_string(),
            Command::History => "history".to_string(),
            Command::Status => "status".to_string(),
            Command::Quit => "quit".to_string(),
        }
    }
}

/// Read a square as a name (`e2`) or as two numeric coordinates.
fn parse_square<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<Square, CommandError> {
    let missing = CommandError::MissingArgument {
        command,
        expected: "a square (e.g. `e2` or `4 6`)",
    };
    let first = tokens.next().ok_or(missing.clone())?;

    if let Some(square) = Square::from_algebraic(first) {
        return Ok(square);
    }

    let file: u8 = first
        .parse()
        .map_err(|_| CommandError::InvalidSquare(first.to_string()))?;
    let second = tokens.next().ok_or(missing)?;
    let rank: u8 = second
        .parse()
        .map_err(|_| CommandError::InvalidSquare(format!("{first} {second}")))?;
    Square::new(file, rank).ok_or_else(|| CommandError::InvalidSquare(format!("{first} {second}")))
}

fn parse_piece(token: &str) -> Result<PieceKind, CommandError> {
    let kind = match token.to_ascii_lowercase().as_str() {
        "q" | "queen" => PieceKind::Queen,
        "r" | "rook" => PieceKind::Rook,
        "b" | "bishop" => PieceKind::Bishop,
        "n" | "knight" => PieceKind::Knight,
        _ => return Err(CommandError::InvalidPiece(token.to_string())),
    };
    Ok(kind)
}
