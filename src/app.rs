//! Headless session: reads commands line by line and drives a `GameModel`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::json;

use crate::domain::Square;
use crate::models::{GameEvent, GameModel};
use crate::ui::display::{
    board_snapshot, describe_event, move_hints, move_list, render_text, status_line,
};
use crate::ui::Command;

/// How session output is written
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines and an ASCII board
    #[default]
    Text,
    /// One JSON document per line
    Json,
}

/// A running game plus the sink its reports go to.
pub struct Session<W: Write> {
    game: GameModel,
    out: W,
    format: OutputFormat,
}

impl<W: Write> Session<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            game: GameModel::new(),
            out,
            format,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Handle one input line. Returns `false` once the session should end.
    ///
    /// Malformed commands and rejected game inputs are reported on the
    /// output and do not end the session; only I/O failures are errors.
    pub fn handle_line(&mut self, line: &str) -> Result<bool> {
        match Command::parse(line) {
            Ok(None) => Ok(true),
            Ok(Some(Command::Quit)) => {
                debug!("quit requested");
                Ok(false)
            }
            Ok(Some(command)) => {
                debug!("> {}", command.to_command_string());
                self.execute(command)?;
                Ok(true)
            }
            Err(e) => {
                warn!("bad command {line:?}: {e}");
                self.write_error(&e.to_string())?;
                Ok(true)
            }
        }
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Click(square) => {
                let events = self.game.click(square);
                self.write_events(&events)
            }
            Command::Move { from, to } => match self.game.play_move(from, to) {
                Ok(events) if events.is_empty() => {
                    self.write_error(&format!("nothing to move on {from}"))
                }
                Ok(events) => self.write_events(&events),
                Err(e) => self.write_error(&e.to_string()),
            },
            Command::Promote(kind) => match self.game.promote(kind) {
                Ok(events) => self.write_events(&events),
                Err(e) => self.write_error(&e.to_string()),
            },
            Command::Restart => {
                let events = self.game.restart();
                self.write_events(&events)
            }
            Command::Board => match self.format {
                OutputFormat::Text => self.write_text(&render_text(&self.game)),
                OutputFormat::Json => self.write_json(&board_snapshot(&self.game)),
            },
            Command::Hints => match self.format {
                OutputFormat::Text => {
                    let hints = move_hints(&self.game);
                    let names = |squares: &[Square]| {
                        squares.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" ")
                    };
                    let text = format!(
                        "quiet: {}\ncaptures: {}\n",
                        names(&hints.quiet),
                        names(&hints.captures)
                    );
                    self.write_text(&text)
                }
                OutputFormat::Json => self.write_json(&move_hints(&self.game)),
            },
            Command::History => match self.format {
                OutputFormat::Text => {
                    let mut text = String::new();
                    for entry in move_list(&self.game) {
                        text.push_str(&format!("{}. {}", entry.move_num, entry.white));
                        if let Some(black) = entry.black {
                            text.push_str(&format!("  {black}"));
                        }
                        text.push('\n');
                    }
                    self.write_text(&text)
                }
                OutputFormat::Json => self.write_json(&move_list(&self.game)),
            },
            Command::Status => match self.format {
                OutputFormat::Text => self.write_text(&format!("{}\n", status_line(&self.game))),
                OutputFormat::Json => self.write_json(&self.game.status()),
            },
            Command::Quit => Ok(()),
        }
    }

    fn write_events(&mut self, events: &[GameEvent]) -> Result<()> {
        for event in events {
            match self.format {
                OutputFormat::Text => writeln!(self.out, "{}", describe_event(event))?,
                OutputFormat::Json => self.write_json(event)?,
            }
        }
        Ok(())
    }

    fn write_error(&mut self, message: &str) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "error: {message}")?,
            OutputFormat::Json => self.write_json(&json!({ "error": message }))?,
        }
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let line = serde_json::to_string(value).context("failed to serialize output")?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}

/// Run a session over `input` until it is exhausted or a `quit` arrives.
pub fn run<R: BufRead, W: Write>(input: R, output: W, format: OutputFormat) -> Result<W> {
    let mut session = Session::new(output, format);
    for (index, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read input line {}", index + 1))?;
        if !session.handle_line(&line)? {
            break;
        }
    }
    session.out.flush().context("failed to flush output")?;
    info!("session ended after {} moves", session.game.log().len());
    Ok(session.into_output())
}
