//! Rule engine for a two-player chess game.
//!
//! The `domain` layer holds the rules, `models` the click-driven game state
//! machine, and `ui` the view models and command protocol a front end talks
//! to. `app` runs a headless session over that protocol.

pub mod app;
pub mod domain;
pub mod models;
pub mod ui;
