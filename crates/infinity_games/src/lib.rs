//! Terminal front-end for infinity tic-tac-toe.
//!
//! # Architecture
//!
//! - **App**: owns a [`GameEngine`](infinity_tictactoe::GameEngine) and turns
//!   key presses into engine calls
//! - **UI**: stateless ratatui rendering of the engine state
//! - **Replay**: headless application of a click sequence
//! - **Config**: TOML settings for logging and presentation

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod replay;
mod terminal;
mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use input::{Action, action_for, move_cursor};
pub use replay::{render_json, render_text, replay};
pub use terminal::enter_screen;
pub use ui::draw;
