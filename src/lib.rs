//! # Connect Four
//!
//! Two players take turns dropping pieces into columns; the first to line up
//! four in a row (horizontally, vertically or diagonally) wins, and a full
//! board with no line is a draw. The engine is pure and UI-independent; a
//! terminal front end built with Ratatui drives it from the keyboard.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, state machine
//! - [`ui`]: Terminal UI: game view and key handling
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
