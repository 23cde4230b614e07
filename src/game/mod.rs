//! Core Connect Four game logic: board representation, player types, and the
//! game state machine with per-move transitions.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, HEIGHT, RUN_LENGTH, WIDTH};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveOutcome, Placement};
