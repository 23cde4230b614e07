//! Terminal UI: keyboard-driven game view over the engine in [`crate::game`].

mod app;
mod game_view;
pub mod terminal;

pub use app::App;
