//! Terminal UI: key handling and board rendering. Everything here translates
//! key events into engine calls and engine state into widgets; no game rules.

mod app;
mod game_view;
pub mod theme;

pub use app::App;
