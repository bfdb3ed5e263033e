//! Core game logic: gravity board, opaque player identity, and the turn/win
//! state machine. No rendering, input, or I/O lives here.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, MIN_SIDE};
pub use engine::{GameEngine, GameStatus, MoveOutcome};
pub use player::PlayerId;
