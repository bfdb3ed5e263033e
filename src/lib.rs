//! # Connect Four
//!
//! A two-player Connect Four game: a pure game-state engine (board, turns,
//! gravity placement, win detection) plus a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player identity, turn/win engine
//! - [`ui`] — Terminal UI: event loop, board view, player theming
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
