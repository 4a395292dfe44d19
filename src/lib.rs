//! # Connect Four
//!
//! A Connect Four game played in the terminal against a computer opponent.
//! The UI is built with Ratatui; the opponent is a depth-bounded minimax
//! search with alpha-beta pruning over a fixed window heuristic, with the
//! search depth chosen by difficulty.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win detection, players, game state
//! - [`ai`] — Agent trait, minimax search engine, position heuristic
//! - [`ui`] — Terminal UI: start menu, game screen, pause and end overlays
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
