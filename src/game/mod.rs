//! Core Connect Four game logic: board representation with win detection,
//! player types, and the session state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, WinLine, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
