//! Terminal UI: start menu with difficulty selection, the game screen, and
//! the pause/game-over overlays.

mod app;
mod game_view;
mod menu;

pub use app::App;
