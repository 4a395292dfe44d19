//! Computer opponents: the `Agent` trait, the minimax search engine with its
//! window heuristic, and a random baseline.

mod agent;
mod minimax;
mod random;

pub use agent::Agent;
pub use minimax::{Heuristic, MinimaxAgent, WindowHeuristic, WIN_SCORE};
pub use random::RandomAgent;
