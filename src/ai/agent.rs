use crate::game::GameState;

/// Universal interface for computer opponents.
pub trait Agent {
    /// Select a column for the side to move in `state`.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
