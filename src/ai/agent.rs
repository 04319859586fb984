use crate::error::EngineError;
use crate::game::GameState;

/// Universal interface for computer opponents.
pub trait Agent {
    /// Select a column for the side to move in `state`.
    ///
    /// Fails with [`EngineError::NoLegalMove`] when no column is open.
    fn select_action(&mut self, state: &GameState) -> Result<usize, EngineError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
