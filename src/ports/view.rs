//! Observation port - the narrow interface the host game exposes.
//!
//! The agent never sees the host's full game state. Each turn it reads one
//! observation through this trait, and everything else about the game
//! (physics, legal-move computation, scoring) stays on the host side.

use crate::{
    grid::BitGrid,
    types::{Action, Point},
};

/// One observation of the running game, as seen by the agent.
///
/// The host implements this on whatever state object its game loop carries.
/// All methods are snapshots of the current turn; the agent calls them at
/// most once per decision.
pub trait GameView {
    /// The agent's current grid position.
    fn position(&self) -> Point;

    /// Opponent positions, in host order.
    ///
    /// The order must be stable run-to-run: it is part of the encoded state
    /// key, so a reshuffled list would read as a different state.
    fn opponent_positions(&self) -> Vec<Point>;

    /// Presence grid of remaining collectibles.
    fn collectible_grid(&self) -> &BitGrid;

    /// Legal action labels at the current state.
    ///
    /// May include [`Action::Stop`]; the agent filters it out before making
    /// a live decision.
    fn legal_actions(&self) -> Vec<Action>;

    /// The current cumulative score.
    fn score(&self) -> f64;
}
