//! Tabular Q-learning decision agent for host-driven grid-world games.
//!
//! This crate provides:
//! - Structured, collision-free state encoding of grid-world observations
//! - A lazily grown Q-value table with the standard off-policy backup rule
//! - ε-greedy action selection with uniform random tie-breaking
//! - An episode lifecycle that switches from training to pure-greedy
//!   evaluation once the configured episode budget is spent
//!
//! The host game owns physics, legal-move computation, and scoring; the
//! agent observes it only through the [`GameView`] port. Control flow is
//! turn-driven and single-threaded: the host calls
//! [`QLearnAgent::choose_action`] every live turn and
//! [`QLearnAgent::episode_end`] once per finished episode.

pub mod config;
pub mod encoding;
pub mod error;
pub mod grid;
pub mod ports;
pub mod q_learning;
pub mod types;

pub use config::AgentConfig;
pub use encoding::StateKey;
pub use error::{Error, Result};
pub use grid::BitGrid;
pub use ports::GameView;
pub use q_learning::{QLearnAgent, QTable, TableAction};
pub use types::{Action, Point};
