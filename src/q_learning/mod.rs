//! Tabular Q-learning: the value table and the agent that drives it.
//!
//! Q-learning is off-policy TD control: each turn the previous state-action
//! pair is backed up toward `r + γ·max_a Q(s', a)`, regardless of the action
//! actually taken next. Action selection is ε-greedy with uniform random
//! tie-breaking.
//!
//! ## Usage
//!
//! ```no_run
//! use qgrid::{AgentConfig, QLearnAgent};
//!
//! let mut agent = QLearnAgent::new(
//!     AgentConfig::new()
//!         .with_alpha(0.2)
//!         .with_epsilon(0.05)
//!         .with_gamma(0.8)
//!         .with_num_training(2000),
//! )?;
//! // Per live turn:    agent.choose_action(&view)?
//! // At episode end:   agent.episode_end(&view)?
//! # Ok::<(), qgrid::Error>(())
//! ```

pub mod agent;
pub mod q_table;

pub use agent::QLearnAgent;
pub use q_table::{QTable, TableAction};
