//! Q-table implementation for tabular temporal difference learning

use std::collections::HashMap;

use rand::{rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    encoding::StateKey,
    error::{Error, Result},
    types::Action,
};

/// Entry key in a state's action-value map.
///
/// Terminal states have no outgoing moves; their value is recorded under the
/// `Terminal` pseudo-action and equals the instantaneous terminal reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableAction {
    Move(Action),
    Terminal,
}

impl TableAction {
    /// The label reported back to the host.
    ///
    /// The terminal pseudo-action maps to [`Action::Stop`]; callers on the
    /// terminal path discard the returned label anyway.
    pub fn label(self) -> Action {
        match self {
            TableAction::Move(action) => action,
            TableAction::Terminal => Action::Stop,
        }
    }
}

/// Q-values keyed by state, then by action.
///
/// Entries appear lazily on first visit, initialized to 0.0, and persist for
/// the life of the agent. Unvisited states read as 0.0, which doubles as the
/// bootstrap default in the update rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QTable {
    q_values: HashMap<StateKey, HashMap<TableAction, f64>>,
}

impl QTable {
    /// Create an empty Q-table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Q-value recorded for a state-action pair, or 0.0 if absent.
    pub fn get(&self, state: &StateKey, action: TableAction) -> f64 {
        self.q_values
            .get(state)
            .and_then(|actions| actions.get(&action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Maximum Q-value recorded for `state` over all of its recorded
    /// actions, including the terminal pseudo-action.
    ///
    /// Returns exactly 0.0 for a state that has never been visited; this is
    /// the bootstrap target convention, not an error.
    pub fn max_value(&self, state: &StateKey) -> f64 {
        match self.q_values.get(state) {
            Some(actions) if !actions.is_empty() => actions
                .values()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max),
            _ => 0.0,
        }
    }

    /// Greedy action for `state`, breaking ties uniformly at random.
    ///
    /// An unvisited state falls back to a uniform random choice among
    /// `legal_actions`. For a visited state, every recorded action whose
    /// estimate equals the maximum (exact equality) is a candidate; the
    /// uniform draw among them prevents systematic bias toward any one of
    /// an arbitrarily ordered set of equal-value actions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalActions`] when `state` is unvisited and
    /// `legal_actions` is empty.
    pub fn best_action(
        &self,
        state: &StateKey,
        legal_actions: &[Action],
        rng: &mut StdRng,
    ) -> Result<TableAction> {
        let Some(actions) = self.q_values.get(state) else {
            return legal_actions
                .choose(rng)
                .copied()
                .map(TableAction::Move)
                .ok_or(Error::NoLegalActions);
        };
        let best = self.max_value(state);
        let tied: Vec<TableAction> = actions
            .iter()
            .filter(|&(_, &q)| q == best)
            .map(|(&action, _)| action)
            .collect();
        tied.choose(rng).copied().ok_or(Error::NoLegalActions)
    }

    /// Insert a 0.0 estimate for `(state, action)` if none exists. Idempotent.
    pub fn ensure_initialized(&mut self, state: &StateKey, action: TableAction) {
        self.q_values
            .entry(state.clone())
            .or_default()
            .entry(action)
            .or_insert(0.0);
    }

    /// Apply one Q-learning backup to `(state, action)`:
    ///
    /// Q(s,a) ← Q(s,a) + α·(r + γ·bootstrap − Q(s,a))
    pub fn update(
        &mut self,
        state: &StateKey,
        action: TableAction,
        alpha: f64,
        reward: f64,
        gamma: f64,
        bootstrap: f64,
    ) {
        let q = self
            .q_values
            .entry(state.clone())
            .or_default()
            .entry(action)
            .or_insert(0.0);
        *q += alpha * (reward + gamma * bootstrap - *q);
    }

    /// Record the value of a terminal state: exactly `reward`, no bootstrap
    /// term, since no future states exist.
    pub fn set_terminal(&mut self, state: &StateKey, reward: f64) {
        self.q_values
            .entry(state.clone())
            .or_default()
            .insert(TableAction::Terminal, reward);
    }

    /// Number of distinct states with at least one recorded estimate.
    pub fn len(&self) -> usize {
        self.q_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q_values.is_empty()
    }
}
