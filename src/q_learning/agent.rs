//! Q-learning agent (off-policy TD control) driven by a host game loop.
//!
//! The host calls [`QLearnAgent::choose_action`] once per live turn and
//! [`QLearnAgent::episode_end`] once when the episode concludes. Each call
//! runs one iteration of the Q-learning algorithm: back up the previous
//! state-action pair toward the current state's value, then select the next
//! action ε-greedily.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    config::AgentConfig,
    encoding::StateKey,
    error::Result,
    ports::GameView,
    q_learning::q_table::{QTable, TableAction},
    types::Action,
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

fn encode_view<V: GameView>(view: &V) -> StateKey {
    StateKey::encode(
        view.position(),
        &view.opponent_positions(),
        view.collectible_grid(),
    )
}

/// Tabular Q-learning agent.
///
/// Owns the value table, the learning parameters, and the one-step episode
/// trace (previous state, action, reward, score). The table grows lazily and
/// survives across episodes; only dropping the agent discards it.
///
/// After `num_training` completed episodes the agent permanently sets α and
/// ε to zero: no further learning, pure greedy play.
#[derive(Debug, Clone)]
pub struct QLearnAgent {
    q_table: QTable,
    alpha: f64,
    epsilon: f64,
    gamma: f64,
    num_training: u32,
    episodes_so_far: u32,
    previous_state: Option<StateKey>,
    previous_action: Option<TableAction>,
    previous_reward: Option<f64>,
    previous_score: f64,
    rng: StdRng,
}

impl QLearnAgent {
    /// Create a new agent from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter)
    /// if alpha is negative or epsilon/gamma fall outside `[0, 1]`, or any
    /// of them is non-finite.
    pub fn new(config: AgentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            q_table: QTable::new(),
            alpha: config.alpha,
            epsilon: config.epsilon,
            gamma: config.gamma,
            num_training: config.num_training,
            episodes_so_far: 0,
            previous_state: None,
            previous_action: None,
            previous_reward: None,
            previous_score: 0.0,
            rng: build_rng(config.seed),
        })
    }

    /// Select the action for a live turn.
    ///
    /// Encodes the observation, takes the reward as the score delta since
    /// the previous turn, runs one Q-learning iteration and returns the
    /// chosen action. The host's `Stop` label is filtered out before the
    /// decision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalActions`](crate::Error::NoLegalActions) if
    /// the host reports no legal moves besides `Stop` on a greedy turn for
    /// an unvisited state.
    pub fn choose_action<V: GameView>(&mut self, view: &V) -> Result<Action> {
        let legal: Vec<Action> = view
            .legal_actions()
            .into_iter()
            .filter(|action| !action.is_stop())
            .collect();
        let state = encode_view(view);
        let reward = view.score() - self.previous_score;
        self.previous_score = view.score();
        self.step(state, reward, &legal, false)
    }

    /// Handle the end of an episode (win or loss).
    ///
    /// Runs the terminal Q-learning iteration, discarding the selected
    /// action, then advances the episode counter. When the counter first
    /// reaches the training budget, alpha and epsilon are set to zero
    /// permanently and the agent plays greedily from then on.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying iteration; the terminal path
    /// itself cannot fail because the terminal value is recorded before any
    /// greedy lookup.
    pub fn episode_end<V: GameView>(&mut self, view: &V) -> Result<()> {
        let state = encode_view(view);
        let reward = view.score() - self.previous_score;
        self.step(state, reward, &view.legal_actions(), true)?;

        self.episodes_so_far += 1;
        if self.episodes_so_far == self.num_training {
            tracing::info!(
                episodes = self.episodes_so_far,
                states = self.q_table.len(),
                "training complete, turning off alpha and epsilon"
            );
            self.alpha = 0.0;
            self.epsilon = 0.0;
        }
        Ok(())
    }

    /// One Q-learning iteration: value update plus ε-greedy selection.
    ///
    /// In order:
    /// 1. On a terminal call, record the terminal pseudo-action with value
    ///    exactly `reward`. This happens before the backup below, so a
    ///    terminal state bootstraps from its own just-recorded value.
    /// 2. If a previous state exists, back up its Q-value toward
    ///    `previous_reward + gamma * max_value(state)`.
    /// 3. Advance the trace: `previous_state`/`previous_reward` become the
    ///    current ones.
    /// 4. With probability 1−ε pick the greedy action, otherwise a uniform
    ///    random legal action. An exploration draw with no legal actions
    ///    returns [`Action::Stop`] and leaves `previous_action` untouched
    ///    (terminal calling convention; see DESIGN.md).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalActions`](crate::Error::NoLegalActions) when
    /// a greedy choice is requested for an unvisited state with no legal
    /// actions.
    pub fn step(
        &mut self,
        state: StateKey,
        reward: f64,
        legal_actions: &[Action],
        terminal: bool,
    ) -> Result<Action> {
        if terminal {
            self.q_table.set_terminal(&state, reward);
        }

        if let (Some(prev_state), Some(prev_action), Some(prev_reward)) = (
            self.previous_state.as_ref(),
            self.previous_action,
            self.previous_reward,
        ) {
            self.q_table.ensure_initialized(prev_state, prev_action);
            let bootstrap = self.q_table.max_value(&state);
            self.q_table.update(
                prev_state,
                prev_action,
                self.alpha,
                prev_reward,
                self.gamma,
                bootstrap,
            );
        }

        self.previous_state = Some(state.clone());
        self.previous_reward = Some(reward);

        if self.rng.random::<f64>() >= self.epsilon {
            // Greedy branch
            let best = self.q_table.best_action(&state, legal_actions, &mut self.rng)?;
            self.previous_action = Some(best);
            return Ok(best.label());
        }
        // Exploration branch
        match legal_actions.choose(&mut self.rng) {
            Some(&action) => {
                self.previous_action = Some(TableAction::Move(action));
                Ok(action)
            }
            None => Ok(Action::Stop),
        }
    }

    /// Q-value recorded for a state-action pair (0.0 if absent).
    pub fn q_value(&self, state: &StateKey, action: TableAction) -> f64 {
        self.q_table.get(state, action)
    }

    /// Number of distinct states in the value table.
    pub fn table_len(&self) -> usize {
        self.q_table.len()
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn set_alpha(&mut self, value: f64) {
        self.alpha = value;
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn set_epsilon(&mut self, value: f64) {
        self.epsilon = value;
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn num_training(&self) -> u32 {
        self.num_training
    }

    pub fn episodes_so_far(&self) -> u32 {
        self.episodes_so_far
    }

    /// Whether the agent is still within its training budget.
    pub fn in_training(&self) -> bool {
        self.episodes_so_far < self.num_training
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::BitGrid, types::Point};

    fn key(x: i32, y: i32) -> StateKey {
        StateKey::encode(Point::new(x, y), &[], &BitGrid::new(2, 2))
    }

    fn agent(alpha: f64, epsilon: f64, gamma: f64) -> QLearnAgent {
        QLearnAgent::new(
            AgentConfig::new()
                .with_alpha(alpha)
                .with_epsilon(epsilon)
                .with_gamma(gamma)
                .with_num_training(0)
                .with_seed(17),
        )
        .expect("valid config")
    }

    #[test]
    fn first_step_records_no_update() -> Result<()> {
        let mut agent = agent(0.5, 0.0, 0.9);
        agent.step(key(0, 0), 3.0, &[Action::North], false)?;
        assert_eq!(agent.table_len(), 0);
        Ok(())
    }

    #[test]
    fn second_step_backs_up_the_previous_pair() -> Result<()> {
        let mut agent = agent(0.5, 0.0, 0.9);
        let first = agent.step(key(0, 0), 0.0, &[Action::North], false)?;
        assert_eq!(first, Action::North);

        agent.step(key(1, 0), 5.0, &[Action::North], false)?;
        // Q[(0,0)][North] = 0 + 0.5 * (0 + 0.9 * 0 - 0) = 0, but recorded.
        assert_eq!(agent.table_len(), 1);
        assert_eq!(agent.q_value(&key(0, 0), TableAction::Move(Action::North)), 0.0);
        Ok(())
    }

    #[test]
    fn same_state_twice_with_reward_five_follows_the_exact_trace() -> Result<()> {
        // alpha=0.5, gamma=0.9, reward 5 each turn, identical state.
        let mut agent = agent(0.5, 0.0, 0.9);
        let state = key(1, 1);
        let legal = [Action::East];

        agent.step(state.clone(), 5.0, &legal, false)?;
        assert_eq!(agent.table_len(), 0);

        // Backup of turn 1: Q = 0 + 0.5 * (5 + 0.9 * 0 - 0) = 2.5
        agent.step(state.clone(), 5.0, &legal, false)?;
        let q1 = agent.q_value(&state, TableAction::Move(Action::East));
        assert!((q1 - 2.5).abs() < 1e-12);

        // Backup of turn 2: Q = 2.5 + 0.5 * (5 + 0.9 * 2.5 - 2.5) = 4.875
        agent.step(state.clone(), 5.0, &legal, false)?;
        let q2 = agent.q_value(&state, TableAction::Move(Action::East));
        assert!((q2 - 4.875).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn terminal_step_records_the_raw_reward_and_returns_stop() -> Result<()> {
        let mut agent = agent(0.5, 0.0, 0.9);
        let state = key(0, 1);
        let returned = agent.step(state.clone(), -500.0, &[], true)?;
        // Only the terminal pseudo-action is recorded, so the greedy pick
        // maps to the no-op label.
        assert_eq!(returned, Action::Stop);
        assert_eq!(agent.q_value(&state, TableAction::Terminal), -500.0);
        Ok(())
    }

    #[test]
    fn terminal_value_feeds_its_own_bootstrap() -> Result<()> {
        let mut agent = agent(1.0, 0.0, 0.5);
        let start = key(0, 0);
        let end = key(1, 1);

        agent.step(start.clone(), 0.0, &[Action::East], false)?;
        agent.step(end.clone(), 10.0, &[], true)?;

        // Backup sees the freshly recorded terminal value of 10:
        // Q[start][East] = 0 + 1.0 * (0 + 0.5 * 10 - 0) = 5
        let q = agent.q_value(&start, TableAction::Move(Action::East));
        assert!((q - 5.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn empty_exploration_draw_leaves_the_previous_action_stale() -> Result<()> {
        // epsilon=1 forces the exploration branch every time.
        let mut agent = agent(0.5, 1.0, 0.0);
        let s1 = key(0, 0);
        let s2 = key(1, 0);
        let s3 = key(0, 1);

        let a1 = agent.step(s1, 0.0, &[Action::West], false)?;
        assert_eq!(a1, Action::West);

        // No legal actions: sentinel returned, previous action untouched.
        let a2 = agent.step(s2.clone(), 4.0, &[], false)?;
        assert_eq!(a2, Action::Stop);

        // The next backup therefore lands on (s2, West):
        // Q = 0 + 0.5 * (4 + 0 - 0) = 2
        agent.step(s3, 0.0, &[Action::West], false)?;
        let q = agent.q_value(&s2, TableAction::Move(Action::West));
        assert!((q - 2.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn setters_override_learning_parameters() {
        let mut agent = agent(0.5, 0.2, 0.9);
        agent.set_alpha(0.0);
        agent.set_epsilon(0.0);
        assert_eq!(agent.alpha(), 0.0);
        assert_eq!(agent.epsilon(), 0.0);
        assert_eq!(agent.gamma(), 0.9);
    }
}
