//! Value-estimating bandit agent.
use super::{Agent, BuildAgent, BuildAgentError, SelectionStrategy, ValueEstimator};
use crate::Prng;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for a [`BanditAgent`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BanditAgentConfig {
    /// Action selection strategy.
    pub strategy: SelectionStrategy,
}

impl BanditAgentConfig {
    pub const fn new(strategy: SelectionStrategy) -> Self {
        Self { strategy }
    }

    pub const fn greedy() -> Self {
        Self::new(SelectionStrategy::Greedy)
    }

    pub const fn epsilon_greedy(epsilon: f64) -> Self {
        Self::new(SelectionStrategy::EpsilonGreedy { epsilon })
    }

    pub const fn softmax(temperature: f64) -> Self {
        Self::new(SelectionStrategy::Softmax { temperature })
    }
}

impl fmt::Display for BanditAgentConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.strategy, f)
    }
}

impl BuildAgent for BanditAgentConfig {
    type Agent = BanditAgent;

    fn build_agent(&self, num_actions: usize) -> Result<Self::Agent, BuildAgentError> {
        BanditAgent::new(num_actions, self.strategy)
    }
}

/// An agent that learns sample-average action values and selects with a [`SelectionStrategy`].
///
/// The greedy, epsilon-greedy, and softmax agents share the same value update
/// and differ only in how they choose actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BanditAgent {
    estimator: ValueEstimator,
    strategy: SelectionStrategy,
}

impl BanditAgent {
    /// Create a new agent.
    ///
    /// # Errors
    /// If `num_actions` is zero or the strategy parameters are invalid.
    pub fn new(num_actions: usize, strategy: SelectionStrategy) -> Result<Self, BuildAgentError> {
        if num_actions == 0 {
            return Err(BuildAgentError::NoActions);
        }
        strategy.validate()?;
        Ok(Self {
            estimator: ValueEstimator::new(num_actions),
            strategy,
        })
    }

    pub fn greedy(num_actions: usize) -> Result<Self, BuildAgentError> {
        Self::new(num_actions, SelectionStrategy::Greedy)
    }

    pub fn epsilon_greedy(num_actions: usize, epsilon: f64) -> Result<Self, BuildAgentError> {
        Self::new(num_actions, SelectionStrategy::EpsilonGreedy { epsilon })
    }

    pub fn softmax(num_actions: usize, temperature: f64) -> Result<Self, BuildAgentError> {
        Self::new(num_actions, SelectionStrategy::Softmax { temperature })
    }

    pub const fn estimator(&self) -> &ValueEstimator {
        &self.estimator
    }

    pub const fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    /// Current probability of choosing each action.
    pub fn action_probabilities(&self) -> Array1<f64> {
        self.strategy.action_probabilities(&self.estimator)
    }
}

impl fmt::Display for BanditAgent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.strategy, f)
    }
}

impl Agent for BanditAgent {
    fn num_actions(&self) -> usize {
        self.estimator.num_actions()
    }

    fn choose_action(&mut self, rng: &mut Prng) -> usize {
        self.strategy.choose(&self.estimator, rng)
    }

    fn update(&mut self, action: usize, reward: f64) {
        self.estimator.update(action, reward)
    }
}

#[cfg(test)]
mod greedy_agent {
    use super::super::testing;
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn learns_deterministic_bandit() {
        testing::train_deterministic_bandit(&BanditAgentConfig::greedy(), 100, 1.0);
    }

    #[test]
    fn first_choice_is_last_action() {
        let mut agent = BanditAgent::greedy(5).unwrap();
        let mut rng = Prng::seed_from_u64(0);
        assert_eq!(agent.choose_action(&mut rng), 4);
    }

    #[test]
    fn exploits_best_estimate() {
        let mut agent = BanditAgent::greedy(3).unwrap();
        let mut rng = Prng::seed_from_u64(0);
        agent.update(2, -1.0);
        assert_eq!(agent.choose_action(&mut rng), 1);
        agent.update(1, 0.25);
        assert_eq!(agent.choose_action(&mut rng), 1);
        agent.update(0, 0.5);
        assert_eq!(agent.choose_action(&mut rng), 0);
    }

    #[test]
    fn no_actions() {
        assert_eq!(BanditAgent::greedy(0), Err(BuildAgentError::NoActions));
    }
}
