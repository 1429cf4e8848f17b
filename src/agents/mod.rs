//! Action-value learning agents.
//!
//! These agents do not model any state; each keeps a value estimate per action.
mod bandit;
mod builder;
mod error;
mod estimator;
mod selection;
#[cfg(test)]
pub mod testing;

pub use bandit::{BanditAgent, BanditAgentConfig};
pub use builder::BuildAgent;
pub use error::BuildAgentError;
pub use estimator::ValueEstimator;
pub use selection::SelectionStrategy;

use crate::Prng;

/// A learning agent for a stateless environment with actions `0 .. num_actions`.
pub trait Agent {
    /// Number of actions the agent chooses between.
    fn num_actions(&self) -> usize;

    /// Choose an action.
    ///
    /// # Args
    /// * `rng` - Random number generator used for any stochastic choice.
    fn choose_action(&mut self, rng: &mut Prng) -> usize;

    /// Update the agent with the reward received for an action.
    ///
    /// Panics if `action` is not less than [`Agent::num_actions`].
    fn update(&mut self, action: usize, reward: f64);
}

impl<T: Agent + ?Sized> Agent for Box<T> {
    fn num_actions(&self) -> usize {
        T::num_actions(self)
    }
    fn choose_action(&mut self, rng: &mut Prng) -> usize {
        T::choose_action(self, rng)
    }
    fn update(&mut self, action: usize, reward: f64) {
        T::update(self, action, reward)
    }
}
