//! Bandit environments
mod bandits;
mod builders;

pub use bandits::Bandit;
pub use builders::{BuildEnv, BuildEnvError, FixedMeansBanditConfig, PriorMeansBanditConfig};

use crate::spaces::IndexSpace;
use crate::Prng;
use thiserror::Error;

/// A reinforcement learning environment with a fixed set of actions and no state.
///
/// The environment does not hold its own source of randomness.
/// Every sample is drawn from the generator passed to [`Environment::act`].
pub trait Environment {
    /// The space of all possible actions, `0 .. n`.
    ///
    /// Every element in this space must be a valid action.
    fn available_actions(&self) -> IndexSpace;

    /// Number of available actions.
    fn num_actions(&self) -> usize {
        self.available_actions().size()
    }

    /// Take an action and sample the resulting reward.
    ///
    /// # Errors
    /// Returns [`ActionOutOfRange`] if `action` is not in [`Environment::available_actions`].
    fn act(&self, action: usize, rng: &mut Prng) -> Result<f64, ActionOutOfRange>;
}

impl<E: Environment + ?Sized> Environment for Box<E> {
    fn available_actions(&self) -> IndexSpace {
        E::available_actions(self)
    }
    fn num_actions(&self) -> usize {
        E::num_actions(self)
    }
    fn act(&self, action: usize, rng: &mut Prng) -> Result<f64, ActionOutOfRange> {
        E::act(self, action, rng)
    }
}

/// An action index outside of the environment action space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
#[error("action {action} is out of range for {num_actions} actions")]
pub struct ActionOutOfRange {
    pub action: usize,
    pub num_actions: usize,
}
