//! Sample-average action value estimation.
use crate::utils::iter::argmax_f64;
use ndarray::{Array, Array1};
use serde::{Deserialize, Serialize};

/// Incremental sample-average estimate of the value of each action.
///
/// Every value starts at 0 and every count at 1.
/// With a count of 1 the first reward for an action replaces its initial estimate,
/// so each estimate is the exact mean of the rewards observed for that action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueEstimator {
    /// Estimated value of each action.
    values: Array1<f64>,
    /// One more than the number of updates of each action.
    counts: Array1<u64>,
}

impl ValueEstimator {
    /// Create an estimator for `num_actions` actions.
    ///
    /// An estimator with no actions can be created and updated with nothing,
    /// but [`ValueEstimator::greedy_action`] and every [`SelectionStrategy::choose`]
    /// panic on it.
    ///
    /// [`SelectionStrategy::choose`]: super::SelectionStrategy::choose
    pub fn new(num_actions: usize) -> Self {
        Self {
            values: Array::zeros(num_actions),
            counts: Array::ones(num_actions),
        }
    }

    pub fn num_actions(&self) -> usize {
        self.values.len()
    }

    /// Current value estimate of each action.
    pub const fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Update count of each action, offset by the initial count of 1.
    pub const fn counts(&self) -> &Array1<u64> {
        &self.counts
    }

    /// Fold a reward for `action` into its running mean.
    ///
    /// Constant time and memory regardless of how many updates have been made.
    pub fn update(&mut self, action: usize, reward: f64) {
        let count = &mut self.counts[action];
        let value = &mut self.values[action];
        *value += (reward - *value) / *count as f64;
        *count += 1;
    }

    /// The action with the largest estimated value.
    ///
    /// Ties go to the largest index.
    /// With all estimates equal (as they are initially) this is the last action.
    /// This may be an unintended artifact of a left fold; it decides which arm is tried first.
    ///
    /// Panics if there are no actions.
    pub fn greedy_action(&self) -> usize {
        argmax_f64(&self.values).expect("empty action space")
    }
}
