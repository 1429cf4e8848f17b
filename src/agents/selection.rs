//! Action selection strategies.
use super::{BuildAgentError, ValueEstimator};
use crate::spaces::IndexSpace;
use crate::Prng;
use ndarray::{Array, Array1};
use rand::distributions::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an agent chooses an action from its value estimates.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Always take the action with the largest estimated value; ties go to the last action.
    Greedy,
    /// With probability `epsilon` take a uniform random action, otherwise act greedily.
    EpsilonGreedy {
        /// Probability of taking a random action. In `[0, 1]`.
        epsilon: f64,
    },
    /// Sample actions with probability proportional to `exp(value / temperature)`.
    ///
    /// The weights are not shifted before exponentiating.
    /// With large values or a small temperature the weights overflow to infinity,
    /// every probability becomes NaN, and the last action is selected.
    Softmax {
        /// Boltzmann temperature. Must be positive.
        temperature: f64,
    },
}

impl Default for SelectionStrategy {
    fn default() -> Self {
        Self::Greedy
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Greedy => write!(f, "GreedyAgent"),
            Self::EpsilonGreedy { epsilon } => write!(f, "EpsilonGreedyAgent(epsilon={})", epsilon),
            Self::Softmax { temperature } => {
                write!(f, "SoftmaxAgent(temperature={})", temperature)
            }
        }
    }
}

impl SelectionStrategy {
    /// Check that the strategy parameters are valid.
    ///
    /// # Errors
    /// If `epsilon` is not in `[0, 1]` or `temperature` is not positive and finite.
    pub fn validate(&self) -> Result<(), BuildAgentError> {
        match *self {
            Self::Greedy => Ok(()),
            Self::EpsilonGreedy { epsilon } => {
                if (0.0..=1.0).contains(&epsilon) {
                    Ok(())
                } else {
                    Err(BuildAgentError::InvalidEpsilon(epsilon))
                }
            }
            Self::Softmax { temperature } => {
                if temperature > 0.0 && temperature.is_finite() {
                    Ok(())
                } else {
                    Err(BuildAgentError::InvalidTemperature(temperature))
                }
            }
        }
    }

    /// Choose an action given the current value estimates.
    ///
    /// Random draws, in order:
    /// * Greedy: none.
    /// * Epsilon-greedy: one uniform draw to decide whether to explore (skipped if `epsilon == 0`)
    ///   and, when exploring, one uniform action index.
    /// * Softmax: one uniform draw.
    ///
    /// The strategy must be valid (see [`SelectionStrategy::validate`]).
    /// An invalid softmax temperature otherwise yields NaN probabilities and the last action.
    /// Debug builds assert validity.
    ///
    /// # Panics
    /// If the estimator has no actions.
    pub fn choose(&self, estimator: &ValueEstimator, rng: &mut Prng) -> usize {
        debug_assert!(self.validate().is_ok(), "invalid strategy {:?}", self);
        match *self {
            Self::Greedy => estimator.greedy_action(),
            Self::EpsilonGreedy { epsilon } => {
                if epsilon != 0.0 && rng.gen::<f64>() < epsilon {
                    IndexSpace::new(estimator.num_actions()).sample(rng)
                } else {
                    estimator.greedy_action()
                }
            }
            Self::Softmax { temperature } => softmax_sample(estimator.values(), temperature, rng),
        }
    }

    /// The probability with which [`SelectionStrategy::choose`] selects each action.
    pub fn action_probabilities(&self, estimator: &ValueEstimator) -> Array1<f64> {
        let num_actions = estimator.num_actions();
        match *self {
            Self::Greedy => {
                let mut probs = Array::zeros(num_actions);
                probs[estimator.greedy_action()] = 1.0;
                probs
            }
            Self::EpsilonGreedy { epsilon } => {
                let mut probs = Array::from_elem(num_actions, epsilon / num_actions as f64);
                probs[estimator.greedy_action()] += 1.0 - epsilon;
                probs
            }
            Self::Softmax { temperature } => {
                let weights = estimator.values().mapv(|q| (q / temperature).exp());
                let normalizer = weights.sum();
                weights / normalizer
            }
        }
    }
}

/// Sample from the Boltzmann distribution over `values` without a cumulative table.
///
/// Probability mass is consumed in index order from a single uniform draw.
/// Falls back to the last index if rounding leaves some of the draw unconsumed.
fn softmax_sample(values: &Array1<f64>, temperature: f64, rng: &mut Prng) -> usize {
    let normalizer: f64 = values.iter().map(|q| (q / temperature).exp()).sum();
    let mut r: f64 = rng.gen();
    for (i, q) in values.iter().enumerate() {
        let p = (q / temperature).exp() / normalizer;
        if r < p {
            return i;
        }
        r -= p;
    }
    values.len().checked_sub(1).expect("empty action space")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rstest::rstest;

    fn estimator_with(values: &[f64]) -> ValueEstimator {
        let mut estimator = ValueEstimator::new(values.len());
        for (action, &value) in values.iter().enumerate() {
            estimator.update(action, value);
        }
        estimator
    }

    /// Empirical action frequencies from `n` choices.
    fn frequencies(
        strategy: SelectionStrategy,
        estimator: &ValueEstimator,
        n: usize,
        seed: u64,
    ) -> Vec<f64> {
        let mut rng = Prng::seed_from_u64(seed);
        let mut counts = vec![0_usize; estimator.num_actions()];
        for _ in 0..n {
            counts[strategy.choose(estimator, &mut rng)] += 1;
        }
        counts.into_iter().map(|c| c as f64 / n as f64).collect()
    }

    #[rstest]
    #[case(SelectionStrategy::Greedy)]
    #[case(SelectionStrategy::EpsilonGreedy { epsilon: 0.0 })]
    #[case(SelectionStrategy::EpsilonGreedy { epsilon: 1.0 })]
    #[case(SelectionStrategy::Softmax { temperature: 0.2 })]
    fn valid(#[case] strategy: SelectionStrategy) {
        assert_eq!(strategy.validate(), Ok(()));
    }

    #[rstest]
    #[case(SelectionStrategy::EpsilonGreedy { epsilon: -0.1 }, BuildAgentError::InvalidEpsilon(-0.1))]
    #[case(SelectionStrategy::EpsilonGreedy { epsilon: 1.5 }, BuildAgentError::InvalidEpsilon(1.5))]
    #[case(SelectionStrategy::Softmax { temperature: 0.0 }, BuildAgentError::InvalidTemperature(0.0))]
    #[case(SelectionStrategy::Softmax { temperature: -1.0 }, BuildAgentError::InvalidTemperature(-1.0))]
    fn invalid(#[case] strategy: SelectionStrategy, #[case] expected: BuildAgentError) {
        assert_eq!(strategy.validate(), Err(expected));
    }

    #[test]
    fn invalid_nan_epsilon() {
        let strategy = SelectionStrategy::EpsilonGreedy { epsilon: f64::NAN };
        assert!(matches!(
            strategy.validate(),
            Err(BuildAgentError::InvalidEpsilon(_))
        ));
    }

    #[test]
    fn epsilon_zero_matches_greedy_and_draws_nothing() {
        let estimator = estimator_with(&[0.5, 2.0, 2.0, -1.0]);
        let mut rng_greedy = Prng::seed_from_u64(3);
        let mut rng_eps = Prng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(
                SelectionStrategy::Greedy.choose(&estimator, &mut rng_greedy),
                SelectionStrategy::EpsilonGreedy { epsilon: 0.0 }.choose(&estimator, &mut rng_eps)
            );
        }
        assert_eq!(rng_greedy.gen::<u64>(), rng_eps.gen::<u64>());
    }

    #[test]
    fn epsilon_one_is_uniform() {
        let estimator = estimator_with(&[0.0, 5.0, 1.0, 2.0]);
        let freqs = frequencies(
            SelectionStrategy::EpsilonGreedy { epsilon: 1.0 },
            &estimator,
            40_000,
            0,
        );
        for freq in freqs {
            assert!((freq - 0.25).abs() < 0.02, "{}", freq);
        }
    }

    #[test]
    fn epsilon_greedy_frequencies_match_probabilities() {
        let estimator = estimator_with(&[0.0, 5.0, 1.0]);
        let strategy = SelectionStrategy::EpsilonGreedy { epsilon: 0.3 };
        let probs = strategy.action_probabilities(&estimator);
        assert!((probs[1] - 0.8).abs() < 1e-12);
        let freqs = frequencies(strategy, &estimator, 40_000, 1);
        for (freq, prob) in freqs.iter().zip(&probs) {
            assert!((freq - prob).abs() < 0.02);
        }
    }

    #[rstest]
    #[case(&[0.0, 0.0, 0.0], 1.0)]
    #[case(&[1.0, -2.0, 0.5, 3.0], 0.2)]
    #[case(&[10.0, 9.0], 5.0)]
    #[case(&[0.3], 0.01)]
    fn softmax_probabilities_sum_to_one(#[case] values: &[f64], #[case] temperature: f64) {
        let estimator = estimator_with(values);
        let probs = SelectionStrategy::Softmax { temperature }.action_probabilities(&estimator);
        assert!((probs.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn softmax_frequencies_match_probabilities() {
        let estimator = estimator_with(&[0.1, 0.5, 0.3]);
        let strategy = SelectionStrategy::Softmax { temperature: 0.2 };
        let probs = strategy.action_probabilities(&estimator);
        let freqs = frequencies(strategy, &estimator, 40_000, 2);
        for (freq, prob) in freqs.iter().zip(&probs) {
            assert!((freq - prob).abs() < 0.02);
        }
    }

    #[test]
    fn softmax_high_temperature_is_uniform() {
        let estimator = estimator_with(&[0.0, 1.0, 2.0]);
        let freqs = frequencies(
            SelectionStrategy::Softmax { temperature: 1e6 },
            &estimator,
            30_000,
            4,
        );
        for freq in freqs {
            assert!((freq - 1.0 / 3.0).abs() < 0.02);
        }
    }

    #[test]
    fn softmax_low_temperature_is_greedy() {
        let estimator = estimator_with(&[0.1, 0.5, 0.3]);
        let strategy = SelectionStrategy::Softmax { temperature: 0.005 };
        let mut rng = Prng::seed_from_u64(5);
        for _ in 0..1000 {
            assert_eq!(strategy.choose(&estimator, &mut rng), estimator.greedy_action());
        }
    }

    #[test]
    fn softmax_overflow_falls_back_to_last() {
        let estimator = estimator_with(&[1000.0, 0.0]);
        let strategy = SelectionStrategy::Softmax { temperature: 0.1 };
        let mut rng = Prng::seed_from_u64(6);
        for _ in 0..100 {
            assert_eq!(strategy.choose(&estimator, &mut rng), 1);
        }
    }

    #[rstest]
    #[case(SelectionStrategy::Greedy)]
    #[case(SelectionStrategy::EpsilonGreedy { epsilon: 1.0 })]
    #[case(SelectionStrategy::Softmax { temperature: 0.2 })]
    #[should_panic]
    fn choose_without_actions_panics(#[case] strategy: SelectionStrategy) {
        let estimator = ValueEstimator::new(0);
        strategy.choose(&estimator, &mut Prng::seed_from_u64(0));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "invalid strategy")]
    fn choose_invalid_temperature_panics() {
        let estimator = estimator_with(&[0.0, 1.0]);
        SelectionStrategy::Softmax { temperature: 0.0 }
            .choose(&estimator, &mut Prng::seed_from_u64(0));
    }

    #[rstest]
    #[case(SelectionStrategy::Greedy, "GreedyAgent")]
    #[case(SelectionStrategy::EpsilonGreedy { epsilon: 0.1 }, "EpsilonGreedyAgent(epsilon=0.1)")]
    #[case(SelectionStrategy::Softmax { temperature: 0.2 }, "SoftmaxAgent(temperature=0.2)")]
    fn display(#[case] strategy: SelectionStrategy, #[case] expected: &str) {
        assert_eq!(strategy.to_string(), expected);
    }
}
