//! Environment builders
use super::{Bandit, Environment};
use crate::Prng;
use rand_distr::{Distribution, Normal, NormalError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Build an environment instance.
///
/// Used as the environment factory of a [`Testbed`](crate::Testbed):
/// a fresh environment is built at the start of every episode.
pub trait BuildEnv {
    type Environment: Environment;

    /// Build an environment instance.
    ///
    /// # Args
    /// * `rng` - Random number generator for any randomization of the environment structure.
    fn build_env(&self, rng: &mut Prng) -> Result<Self::Environment, BuildEnvError>;
}

/// Closures can act as environment builders.
impl<F, E> BuildEnv for F
where
    F: Fn(&mut Prng) -> Result<E, BuildEnvError>,
    E: Environment,
{
    type Environment = E;

    fn build_env(&self, rng: &mut Prng) -> Result<Self::Environment, BuildEnvError> {
        self(rng)
    }
}

/// Error building an environment
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildEnvError {
    #[error("a bandit must have at least one arm")]
    NoArms,
    #[error("arm mean must be finite, got {0}")]
    InvalidMean(f64),
    #[error("noise standard deviation must be finite and non-negative, got {0}")]
    InvalidNoiseStd(f64),
    #[error("invalid arm prior standard deviation {0}")]
    InvalidPriorStd(f64),
    #[error(transparent)]
    Normal(#[from] NormalError),
}

/// Configuration for a [`Bandit`] with the same arm means in every episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedMeansBanditConfig {
    /// Mean reward of each arm.
    pub means: Vec<f64>,
    /// Standard deviation of the reward noise.
    pub noise_std: f64,
}

impl FixedMeansBanditConfig {
    pub fn new(means: Vec<f64>, noise_std: f64) -> Self {
        Self { means, noise_std }
    }
}

impl Default for FixedMeansBanditConfig {
    fn default() -> Self {
        Self::new(vec![0.2, 0.8], 1.0)
    }
}

impl BuildEnv for FixedMeansBanditConfig {
    type Environment = Bandit;

    fn build_env(&self, _: &mut Prng) -> Result<Self::Environment, BuildEnvError> {
        Bandit::new(self.means.clone(), self.noise_std)
    }
}

/// Configuration for a [`Bandit`] with arm means sampled from a normal prior.
///
/// New means are drawn each time an environment is built.
/// The default is the 10-armed testbed: `Normal(0, 1)` means with unit reward noise.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorMeansBanditConfig {
    /// Number of bandit arms.
    pub num_arms: usize,
    /// Mean of the arm-mean prior.
    pub prior_mean: f64,
    /// Standard deviation of the arm-mean prior.
    pub prior_std: f64,
    /// Standard deviation of the reward noise.
    pub noise_std: f64,
}

impl PriorMeansBanditConfig {
    pub const fn new(num_arms: usize, noise_std: f64) -> Self {
        Self {
            num_arms,
            prior_mean: 0.0,
            prior_std: 1.0,
            noise_std,
        }
    }
}

impl Default for PriorMeansBanditConfig {
    fn default() -> Self {
        Self::new(10, 1.0)
    }
}

impl BuildEnv for PriorMeansBanditConfig {
    type Environment = Bandit;

    fn build_env(&self, rng: &mut Prng) -> Result<Self::Environment, BuildEnvError> {
        if !(self.prior_std.is_finite() && self.prior_std >= 0.0) {
            return Err(BuildEnvError::InvalidPriorStd(self.prior_std));
        }
        let prior = Normal::new(self.prior_mean, self.prior_std)?;
        let means = prior.sample_iter(rng).take(self.num_arms).collect();
        Bandit::new(means, self.noise_std)
    }
}
