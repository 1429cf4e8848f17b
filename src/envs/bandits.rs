use super::{ActionOutOfRange, BuildEnvError, Environment};
use crate::spaces::IndexSpace;
use crate::Prng;
use rand_distr::{Distribution, Normal};
use std::fmt;

/// A multi-armed bandit with normally distributed arm rewards.
///
/// Each arm has a fixed mean reward.
/// Pulling an arm returns its mean plus independent `Normal(0, noise_std)` noise.
#[derive(Debug, Clone)]
pub struct Bandit {
    true_means: Vec<f64>,
    noise_std: f64,
    noise: Normal<f64>,
}

impl Bandit {
    /// Create a new bandit.
    ///
    /// # Errors
    /// If there are no arms, any mean is not finite,
    /// or `noise_std` is negative or not finite.
    pub fn new(true_means: Vec<f64>, noise_std: f64) -> Result<Self, BuildEnvError> {
        if true_means.is_empty() {
            return Err(BuildEnvError::NoArms);
        }
        if let Some(&mean) = true_means.iter().find(|m| !m.is_finite()) {
            return Err(BuildEnvError::InvalidMean(mean));
        }
        if !(noise_std.is_finite() && noise_std >= 0.0) {
            return Err(BuildEnvError::InvalidNoiseStd(noise_std));
        }
        let noise = Normal::new(0.0, noise_std)?;
        Ok(Self {
            true_means,
            noise_std,
            noise,
        })
    }

    /// The expected reward of each arm.
    pub fn true_means(&self) -> &[f64] {
        &self.true_means
    }

    /// Standard deviation of the reward noise.
    pub const fn noise_std(&self) -> f64 {
        self.noise_std
    }
}

impl fmt::Display for Bandit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Bandit({:?}, noise_std={})",
            self.true_means, self.noise_std
        )
    }
}

impl Environment for Bandit {
    fn available_actions(&self) -> IndexSpace {
        IndexSpace::new(self.true_means.len())
    }

    fn num_actions(&self) -> usize {
        self.true_means.len()
    }

    fn act(&self, action: usize, rng: &mut Prng) -> Result<f64, ActionOutOfRange> {
        let mean = self.true_means.get(action).ok_or(ActionOutOfRange {
            action,
            num_actions: self.true_means.len(),
        })?;
        Ok(mean + self.noise.sample(rng))
    }
}
