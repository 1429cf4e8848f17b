use super::SimulatorError;
use crate::utils::stats::OnlineMeanVariance;
use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-step average reward of each agent across testbed episodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardCurves {
    /// Agent labels, one per row of `avg_reward`.
    pub labels: Vec<String>,
    /// Number of episodes averaged over.
    pub num_episodes: u64,
    /// Average reward with shape `[num_agents, episode_length]`.
    ///
    /// Entry `(i, t)` is the mean over episodes of the reward agent `i` received on step `t`.
    pub avg_reward: Array2<f64>,
    /// Statistics of the total reward per episode for each agent.
    pub episode_reward: Vec<OnlineMeanVariance<f64>>,
}

impl RewardCurves {
    pub fn num_agents(&self) -> usize {
        self.avg_reward.len_of(Axis(0))
    }

    pub fn episode_length(&self) -> usize {
        self.avg_reward.len_of(Axis(1))
    }

    /// The average reward curve of one agent.
    ///
    /// Panics if `agent` is out of bounds.
    pub fn curve(&self, agent: usize) -> ArrayView1<f64> {
        self.avg_reward.index_axis(Axis(0), agent)
    }

    /// Average reward of each agent on the last step of an episode.
    pub fn final_rewards(&self) -> Array1<f64> {
        let last = self.episode_length().saturating_sub(1);
        self.avg_reward.index_axis(Axis(1), last).to_owned()
    }

    /// Combine with curves from an independent batch of episodes of the same testbed.
    ///
    /// Each average is weighted by the number of episodes it covers,
    /// giving the averages over the union of both batches.
    ///
    /// # Errors
    /// If the labels or the curve shapes differ.
    pub fn merge(&mut self, other: &Self) -> Result<(), SimulatorError> {
        if self.labels != other.labels || self.avg_reward.dim() != other.avg_reward.dim() {
            return Err(SimulatorError::IncompatibleCurves);
        }
        let total = self.num_episodes + other.num_episodes;
        if total == 0 {
            return Ok(());
        }
        let weight = other.num_episodes as f64 / total as f64;
        self.avg_reward
            .zip_mut_with(&other.avg_reward, |a, &b| *a += (b - *a) * weight);
        for (stats, other_stats) in self.episode_reward.iter_mut().zip(&other.episode_reward) {
            stats.merge(other_stats);
        }
        self.num_episodes = total;
        Ok(())
    }
}

impl fmt::Display for RewardCurves {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "num_episodes: {}", self.num_episodes)?;
        writeln!(f, "episode_length: {}", self.episode_length())?;
        let final_rewards = self.final_rewards();
        for (i, label) in self.labels.iter().enumerate() {
            let stats = &self.episode_reward[i];
            writeln!(
                f,
                "{}: final_step_reward: {:.3}  episode_reward: {:.3} (σ {:.3})",
                label,
                final_rewards[i],
                stats.mean(),
                stats.stddev().unwrap_or(f64::NAN)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn curves(num_episodes: u64, avg_reward: Array2<f64>, totals: &[f64]) -> RewardCurves {
        RewardCurves {
            labels: vec!["a".into(), "b".into()],
            num_episodes,
            avg_reward,
            episode_reward: totals
                .iter()
                .map(|&t| std::iter::once(t).collect())
                .collect(),
        }
    }

    #[test]
    fn accessors() {
        let c = curves(1, array![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]], &[3.0, 12.0]);
        assert_eq!(c.num_agents(), 2);
        assert_eq!(c.episode_length(), 3);
        assert_eq!(c.curve(1), array![3.0, 4.0, 5.0]);
        assert_eq!(c.final_rewards(), array![2.0, 5.0]);
    }

    #[test]
    fn merge_weights_by_episodes() {
        let mut a = curves(3, array![[1.0, 1.0], [0.0, 3.0]], &[2.0, 3.0]);
        let b = curves(1, array![[5.0, -3.0], [4.0, 3.0]], &[2.0, 7.0]);
        a.merge(&b).unwrap();
        assert_eq!(a.num_episodes, 4);
        assert_eq!(a.avg_reward, array![[2.0, 0.0], [1.0, 3.0]]);
        assert_eq!(a.episode_reward[1].count(), 2);
        assert!((a.episode_reward[1].mean() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn merge_incompatible() {
        let mut a = curves(1, array![[1.0, 1.0], [0.0, 3.0]], &[2.0, 3.0]);
        let b = curves(1, array![[1.0], [0.0]], &[1.0, 0.0]);
        assert_eq!(a.merge(&b), Err(SimulatorError::IncompatibleCurves));
    }

    #[test]
    fn serializes_to_json() {
        let c = curves(1, array![[0.5, 1.0], [0.0, 0.25]], &[1.5, 0.25]);
        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(value["labels"], serde_json::json!(["a", "b"]));
        assert_eq!(value["num_episodes"], 1);
    }
}
