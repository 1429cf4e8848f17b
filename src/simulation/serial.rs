//! Serial (single-thread) testbed.
use super::hooks::{Report, ReportHook};
use super::{RewardCurves, SimulatorError};
use crate::agents::{Agent, BuildAgent};
use crate::envs::{BuildEnv, Environment};
use crate::utils::stats::OnlineMeanVariance;
use crate::Prng;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Testbed run configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestbedConfig {
    /// Number of independent episodes to average over.
    pub num_episodes: u64,
    /// Number of steps in each episode.
    pub episode_length: usize,
    /// Emit a report after every episode whose index is a multiple of this interval.
    pub report_interval: u64,
}

impl Default for TestbedConfig {
    fn default() -> Self {
        Self {
            num_episodes: 2000,
            episode_length: 1000,
            report_interval: 20,
        }
    }
}

impl TestbedConfig {
    /// Check that the configuration is valid.
    ///
    /// # Errors
    /// If any of the counts are zero.
    pub const fn validate(&self) -> Result<(), SimulatorError> {
        if self.num_episodes == 0 {
            return Err(SimulatorError::InvalidConfig("num_episodes must be positive"));
        }
        if self.episode_length == 0 {
            return Err(SimulatorError::InvalidConfig("episode_length must be positive"));
        }
        if self.report_interval == 0 {
            return Err(SimulatorError::InvalidConfig("report_interval must be positive"));
        }
        Ok(())
    }
}

/// Evaluates agents by averaging their per-step reward over many independent episodes.
///
/// Each episode builds a fresh environment and one fresh agent per agent builder.
/// On every step each agent, in order, chooses an action in the shared environment
/// and learns from the reward.
/// A single random number generator is used for everything
/// so a fixed seed reproduces the evaluation exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Testbed<EC, AC> {
    pub config: TestbedConfig,
    pub env_config: EC,
    pub agent_configs: Vec<AC>,
}

impl<EC, AC> Testbed<EC, AC> {
    pub const fn new(config: TestbedConfig, env_config: EC, agent_configs: Vec<AC>) -> Self {
        Self {
            config,
            env_config,
            agent_configs,
        }
    }
}

impl<EC, AC> Testbed<EC, AC>
where
    EC: BuildEnv,
    AC: BuildAgent,
    AC::Agent: fmt::Display,
{
    /// Run the evaluation.
    ///
    /// # Args
    /// * `rng` - Source of all randomness in environments and agents.
    /// * `hook` - Receives a [`Report`] every `report_interval` episodes
    ///            and the final [`RewardCurves`].
    ///
    /// # Errors
    /// Fails before the first step if the configuration is invalid,
    /// an environment or agent cannot be built,
    /// or an agent's number of actions differs from the environment's.
    pub fn evaluate<H>(&self, rng: &mut Prng, hook: &mut H) -> Result<RewardCurves, SimulatorError>
    where
        H: ReportHook + ?Sized,
    {
        self.config.validate()?;
        if self.agent_configs.is_empty() {
            return Err(SimulatorError::InvalidConfig("at least one agent is required"));
        }
        let num_agents = self.agent_configs.len();
        let episode_length = self.config.episode_length;

        let mut avg_reward = Array2::zeros((num_agents, episode_length));
        let mut episode_reward = vec![OnlineMeanVariance::new(); num_agents];
        let mut labels = Vec::new();
        let start = Instant::now();

        for episode in 0..self.config.num_episodes {
            let env = self.env_config.build_env(rng)?;
            let mut agents = self.build_agents(&env)?;
            if episode == 0 {
                labels = agents.iter().map(ToString::to_string).collect();
            }

            let num_averaged = (episode + 1) as f64;
            let mut totals = vec![0.0; num_agents];
            for step in 0..episode_length {
                for (i, agent) in agents.iter_mut().enumerate() {
                    let action = agent.choose_action(rng);
                    let reward = env.act(action, rng)?;
                    agent.update(action, reward);

                    totals[i] += reward;
                    let avg = &mut avg_reward[(i, step)];
                    *avg += (reward - *avg) / num_averaged;
                }
            }
            for (stats, total) in episode_reward.iter_mut().zip(totals) {
                stats.push(total);
            }

            if episode % self.config.report_interval == 0 {
                hook.report(&Report {
                    episode,
                    labels: &labels,
                    avg_reward: avg_reward.view(),
                    elapsed: start.elapsed(),
                });
            }
        }

        let curves = RewardCurves {
            labels,
            num_episodes: self.config.num_episodes,
            avg_reward,
            episode_reward,
        };
        hook.finish(&curves);
        Ok(curves)
    }

    /// Build one agent per builder, sized to the environment.
    fn build_agents<E: Environment>(&self, env: &E) -> Result<Vec<AC::Agent>, SimulatorError> {
        let env_actions = env.num_actions();
        self.agent_configs
            .iter()
            .enumerate()
            .map(|(i, config)| {
                let agent = config.build_agent(env_actions)?;
                let agent_actions = agent.num_actions();
                if agent_actions == env_actions {
                    Ok(agent)
                } else {
                    Err(SimulatorError::ConfigurationMismatch {
                        agent: i,
                        label: agent.to_string(),
                        agent_actions,
                        env_actions,
                    })
                }
            })
            .collect()
    }
}
