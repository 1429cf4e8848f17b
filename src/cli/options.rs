//! Command-line options
use super::agent::AgentType;
use crate::simulation::TestbedConfig;
use clap::{ArgEnum, Parser};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser, Debug, Clone, PartialEq)]
#[clap(
    name = "nbandit",
    author,
    version,
    about = "Compare action-value agents on a noisy multi-armed bandit testbed"
)]
pub struct Options {
    // Environment options
    #[clap(short = 'n', long, default_value_t = 10, help_heading = Some("ENVIRONMENT OPTIONS"))]
    /// Number of bandit arms. Ignored if --arm-means is given.
    pub num_arms: usize,

    #[clap(long, default_value_t = 1.0, help_heading = Some("ENVIRONMENT OPTIONS"))]
    /// Standard deviation of the reward noise
    pub noise_std: f64,

    #[clap(
        long,
        use_value_delimiter = true,
        allow_hyphen_values = true,
        help_heading = Some("ENVIRONMENT OPTIONS")
    )]
    /// Fixed arm reward means. By default the means are sampled from N(0, 1) every episode.
    pub arm_means: Option<Vec<f64>>,

    // Agent options
    #[clap(
        short,
        long,
        arg_enum,
        use_value_delimiter = true,
        default_values = &["greedy", "epsilon-greedy", "softmax"],
        help_heading = Some("AGENT OPTIONS")
    )]
    /// Agents to evaluate
    pub agents: Vec<AgentType>,

    #[clap(long, default_value_t = 0.1, help_heading = Some("AGENT OPTIONS"))]
    /// Exploration probability of the epsilon-greedy agent
    pub epsilon: f64,

    #[clap(long, default_value_t = 0.2, help_heading = Some("AGENT OPTIONS"))]
    /// Temperature of the softmax agent
    pub temperature: f64,

    // Simulation options
    #[clap(short = 'k', long, default_value_t = 2000, help_heading = Some("SIMULATION OPTIONS"))]
    /// Number of independent episodes to average over
    pub num_episodes: u64,

    #[clap(short = 'l', long, default_value_t = 1000, help_heading = Some("SIMULATION OPTIONS"))]
    /// Number of steps per episode
    pub episode_length: usize,

    #[clap(long, default_value_t = 20, help_heading = Some("SIMULATION OPTIONS"))]
    /// Number of episodes between progress reports
    pub report_interval: u64,

    #[clap(long, help_heading = Some("SIMULATION OPTIONS"))]
    /// Random seed. Chosen from system entropy if omitted.
    pub seed: Option<u64>,

    // Output options
    #[clap(short, long, help_heading = Some("OUTPUT OPTIONS"))]
    /// Do not display progress
    pub silent: bool,

    #[clap(long, default_value_t = 100, help_heading = Some("OUTPUT OPTIONS"))]
    /// Number of episodes between progress displays
    pub display_interval: u64,

    #[clap(short, long, arg_enum, default_value_t = OutputFormat::Human, help_heading = Some("OUTPUT OPTIONS"))]
    /// Format of the final results
    pub output: OutputFormat,

    #[clap(long, help_heading = Some("OUTPUT OPTIONS"))]
    /// Save every progress report as a JSON frame sequence for animating the curves
    pub save_frames: Option<PathBuf>,
}

/// Format of the final results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ArgEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Human,
    /// Reward curves as JSON
    Json,
}

/// Inconsistent command-line options.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum OptionsError {
    #[error(
        "display interval {display_interval} is not a multiple of \
         report interval {report_interval}"
    )]
    DisplayInterval {
        display_interval: u64,
        report_interval: u64,
    },
}

impl Options {
    /// Check option combinations that clap cannot express.
    ///
    /// The display only sees reported episodes,
    /// so the display interval must be a multiple of the report interval.
    ///
    /// # Errors
    /// If `--display-interval` is not a multiple of a non-zero `--report-interval`.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.report_interval != 0 && self.display_interval % self.report_interval != 0 {
            return Err(OptionsError::DisplayInterval {
                display_interval: self.display_interval,
                report_interval: self.report_interval,
            });
        }
        Ok(())
    }
}

impl From<&Options> for TestbedConfig {
    fn from(opts: &Options) -> Self {
        Self {
            num_episodes: opts.num_episodes,
            episode_length: opts.episode_length,
            report_interval: opts.report_interval,
        }
    }
}
