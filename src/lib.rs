//! A multi-armed bandit testbed.
//!
//! Agents repeatedly choose among the arms of a noisy bandit and learn
//! action-value estimates from the rewards they receive.
//! A [`Testbed`] runs many independent episodes and averages the reward each agent
//! obtained at each step across episodes.
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::missing_const_for_fn)] // has some false positives
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::use_self)] // also triggered by macro expansions
pub mod agents;
pub mod cli;
pub mod envs;
pub mod logging;
pub mod simulation;
pub mod spaces;
pub mod utils;

pub use agents::{Agent, BanditAgent, BanditAgentConfig, BuildAgent, SelectionStrategy};
pub use envs::{Bandit, BuildEnv, Environment};
pub use simulation::{RewardCurves, SimulatorError, Testbed, TestbedConfig};

/// Pseudo-random number generator type used by environments and agents.
pub type Prng = rand_chacha::ChaCha8Rng;
