//! Simulating agent-environment interaction
pub mod hooks;
mod serial;
mod summary;

pub use hooks::{Frame, FrameRecorder, Report, ReportHook};
pub use serial::{Testbed, TestbedConfig};
pub use summary::RewardCurves;

use crate::agents::BuildAgentError;
use crate::envs::{ActionOutOfRange, BuildEnvError};
use thiserror::Error;

/// Error initializing or running a simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulatorError {
    #[error("error building agent")]
    BuildAgent(#[from] BuildAgentError),
    #[error("error building environment")]
    BuildEnv(#[from] BuildEnvError),
    #[error(transparent)]
    OutOfRange(#[from] ActionOutOfRange),
    #[error(
        "agent {agent} ({label}) has {agent_actions} actions \
         but the environment has {env_actions}"
    )]
    ConfigurationMismatch {
        agent: usize,
        label: String,
        agent_actions: usize,
        env_actions: usize,
    },
    #[error("invalid testbed configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("cannot merge reward curves of different agents or episode lengths")]
    IncompatibleCurves,
}
