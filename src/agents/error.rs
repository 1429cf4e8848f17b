//! Agent errors
use thiserror::Error;

/// Error building an agent
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BuildAgentError {
    #[error("an agent must have at least one action")]
    NoActions,
    #[error("epsilon must be in [0, 1], got {0}")]
    InvalidEpsilon(f64),
    #[error("temperature must be positive and finite, got {0}")]
    InvalidTemperature(f64),
}
