//! Command-line interface
mod agent;
mod env;
mod options;

pub use agent::AgentType;
pub use env::BanditConfig;
pub use options::{Options, OptionsError, OutputFormat};
