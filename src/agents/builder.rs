use super::{Agent, BuildAgentError};

/// Build an agent for an environment with a given number of actions.
///
/// Used as an agent factory by a [`Testbed`](crate::Testbed):
/// a fresh agent is built at the start of every episode.
pub trait BuildAgent {
    type Agent: Agent;

    /// Build a new agent.
    ///
    /// # Args
    /// * `num_actions` - Number of actions in the environment the agent will act in.
    fn build_agent(&self, num_actions: usize) -> Result<Self::Agent, BuildAgentError>;
}

/// Closures can act as agent builders.
impl<F, T> BuildAgent for F
where
    F: Fn(usize) -> Result<T, BuildAgentError>,
    T: Agent,
{
    type Agent = T;

    fn build_agent(&self, num_actions: usize) -> Result<Self::Agent, BuildAgentError> {
        self(num_actions)
    }
}
