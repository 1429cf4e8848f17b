//! Agent definitions from options
use super::Options;
use crate::agents::BanditAgentConfig;
use clap::ArgEnum;

/// Agent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ArgEnum)]
pub enum AgentType {
    /// Always exploit the current estimates
    Greedy,
    /// Explore uniformly with probability epsilon
    EpsilonGreedy,
    /// Sample from a Boltzmann distribution over the estimates
    Softmax,
}

impl AgentType {
    pub fn agent_config(self, opts: &Options) -> BanditAgentConfig {
        match self {
            Self::Greedy => BanditAgentConfig::greedy(),
            Self::EpsilonGreedy => BanditAgentConfig::epsilon_greedy(opts.epsilon),
            Self::Softmax => BanditAgentConfig::softmax(opts.temperature),
        }
    }
}

impl From<&Options> for Vec<BanditAgentConfig> {
    fn from(opts: &Options) -> Self {
        opts.agents.iter().map(|a| a.agent_config(opts)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn default_agents() {
        let opts = Options::try_parse_from(["nbandit", "--epsilon", "0.3"]).unwrap();
        let configs: Vec<BanditAgentConfig> = (&opts).into();
        assert_eq!(
            configs,
            vec![
                BanditAgentConfig::greedy(),
                BanditAgentConfig::epsilon_greedy(0.3),
                BanditAgentConfig::softmax(0.2),
            ]
        );
    }
}
