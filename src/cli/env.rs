//! Environment definitions from options
use super::Options;
use crate::envs::{
    Bandit, BuildEnv, BuildEnvError, FixedMeansBanditConfig, PriorMeansBanditConfig,
};
use crate::Prng;
use serde::{Deserialize, Serialize};

/// Either bandit configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BanditConfig {
    FixedMeans(FixedMeansBanditConfig),
    PriorMeans(PriorMeansBanditConfig),
}

impl BuildEnv for BanditConfig {
    type Environment = Bandit;

    fn build_env(&self, rng: &mut Prng) -> Result<Self::Environment, BuildEnvError> {
        match self {
            Self::FixedMeans(config) => config.build_env(rng),
            Self::PriorMeans(config) => config.build_env(rng),
        }
    }
}

impl From<&Options> for BanditConfig {
    fn from(opts: &Options) -> Self {
        match opts.arm_means {
            Some(ref means) => {
                Self::FixedMeans(FixedMeansBanditConfig::new(means.clone(), opts.noise_std))
            }
            None => Self::PriorMeans(PriorMeansBanditConfig::new(opts.num_arms, opts.noise_std)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envs::Environment;
    use clap::Parser;
    use rand::SeedableRng;

    #[test]
    fn prior_by_default() {
        let opts = Options::try_parse_from(["nbandit", "--num-arms", "4"]).unwrap();
        let config = BanditConfig::from(&opts);
        assert_eq!(
            config,
            BanditConfig::PriorMeans(PriorMeansBanditConfig::new(4, 1.0))
        );
        let env = config.build_env(&mut Prng::seed_from_u64(0)).unwrap();
        assert_eq!(env.num_actions(), 4);
    }

    #[test]
    fn fixed_means() {
        let opts =
            Options::try_parse_from(["nbandit", "--arm-means", "1,2", "--noise-std", "0"]).unwrap();
        let env = BanditConfig::from(&opts)
            .build_env(&mut Prng::seed_from_u64(0))
            .unwrap();
        assert_eq!(env.true_means(), &[1.0, 2.0]);
        assert_eq!(env.noise_std(), 0.0);
    }
}
