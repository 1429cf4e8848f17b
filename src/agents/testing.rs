//! Agent testing utilities
use super::{Agent, BuildAgent};
use crate::envs::{Bandit, Environment};
use crate::Prng;
use rand::SeedableRng;

/// Check that the agent can be trained to perform well on a trivial bandit environment.
///
/// The environment is a deterministic multi-armed bandit with two arms:
/// the first arm always gives 0 reward and the second 1.
/// After training, the agent must choose the second arm on at least
/// `threshold` of 1000 further steps.
#[allow(clippy::cast_possible_truncation)]
pub fn train_deterministic_bandit<B: BuildAgent>(
    config: &B,
    num_train_steps: u64,
    threshold: f64,
) {
    let env = Bandit::new(vec![0.0, 1.0], 0.0).unwrap();
    let mut agent = config.build_agent(env.num_actions()).unwrap();
    let mut rng = Prng::seed_from_u64(0);

    for _ in 0..num_train_steps {
        step(&env, &mut agent, &mut rng);
    }

    let num_eval_steps: u32 = 1000;
    let action_1_count = (0..num_eval_steps)
        .filter(|_| step(&env, &mut agent, &mut rng) == 1)
        .count();
    assert!(action_1_count >= (f64::from(num_eval_steps) * threshold) as usize);
}

fn step<E: Environment, T: Agent>(env: &E, agent: &mut T, rng: &mut Prng) -> usize {
    let action = agent.choose_action(rng);
    let reward = env.act(action, rng).unwrap();
    agent.update(action, reward);
    action
}
