//! Testbed hooks.
//!
//! Hooks receive read-only snapshots of the running average rewards.
//! They are the boundary to anything that displays, plots, or saves results.
use super::RewardCurves;
use impl_trait_for_tuples::impl_for_tuples;
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Snapshot of the testbed accumulator after an episode.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    /// Index of the episode that just completed.
    pub episode: u64,
    /// Agent labels, one per accumulator row.
    pub labels: &'a [String],
    /// Average reward with shape `[num_agents, episode_length]`.
    pub avg_reward: ArrayView2<'a, f64>,
    /// Wall-clock time since the start of the evaluation.
    pub elapsed: Duration,
}

impl<'a> Report<'a> {
    /// Number of episodes included in the averages.
    pub const fn num_episodes(&self) -> u64 {
        self.episode + 1
    }

    /// Simulation throughput in episodes per second.
    pub fn episodes_per_second(&self) -> f64 {
        self.num_episodes() as f64 / self.elapsed.as_secs_f64()
    }

    /// Average reward of each agent on the last step of an episode.
    pub fn final_step_rewards(&self) -> ArrayView1<'a, f64> {
        let last = self.avg_reward.len_of(Axis(1)).saturating_sub(1);
        self.avg_reward.index_axis_move(Axis(1), last)
    }
}

/// A testbed hook.
///
/// Called with a [`Report`] at the configured episode interval,
/// then once with the final [`RewardCurves`].
pub trait ReportHook {
    /// Receive a snapshot of the current averages.
    fn report(&mut self, report: &Report);

    /// Receive the final results after all episodes.
    fn finish(&mut self, _curves: &RewardCurves) {}
}

impl ReportHook for () {
    fn report(&mut self, _: &Report) {}
}

impl<H: ReportHook + ?Sized> ReportHook for &mut H {
    fn report(&mut self, report: &Report) {
        H::report(self, report)
    }
    fn finish(&mut self, curves: &RewardCurves) {
        H::finish(self, curves)
    }
}

impl<H: ReportHook + ?Sized> ReportHook for Box<H> {
    fn report(&mut self, report: &Report) {
        H::report(self, report)
    }
    fn finish(&mut self, curves: &RewardCurves) {
        H::finish(self, curves)
    }
}

impl<H: ReportHook> ReportHook for Option<H> {
    fn report(&mut self, report: &Report) {
        if let Some(hook) = self {
            hook.report(report)
        }
    }
    fn finish(&mut self, curves: &RewardCurves) {
        if let Some(hook) = self {
            hook.finish(curves)
        }
    }
}

#[impl_for_tuples(1, 12)]
impl ReportHook for Tuple {
    fn report(&mut self, report: &Report) {
        for_tuples!( #( self.Tuple.report(report); )* )
    }
    fn finish(&mut self, curves: &RewardCurves) {
        for_tuples!( #( self.Tuple.finish(curves); )* )
    }
}

/// An owned copy of the testbed averages after an episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub episode: u64,
    pub avg_reward: Array2<f64>,
}

/// Records every report as a [`Frame`].
///
/// The recorded frames are the input for rendering an animation of the learning curves.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecorder {
    pub frames: Vec<Frame>,
}

impl FrameRecorder {
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

impl ReportHook for FrameRecorder {
    fn report(&mut self, report: &Report) {
        self.frames.push(Frame {
            episode: report.episode,
            avg_reward: report.avg_reward.to_owned(),
        });
    }
}
