//! Command-line progress display
use crate::simulation::{Report, ReportHook, RewardCurves};
use std::fmt;
use yansi::Paint;

/// Hook that displays the running final-step average rewards on standard output.
///
/// A line is printed for every report on an episode that is a positive multiple of
/// `display_interval`, and a summary is printed when the testbed finishes.
/// Only reported episodes are seen, so `display_interval` should be a multiple of the
/// testbed's `report_interval`; otherwise lines appear only at common multiples.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DisplayLogger {
    pub display_interval: u64,
}

impl Default for DisplayLogger {
    fn default() -> Self {
        Self {
            display_interval: 100,
        }
    }
}

impl DisplayLogger {
    pub const fn new(display_interval: u64) -> Self {
        Self { display_interval }
    }

    /// Whether the report for the given episode is displayed.
    pub const fn displays(&self, episode: u64) -> bool {
        self.display_interval != 0 && episode != 0 && episode % self.display_interval == 0
    }
}

impl ReportHook for DisplayLogger {
    fn report(&mut self, report: &Report) {
        if self.displays(report.episode) {
            println!("{}", DisplayReport(report));
        }
    }

    fn finish(&mut self, curves: &RewardCurves) {
        println!();
        println!("{}", Paint::fixed(35, "==== Testbed summary ===="));
        print!("{}", curves);
    }
}

/// One-line progress message for a report.
struct DisplayReport<'a, 'b>(&'a Report<'b>);

impl fmt::Display for DisplayReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let report = self.0;
        write!(f, "Episode {}:", Paint::fixed(111, report.episode))?;
        let rewards = report.final_step_rewards();
        for (i, (label, reward)) in report.labels.iter().zip(rewards).enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{}: {:.3}", sep, label, Paint::fixed(253, reward))?;
        }
        write!(
            f,
            " {}",
            Paint::fixed(8, format!("({:.1} e/s)", report.episodes_per_second()))
        )
    }
}
