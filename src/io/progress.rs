//! Progress display for simulation runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::game::simulation::GameReport;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Games: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking finished games and the best score so far
pub struct SimulationProgress {
    bar: ProgressBar,
    best_score: u64,
    wins: usize,
}

impl SimulationProgress {
    /// Create a bar for `games` games; a hidden bar when `visible` is false
    pub fn new(games: usize, visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new(games as u64);
            bar.set_style(PROGRESS_STYLE.clone());
            bar
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            best_score: 0,
            wins: 0,
        }
    }

    /// Account for one finished game
    pub fn record(&mut self, report: &GameReport) {
        self.best_score = self.best_score.max(report.score);
        if report.won {
            self.wins += 1;
        }
        self.bar.inc(1);
        self.bar
            .set_message(format!("best {} | wins {}", self.best_score, self.wins));
    }

    /// Games accounted for so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
