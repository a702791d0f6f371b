//! Trial harness: Monte Carlo statistics over many independent games
//!
//! Runs N freshly-constructed engines with identical configuration, prints
//! one `<cause>,<steps>` line per trial, and finishes with a two-line
//! summary of per-cause counts and average step counts.

use anyhow::Result;
use log::info;
use rayon::prelude::*;

use crate::game::{GameConfig, GameEngine, GameOutcome};
use crate::metrics::TrialStats;

/// Runs a batch of independent trials and reports aggregate statistics.
pub struct StatsMode {
    config: GameConfig,
    trials: usize,
    parallel: bool,
}

impl StatsMode {
    pub fn new(config: GameConfig, trials: usize) -> Self {
        Self {
            config,
            trials,
            parallel: false,
        }
    }

    /// Run trials across the rayon thread pool instead of sequentially.
    /// Trials share no mutable state; aggregation happens afterwards.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn run(&self) -> Result<()> {
        info!(
            "running {} trials: dimension {}, snake length {}, weights {:?}, ignore deaths: {}",
            self.trials,
            self.config.dimension,
            self.config.snake_length,
            self.config.turn_weights,
            self.config.ignore_self_collision,
        );

        let outcomes = self.collect_outcomes()?;

        let mut stats = TrialStats::new();
        for outcome in &outcomes {
            println!("{},{}", outcome.cause, outcome.steps);
            stats.record(*outcome);
        }

        println!("{}", stats.format_summary());
        Ok(())
    }

    /// Run every trial to completion, each on a fresh engine.
    pub fn collect_outcomes(&self) -> Result<Vec<GameOutcome>> {
        let run_one = |_: usize| -> Result<GameOutcome> {
            let mut engine = GameEngine::new(self.config.clone())?;
            engine.run()
        };

        if self.parallel {
            (0..self.trials).into_par_iter().map(run_one).collect()
        } else {
            (0..self.trials).map(run_one).collect()
        }
    }
}
