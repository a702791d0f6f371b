//! Single-trial mode: run one game and print its result line.

use anyhow::Result;
use log::info;

use crate::game::{GameConfig, GameEngine, GameOutcome};

/// Runs exactly one game and prints its `<cause>,<steps>` line.
pub struct SingleMode {
    config: GameConfig,
}

impl SingleMode {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        let outcome = self.run_game()?;
        println!("{},{}", outcome.cause, outcome.steps);
        Ok(())
    }

    pub fn run_game(&self) -> Result<GameOutcome> {
        info!(
            "running one game: dimension {}, snake length {}",
            self.config.dimension, self.config.snake_length
        );
        let mut engine = GameEngine::new(self.config.clone())?;
        engine.run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_game_terminates() {
        let mode = SingleMode::new(GameConfig::small());
        let outcome = mode.run_game().unwrap();
        assert!(outcome.steps >= 1);
    }

    #[test]
    fn test_impossible_placement_errors_out() {
        let mode = SingleMode::new(GameConfig::new(5, 30));
        assert!(mode.run_game().is_err());
    }
}
