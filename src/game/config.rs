use serde::{Deserialize, Serialize};

/// Configuration for one simulated game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid
    pub dimension: usize,
    /// Fixed length of the snake
    pub snake_length: usize,
    /// Relative weights for sampling [left, straight, right] turns
    pub turn_weights: [f64; 3],
    /// Swallow self-collisions instead of ending the game
    pub ignore_self_collision: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: 1000,
            snake_length: 30,
            // Straight is weighted 8x each turn option, which produces long
            // wandering runs instead of tight zig-zags.
            turn_weights: [0.5, 4.0, 0.5],
            ignore_self_collision: false,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size and snake length
    pub fn new(dimension: usize, snake_length: usize) -> Self {
        Self {
            dimension,
            snake_length,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(10, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.dimension, 1000);
        assert_eq!(config.snake_length, 30);
        assert_eq!(config.turn_weights, [0.5, 4.0, 0.5]);
        assert!(!config.ignore_self_collision);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 5);
        assert_eq!(config.dimension, 15);
        assert_eq!(config.snake_length, 5);
    }
}
