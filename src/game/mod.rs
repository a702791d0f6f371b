//! Core simulation logic for the wandering snake
//!
//! This module contains all the game logic without any I/O dependencies:
//! the grid and snake model, heading/turn arithmetic, the weighted turn
//! policy, and the engine that drives one game from placement to its end.

pub mod action;
pub mod config;
pub mod engine;
pub mod policy;
pub mod state;

// Re-export commonly used types
pub use action::{Heading, Turn};
pub use config::GameConfig;
pub use engine::{EndCause, GameEngine, GameOutcome, GamePhase};
pub use policy::{TurnPolicy, WeightedTurnPolicy};
pub use state::{Grid, PlacementError, Position, Snake, StepFailure};
