//! Snake Walk - Monte Carlo simulation of a randomly wandering snake
//!
//! This library provides:
//! - Core game logic (game module): grid, snake, turn policy, engine
//! - Outcome aggregation (metrics module)
//! - Execution modes (modes module): single trial, batch statistics

pub mod game;
pub mod metrics;
pub mod modes;
