use std::fmt;

use anyhow::{bail, Context, Result};
use log::{debug, error};

use super::{
    action::Heading,
    config::GameConfig,
    policy::{TurnPolicy, WeightedTurnPolicy},
    state::{Grid, Snake, StepFailure},
};

/// Lifecycle of one simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Running,
    Ended,
}

/// Why a game ended. Exactly one cause per game, by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndCause {
    /// The snake ran into its own body.
    SelfCollision,
    /// The snake's head left the grid.
    OutOfBounds,
}

impl fmt::Display for EndCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndCause::SelfCollision => write!(f, "SelfCollision"),
            EndCause::OutOfBounds => write!(f, "OutOfBounds"),
        }
    }
}

/// Terminal result of one game: what ended it and after how many steps.
///
/// The step count includes the final, failed step attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub cause: EndCause,
    pub steps: u64,
}

/// The game engine: drives one snake from placement to its end.
///
/// A fresh engine is built per trial and discarded once its outcome has
/// been extracted. Generic over the turn source so deterministic turn
/// scripts can be driven through it in tests.
pub struct GameEngine<P: TurnPolicy = WeightedTurnPolicy> {
    config: GameConfig,
    grid: Grid,
    policy: P,
    phase: GamePhase,
    heading: Heading,
    snake: Option<Snake>,
    steps: u64,
    outcome: Option<GameOutcome>,
}

impl GameEngine<WeightedTurnPolicy> {
    /// Create an engine sampling turns with the configured weights.
    pub fn new(config: GameConfig) -> Result<Self> {
        let policy = WeightedTurnPolicy::new(config.turn_weights)?;
        Ok(Self::with_policy(config, policy))
    }
}

impl<P: TurnPolicy> GameEngine<P> {
    /// Create an engine with an explicit turn source.
    pub fn with_policy(config: GameConfig, policy: P) -> Self {
        let grid = Grid::new(config.dimension);
        Self {
            config,
            grid,
            policy,
            phase: GamePhase::NotStarted,
            heading: Heading::Left,
            snake: None,
            steps: 0,
            outcome: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Run the game to its end and return the outcome.
    ///
    /// Errors here are fatal (impossible placement or a broken internal
    /// invariant), never normal game endings.
    pub fn run(&mut self) -> Result<GameOutcome> {
        loop {
            if let Some(outcome) = self.tick()? {
                return Ok(outcome);
            }
        }
    }

    /// Advance the state machine by one transition.
    ///
    /// Returns `Some(outcome)` once the game has ended.
    pub fn tick(&mut self) -> Result<Option<GameOutcome>> {
        match self.phase {
            GamePhase::NotStarted => {
                if self.config.snake_length == 0 {
                    error!("snake length must be at least 1");
                    bail!("snake length must be at least 1");
                }
                let snake = Snake::place(
                    &self.grid,
                    self.grid.center(),
                    Heading::Left,
                    self.config.snake_length,
                )
                .context("cannot place a snake at the grid center")?;
                self.snake = Some(snake);
                self.heading = Heading::Left;
                self.set_phase(GamePhase::Running);
                Ok(None)
            }
            GamePhase::Running => self.running_tick(),
            GamePhase::Ended => match self.outcome {
                Some(outcome) => Ok(Some(outcome)),
                None => {
                    error!("game ended without a recorded outcome");
                    bail!("game ended without a recorded outcome");
                }
            },
        }
    }

    fn running_tick(&mut self) -> Result<Option<GameOutcome>> {
        self.steps += 1;

        let turn = self.policy.next_turn();
        let old_heading = self.heading;
        self.heading = old_heading.apply_turn(turn);
        debug!("{:?} + {:?} -> {:?}", old_heading, turn, self.heading);

        let Some(snake) = self.snake.as_mut() else {
            error!("no snake present while the game is running");
            bail!("no snake present while the game is running");
        };

        match snake.step(&self.grid, self.heading) {
            Ok(()) => Ok(None),
            Err(StepFailure::OutOfBounds) => Ok(Some(self.end(EndCause::OutOfBounds))),
            Err(StepFailure::SelfCollision) if self.config.ignore_self_collision => {
                // The failed step left the snake untouched; only the heading
                // update and the step count stand.
                debug!("self-collision ignored at step {}", self.steps);
                Ok(None)
            }
            Err(StepFailure::SelfCollision) => Ok(Some(self.end(EndCause::SelfCollision))),
        }
    }

    fn end(&mut self, cause: EndCause) -> GameOutcome {
        let outcome = GameOutcome {
            cause,
            steps: self.steps,
        };
        debug!("game end due to {} after {} steps", cause, outcome.steps);
        self.outcome = Some(outcome);
        self.set_phase(GamePhase::Ended);
        outcome
    }

    fn set_phase(&mut self, phase: GamePhase) {
        debug!("game phase changed to {:?}", phase);
        self.phase = phase;
    }
}
