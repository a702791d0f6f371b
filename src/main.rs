use anyhow::Result;
use clap::{Parser, ValueEnum};
use snake_walk::game::GameConfig;
use snake_walk::modes::{SingleMode, StatsMode};

#[derive(Parser)]
#[command(name = "snake-walk")]
#[command(version, about = "Monte Carlo simulation of a wandering snake")]
struct Cli {
    /// What to run
    #[arg(long, default_value = "stats")]
    mode: Mode,

    /// Side length of the square grid
    #[arg(long, default_value = "1000")]
    dimension: usize,

    /// Snake length
    #[arg(long, default_value = "30")]
    length: usize,

    /// Number of independent trials (stats mode)
    #[arg(long, default_value = "1000")]
    trials: usize,

    /// Relative weight of turning left
    #[arg(long, default_value = "0.5")]
    left_weight: f64,

    /// Relative weight of going straight
    #[arg(long, default_value = "4.0")]
    straight_weight: f64,

    /// Relative weight of turning right
    #[arg(long, default_value = "0.5")]
    right_weight: f64,

    /// Ignore self-collisions so games only end by leaving the grid
    #[arg(long)]
    ignore_deaths: bool,

    /// Run trials across the rayon thread pool
    #[arg(long)]
    parallel: bool,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Run one game and print its result line
    Single,
    /// Run many trials and print aggregate statistics
    Stats,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = GameConfig {
        dimension: cli.dimension,
        snake_length: cli.length,
        turn_weights: [cli.left_weight, cli.straight_weight, cli.right_weight],
        ignore_self_collision: cli.ignore_deaths,
    };

    match cli.mode {
        Mode::Single => SingleMode::new(config).run(),
        Mode::Stats => StatsMode::new(config, cli.trials)
            .parallel(cli.parallel)
            .run(),
    }
}
