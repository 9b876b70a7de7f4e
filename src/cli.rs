use crate::grid::generator::{DEFAULT_OBSTACLE_RATIO, DEFAULT_SIZE};
use clap::Parser;

/// CLI arguments for the robot simulation
#[derive(Parser, Debug)]
#[command(name = "robot_pathfinder", about = "🤖 Battery-limited robot crossing a grid")]
pub struct Args {
    /// Path to a text map ('.' open, '#' obstacle, 'S' start, 'E' end);
    /// a random map is generated when omitted
    #[arg(short = 'm', long = "map")]
    pub map: Option<String>,

    /// Width of a generated map
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    pub width: u32,

    /// Height of a generated map
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    pub height: u32,

    /// Share of a generated map covered by obstacles
    #[arg(long, default_value_t = DEFAULT_OBSTACLE_RATIO)]
    pub obstacle_ratio: f64,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the initial battery
    #[arg(long)]
    pub battery: Option<u32>,

    /// Print the board after every move
    #[arg(long, default_value_t = false)]
    pub render: bool,

    /// Suppress per-move logs
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}
