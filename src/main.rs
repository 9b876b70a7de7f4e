use clap::Parser;
use colored::Colorize;
use robot_pathfinder::grid::{generate, parse_grid};
use robot_pathfinder::pathfinding::ensure_solvable;
use robot_pathfinder::prelude::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    // Load or generate the map
    let grid = match &args.map {
        Some(path) => parse_grid(path)?,
        None => generate(args.width, args.height, args.obstacle_ratio, &mut rng)?,
    };
    ensure_solvable(&grid)?;

    let mut agent = match args.battery {
        Some(battery) => Agent::with_battery(&grid, battery),
        None => Agent::new(&grid),
    };

    // Run simulation
    let mut engine = SimulationEngine::from_args(args);
    let report = engine.run(&mut agent);

    // Print results
    engine.print_summary(&grid, &report);

    Ok(())
}
