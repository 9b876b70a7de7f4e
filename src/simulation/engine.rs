use crate::agent::{Agent, AgentStatus};
use crate::cli::Args;
use crate::direction::Direction;
use crate::grid::{Coord, Grid};
use colored::Colorize;
use std::time::{Duration, Instant};

/// What happened during one run
#[derive(Clone, Debug)]
pub struct SimulationReport {
    pub outcome: AgentStatus,
    /// Successful moves
    pub steps: u32,
    pub initial_battery: u32,
    pub battery_left: u32,
    /// Every cell the agent stood on, start first
    pub trail: Vec<Coord>,
    pub elapsed: Duration,
}

/// Drives an agent until it reaches the goal, runs dry or gets stuck
pub struct SimulationEngine {
    suppress_events: bool,
    render: bool,
}

impl SimulationEngine {
    pub fn new(suppress_events: bool, render: bool) -> Self {
        Self {
            suppress_events,
            render,
        }
    }

    pub fn from_args(args: &Args) -> Self {
        Self::new(args.suppress_events, args.render)
    }

    /// Engine that prints nothing while running
    pub fn quiet() -> Self {
        Self::new(true, false)
    }

    /// Step the agent until `step` refuses to move
    pub fn run(&mut self, agent: &mut Agent<'_>) -> SimulationReport {
        let sim_start = Instant::now();
        let initial_battery = agent.battery();

        // A trail never outgrows the board, whatever the battery says
        let mut trail = Vec::with_capacity((initial_battery as usize).min(agent.grid().area()) + 1);
        trail.push(agent.position());
        if self.render {
            self.print_board(agent.grid(), &trail);
        }

        loop {
            let from = agent.position();
            if !agent.step() {
                break;
            }
            trail.push(agent.position());
            self.log_move(from, agent.position(), agent.battery());
            if self.render {
                self.print_board(agent.grid(), &trail);
            }
        }

        SimulationReport {
            outcome: agent.status(),
            steps: (trail.len() - 1) as u32,
            initial_battery,
            battery_left: agent.battery(),
            trail,
            elapsed: sim_start.elapsed(),
        }
    }

    /// Log a single move event
    #[inline]
    fn log_move(&self, from: Coord, to: Coord, battery: u32) {
        if self.suppress_events {
            return;
        }
        let heading = Direction::between(from, to).map_or("?", Direction::as_str);
        println!(
            "{} {} {} {}",
            "🤖".cyan(),
            format!("moved {}", heading).white(),
            format!("{} -> {}", from, to).yellow(),
            format!("battery={}", battery).green()
        );
    }

    fn print_board(&self, grid: &Grid, trail: &[Coord]) {
        for line in board_lines(grid, trail) {
            let row: String = line
                .chars()
                .map(|ch| match ch {
                    '@' => ch.to_string().yellow().bold().to_string(),
                    '*' => ch.to_string().cyan().to_string(),
                    '#' => ch.to_string().red().to_string(),
                    'S' => ch.to_string().green().bold().to_string(),
                    'E' => ch.to_string().blue().bold().to_string(),
                    _ => ch.to_string().dimmed().to_string(),
                })
                .collect();
            println!("{}", row);
        }
        println!();
    }

    /// Print simulation summary
    pub fn print_summary(&self, grid: &Grid, report: &SimulationReport) {
        let outcome = match report.outcome {
            AgentStatus::ReachedEnd => format!("outcome={}", report.outcome.as_str()).green(),
            _ => format!("outcome={}", report.outcome.as_str()).red(),
        };
        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            report.elapsed.as_secs_f64() * 1000.0,
            format!("(grid {}x{}, obstacles={})", grid.width(), grid.height(), grid.obstacle_count()).dimmed(),
            "|".dimmed(),
            outcome.bold(),
            format!("steps={}", report.steps).cyan(),
            format!("battery={}/{}", report.battery_left, report.initial_battery).cyan(),
        );
    }
}

/// Plain-text board with the trail drawn in: `@` marks the last trail cell,
/// `*` earlier ones. Start and end keep their letters unless the agent stands
/// on them.
pub fn board_lines(grid: &Grid, trail: &[Coord]) -> Vec<String> {
    let current = trail.last().copied();
    (0..grid.height() as i32)
        .map(|y| {
            (0..grid.width() as i32)
                .map(|x| {
                    let here = Coord::new(x, y);
                    if Some(here) == current {
                        '@'
                    } else if here != grid.start() && here != grid.end() && trail.contains(&here) {
                        '*'
                    } else {
                        grid.symbol_at(here)
                    }
                })
                .collect()
        })
        .collect()
}
