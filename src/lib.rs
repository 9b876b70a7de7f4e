//! # Robot Pathfinder
//!
//! A battery-limited robot crossing a 2-D grid.
//!
//! This library provides the grid model, breadth-first shortest-path search
//! over 4-connected cells, and the agent that re-plans and moves one cell per
//! battery unit until it reaches the end cell or runs dry.

pub mod agent;
pub mod cli;
pub mod direction;
pub mod error;
pub mod grid;
pub mod pathfinding;
pub mod simulation;

pub use agent::{Agent, AgentStatus};
pub use cli::Args;
pub use direction::Direction;
pub use error::{MapError, Result};
pub use grid::{CellKind, Coord, Grid};
pub use pathfinding::Path;
pub use simulation::SimulationEngine;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{Agent, AgentStatus, Args, CellKind, Coord, Direction, Grid, MapError, Result, SimulationEngine};
}
