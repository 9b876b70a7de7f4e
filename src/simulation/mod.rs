pub mod engine;

pub use engine::{board_lines, SimulationEngine, SimulationReport};
