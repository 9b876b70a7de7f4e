pub mod cell;
pub mod generator;
pub mod grid;
pub mod parser;

pub use cell::{CellKind, Coord};
pub use generator::generate;
pub use grid::Grid;
pub use parser::{parse_grid, parse_grid_from_str};
