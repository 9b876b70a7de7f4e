use crate::grid::Coord;
use thiserror::Error;

/// Errors raised while building, loading or generating a map
#[derive(Debug, Error)]
pub enum MapError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    #[error("grid {width}x{height} exceeds the {max} cell limit", max = crate::grid::grid::MAX_CELLS)]
    GridTooLarge { width: u32, height: u32 },

    #[error("start {0} is outside the grid")]
    StartOutOfBounds(Coord),

    #[error("end {0} is outside the grid")]
    EndOutOfBounds(Coord),

    #[error("obstacle {0} is outside the grid")]
    ObstacleOutOfBounds(Coord),

    #[error("start {0} is placed on an obstacle")]
    StartBlocked(Coord),

    #[error("end {0} is placed on an obstacle")]
    EndBlocked(Coord),

    /// Unknown character in a map file
    #[error("unknown cell '{ch}' at row {row}, column {col}")]
    UnknownCell { ch: char, row: usize, col: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("map has no start cell 'S'")]
    MissingStart,

    #[error("map has no end cell 'E'")]
    MissingEnd,

    #[error("map has more than one start cell (second at {0})")]
    DuplicateStart(Coord),

    #[error("map has more than one end cell (second at {0})")]
    DuplicateEnd(Coord),

    #[error("obstacle ratio {0} must be within [0, 1)")]
    InvalidObstacleRatio(f64),

    /// Loaded map whose end cannot be reached from its start
    #[error("map is unsolvable: no path from {start} to {end}")]
    NoPath { start: Coord, end: Coord },

    /// Generator gave up drawing a layout with a path from start to end
    #[error("no path from start to end after {attempts} attempts")]
    Unsolvable { attempts: usize },
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, MapError>;
