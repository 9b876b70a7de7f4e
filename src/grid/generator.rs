use crate::error::{MapError, Result};
use crate::grid::cell::Coord;
use crate::grid::grid::Grid;
use crate::pathfinding::path_exists;

/// Default board side length
pub const DEFAULT_SIZE: u32 = 8;

/// Share of the board that may be covered by obstacles
pub const DEFAULT_OBSTACLE_RATIO: f64 = 0.12;

/// Layouts drawn before giving up on a solvable board
pub const MAX_ATTEMPTS: usize = 1_000;

/// Number of obstacles placed on a `width` x `height` board: floor(W * H * ratio)
pub fn obstacle_budget(width: u32, height: u32, ratio: f64) -> usize {
    (width as f64 * height as f64 * ratio) as usize
}

/// Generate a random solvable grid.
///
/// The start sits in the bottom-left corner and the end in the top-right
/// corner. Obstacles are drawn uniformly from the remaining cells; layouts
/// without a path from start to end are redrawn.
pub fn generate(width: u32, height: u32, ratio: f64, rng: &mut fastrand::Rng) -> Result<Grid> {
    if !(0.0..1.0).contains(&ratio) {
        return Err(MapError::InvalidObstacleRatio(ratio));
    }
    if width == 0 || height == 0 {
        return Err(MapError::EmptyGrid { width, height });
    }

    let start = Coord::new(0, height as i32 - 1);
    let end = Coord::new(width as i32 - 1, 0);

    let open = Grid::open(width, height, start, end)?;
    let mut candidates: Vec<Coord> = open
        .coords()
        .filter(|&c| c != start && c != end)
        .collect();
    let count = obstacle_budget(width, height, ratio).min(candidates.len());
    if count == 0 {
        return Ok(open);
    }

    for _ in 0..MAX_ATTEMPTS {
        rng.shuffle(&mut candidates);
        let grid = Grid::new(width, height, start, end, &candidates[..count])?;
        if path_exists(&grid) {
            return Ok(grid);
        }
    }

    Err(MapError::Unsolvable {
        attempts: MAX_ATTEMPTS,
    })
}
