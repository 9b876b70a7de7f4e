use crate::direction::Direction;
use crate::error::{MapError, Result};
use crate::grid::{Coord, Grid};
use crate::pathfinding::path::Path;
use std::collections::VecDeque;

/// Marks a cell the search has not reached yet
const UNVISITED: usize = usize::MAX;

/// Which cells a search may enter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terrain {
    /// Obstacles block movement
    Obstacles,
    /// Every in-bounds cell is open; used for the battery estimate
    Open,
}

/// Whether any obstacle-free path joins the grid's start and end
pub fn path_exists(grid: &Grid) -> bool {
    search(grid, grid.start(), grid.end(), Terrain::Obstacles).is_some()
}

/// Fail with [`MapError::NoPath`] unless [`path_exists`] holds
pub fn ensure_solvable(grid: &Grid) -> Result<()> {
    if path_exists(grid) {
        Ok(())
    } else {
        Err(MapError::NoPath {
            start: grid.start(),
            end: grid.end(),
        })
    }
}

/// Shortest obstacle-avoiding path from `source` to `destination`.
///
/// Returns `None` when the destination is out of bounds or cut off by
/// obstacles. Among equally short paths the one found by expanding
/// neighbours in [`Direction::ALL`] order wins.
pub fn find_path(grid: &Grid, source: Coord, destination: Coord) -> Option<Path> {
    search(grid, source, destination, Terrain::Obstacles)
}

/// Shortest move count between two cells with obstacles ignored
pub fn open_distance(grid: &Grid, source: Coord, destination: Coord) -> Option<usize> {
    search(grid, source, destination, Terrain::Open).map(|path| path.steps())
}

/// 4-connected breadth-first search.
///
/// Each cell is enqueued at most once; `parent` doubles as the visited set,
/// with the source pointing at itself. The search stops as soon as the
/// destination is dequeued.
pub fn search(grid: &Grid, source: Coord, destination: Coord, terrain: Terrain) -> Option<Path> {
    let src_idx = grid.index_of(source)?;
    let dst_idx = grid.index_of(destination)?;

    let mut parent = vec![UNVISITED; grid.area()];
    parent[src_idx] = src_idx;

    let mut queue = VecDeque::with_capacity(grid.area());
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        if current == destination {
            break;
        }
        let Some(cur_idx) = grid.index_of(current) else {
            continue;
        };

        for dir in Direction::ALL {
            let next = dir.step(current);
            let Some(idx) = grid.index_of(next) else {
                continue;
            };
            if parent[idx] != UNVISITED {
                continue;
            }
            if terrain == Terrain::Obstacles && grid.is_obstacle(next) {
                continue;
            }
            parent[idx] = cur_idx;
            queue.push_back(next);
        }
    }

    if parent[dst_idx] == UNVISITED {
        return None;
    }

    let width = grid.width() as usize;
    let mut cells = Vec::new();
    let mut idx = dst_idx;
    loop {
        cells.push(Coord::new((idx % width) as i32, (idx / width) as i32));
        if idx == src_idx {
            break;
        }
        idx = parent[idx];
    }
    cells.reverse();

    Some(Path::from_cells(cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::parse_grid_from_str;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn test_open_grid_path() {
        let grid = Grid::open(3, 3, c(0, 0), c(2, 2)).unwrap();

        assert!(path_exists(&grid));
        let path = find_path(&grid, grid.start(), grid.end()).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(open_distance(&grid, grid.start(), grid.end()), Some(4));
    }

    #[test]
    fn test_ensure_solvable() {
        let open = Grid::open(3, 3, c(0, 0), c(2, 2)).unwrap();
        assert!(ensure_solvable(&open).is_ok());

        let walled = Grid::new(3, 3, c(0, 0), c(2, 0), &[c(1, 0), c(1, 1), c(1, 2)]).unwrap();
        let err = ensure_solvable(&walled).unwrap_err();
        assert!(matches!(err, MapError::NoPath { start, end } if start == c(0, 0) && end == c(2, 0)));
        assert_eq!(err.to_string(), "map is unsolvable: no path from (0, 0) to (2, 0)");
    }

    #[test]
    fn test_tie_break_prefers_positive_x_first() {
        let grid = Grid::open(3, 3, c(0, 0), c(2, 2)).unwrap();
        let path = find_path(&grid, c(0, 0), c(2, 2)).unwrap();

        assert_eq!(path.coords(), &[c(0, 0), c(1, 0), c(2, 0), c(2, 1), c(2, 2)]);
    }

    #[test]
    fn test_wall_blocks_path() {
        let grid = Grid::new(3, 3, c(0, 0), c(2, 0), &[c(1, 0), c(1, 1), c(1, 2)]).unwrap();

        assert!(!path_exists(&grid));
        assert_eq!(find_path(&grid, grid.start(), grid.end()), None);
        // Obstacles do not matter for the open distance
        assert_eq!(open_distance(&grid, grid.start(), grid.end()), Some(2));
    }

    #[test]
    fn test_detour_around_obstacles() {
        let grid = parse_grid_from_str(
            "S#.\n\
             .#.\n\
             ..E\n",
        )
        .unwrap();

        let path = find_path(&grid, grid.start(), grid.end()).unwrap();
        assert_eq!(path.coords(), &[c(0, 0), c(0, 1), c(0, 2), c(1, 2), c(2, 2)]);
    }

    #[test]
    fn test_source_equals_destination() {
        let grid = Grid::open(2, 2, c(1, 1), c(1, 1)).unwrap();

        assert!(path_exists(&grid));
        let path = find_path(&grid, c(1, 1), c(1, 1)).unwrap();
        assert_eq!(path.coords(), &[c(1, 1)]);
        assert_eq!(open_distance(&grid, c(1, 1), c(1, 1)), Some(0));
    }

    #[test]
    fn test_out_of_bounds_queries() {
        let grid = Grid::open(3, 3, c(0, 0), c(2, 2)).unwrap();

        assert_eq!(find_path(&grid, c(0, 0), c(3, 3)), None);
        assert_eq!(find_path(&grid, c(-1, 0), c(2, 2)), None);
        assert_eq!(open_distance(&grid, c(0, 0), c(0, 5)), None);
    }

    #[test]
    fn test_obstacle_destination_is_unreachable() {
        let grid = Grid::new(3, 3, c(0, 0), c(2, 2), &[c(1, 1)]).unwrap();

        assert_eq!(find_path(&grid, c(0, 0), c(1, 1)), None);
    }

    #[test]
    fn test_repeated_queries_agree() {
        let grid = parse_grid_from_str(
            "S...\n\
             .##.\n\
             ...E\n",
        )
        .unwrap();

        let first = find_path(&grid, grid.start(), grid.end());
        for _ in 0..10 {
            assert_eq!(find_path(&grid, grid.start(), grid.end()), first);
        }
    }
}
