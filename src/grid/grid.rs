use crate::error::{MapError, Result};
use crate::grid::cell::{CellKind, Coord};
use std::fmt;

/// Largest number of cells a grid may hold
pub const MAX_CELLS: usize = 1 << 24;

/// Immutable rectangular board with fixed start and end cells.
///
/// Cells are stored row-major. A `Grid` can only be obtained through
/// [`Grid::new`] (or the parser/generator built on it), so start and end are
/// always in bounds and passable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<CellKind>,
    start: Coord,
    end: Coord,
}

impl Grid {
    /// Build a grid and validate its start, end and obstacles
    pub fn new(width: u32, height: u32, start: Coord, end: Coord, obstacles: &[Coord]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MapError::EmptyGrid { width, height });
        }
        let area = (width as usize)
            .checked_mul(height as usize)
            .filter(|&area| area <= MAX_CELLS)
            .ok_or(MapError::GridTooLarge { width, height })?;

        let mut grid = Self {
            width,
            height,
            cells: vec![CellKind::Passable; area],
            start,
            end,
        };

        if !grid.in_bounds(start) {
            return Err(MapError::StartOutOfBounds(start));
        }
        if !grid.in_bounds(end) {
            return Err(MapError::EndOutOfBounds(end));
        }

        for &obstacle in obstacles {
            let idx = grid
                .index_of(obstacle)
                .ok_or(MapError::ObstacleOutOfBounds(obstacle))?;
            grid.cells[idx] = CellKind::Obstacle;
        }

        if grid.is_obstacle(start) {
            return Err(MapError::StartBlocked(start));
        }
        if grid.is_obstacle(end) {
            return Err(MapError::EndBlocked(end));
        }

        Ok(grid)
    }

    /// Obstacle-free grid
    pub fn open(width: u32, height: u32, start: Coord, end: Coord) -> Result<Self> {
        Self::new(width, height, start, end, &[])
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Coord {
        self.end
    }

    /// Total number of cells
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as u32) < self.width && (c.y as u32) < self.height
    }

    /// Row-major index of an in-bounds coordinate
    #[inline]
    pub fn index_of(&self, c: Coord) -> Option<usize> {
        self.in_bounds(c)
            .then(|| c.y as usize * self.width as usize + c.x as usize)
    }

    /// Cell lookup; `None` outside the grid
    #[inline]
    pub fn cell(&self, c: Coord) -> Option<CellKind> {
        self.index_of(c).map(|idx| self.cells[idx])
    }

    /// In bounds and not an obstacle
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.cell(c).is_some_and(CellKind::is_passable)
    }

    #[inline]
    pub fn is_obstacle(&self, c: Coord) -> bool {
        self.cell(c) == Some(CellKind::Obstacle)
    }

    /// Count obstacle cells
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|k| !k.is_passable()).count()
    }

    /// Every in-bounds coordinate, row by row
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height as i32).flat_map(move |y| (0..self.width as i32).map(move |x| Coord::new(x, y)))
    }

    /// Map-file symbol for a cell, with start and end marked
    pub fn symbol_at(&self, c: Coord) -> char {
        if c == self.start {
            'S'
        } else if c == self.end {
            'E'
        } else {
            self.cell(c).map_or(' ', CellKind::symbol)
        }
    }
}

/// Writes the grid in the same format the parser reads
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = String::with_capacity(self.width as usize);
        for y in 0..self.height as i32 {
            line.clear();
            line.extend((0..self.width as i32).map(|x| self.symbol_at(Coord::new(x, y))));
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
