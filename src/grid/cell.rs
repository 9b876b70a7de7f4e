use std::fmt;

/// Grid coordinate: `x` is the column, `y` the row, origin top-left
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What occupies a single grid cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellKind {
    #[default]
    Passable,
    Obstacle,
}

impl CellKind {
    /// Map-file symbol for this cell
    pub const fn symbol(self) -> char {
        match self {
            CellKind::Passable => '.',
            CellKind::Obstacle => '#',
        }
    }

    #[inline]
    pub fn is_passable(self) -> bool {
        self == CellKind::Passable
    }
}
