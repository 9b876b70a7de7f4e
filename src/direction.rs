use crate::grid::Coord;

/// The 4 cardinal steps a robot can take
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    East,
    West,
    South,
    North,
}

impl Direction {
    /// All directions in BFS expansion order: +x, -x, +y, -y.
    ///
    /// The order decides which of several equally short paths a search
    /// returns, so it must not change.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
    ];

    /// Unit offset `(dx, dy)`; y grows downwards
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::North => (0, -1),
        }
    }

    /// Coordinate one step away from `from`
    #[inline]
    pub const fn step(self, from: Coord) -> Coord {
        let (dx, dy) = self.delta();
        Coord::new(from.x + dx, from.y + dy)
    }

    /// Direction leading from `from` to an adjacent `to`, if they are 4-adjacent
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.step(from) == to)
    }

    /// Get direction name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::East => "east",
            Direction::West => "west",
            Direction::South => "south",
            Direction::North => "north",
        }
    }
}
