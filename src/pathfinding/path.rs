use crate::grid::Coord;

/// Ordered, non-empty sequence of 4-adjacent coordinates from a source to a
/// destination. Produced fresh by every search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Coord>,
}

impl Path {
    /// Wrap cells produced by a search; callers guarantee at least one cell
    pub(crate) fn from_cells(cells: Vec<Coord>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    /// Number of cells, source and destination included
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; kept for the `len` convention
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves along the path
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    #[inline]
    pub fn source(&self) -> Coord {
        self.cells[0]
    }

    #[inline]
    pub fn destination(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    /// Cell reached after one move, `None` when source == destination
    #[inline]
    pub fn next_hop(&self) -> Option<Coord> {
        self.cells.get(1).copied()
    }

    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.cells
    }
}
