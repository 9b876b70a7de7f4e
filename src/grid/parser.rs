use crate::error::{MapError, Result};
use crate::grid::cell::Coord;
use crate::grid::grid::Grid;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Parse a grid from a map file path
pub fn parse_grid(path: &str) -> Result<Grid> {
    let file = File::open(path)?;
    let reader = BufReader::with_capacity(64 * 1024, file);

    let mut layout = Layout::default();
    for line in reader.lines() {
        layout.push_line(&line?)?;
    }
    layout.finish()
}

/// Parse a grid directly from an in-memory string
pub fn parse_grid_from_str(src: &str) -> Result<Grid> {
    let mut layout = Layout::default();
    for line in src.lines() {
        layout.push_line(line)?;
    }
    layout.finish()
}

/// Rows collected so far
#[derive(Default)]
struct Layout {
    width: Option<usize>,
    rows: usize,
    start: Option<Coord>,
    end: Option<Coord>,
    obstacles: Vec<Coord>,
}

impl Layout {
    fn push_line(&mut self, raw: &str) -> Result<()> {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') {
            return Ok(());
        }

        let row = self.rows;
        let found = line.chars().count();
        let expected = *self.width.get_or_insert(found);
        if found != expected {
            return Err(MapError::RaggedRow { row, expected, found });
        }

        for (col, ch) in line.chars().enumerate() {
            let here = Coord::new(col as i32, row as i32);
            match ch {
                '.' => {}
                '#' => self.obstacles.push(here),
                'S' => {
                    if self.start.replace(here).is_some() {
                        return Err(MapError::DuplicateStart(here));
                    }
                }
                'E' => {
                    if self.end.replace(here).is_some() {
                        return Err(MapError::DuplicateEnd(here));
                    }
                }
                _ => return Err(MapError::UnknownCell { ch, row, col }),
            }
        }

        self.rows += 1;
        Ok(())
    }

    fn finish(self) -> Result<Grid> {
        let width = self.width.unwrap_or(0);
        if width == 0 || self.rows == 0 {
            return Err(MapError::EmptyGrid {
                width: width as u32,
                height: self.rows as u32,
            });
        }
        let start = self.start.ok_or(MapError::MissingStart)?;
        let end = self.end.ok_or(MapError::MissingEnd)?;

        Grid::new(width as u32, self.rows as u32, start, end, &self.obstacles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellKind;

    #[test]
    fn test_parse_basic_map() {
        let src = "S.#\n...\n#.E\n";
        let grid = parse_grid_from_str(src).unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.start(), Coord::new(0, 0));
        assert_eq!(grid.end(), Coord::new(2, 2));
        assert_eq!(grid.cell(Coord::new(2, 0)), Some(CellKind::Obstacle));
        assert_eq!(grid.cell(Coord::new(0, 2)), Some(CellKind::Obstacle));
        assert_eq!(grid.obstacle_count(), 2);
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let src = "; a tiny map\n\n  S.E  \n\n";
        let grid = parse_grid_from_str(src).unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 1);
    }

    #[test]
    fn test_parse_round_trips_display() {
        let src = "..#E\n.##.\nS...\n";
        let grid = parse_grid_from_str(src).unwrap();

        assert_eq!(grid.to_string(), src);
    }

    #[test]
    fn test_parse_ragged_rows() {
        let err = parse_grid_from_str("S..\n..\n..E\n").unwrap_err();
        assert!(matches!(
            err,
            MapError::RaggedRow { row: 1, expected: 3, found: 2 }
        ));
    }

    #[test]
    fn test_parse_unknown_cell() {
        let err = parse_grid_from_str("S.x\n..E\n").unwrap_err();
        assert!(matches!(err, MapError::UnknownCell { ch: 'x', row: 0, col: 2 }));
    }

    #[test]
    fn test_parse_missing_and_duplicate_endpoints() {
        assert!(matches!(parse_grid_from_str("...\n..E\n"), Err(MapError::MissingStart)));
        assert!(matches!(parse_grid_from_str("S..\n...\n"), Err(MapError::MissingEnd)));
        assert!(matches!(
            parse_grid_from_str("S.S\n..E\n"),
            Err(MapError::DuplicateStart(c)) if c == Coord::new(2, 0)
        ));
        assert!(matches!(parse_grid_from_str("S.E\nE..\n"), Err(MapError::DuplicateEnd(_))));
    }

    #[test]
    fn test_parse_empty_map() {
        assert!(matches!(parse_grid_from_str("\n\n"), Err(MapError::EmptyGrid { .. })));
    }
}
