//! Openness of a cell and its eight neighbors

use bitflags::bitflags;
use strum::{EnumIter, IntoEnumIterator};

use crate::grid::LogicalGrid;

bitflags! {
    /// One bit per sampled position. A set bit means "open".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Openness: u16 {
        const CENTER = 1 << 0;
        const N = 1 << 1;
        const S = 1 << 2;
        const E = 1 << 3;
        const W = 1 << 4;
        const NE = 1 << 5;
        const NW = 1 << 6;
        const SE = 1 << 7;
        const SW = 1 << 8;
    }
}

/// Compass direction on the grid. North is the previous row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    /// (row, column) offset
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::N => (-1, 0),
            Direction::S => (1, 0),
            Direction::E => (0, 1),
            Direction::W => (0, -1),
            Direction::NE => (-1, 1),
            Direction::NW => (-1, -1),
            Direction::SE => (1, 1),
            Direction::SW => (1, -1),
        }
    }

    /// Bit for this direction in an [`Openness`] mask
    pub const fn flag(self) -> Openness {
        match self {
            Direction::N => Openness::N,
            Direction::S => Openness::S,
            Direction::E => Openness::E,
            Direction::W => Openness::W,
            Direction::NE => Openness::NE,
            Direction::NW => Openness::NW,
            Direction::SE => Openness::SE,
            Direction::SW => Openness::SW,
        }
    }
}

/// Openness snapshot around one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NeighborhoodPattern(Openness);

impl NeighborhoodPattern {
    pub const fn from_flags(flags: Openness) -> Self {
        Self(flags)
    }

    pub const fn flags(self) -> Openness {
        self.0
    }

    /// The sampled cell itself is open
    pub const fn self_open(self) -> bool {
        self.0.contains(Openness::CENTER)
    }

    /// The neighbor in `dir` is open
    pub const fn open(self, dir: Direction) -> bool {
        self.0.contains(dir.flag())
    }
}

/// Sample the neighborhood of (row, column).
///
/// Positions outside the grid count as closed.
pub fn sample(grid: &LogicalGrid, row: usize, column: usize) -> NeighborhoodPattern {
    let mut flags = Openness::empty();
    if grid.is_open_at(row, column, 0, 0) {
        flags |= Openness::CENTER;
    }
    for dir in Direction::iter() {
        let (dr, dc) = dir.offset();
        if grid.is_open_at(row, column, dr, dc) {
            flags |= dir.flag();
        }
    }
    NeighborhoodPattern(flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::LogicalCell;

    #[test]
    fn test_single_cell_is_closed_all_around() {
        let grid = LogicalGrid::new(1, 1);
        let pattern = sample(&grid, 0, 0);
        assert_eq!(pattern.flags(), Openness::empty());
        assert!(Direction::iter().all(|dir| !pattern.open(dir)));
    }

    #[test]
    fn test_single_open_cell() {
        let mut grid = LogicalGrid::new(1, 1);
        grid.set(0, 0, LogicalCell::corridor());
        let pattern = sample(&grid, 0, 0);
        assert!(pattern.self_open());
        assert_eq!(pattern.flags(), Openness::CENTER);
    }

    #[test]
    fn test_directions() {
        // .-.
        // -X.
        // ...
        let mut grid = LogicalGrid::new(3, 3);
        grid.set(0, 0, LogicalCell::room());
        grid.set(0, 2, LogicalCell::room());
        grid.set(1, 2, LogicalCell::room());
        grid.set(2, 0, LogicalCell::room());
        grid.set(2, 1, LogicalCell::room());
        grid.set(2, 2, LogicalCell::room());
        let pattern = sample(&grid, 1, 1);
        assert!(!pattern.self_open());
        assert!(pattern.open(Direction::NW));
        assert!(!pattern.open(Direction::N));
        assert!(pattern.open(Direction::NE));
        assert!(!pattern.open(Direction::W));
        assert!(pattern.open(Direction::E));
        assert!(pattern.open(Direction::SW));
        assert!(pattern.open(Direction::S));
        assert!(pattern.open(Direction::SE));
    }

    #[test]
    fn test_doors_are_closed() {
        let mut grid = LogicalGrid::new(1, 2);
        grid.set(0, 1, LogicalCell::door());
        assert!(!sample(&grid, 0, 0).open(Direction::E));
    }

    #[test]
    fn test_sampling_is_pure() {
        let mut grid = LogicalGrid::new(4, 4);
        grid.set(1, 1, LogicalCell::room());
        grid.set(2, 2, LogicalCell::corridor());
        for row in 0..4 {
            for column in 0..4 {
                assert_eq!(sample(&grid, row, column), sample(&grid, row, column));
            }
        }
    }
}
