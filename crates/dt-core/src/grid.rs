//! Logical dungeon grid consumed by the classifier
//!
//! The grid is produced by the map generator and never mutated while it is
//! being classified.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid of {height}x{width} needs {expected} cells, got {found}")]
    Size {
        height: usize,
        width: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown map symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol {
        row: usize,
        column: usize,
        symbol: char,
    },
}

/// A single logical map cell
///
/// Flags are not mutually exclusive: the generator may mark a cell as both
/// room and stair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LogicalCell {
    pub is_room: bool,
    pub is_corridor: bool,
    pub is_door: bool,
    pub is_stair_down: bool,
}

impl LogicalCell {
    /// Create a rock cell (no flags)
    pub const fn rock() -> Self {
        Self {
            is_room: false,
            is_corridor: false,
            is_door: false,
            is_stair_down: false,
        }
    }

    /// Create a room floor cell
    pub const fn room() -> Self {
        Self {
            is_room: true,
            ..Self::rock()
        }
    }

    /// Create a corridor cell
    pub const fn corridor() -> Self {
        Self {
            is_corridor: true,
            ..Self::rock()
        }
    }

    /// Create a door cell
    pub const fn door() -> Self {
        Self {
            is_door: true,
            ..Self::rock()
        }
    }

    /// Create a bare stair-down cell
    pub const fn stair_down() -> Self {
        Self {
            is_stair_down: true,
            ..Self::rock()
        }
    }

    /// Room or corridor that is not a door
    pub const fn is_open(&self) -> bool {
        (self.is_room || self.is_corridor) && !self.is_door
    }

    /// Neither open nor a door. A bare stair cell is solid.
    pub const fn is_solid(&self) -> bool {
        !self.is_open() && !self.is_door
    }
}

/// Rectangular grid of logical cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogicalGrid {
    height: usize,
    width: usize,
    cells: Vec<LogicalCell>,
}

impl LogicalGrid {
    /// Create a grid filled with rock
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![LogicalCell::rock(); height * width],
        }
    }

    /// Create a grid from row-major cells
    pub fn from_cells(
        height: usize,
        width: usize,
        cells: Vec<LogicalCell>,
    ) -> Result<Self, GridError> {
        let expected = height * width;
        if cells.len() != expected {
            return Err(GridError::Size {
                height,
                width,
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Create a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<LogicalCell>>) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        let height = rows.len();
        let mut cells = Vec::with_capacity(height * width);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }
        Self::from_cells(height, width, cells)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if (row, column) lies inside the grid
    pub fn in_bounds(&self, row: usize, column: usize) -> bool {
        row < self.height && column < self.width
    }

    /// Get a cell, or `None` outside the grid
    pub fn get(&self, row: usize, column: usize) -> Option<&LogicalCell> {
        if self.in_bounds(row, column) {
            self.cells.get(row * self.width + column)
        } else {
            None
        }
    }

    /// Set a cell. Out-of-bounds writes are ignored.
    ///
    /// Only for building a grid; the classifier never calls this.
    pub fn set(&mut self, row: usize, column: usize, cell: LogicalCell) {
        if self.in_bounds(row, column) {
            self.cells[row * self.width + column] = cell;
        }
    }

    /// Openness of the cell at a signed offset from (row, column).
    ///
    /// Anything outside the grid is closed.
    pub fn is_open_at(&self, row: usize, column: usize, dr: isize, dc: isize) -> bool {
        let (Some(r), Some(c)) = (row.checked_add_signed(dr), column.checked_add_signed(dc))
        else {
            return false;
        };
        self.get(r, c).is_some_and(LogicalCell::is_open)
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[LogicalCell]> {
        // chunks() panics on 0, and a zero-width grid has no cells anyway
        self.cells.chunks(self.width.max(1)).take(self.height)
    }
}
