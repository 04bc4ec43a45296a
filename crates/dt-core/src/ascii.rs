//! Text notation for logical grids
//!
//! One line per grid row, north first:
//!
//! | symbol | cell |
//! |--------|------|
//! | `.` | room |
//! | `#` | corridor |
//! | `+` | door |
//! | `>` | bare stair down |
//! | `%` | stair down inside a room |
//! | ` `, `-`, `\|` | rock |

use crate::grid::{GridError, LogicalCell, LogicalGrid};

/// Decode one map symbol
pub fn cell_from_symbol(symbol: char) -> Option<LogicalCell> {
    match symbol {
        ' ' | '-' | '|' => Some(LogicalCell::rock()),
        '.' => Some(LogicalCell::room()),
        '#' => Some(LogicalCell::corridor()),
        '+' => Some(LogicalCell::door()),
        '>' => Some(LogicalCell::stair_down()),
        '%' => Some(LogicalCell {
            is_room: true,
            is_stair_down: true,
            ..LogicalCell::rock()
        }),
        _ => None,
    }
}

/// Encode a cell as a map symbol. Doors win over every other flag.
pub fn symbol_for_cell(cell: &LogicalCell) -> char {
    if cell.is_door {
        '+'
    } else if cell.is_stair_down && (cell.is_room || cell.is_corridor) {
        '%'
    } else if cell.is_stair_down {
        '>'
    } else if cell.is_room {
        '.'
    } else if cell.is_corridor {
        '#'
    } else {
        ' '
    }
}

/// Parse a map. Trailing empty lines are ignored; rows of spaces are rock.
pub fn parse_ascii(text: &str) -> Result<LogicalGrid, GridError> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (row, line) in lines.iter().enumerate() {
        let cells = line
            .chars()
            .enumerate()
            .map(|(column, symbol)| {
                cell_from_symbol(symbol).ok_or(GridError::UnknownSymbol {
                    row,
                    column,
                    symbol,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(cells);
    }
    LogicalGrid::from_rows(rows)
}

impl LogicalGrid {
    /// Render the grid in map notation, north first
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.height() * (self.width() + 1));
        for row in self.rows() {
            out.extend(row.iter().map(symbol_for_cell));
            out.push('\n');
        }
        out
    }
}
