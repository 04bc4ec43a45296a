//! Turning logical cells into renderable records
//!
//! Dispatch order per cell, first match wins:
//! 1. door: closed north-south door
//! 2. solid: wall variant from the neighborhood
//! 3. open: floor variant
//! 4. stair down: stairs
//!
//! A cell flagged as both room and stair is open, so it renders as floor. A
//! bare stair is solid and renders as a wall, which leaves branch 4 with no
//! cell that can reach it.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::floor;
use crate::grid::LogicalGrid;
use crate::neighborhood::sample;
use crate::rng::{GameRng, TileRng};
use crate::tile::{CellKind, Palette, Rgba, TextureId};
use crate::wall;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("cell at row {row}, column {column} matches no tile category")]
    Unclassified { row: usize, column: usize },
}

/// Renderable output for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRecord {
    /// Render row; row 0 is the bottom of the level
    pub row: usize,
    pub column: usize,
    /// Row in the logical grid (north first)
    pub grid_row: usize,
    pub texture_id: TextureId,
    pub blocks_movement: bool,
    pub blocks_sight: bool,
    pub visible_color: Rgba,
    pub not_visible_color: Rgba,
    pub kind: CellKind,
}

/// Classifies cells with a fixed palette
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Materializer {
    palette: Palette,
}

impl Materializer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Materialize one cell. Returns `None` outside the grid.
    pub fn materialize<R: TileRng + ?Sized>(
        &self,
        grid: &LogicalGrid,
        row: usize,
        column: usize,
        rng: &mut R,
    ) -> Option<VariantRecord> {
        let cell = grid.get(row, column)?;
        let pattern = sample(grid, row, column);

        let (kind, texture_id) = if cell.is_door {
            (CellKind::Door, TextureId::DoorNsClosed)
        } else if cell.is_solid() {
            (CellKind::Wall, wall::classify(pattern))
        } else if cell.is_open() {
            (CellKind::Ground, floor::select(pattern, rng))
        } else if cell.is_stair_down {
            (CellKind::StairsDown, TextureId::StairsDown)
        } else {
            return None;
        };

        let (visible_color, not_visible_color) = self.palette.tints(kind);
        Some(VariantRecord {
            row: grid.height() - 1 - row,
            column,
            grid_row: row,
            texture_id,
            blocks_movement: kind.blocks_movement(),
            blocks_sight: kind.blocks_sight(),
            visible_color,
            not_visible_color,
            kind,
        })
    }

    /// Classify every cell, row by row, drawing from one random source
    pub fn materialize_level<R: TileRng + ?Sized>(
        &self,
        grid: &LogicalGrid,
        rng: &mut R,
    ) -> Result<Vec<VariantRecord>, ClassifyError> {
        let mut records = Vec::with_capacity(grid.len());
        for row in 0..grid.height() {
            self.materialize_row(grid, row, rng, &mut records)?;
        }
        debug!(
            height = grid.height(),
            width = grid.width(),
            records = records.len(),
            "classified level"
        );
        Ok(records)
    }

    /// Classify every cell with rows spread over the rayon pool.
    ///
    /// Row `r` draws from stream `r` of `seed`, so the result does not depend
    /// on scheduling. It differs from [`Self::materialize_level`] with the
    /// same seed, which uses a single stream.
    pub fn materialize_level_par(
        &self,
        grid: &LogicalGrid,
        seed: u64,
    ) -> Result<Vec<VariantRecord>, ClassifyError> {
        let rows = (0..grid.height())
            .into_par_iter()
            .map(|row| {
                let mut rng = GameRng::with_stream(seed, row as u64);
                let mut records = Vec::with_capacity(grid.width());
                self.materialize_row(grid, row, &mut rng, &mut records)?;
                Ok(records)
            })
            .collect::<Result<Vec<_>, ClassifyError>>()?;

        let records: Vec<VariantRecord> = rows.into_iter().flatten().collect();
        debug!(
            height = grid.height(),
            width = grid.width(),
            records = records.len(),
            seed,
            "classified level in parallel"
        );
        Ok(records)
    }

    fn materialize_row<R: TileRng + ?Sized>(
        &self,
        grid: &LogicalGrid,
        row: usize,
        rng: &mut R,
        out: &mut Vec<VariantRecord>,
    ) -> Result<(), ClassifyError> {
        for column in 0..grid.width() {
            let record = self
                .materialize(grid, row, column, rng)
                .ok_or(ClassifyError::Unclassified { row, column })?;
            out.push(record);
        }
        Ok(())
    }
}

/// Materialize one cell with the default palette
pub fn materialize<R: TileRng + ?Sized>(
    grid: &LogicalGrid,
    row: usize,
    column: usize,
    rng: &mut R,
) -> Option<VariantRecord> {
    Materializer::default().materialize(grid, row, column, rng)
}

/// Classify a whole level with the default palette
pub fn materialize_level<R: TileRng + ?Sized>(
    grid: &LogicalGrid,
    rng: &mut R,
) -> Result<Vec<VariantRecord>, ClassifyError> {
    Materializer::default().materialize_level(grid, rng)
}

/// Classify a whole level in parallel with the default palette
pub fn materialize_level_par(
    grid: &LogicalGrid,
    seed: u64,
) -> Result<Vec<VariantRecord>, ClassifyError> {
    Materializer::default().materialize_level_par(grid, seed)
}
