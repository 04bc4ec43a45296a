//! dt-core: tile classification for dungeon levels
//!
//! Converts a finished logical grid (room, corridor, door and stair flags per
//! cell) into one renderable record per cell: which texture variant to draw
//! and whether the tile blocks movement or sight.
//!
//! This crate has no I/O. Map generation, field of view and drawing live
//! elsewhere.

pub mod ascii;
pub mod floor;
pub mod grid;
pub mod layer;
pub mod materialize;
pub mod neighborhood;
pub mod tile;
pub mod wall;

mod rng;

pub use ascii::parse_ascii;
pub use grid::{GridError, LogicalCell, LogicalGrid};
pub use layer::TileLayer;
pub use materialize::{
    materialize, materialize_level, materialize_level_par, ClassifyError, Materializer,
    VariantRecord,
};
pub use neighborhood::{sample, Direction, NeighborhoodPattern, Openness};
pub use rng::{GameRng, TileRng};
pub use tile::{CellKind, Palette, Rgba, TextureId, UnknownTextureId};
