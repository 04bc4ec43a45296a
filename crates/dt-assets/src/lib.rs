//! dt-assets: Tileset mapping and sprite registry for dungeon tile variants.

pub mod mapping;
pub mod registry;

pub use mapping::*;
pub use registry::*;
