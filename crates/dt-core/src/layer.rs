//! Position index over materialized records
//!
//! Renderers and movement code look tiles up by position rather than by
//! emission order.

use hashbrown::HashMap;

use crate::materialize::VariantRecord;
use crate::tile::CellKind;

/// Records keyed by render position `(row, column)`
#[derive(Debug, Clone, Default)]
pub struct TileLayer {
    tiles: HashMap<(usize, usize), VariantRecord>,
}

impl TileLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a layer. A later record at the same position replaces the earlier one.
    pub fn from_records<I: IntoIterator<Item = VariantRecord>>(records: I) -> Self {
        let mut layer = Self::new();
        for record in records {
            layer.insert(record);
        }
        layer
    }

    /// Insert a record, returning the one it replaced
    pub fn insert(&mut self, record: VariantRecord) -> Option<VariantRecord> {
        self.tiles.insert((record.row, record.column), record)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&VariantRecord> {
        self.tiles.get(&(row, column))
    }

    /// Empty positions never block
    pub fn blocks_movement_at(&self, row: usize, column: usize) -> bool {
        self.get(row, column).is_some_and(|r| r.blocks_movement)
    }

    pub fn blocks_sight_at(&self, row: usize, column: usize) -> bool {
        self.get(row, column).is_some_and(|r| r.blocks_sight)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariantRecord> {
        self.tiles.values()
    }

    /// Number of tiles of each kind
    pub fn count_by_kind(&self) -> HashMap<CellKind, usize> {
        let mut counts = HashMap::new();
        for record in self.tiles.values() {
            *counts.entry(record.kind).or_insert(0) += 1;
        }
        counts
    }
}

impl FromIterator<VariantRecord> for TileLayer {
    fn from_iter<I: IntoIterator<Item = VariantRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}
