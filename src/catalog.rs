//! Ship catalog: ship id to remaining count and canonical shape.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::common::{BoardError, ShipId};
use crate::config::standard_shape;
use crate::shape::Shape;

/// Count and footprint of one ship type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub count: usize,
    pub shape: Shape,
}

/// Mapping from ship id to how many ships of that type exist (or remain).
///
/// Keyed by `ShipId` in a `BTreeMap`, so iteration is by ascending id and
/// never depends on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipCatalog {
    entries: BTreeMap<ShipId, CatalogEntry>,
}

impl ShipCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(id, count)` pairs using the standard fleet shapes.
    pub fn standard(counts: &[(u8, usize)]) -> Result<Self, BoardError> {
        let mut catalog = Self::new();
        for &(raw, count) in counts {
            let id = ShipId::new(raw).ok_or(BoardError::UnknownShip(raw))?;
            catalog.insert(id, standard_shape(raw)?, count);
        }
        Ok(catalog)
    }

    /// Insert or replace the entry for `id`.
    pub fn insert(&mut self, id: ShipId, shape: Shape, count: usize) {
        self.entries.insert(id, CatalogEntry { count, shape });
    }

    /// Count for `id`, zero if unknown.
    pub fn count(&self, id: ShipId) -> usize {
        self.entries.get(&id).map_or(0, |e| e.count)
    }

    pub fn shape(&self, id: ShipId) -> Option<&Shape> {
        self.entries.get(&id).map(|e| &e.shape)
    }

    /// Entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ShipId, &CatalogEntry)> {
        self.entries.iter().map(|(&id, e)| (id, e))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plain id -> count view.
    pub fn counts(&self) -> BTreeMap<ShipId, usize> {
        self.entries.iter().map(|(&id, e)| (id, e.count)).collect()
    }

    /// Sum of all counts.
    pub fn total_ships(&self) -> usize {
        self.entries.values().map(|e| e.count).sum()
    }

    /// Cells covered when every ship is placed.
    pub fn total_cells(&self) -> usize {
        self.entries.values().map(|e| e.count * e.shape.len()).sum()
    }

    /// One id per ship instance, in ascending id order.
    pub fn instances(&self) -> Vec<ShipId> {
        self.entries
            .iter()
            .flat_map(|(&id, e)| core::iter::repeat(id).take(e.count))
            .collect()
    }

    /// Lowest id with a nonzero count whose shape covers `size` cells.
    pub fn lowest_afloat_of_size(&self, size: usize) -> Option<ShipId> {
        self.entries
            .iter()
            .find(|(_, e)| e.count > 0 && e.shape.len() == size)
            .map(|(&id, _)| id)
    }

    /// Lowest id with a nonzero count.
    pub fn lowest_afloat(&self) -> Option<ShipId> {
        self.entries
            .iter()
            .find(|(_, e)| e.count > 0)
            .map(|(&id, _)| id)
    }

    /// Decrement the count for `id`. Returns `false` if it was already zero.
    pub fn decrement(&mut self, id: ShipId) -> bool {
        match self.entries.get_mut(&id) {
            Some(e) if e.count > 0 => {
                e.count -= 1;
                true
            }
            _ => false,
        }
    }
}
