//! Ordered index trait definitions for ordstore.
//!
//! This module defines the `OrderedIndex` trait that every per-column index
//! implementation satisfies.

use crate::stats::IndexStats;
use alloc::vec::Vec;
use ordstore_core::RowId;

/// An index that keeps row ids ordered by key, ties broken by ascending row id.
///
/// After every successful `insert_sorted` the sequence returned by
/// `ordered_row_ids` is sorted by `(key, row_id)`.
pub trait OrderedIndex<K> {
    /// Iterator over `(key, row_id)` pairs in index order.
    type Iter<'a>: Iterator<Item = (&'a K, RowId)>
    where
        Self: 'a,
        K: 'a;

    /// Inserts a row id at its sorted position for the given key.
    fn insert_sorted(&mut self, row_id: RowId, key: K) -> Result<(), IndexError>;

    /// Returns every row id in index order.
    fn ordered_row_ids(&self) -> Vec<RowId> {
        let mut ids = Vec::with_capacity(self.len());
        ids.extend(self.iter().map(|(_, id)| id));
        ids
    }

    /// Iterates `(key, row_id)` pairs in index order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Gets all row ids stored under a key, in ascending order.
    fn get(&self, key: &K) -> Vec<RowId>;

    /// Returns the number of row ids in the index.
    fn len(&self) -> usize {
        self.stats().total_rows()
    }

    /// Returns true if the index is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the statistics for this index.
    fn stats(&self) -> &IndexStats;
}

/// Error type for index operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// The row id is already stored under the same key.
    #[error("Row id {0} is already indexed")]
    DuplicateRowId(RowId),
}
