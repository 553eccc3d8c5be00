//! Contiguous sorted-vector ordered index.
//!
//! Entries are kept as one `(key, row_id)` vector in sorted order. Search is a
//! binary search; the splice shifts the tail, so inserts are linear in the
//! worst case but iteration is a plain slice walk.

use crate::stats::IndexStats;
use crate::traits::{IndexError, OrderedIndex};
use alloc::vec::Vec;
use ordstore_core::RowId;

/// An ordered index backed by a single sorted vector.
#[derive(Clone, Debug)]
pub struct SortedVecIndex<K> {
    entries: Vec<(K, RowId)>,
    stats: IndexStats,
}

impl<K: Ord> SortedVecIndex<K> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            stats: IndexStats::new(),
        }
    }

    /// Returns the `(key, row_id)` entries as a slice, in index order.
    pub fn as_slice(&self) -> &[(K, RowId)] {
        &self.entries
    }

    /// Position of the first entry not less than `(key, row_id)`.
    fn lower_bound(&self, key: &K, row_id: RowId) -> usize {
        self.entries
            .partition_point(|(k, id)| (k, *id) < (key, row_id))
    }
}

impl<K: Ord> Default for SortedVecIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a [`SortedVecIndex`].
pub struct SortedVecIter<'a, K> {
    inner: core::slice::Iter<'a, (K, RowId)>,
}

impl<'a, K> Iterator for SortedVecIter<'a, K> {
    type Item = (&'a K, RowId);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, id)| (k, *id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Ord> OrderedIndex<K> for SortedVecIndex<K> {
    type Iter<'a>
        = SortedVecIter<'a, K>
    where
        Self: 'a,
        K: 'a;

    fn insert_sorted(&mut self, row_id: RowId, key: K) -> Result<(), IndexError> {
        let pos = self.lower_bound(&key, row_id);
        if let Some((k, id)) = self.entries.get(pos) {
            if *k == key && *id == row_id {
                return Err(IndexError::DuplicateRowId(row_id));
            }
        }

        let new_key = {
            let same_before = pos > 0 && self.entries[pos - 1].0 == key;
            let same_after = self.entries.get(pos).is_some_and(|(k, _)| *k == key);
            !(same_before || same_after)
        };

        self.entries.insert(pos, (key, row_id));
        self.stats.record_insert(new_key);
        Ok(())
    }

    fn ordered_row_ids(&self) -> Vec<RowId> {
        self.entries.iter().map(|(_, id)| *id).collect()
    }

    fn iter(&self) -> Self::Iter<'_> {
        SortedVecIter {
            inner: self.entries.iter(),
        }
    }

    fn get(&self, key: &K) -> Vec<RowId> {
        let start = self.entries.partition_point(|(k, _)| k < key);
        self.entries[start..]
            .iter()
            .take_while(|(k, _)| k == key)
            .map(|(_, id)| *id)
            .collect()
    }

    fn stats(&self) -> &IndexStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_sorted_insert_and_order() {
        let mut index = SortedVecIndex::new();
        index.insert_sorted(1, 30).unwrap();
        index.insert_sorted(2, 25).unwrap();
        index.insert_sorted(3, 30).unwrap();
        index.insert_sorted(4, 25).unwrap();

        assert_eq!(index.ordered_row_ids(), vec![2, 4, 1, 3]);
        assert_eq!(index.get(&30), vec![1, 3]);
        assert_eq!(index.get(&99), Vec::<RowId>::new());
        assert_eq!(index.len(), 4);
        assert_eq!(index.stats().distinct_keys(), 2);
    }

    #[test]
    fn test_sorted_out_of_order_row_ids() {
        let mut index = SortedVecIndex::new();
        index.insert_sorted(9, "x").unwrap();
        index.insert_sorted(3, "x").unwrap();
        index.insert_sorted(5, "a").unwrap();

        assert_eq!(index.as_slice(), &[("a", 5), ("x", 3), ("x", 9)]);
    }

    #[test]
    fn test_sorted_duplicate_row_id() {
        let mut index = SortedVecIndex::new();
        index.insert_sorted(1, 7).unwrap();
        assert_eq!(index.insert_sorted(1, 7), Err(IndexError::DuplicateRowId(1)));
        assert_eq!(index.len(), 1);
    }
}
