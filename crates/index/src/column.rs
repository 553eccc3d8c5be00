//! Runtime-selected ordered index for a single column.

use crate::btree::{BTreeIndex, BTreeIterator, DEFAULT_ORDER};
use crate::sorted::{SortedVecIndex, SortedVecIter};
use crate::stats::IndexStats;
use crate::traits::{IndexError, OrderedIndex};
use alloc::vec::Vec;
use ordstore_core::{RowId, Value};

/// Which ordered index structure backs each column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexKind {
    /// Arena B+Tree with the given maximum keys per node.
    BTree { order: usize },
    /// One contiguous sorted vector.
    SortedVec,
}

impl Default for IndexKind {
    fn default() -> Self {
        IndexKind::BTree {
            order: DEFAULT_ORDER,
        }
    }
}

/// Ordered index over one column's values.
#[derive(Debug)]
pub enum ColumnIndex {
    BTree(BTreeIndex<Value>),
    SortedVec(SortedVecIndex<Value>),
}

impl ColumnIndex {
    /// Creates an empty index of the given kind.
    pub fn new(kind: IndexKind) -> Self {
        match kind {
            IndexKind::BTree { order } => ColumnIndex::BTree(BTreeIndex::new(order)),
            IndexKind::SortedVec => ColumnIndex::SortedVec(SortedVecIndex::new()),
        }
    }

    /// Returns the kind of this index.
    pub fn kind(&self) -> IndexKind {
        match self {
            ColumnIndex::BTree(tree) => IndexKind::BTree {
                order: tree.order(),
            },
            ColumnIndex::SortedVec(_) => IndexKind::SortedVec,
        }
    }
}

/// Iterator over a [`ColumnIndex`].
pub enum ColumnIndexIter<'a> {
    BTree(BTreeIterator<'a, Value>),
    SortedVec(SortedVecIter<'a, Value>),
}

impl<'a> Iterator for ColumnIndexIter<'a> {
    type Item = (&'a Value, RowId);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ColumnIndexIter::BTree(it) => it.next(),
            ColumnIndexIter::SortedVec(it) => it.next(),
        }
    }
}

impl OrderedIndex<Value> for ColumnIndex {
    type Iter<'a> = ColumnIndexIter<'a>;

    fn insert_sorted(&mut self, row_id: RowId, key: Value) -> Result<(), IndexError> {
        match self {
            ColumnIndex::BTree(tree) => tree.insert_sorted(row_id, key),
            ColumnIndex::SortedVec(vec) => vec.insert_sorted(row_id, key),
        }
    }

    fn ordered_row_ids(&self) -> Vec<RowId> {
        match self {
            ColumnIndex::BTree(tree) => tree.ordered_row_ids(),
            ColumnIndex::SortedVec(vec) => vec.ordered_row_ids(),
        }
    }

    fn iter(&self) -> Self::Iter<'_> {
        match self {
            ColumnIndex::BTree(tree) => ColumnIndexIter::BTree(tree.iter()),
            ColumnIndex::SortedVec(vec) => ColumnIndexIter::SortedVec(vec.iter()),
        }
    }

    fn get(&self, key: &Value) -> Vec<RowId> {
        match self {
            ColumnIndex::BTree(tree) => tree.get(key),
            ColumnIndex::SortedVec(vec) => vec.get(key),
        }
    }

    fn stats(&self) -> &IndexStats {
        match self {
            ColumnIndex::BTree(tree) => tree.stats(),
            ColumnIndex::SortedVec(vec) => vec.stats(),
        }
    }
}
