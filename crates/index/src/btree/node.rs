//! B+Tree node definitions.

use crate::traits::IndexError;
use alloc::vec::Vec;
use ordstore_core::RowId;

/// Node identifier in the B+Tree arena.
pub type NodeId = usize;

/// A node in the B+Tree.
#[derive(Clone, Debug)]
pub struct Node<K> {
    /// Keys stored in this node.
    pub keys: Vec<K>,
    /// For leaf nodes: row IDs associated with each key, ascending.
    /// For internal nodes: empty.
    pub values: Vec<Vec<RowId>>,
    /// For internal nodes: child node IDs.
    /// For leaf nodes: empty.
    pub children: Vec<NodeId>,
    /// For leaf nodes: pointer to the next leaf node.
    pub next: Option<NodeId>,
    /// Whether this is a leaf node.
    pub is_leaf: bool,
    /// Parent node ID.
    pub parent: Option<NodeId>,
}

impl<K: Ord> Node<K> {
    /// Creates a new leaf node.
    pub fn new_leaf() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            children: Vec::new(),
            next: None,
            is_leaf: true,
            parent: None,
        }
    }

    /// Creates a new internal node.
    pub fn new_internal() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            children: Vec::new(),
            next: None,
            is_leaf: false,
            parent: None,
        }
    }

    /// Returns the number of keys in this node.
    #[inline]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this node is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Finds the position where a key should be inserted.
    pub fn find_key_position(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k < key)
    }

    /// Finds the exact position of a key, or None if not found.
    pub fn find_key(&self, key: &K) -> Option<usize> {
        let pos = self.find_key_position(key);
        if pos < self.keys.len() && &self.keys[pos] == key {
            Some(pos)
        } else {
            None
        }
    }

    /// Inserts a row id under a key at the given position in a leaf node.
    ///
    /// Row ids sharing a key stay in ascending order. Returns true when the
    /// key was not present before.
    pub fn insert_at(&mut self, pos: usize, key: K, row_id: RowId) -> Result<bool, IndexError> {
        debug_assert!(self.is_leaf);
        if pos < self.keys.len() && self.keys[pos] == key {
            let ids = &mut self.values[pos];
            let slot = ids.partition_point(|&id| id < row_id);
            if ids.get(slot) == Some(&row_id) {
                return Err(IndexError::DuplicateRowId(row_id));
            }
            ids.insert(slot, row_id);
            Ok(false)
        } else {
            self.keys.insert(pos, key);
            self.values.insert(pos, alloc::vec![row_id]);
            Ok(true)
        }
    }
}
