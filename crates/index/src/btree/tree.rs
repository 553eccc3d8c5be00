//! Arena B+Tree keyed by column value.
//!
//! Leaves hold, per distinct key, the row ids stored under it in ascending
//! order; the leaf chain read left to right is the column's maintained order.

use super::iter::BTreeIterator;
use super::node::{Node, NodeId};
use crate::stats::IndexStats;
use crate::traits::{IndexError, OrderedIndex};
use alloc::vec::Vec;
use ordstore_core::RowId;

/// Default order (branching factor) for the B+Tree.
pub const DEFAULT_ORDER: usize = 64;

/// Smallest order that still splits into two non-empty halves.
const MIN_ORDER: usize = 3;

/// A B+Tree ordered index.
///
/// Leaves hold distinct keys, each with its row ids in ascending order, and
/// are chained left to right, so walking the chain yields `(key, row_id)`
/// order. Search and splice are both logarithmic in the number of keys.
#[derive(Debug)]
pub struct BTreeIndex<K> {
    /// Every node of the tree; `NodeId` indexes into it.
    arena: Vec<Node<K>>,
    /// Root node ID.
    root: NodeId,
    /// Split threshold: a node holding this many keys is split.
    order: usize,
    /// Row and distinct-key counters.
    stats: IndexStats,
}

impl<K: Clone + Ord> BTreeIndex<K> {
    /// Creates an empty index with at most `order` keys per node.
    ///
    /// Orders below 3 are raised to 3.
    pub fn new(order: usize) -> Self {
        let mut arena = Vec::new();
        let root = Self::alloc_node(&mut arena, Node::new_leaf());

        Self {
            arena,
            root,
            order: order.max(MIN_ORDER),
            stats: IndexStats::new(),
        }
    }

    /// Returns the maximum number of keys per node.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the number of levels from the root to the leaves.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut current = self.root;
        while !self.arena[current].is_leaf {
            current = self.arena[current].children[0];
            height += 1;
        }
        height
    }

    /// Returns the smallest key.
    pub fn min_key(&self) -> Option<&K> {
        self.arena[self.leftmost_leaf()].keys.first()
    }

    /// Returns the largest key.
    pub fn max_key(&self) -> Option<&K> {
        self.arena[self.rightmost_leaf()].keys.last()
    }

    /// Appends a node to the arena.
    fn alloc_node(arena: &mut Vec<Node<K>>, node: Node<K>) -> NodeId {
        let id = arena.len();
        arena.push(node);
        id
    }

    /// Descends from the root to the leaf owning `key`.
    fn find_leaf(&self, key: &K) -> NodeId {
        let mut current = self.root;

        loop {
            let node = &self.arena[current];
            if node.is_leaf {
                return current;
            }

            let pos = Self::find_child_position(node, key);
            current = node.children[pos];
        }
    }

    /// Child slot to follow for `key` inside an internal node.
    #[inline]
    fn find_child_position(node: &Node<K>, key: &K) -> usize {
        // First separator strictly greater than the key: equal keys live in
        // the right subtree, where the separator was copied from.
        let pos = node.keys.partition_point(|k| k <= key);
        pos.min(node.children.len().saturating_sub(1))
    }

    /// Moves the upper half of a full leaf into a new right sibling.
    fn split_leaf(&mut self, leaf_id: NodeId) {
        let mid = self.arena[leaf_id].key_count() / 2;

        let mut new_leaf = Node::new_leaf();
        new_leaf.keys = self.arena[leaf_id].keys.split_off(mid);
        new_leaf.values = self.arena[leaf_id].values.split_off(mid);
        new_leaf.next = self.arena[leaf_id].next;
        new_leaf.parent = self.arena[leaf_id].parent;

        let new_leaf_id = Self::alloc_node(&mut self.arena, new_leaf);
        self.arena[leaf_id].next = Some(new_leaf_id);

        let promote_key = self.arena[new_leaf_id].keys[0].clone();
        self.insert_into_parent(leaf_id, promote_key, new_leaf_id);
    }

    /// Links a freshly split right sibling into the parent, growing a new root if needed.
    fn insert_into_parent(&mut self, left_id: NodeId, key: K, right_id: NodeId) {
        match self.arena[left_id].parent {
            None => {
                let mut new_root = Node::new_internal();
                new_root.children.push(left_id);
                new_root.children.push(right_id);
                new_root.keys.push(key);

                let new_root_id = Self::alloc_node(&mut self.arena, new_root);
                self.arena[left_id].parent = Some(new_root_id);
                self.arena[right_id].parent = Some(new_root_id);
                self.root = new_root_id;
            }
            Some(parent_id) => {
                let pos = Self::find_child_position(&self.arena[parent_id], &key);
                self.arena[parent_id].keys.insert(pos, key);
                self.arena[parent_id].children.insert(pos + 1, right_id);
                self.arena[right_id].parent = Some(parent_id);

                if self.arena[parent_id].key_count() >= self.order {
                    self.split_internal(parent_id);
                }
            }
        }
    }

    /// Moves the upper half of a full internal node into a new sibling.
    fn split_internal(&mut self, node_id: NodeId) {
        let mid = self.arena[node_id].key_count() / 2;
        let promote_key = self.arena[node_id].keys[mid].clone();

        let mut new_node = Node::new_internal();
        new_node.keys = self.arena[node_id].keys.split_off(mid + 1);
        new_node.children = self.arena[node_id].children.split_off(mid + 1);
        new_node.parent = self.arena[node_id].parent;

        self.arena[node_id].keys.pop();

        let new_node_id = Self::alloc_node(&mut self.arena, new_node);

        let moved: Vec<NodeId> = self.arena[new_node_id].children.clone();
        for child_id in moved {
            self.arena[child_id].parent = Some(new_node_id);
        }

        self.insert_into_parent(node_id, promote_key, new_node_id);
    }

    /// First leaf of the chain.
    fn leftmost_leaf(&self) -> NodeId {
        let mut current = self.root;
        while !self.arena[current].is_leaf {
            current = self.arena[current].children[0];
        }
        current
    }

    /// Last leaf of the chain.
    fn rightmost_leaf(&self) -> NodeId {
        let mut current = self.root;
        while !self.arena[current].is_leaf {
            let children = &self.arena[current].children;
            current = children[children.len() - 1];
        }
        current
    }
}

impl<K: Clone + Ord> Default for BTreeIndex<K> {
    fn default() -> Self {
        Self::new(DEFAULT_ORDER)
    }
}

impl<K: Clone + Ord> OrderedIndex<K> for BTreeIndex<K> {
    type Iter<'a>
        = BTreeIterator<'a, K>
    where
        Self: 'a,
        K: 'a;

    fn insert_sorted(&mut self, row_id: RowId, key: K) -> Result<(), IndexError> {
        let leaf_id = self.find_leaf(&key);
        let pos = self.arena[leaf_id].find_key_position(&key);
        let new_key = self.arena[leaf_id].insert_at(pos, key, row_id)?;
        self.stats.record_insert(new_key);

        if self.arena[leaf_id].key_count() >= self.order {
            self.split_leaf(leaf_id);
        }

        Ok(())
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeIterator::new(&self.arena, Some(self.leftmost_leaf()))
    }

    fn get(&self, key: &K) -> Vec<RowId> {
        let leaf = &self.arena[self.find_leaf(key)];
        match leaf.find_key(key) {
            Some(pos) => leaf.values[pos].clone(),
            None => Vec::new(),
        }
    }

    fn stats(&self) -> &IndexStats {
        &self.stats
    }
}
