//! B+Tree iterator implementation.

use super::node::{Node, NodeId};
use ordstore_core::RowId;

/// Forward iterator over the B+Tree leaf chain.
///
/// Yields one `(key, row_id)` pair per indexed row, in index order.
pub struct BTreeIterator<'a, K> {
    /// Reference to the arena of nodes.
    arena: &'a [Node<K>],
    /// Current node ID.
    current_node: Option<NodeId>,
    /// Current key position within the node.
    current_pos: usize,
    /// Current position within the row ids of the current key.
    value_pos: usize,
}

impl<'a, K> BTreeIterator<'a, K> {
    /// Creates a new iterator starting at the first key of the given leaf.
    pub fn new(arena: &'a [Node<K>], start_node: Option<NodeId>) -> Self {
        Self {
            arena,
            current_node: start_node,
            current_pos: 0,
            value_pos: 0,
        }
    }

    /// Advances to the next key (skipping remaining values of current key).
    fn advance_key(&mut self) {
        if let Some(node_id) = self.current_node {
            let node = &self.arena[node_id];
            self.current_pos += 1;
            if self.current_pos >= node.keys.len() {
                self.current_node = node.next;
                self.current_pos = 0;
            }
            self.value_pos = 0;
        }
    }
}

impl<'a, K> Iterator for BTreeIterator<'a, K> {
    type Item = (&'a K, RowId);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node_id = self.current_node?;
            let node = &self.arena[node_id];

            if node.keys.is_empty() {
                return None;
            }

            if self.current_pos >= node.keys.len() {
                self.advance_key();
                continue;
            }

            let key = &node.keys[self.current_pos];
            let values = &node.values[self.current_pos];

            if self.value_pos < values.len() {
                let value = values[self.value_pos];
                self.value_pos += 1;
                return Some((key, value));
            } else {
                self.advance_key();
            }
        }
    }
}
