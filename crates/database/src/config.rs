//! Store configuration.

use ordstore_index::{IndexKind, DEFAULT_ORDER};

/// Smallest B+Tree order a store will use.
pub const MIN_BTREE_ORDER: usize = 3;

/// Configuration for a [`Store`](crate::Store).
///
/// # Example
///
/// ```rust
/// use ordstore_database::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_table_name("people")
///     .with_btree_order(16);
///
/// assert_eq!(config.table_name(), "people");
/// assert_eq!(config.btree_order(), Some(16));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    index_kind: IndexKind,
    table_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            index_kind: IndexKind::BTree {
                order: DEFAULT_ORDER,
            },
            table_name: "table".into(),
        }
    }
}

impl StoreConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the index structure used for every column.
    pub fn with_index_kind(mut self, kind: IndexKind) -> Self {
        self.index_kind = match kind {
            IndexKind::BTree { order } => IndexKind::BTree {
                order: order.max(MIN_BTREE_ORDER),
            },
            IndexKind::SortedVec => IndexKind::SortedVec,
        };
        self
    }

    /// Uses B+Tree indexes with the given maximum keys per node.
    ///
    /// Orders below `MIN_BTREE_ORDER` are raised to it.
    pub fn with_btree_order(self, order: usize) -> Self {
        self.with_index_kind(IndexKind::BTree { order })
    }

    /// Uses contiguous sorted-vector indexes.
    pub fn with_sorted_vec(self) -> Self {
        self.with_index_kind(IndexKind::SortedVec)
    }

    /// Sets the table name used in errors and logs by `Store::new`.
    pub fn with_table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = name.into();
        self
    }

    /// Returns the index kind.
    pub fn index_kind(&self) -> IndexKind {
        self.index_kind
    }

    /// Returns the B+Tree order, or None for sorted-vector indexes.
    pub fn btree_order(&self) -> Option<usize> {
        match self.index_kind {
            IndexKind::BTree { order } => Some(order),
            IndexKind::SortedVec => None,
        }
    }

    /// Returns the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.btree_order(), Some(DEFAULT_ORDER));
        assert_eq!(config.table_name(), "table");
        assert_eq!(config, StoreConfig::new());
    }

    #[test]
    fn test_btree_order_is_clamped() {
        assert_eq!(StoreConfig::new().with_btree_order(1).btree_order(), Some(3));
        assert_eq!(
            StoreConfig::new()
                .with_index_kind(IndexKind::BTree { order: 0 })
                .index_kind(),
            IndexKind::BTree { order: 3 }
        );
    }

    #[test]
    fn test_sorted_vec() {
        let config = StoreConfig::new().with_sorted_vec();
        assert_eq!(config.index_kind(), IndexKind::SortedVec);
        assert_eq!(config.btree_order(), None);
    }
}
