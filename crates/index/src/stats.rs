//! Index statistics for ordstore.
//!
//! This module provides statistics tracking for ordered indexes.

/// Statistics for an index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Total number of row ids in the index.
    total_rows: usize,
    /// Number of distinct keys in the index.
    distinct_keys: usize,
}

impl IndexStats {
    /// Creates a new empty stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of row ids.
    #[inline]
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Returns the number of distinct keys.
    #[inline]
    pub fn distinct_keys(&self) -> usize {
        self.distinct_keys
    }

    /// Records one inserted row id; `new_key` marks a key seen for the first time.
    pub fn record_insert(&mut self, new_key: bool) {
        self.total_rows += 1;
        if new_key {
            self.distinct_keys += 1;
        }
    }

    /// Average number of row ids sharing a key, or 0.0 when empty.
    ///
    /// High values mean long tie runs for the multi-column tie-break.
    pub fn average_run_length(&self) -> f64 {
        if self.distinct_keys == 0 {
            0.0
        } else {
            self.total_rows as f64 / self.distinct_keys as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = IndexStats::new();
        assert_eq!(stats.total_rows(), 0);
        assert_eq!(stats.distinct_keys(), 0);
        assert_eq!(stats.average_run_length(), 0.0);
    }

    #[test]
    fn test_stats_record_insert() {
        let mut stats = IndexStats::new();
        stats.record_insert(true);
        stats.record_insert(false);
        stats.record_insert(true);
        stats.record_insert(false);
        assert_eq!(stats.total_rows(), 4);
        assert_eq!(stats.distinct_keys(), 2);
        assert_eq!(stats.average_run_length(), 2.0);
    }
}
