//! Filtered projection over an ordered index.
//!
//! A filtered projection restricts an ordered sequence of row ids to a subset,
//! keeping relative order. Globally this is a linear walk with a membership
//! test; locally (inside one tie run) it is a sort by index rank.

use alloc::vec;
use alloc::vec::Vec;
use hashbrown::HashSet;
use ordstore_core::RowId;

/// A set of row ids used as the membership side of a projection.
#[derive(Clone, Debug, Default)]
pub struct RowIdSet {
    ids: HashSet<RowId>,
}

impl RowIdSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with room for `capacity` ids.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: HashSet::with_capacity(capacity),
        }
    }

    /// Adds a row id. Returns false if it was already present.
    pub fn insert(&mut self, row_id: RowId) -> bool {
        self.ids.insert(row_id)
    }

    /// Returns true if the set holds the row id.
    #[inline]
    pub fn contains(&self, row_id: RowId) -> bool {
        self.ids.contains(&row_id)
    }

    /// Returns the number of ids.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<RowId> for RowIdSet {
    fn from_iter<I: IntoIterator<Item = RowId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Restricts an ordered sequence to the ids in `keep`, preserving order.
pub fn project<I>(ordered: I, keep: &RowIdSet) -> Vec<RowId>
where
    I: IntoIterator<Item = RowId>,
{
    let mut result = Vec::with_capacity(keep.len());
    for row_id in ordered {
        if keep.contains(row_id) {
            result.push(row_id);
            if result.len() == keep.len() {
                break;
            }
        }
    }
    result
}

/// Position of every row id inside one index's order.
///
/// Row ids handed out by a store are dense, so ranks live in a vector indexed
/// by row id.
#[derive(Clone, Debug)]
pub struct RankTable {
    ranks: Vec<usize>,
}

impl RankTable {
    const ABSENT: usize = usize::MAX;

    /// Builds the rank table of an ordered sequence.
    pub fn from_order(ordered: &[RowId]) -> Self {
        let size = ordered.iter().max().map_or(0, |&max| max as usize + 1);
        let mut ranks = vec![Self::ABSENT; size];
        for (rank, &row_id) in ordered.iter().enumerate() {
            ranks[row_id as usize] = rank;
        }
        Self { ranks }
    }

    /// Returns the position of a row id, or None if it is not in the order.
    #[inline]
    pub fn rank(&self, row_id: RowId) -> Option<usize> {
        match self.ranks.get(row_id as usize) {
            Some(&rank) if rank != Self::ABSENT => Some(rank),
            _ => None,
        }
    }

    /// Reorders a run of row ids by this table's order.
    ///
    /// Ids missing from the table sort last, by row id.
    pub fn sort_run(&self, run: &mut [RowId]) {
        run.sort_unstable_by_key(|&row_id| (self.rank(row_id).unwrap_or(Self::ABSENT), row_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_preserves_order() {
        let keep: RowIdSet = [4, 1, 3].into_iter().collect();
        let projected = project(vec![2, 4, 1, 3], &keep);
        assert_eq!(projected, vec![4, 1, 3]);
    }

    #[test]
    fn test_project_empty_keep() {
        let keep = RowIdSet::new();
        assert!(project(vec![1, 2, 3], &keep).is_empty());
    }

    #[test]
    fn test_project_ignores_unknown_ids() {
        let keep: RowIdSet = [1, 99].into_iter().collect();
        assert_eq!(project(vec![3, 2, 1], &keep), vec![1]);
    }

    #[test]
    fn test_rank_table() {
        let ranks = RankTable::from_order(&[3, 1, 4, 2]);
        assert_eq!(ranks.rank(3), Some(0));
        assert_eq!(ranks.rank(2), Some(3));
        assert_eq!(ranks.rank(0), None);
        assert_eq!(ranks.rank(10), None);
    }

    #[test]
    fn test_sort_run() {
        let ranks = RankTable::from_order(&[4, 2, 1, 3]);
        let mut run = vec![1, 2, 3, 4];
        ranks.sort_run(&mut run);
        assert_eq!(run, vec![4, 2, 1, 3]);

        let mut partial = vec![3, 9, 4];
        ranks.sort_run(&mut partial);
        assert_eq!(partial, vec![4, 3, 9]);
    }

    #[test]
    fn test_row_id_set() {
        let mut set = RowIdSet::with_capacity(2);
        assert!(set.is_empty());
        assert!(set.insert(5));
        assert!(!set.insert(5));
        assert!(set.contains(5));
        assert_eq!(set.len(), 1);
    }
}
