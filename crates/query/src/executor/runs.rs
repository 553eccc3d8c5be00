//! Tie run detection.

use core::ops::Range;
use ordstore_core::{Result, RowId};

/// Maximal groups of adjacent positions whose rows tie on every column
/// examined so far.
///
/// Only groups of two or more positions are kept; a single row is already in
/// its final place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Runs {
    ranges: Vec<Range<usize>>,
}

impl Runs {
    /// The run covering a whole sequence of `len` positions.
    pub fn whole(len: usize) -> Self {
        let ranges = if len > 1 { vec![0..len] } else { Vec::new() };
        Self { ranges }
    }

    /// Detects runs of equal keys across a whole sequence.
    pub fn detect<F, K>(sequence: &[RowId], key: F) -> Result<Self>
    where
        F: FnMut(RowId) -> Result<K>,
        K: PartialEq,
    {
        Self::whole(sequence.len()).split_by(sequence, key)
    }

    /// Splits every run into maximal sub-runs of equal keys.
    ///
    /// Positions outside the current runs are never examined.
    pub fn split_by<F, K>(&self, sequence: &[RowId], mut key: F) -> Result<Self>
    where
        F: FnMut(RowId) -> Result<K>,
        K: PartialEq,
    {
        let mut ranges = Vec::new();
        for range in &self.ranges {
            let mut start = range.start;
            let mut current = key(sequence[start])?;
            for pos in range.start + 1..range.end {
                let next = key(sequence[pos])?;
                if next != current {
                    if pos - start > 1 {
                        ranges.push(start..pos);
                    }
                    start = pos;
                    current = next;
                }
            }
            if range.end - start > 1 {
                ranges.push(start..range.end);
            }
        }
        Ok(Self { ranges })
    }

    /// Returns the number of runs.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns true if no ties remain.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns the number of positions covered by all runs.
    pub fn covered(&self) -> usize {
        self.ranges.iter().map(|r| r.len()).sum()
    }

    /// Iterates the runs in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = &Range<usize>> {
        self.ranges.iter()
    }
}
