//! Limit executor.

use ordstore_core::RowId;

/// Limit executor - applies LIMIT and OFFSET to an ordered id sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct LimitExecutor {
    limit: Option<usize>,
    offset: usize,
}

impl LimitExecutor {
    /// Creates a new limit executor.
    pub fn new(limit: Option<usize>, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Creates a limit executor with only a limit (no offset).
    pub fn limit_only(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            offset: 0,
        }
    }

    /// Returns true if the executor keeps every input id.
    pub fn is_noop(&self) -> bool {
        self.limit.is_none() && self.offset == 0
    }

    /// Executes the limit on the input sequence.
    pub fn execute(&self, mut input: Vec<RowId>) -> Vec<RowId> {
        let len = input.len();
        let start = self.offset.min(len);
        let end = self
            .limit
            .map_or(len, |limit| self.offset.saturating_add(limit).min(len));

        input.truncate(end);
        if start > 0 {
            input.drain(..start);
        }
        input
    }
}
