//! Plan runner - executes a resolved query plan.

use super::{LimitExecutor, OrderByExecutor};
use crate::planner::QueryPlan;
use ordstore_core::{Result, RowId};
use ordstore_index::ColumnIndex;
use ordstore_storage::RowStore;
use tracing::trace;

/// Executes resolved plans against a row store and its per-column indexes.
pub struct QueryRunner<'a> {
    rows: &'a RowStore,
    indexes: &'a [ColumnIndex],
}

impl<'a> QueryRunner<'a> {
    /// Creates a runner.
    pub fn new(rows: &'a RowStore, indexes: &'a [ColumnIndex]) -> Self {
        Self { rows, indexes }
    }

    /// Runs a plan and returns the result row ids in output order.
    ///
    /// 1. filter the row store (ascending row ids),
    /// 2. order by the plan's columns when there are any,
    /// 3. apply offset and limit.
    pub fn run(&self, plan: &QueryPlan<'_>) -> Result<Vec<RowId>> {
        let candidates = self.rows.filter(plan.predicate())?;
        let candidate_count = candidates.len();

        let ordered = if plan.is_ordered() {
            OrderByExecutor::new(self.rows, self.indexes).execute(&candidates, plan.order_by())?
        } else {
            candidates
        };

        let limit = LimitExecutor::new(plan.limit(), plan.offset());
        let result = if limit.is_noop() {
            ordered
        } else {
            limit.execute(ordered)
        };

        trace!(
            candidates = candidate_count,
            order_columns = plan.order_by().len(),
            returned = result.len(),
            "query executed"
        );
        Ok(result)
    }
}
