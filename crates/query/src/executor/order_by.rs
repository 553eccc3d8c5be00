//! Multi-column ordering over per-column indexes.
//!
//! The first order-by column's index, restricted to the candidates, gives the
//! base order. Every further column only reorders the runs that still tie on
//! all previous columns, using that column's index order as the sort key.
//! Runs of one row are never touched, so queries with few ties cost a linear
//! projection plus one cheap scan per extra column.

use super::runs::Runs;
use ordstore_core::{Error, Result, RowId};
use ordstore_index::{project, ColumnIndex, OrderedIndex, RankTable, RowIdSet};
use ordstore_storage::RowStore;
use tracing::trace;

/// Orders candidate row ids by a list of columns, ties broken by row id.
pub struct OrderByExecutor<'a> {
    rows: &'a RowStore,
    indexes: &'a [ColumnIndex],
}

impl<'a> OrderByExecutor<'a> {
    /// Creates an executor over a row store and its per-column indexes.
    pub fn new(rows: &'a RowStore, indexes: &'a [ColumnIndex]) -> Self {
        Self { rows, indexes }
    }

    /// Orders `candidates` ascending by `columns`, earlier columns first.
    ///
    /// Equal rows on every column keep ascending row-id order. With no
    /// columns the candidates are returned as given.
    pub fn execute(&self, candidates: &[RowId], columns: &[usize]) -> Result<Vec<RowId>> {
        let Some((&first, rest)) = columns.split_first() else {
            return Ok(candidates.to_vec());
        };

        let keep: RowIdSet = candidates.iter().copied().collect();
        let base = self.index(first)?;
        let mut ordered = project(base.iter().map(|(_, row_id)| row_id), &keep);
        if ordered.len() != keep.len() {
            return Err(Error::index_corrupted(
                self.column_name(first),
                "index is missing candidate rows",
            ));
        }

        let mut runs = Runs::whole(ordered.len());
        let mut previous = first;
        for (level, &column) in rest.iter().enumerate() {
            runs = runs.split_by(&ordered, |row_id| self.rows.value(row_id, previous))?;
            trace!(
                level = level + 2,
                runs = runs.len(),
                rows = runs.covered(),
                "refining tie runs"
            );
            if runs.is_empty() {
                break;
            }

            let ranks = RankTable::from_order(&self.index(column)?.ordered_row_ids());
            for range in runs.iter() {
                ranks.sort_run(&mut ordered[range.clone()]);
            }
            previous = column;
        }

        Ok(ordered)
    }

    /// Returns the index of a column, checking it covers every stored row.
    fn index(&self, column: usize) -> Result<&'a ColumnIndex> {
        let index = self.indexes.get(column).ok_or_else(|| {
            Error::index_corrupted(self.column_name(column), "column has no index")
        })?;
        if index.len() != self.rows.len() {
            return Err(Error::index_corrupted(
                self.column_name(column),
                format!(
                    "index holds {} row ids, store holds {}",
                    index.len(),
                    self.rows.len()
                ),
            ));
        }
        Ok(index)
    }

    fn column_name(&self, column: usize) -> &str {
        self.rows
            .schema()
            .columns()
            .get(column)
            .map_or("?", |c| c.name())
    }
}
