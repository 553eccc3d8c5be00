//! ordstore Query - Query description, planning and ordering.
//!
//! This crate provides the read path of the store:
//!
//! - `Query`: equality filter, order-by column list, limit and offset
//! - `planner`: resolves a query against a schema before any work begins
//! - `executor`: run detection, the multi-column tie-break merge and limits
//! - `QueryRunner`: drives a plan over a row store and its column indexes

pub mod executor;
pub mod planner;
pub mod query;

pub use executor::{LimitExecutor, OrderByExecutor, QueryRunner, Runs};
pub use planner::QueryPlan;
pub use query::Query;
