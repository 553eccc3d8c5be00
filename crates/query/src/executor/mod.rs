//! Query execution operators.
//!
//! - `runs`: detection of maximal tie runs, the primitive of the tie-break merge
//! - `order_by`: multi-column ordering over per-column indexes
//! - `limit`: offset and limit over an ordered id sequence
//! - `runner`: drives a resolved plan end to end

mod limit;
mod order_by;
mod runner;
mod runs;

pub use limit::LimitExecutor;
pub use order_by::OrderByExecutor;
pub use runner::QueryRunner;
pub use runs::Runs;
