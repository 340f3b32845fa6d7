//! Aggregation of grid points into coalition buckets.

mod bucket;
mod io;
mod table;

pub use bucket::CoalitionBucket;
pub use table::CoalitionTable;
