use std::path::Path;

use anyhow::Result;
use polars::frame::DataFrame;

use crate::io::csv;

use super::CoalitionTable;

impl CoalitionTable {
    /// Every bucket as a DataFrame: `label, parties, seats, points, percent, majority, minimal_winning`.
    pub fn to_frame(&self) -> Result<DataFrame> {
        csv::coalition_table_frame(self)
    }

    /// Majority buckets only, in rank order.
    pub fn ranked_frame(&self) -> Result<DataFrame> {
        csv::coalitions_frame(self.ranked())
    }

    /// Write the ranked majority coalitions to CSV.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        csv::write_csv(&mut self.ranked_frame()?, path)
    }

    /// Ranked majority coalitions as CSV text.
    pub fn to_csv_string(&self) -> Result<String> {
        csv::write_csv_string(&mut self.ranked_frame()?)
    }
}
