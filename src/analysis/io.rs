use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use polars::frame::DataFrame;

use crate::{io::csv, report::{narrative, Report}};

use super::Analysis;

impl Analysis {
    /// Summary of the run, ready for JSON export.
    pub fn report(&self) -> Report { Report::new(self) }

    /// Headline text naming the top two majority coalitions.
    pub fn narrative(&self) -> String { narrative(self.coalitions()) }

    /// Every grid point with per-party membership columns.
    pub fn points_frame(&self) -> Result<DataFrame> {
        csv::points_frame(self.sample(), self.table())
    }

    pub fn write_points_csv(&self, path: &Path) -> Result<()> {
        csv::write_csv(&mut self.points_frame()?, path)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("[analysis::io] Failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.report())
            .with_context(|| format!("[analysis::io] Failed to write JSON report to {}", path.display()))
    }
}
