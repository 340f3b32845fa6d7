use std::path::Path;

use anyhow::Result;

use crate::io::csv;

use super::PartyTable;

impl PartyTable {
    /// Read a party table from a CSV file with header `id,lr,conlib,seats`.
    pub fn read_csv(path: &Path) -> Result<Self> {
        csv::read_parties(&csv::read_csv(path)?)
    }

    /// Parse a party table from CSV text.
    pub fn from_csv_str(text: &str) -> Result<Self> {
        csv::read_parties(&csv::read_csv_string(text)?)
    }
}
