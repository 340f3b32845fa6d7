//! CSV reading operations.

use std::{fs::File, io::Cursor, path::Path};

use anyhow::{anyhow, Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReader, DataType}};

use crate::{
    error::ValidationError,
    party::{Axis, PartyRow, PartyTable},
};

/// Reads a CSV file from `path` into a Polars DataFrame.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReader::new(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Reads a CSV from a string.
pub(crate) fn read_csv_string(csv: &str) -> Result<DataFrame> {
    CsvReader::new(Cursor::new(csv.as_bytes()))
        .finish()
        .with_context(|| "[io::csv::read] Failed to read CSV from string")
}

/// Build a validated party table from a frame with columns `id, lr, conlib, seats`.
///
/// Row order becomes canonical party order.
pub(crate) fn read_parties(df: &DataFrame) -> Result<PartyTable> {
    let column = |name: &str, dtype: DataType| {
        df.column(name)
            .with_context(|| format!("[io::csv::read] Party table is missing column '{name}'"))?
            .cast(&dtype)
            .with_context(|| format!("[io::csv::read] Column '{name}' cannot be read as {dtype}"))
    };

    let ids = column("id", DataType::String)?;
    let lr = column(Axis::Economic.column(), DataType::Float64)?;
    let conlib = column(Axis::Moral.column(), DataType::Float64)?;
    // Read as floats so fractional and negative values are rejected, not truncated.
    let seats = column("seats", DataType::Float64)?;

    let rows = ids.str()?.into_iter()
        .zip(lr.f64()?.into_iter())
        .zip(conlib.f64()?.into_iter())
        .zip(seats.f64()?.into_iter())
        .enumerate()
        .map(|(row, (((id, lr), conlib), seats))| -> Result<PartyRow> {
            match (id, lr, conlib, seats) {
                (Some(id), Some(lr), Some(conlib), Some(seats)) => {
                    Ok(PartyRow::new(id, lr, conlib, whole_seats(id, seats)?))
                }
                _ => Err(anyhow!("[io::csv::read] Party row {row} has a missing or non-numeric value")),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PartyTable::new(rows)?)
}

/// Seat counts must be non-negative whole numbers.
fn whole_seats(party: &str, seats: f64) -> std::result::Result<i64, ValidationError> {
    let id = || party.trim().to_string();
    if seats < 0.0 { return Err(ValidationError::NegativeSeats { party: id(), seats }) }
    if seats.fract() != 0.0 { return Err(ValidationError::FractionalSeats { party: id(), seats }) }
    Ok(seats as i64)
}
