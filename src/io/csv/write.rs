//! CSV writing operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::{Column, CsvWriter, NamedFrom}, series::Series};

use crate::{coalition::{CoalitionBucket, CoalitionTable}, party::PartyTable, sampler::Sample};

/// Write a DataFrame to a CSV file.
pub(crate) fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::csv::write] Failed to create CSV file: {}", path.display()))?;
    CsvWriter::new(file)
        .finish(df)
        .with_context(|| format!("[io::csv::write] Failed to write CSV to {:?}", path))
}

/// Write a DataFrame to a CSV string.
pub(crate) fn write_csv_string(df: &mut DataFrame) -> Result<String> {
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .finish(df)
        .with_context(|| "[io::csv::write] Failed to write CSV to string")?;
    String::from_utf8(buffer)
        .with_context(|| "[io::csv::write] CSV output is not valid UTF-8")
}

/// One row per bucket, in table order.
pub(crate) fn coalitions_frame<'a>(buckets: impl Iterator<Item = &'a CoalitionBucket>) -> Result<DataFrame> {
    let mut label = Vec::new();
    let mut parties = Vec::new();
    let mut seats = Vec::new();
    let mut points = Vec::new();
    let mut percent = Vec::new();
    let mut majority = Vec::new();
    let mut minimal_winning = Vec::new();

    for b in buckets {
        label.push(b.label.clone());
        parties.push(b.parties.join("-"));
        seats.push(b.seats);
        points.push(b.count as u64);
        percent.push(b.percent);
        majority.push(b.majority);
        minimal_winning.push(b.minimal_winning);
    }

    Ok(DataFrame::new(vec![
        Series::new("label".into(), label).into(),
        Series::new("parties".into(), parties).into(),
        Series::new("seats".into(), seats).into(),
        Series::new("points".into(), points).into(),
        Series::new("percent".into(), percent).into(),
        Series::new("majority".into(), majority).into(),
        Series::new("minimal_winning".into(), minimal_winning).into(),
    ])?)
}

/// All buckets of a coalition table.
pub(crate) fn coalition_table_frame(table: &CoalitionTable) -> Result<DataFrame> {
    coalitions_frame(table.buckets().iter())
}

/// One row per grid point: coordinates, one membership column per party
/// (`in_<id>`), seat sum, majority flag and covering-set label.
pub(crate) fn points_frame(sample: &Sample, parties: &PartyTable) -> Result<DataFrame> {
    let points = sample.points();

    let mut columns: Vec<Column> = vec![
        Series::new("x".into(), points.iter().map(|p| p.x).collect::<Vec<_>>()).into(),
        Series::new("y".into(), points.iter().map(|p| p.y).collect::<Vec<_>>()).into(),
    ];
    for (idx, party) in parties.parties().iter().enumerate() {
        let member: Vec<bool> = points.iter().map(|p| p.is_member(idx)).collect();
        columns.push(Series::new(format!("in_{}", party.id()).into(), member).into());
    }
    columns.push(Series::new("seats".into(), points.iter().map(|p| p.seats).collect::<Vec<_>>()).into());
    columns.push(Series::new("majority".into(), points.iter().map(|p| p.majority).collect::<Vec<_>>()).into());
    columns.push(Series::new("label".into(), points.iter().map(|p| p.key.label(parties)).collect::<Vec<_>>()).into());

    DataFrame::new(columns)
        .context("[io::csv::write] Failed to build grid point frame")
}
