use serde::Serialize;

use crate::{party::PartyTable, sampler::CoalitionKey};

/// A distinct covering set observed on the grid.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CoalitionBucket {
    pub key: CoalitionKey,
    /// Display label, e.g. `A-C (57)`.
    pub label: String,
    /// Member ids in canonical order.
    pub parties: Vec<String>,
    pub seats: u32,
    /// Grid points whose covering set is exactly `key`.
    pub count: usize,
    /// `100 * count / G`.
    pub percent: f64,
    pub majority: bool,
    /// Majority that any single defection would break.
    pub minimal_winning: bool,
}

impl CoalitionBucket {
    pub(super) fn new(key: CoalitionKey, count: usize, total: usize, table: &PartyTable) -> Self {
        let threshold = table.majority_threshold();
        let seats = table.seats_of(key.members());
        let majority = seats >= threshold;
        let minimal_winning = majority && key.members().iter()
            .all(|&i| seats - table.parties()[i].seats() < threshold);

        Self {
            label: key.label(table),
            parties: key.ids(table).into_iter().map(str::to_string).collect(),
            seats,
            count,
            percent: 100.0 * count as f64 / total as f64,
            majority,
            minimal_winning,
            key,
        }
    }
}
