use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, ValidationError};

use super::{Axis, Party, POLICY_MAX, POLICY_MIN};

/// Unvalidated party input, as read from code or a CSV row.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PartyRow {
    pub id: String,
    pub lr: f64,
    pub conlib: f64,
    pub seats: i64,
}

impl PartyRow {
    pub fn new(id: impl Into<String>, lr: f64, conlib: f64, seats: i64) -> Self {
        Self { id: id.into(), lr, conlib, seats }
    }
}

/// The legislature: an ordered, validated list of parties.
///
/// Load order is the canonical party order used for coalition keys and labels.
#[derive(Clone, Debug)]
pub struct PartyTable {
    parties: Vec<Party>,
    index: HashMap<String, usize>,
    total_seats: u32,
    majority: u32,
}

impl PartyTable {
    /// Validate `rows` and build the table.
    pub fn new(rows: impl IntoIterator<Item = PartyRow>) -> Result<Self> {
        let mut parties = Vec::new();
        let mut index = HashMap::new();
        let mut total_seats: u32 = 0;

        for (row, PartyRow { id, lr, conlib, seats }) in rows.into_iter().enumerate() {
            let id = id.trim().to_string();
            if id.is_empty() { return Err(ValidationError::EmptyId { row }) }

            for (axis, value) in [(Axis::Economic, lr), (Axis::Moral, conlib)] {
                // NaN fails the range check too.
                if !(POLICY_MIN..=POLICY_MAX).contains(&value) {
                    return Err(ValidationError::PositionOutOfRange { party: id, axis, value });
                }
            }

            if seats < 0 { return Err(ValidationError::NegativeSeats { party: id, seats: seats as f64 }) }
            let seats_u32 = u32::try_from(seats)
                .map_err(|_| ValidationError::SeatsOverflow { party: id.clone(), seats })?;
            total_seats = total_seats.checked_add(seats_u32)
                .ok_or_else(|| ValidationError::SeatsOverflow { party: id.clone(), seats })?;

            if index.insert(id.clone(), parties.len()).is_some() {
                return Err(ValidationError::DuplicateParty { id });
            }
            parties.push(Party::new(id, lr, conlib, seats_u32));
        }

        if parties.is_empty() { return Err(ValidationError::EmptyTable) }

        let majority = total_seats / 2 + 1;
        debug!(parties = parties.len(), total_seats, majority, "party table loaded");

        Ok(Self { parties, index, total_seats, majority })
    }

    /// Require the seat total to equal the declared legislature size.
    pub fn with_legislature_size(self, size: u32) -> Result<Self> {
        if self.total_seats != size {
            return Err(ValidationError::SeatTotalMismatch { expected: size, actual: self.total_seats });
        }
        Ok(self)
    }

    /// Replace the default strict-majority threshold.
    pub fn with_majority(mut self, threshold: u32) -> Result<Self> {
        if threshold == 0 || threshold > self.total_seats {
            return Err(ValidationError::InvalidMajority { threshold, total_seats: self.total_seats });
        }
        self.majority = threshold;
        Ok(self)
    }

    #[inline] pub fn len(&self) -> usize { self.parties.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.parties.is_empty() }

    /// All parties in canonical order.
    #[inline] pub fn parties(&self) -> &[Party] { &self.parties }

    #[inline] pub fn get(&self, idx: usize) -> Option<&Party> { self.parties.get(idx) }

    /// Canonical index of the party with the given id.
    #[inline] pub fn index_of(&self, id: &str) -> Option<usize> { self.index.get(id).copied() }

    #[inline]
    pub fn by_id(&self, id: &str) -> Option<&Party> { self.index_of(id).map(|i| &self.parties[i]) }

    #[inline] pub fn total_seats(&self) -> u32 { self.total_seats }

    /// Seats needed to govern: `⌊total/2⌋ + 1` unless overridden.
    #[inline] pub fn majority_threshold(&self) -> u32 { self.majority }

    /// Seat sum over a set of canonical party indices.
    pub fn seats_of(&self, members: &[usize]) -> u32 {
        members.iter().map(|&i| self.parties[i].seats()).sum()
    }
}
