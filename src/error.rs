//! Validation errors for malformed model input.

use thiserror::Error;

use crate::party::Axis;

/// Result type alias for model construction and sampling.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Malformed input detected before any output is produced.
///
/// Every variant names the offending field and value so the caller can
/// point at the bad row or config entry directly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("party table is empty")]
    EmptyTable,

    #[error("party table holds no seats")]
    NoSeats,

    #[error("party at row {row} has an empty id")]
    EmptyId { row: usize },

    #[error("duplicate party id '{id}'")]
    DuplicateParty { id: String },

    #[error("party '{party}': {axis} position {value} outside [-10, 10]")]
    PositionOutOfRange { party: String, axis: Axis, value: f64 },

    #[error("party '{party}': negative seat count {seats}")]
    NegativeSeats { party: String, seats: f64 },

    #[error("party '{party}': seat count {seats} is not a whole number")]
    FractionalSeats { party: String, seats: f64 },

    #[error("party '{party}': seat count {seats} exceeds u32 range")]
    SeatsOverflow { party: String, seats: i64 },

    #[error("seat total {actual} does not match legislature size {expected}")]
    SeatTotalMismatch { expected: u32, actual: u32 },

    #[error("majority threshold {threshold} outside 1..={total_seats}")]
    InvalidMajority { threshold: u32, total_seats: u32 },

    #[error("grid step must be positive and finite, got {step}")]
    InvalidStep { step: f64 },

    #[error("{axis} bounds invalid: min {min}, max {max}")]
    InvalidBounds { axis: Axis, min: f64, max: f64 },

    #[error("grid of {points} points exceeds the limit of {max}")]
    GridTooLarge { points: f64, max: usize },

    #[error("sampling box contains no grid point")]
    EmptyGrid,
}
