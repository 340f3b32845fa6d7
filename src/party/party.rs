use std::fmt;

use geo::Coord;
use serde::Serialize;

/// Lower edge of the policy space on both axes.
pub const POLICY_MIN: f64 = -10.0;

/// Upper edge of the policy space on both axes.
pub const POLICY_MAX: f64 = 10.0;

/// A policy dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Economic left/right (`lr`), plotted on x.
    Economic,
    /// Moral conservative/liberal (`conlib`), plotted on y.
    Moral,
}

impl Axis {
    /// Column name used in tabular input.
    pub fn column(&self) -> &'static str {
        match self {
            Axis::Economic => "lr",
            Axis::Moral => "conlib",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Economic => write!(f, "economic (lr)"),
            Axis::Moral => write!(f, "moral (conlib)"),
        }
    }
}

/// A party with a fixed position in the policy space and a seat count.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Party {
    id: String,
    lr: f64,
    conlib: f64,
    seats: u32,
}

impl Party {
    /// Constructed only through `PartyTable`, which validates the fields.
    pub(super) fn new(id: String, lr: f64, conlib: f64, seats: u32) -> Self {
        Self { id, lr, conlib, seats }
    }

    #[inline] pub fn id(&self) -> &str { &self.id }

    #[inline] pub fn lr(&self) -> f64 { self.lr }

    #[inline] pub fn conlib(&self) -> f64 { self.conlib }

    #[inline] pub fn seats(&self) -> u32 { self.seats }

    /// Position on a single axis.
    #[inline]
    pub fn position_on(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Economic => self.lr,
            Axis::Moral => self.conlib,
        }
    }

    /// Position as a plane coordinate (`x = lr`, `y = conlib`).
    #[inline]
    pub fn position(&self) -> Coord<f64> { Coord { x: self.lr, y: self.conlib } }
}
