use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, ValidationError},
    party::{Axis, POLICY_MAX, POLICY_MIN},
    pivot::SpatialModel,
};

/// Sampling box in policy coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Bounds {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self { xmin, xmax, ymin, ymax }
    }

    /// The whole policy space, `[-10, 10]` on both axes.
    pub fn policy_space() -> Self {
        Self::new(POLICY_MIN, POLICY_MAX, POLICY_MIN, POLICY_MAX)
    }

    /// Union of all indifference disks, snapped outward to the lattice of
    /// `step` through the pivot and clamped to the policy space.
    ///
    /// The box always contains the pivot, so a grid anchored there samples it.
    pub fn covering(model: &SpatialModel, step: f64) -> Self {
        let mut b = Self::new(f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY);
        for (party, r) in model.parties_with_radii() {
            b.xmin = b.xmin.min(party.lr() - r);
            b.xmax = b.xmax.max(party.lr() + r);
            b.ymin = b.ymin.min(party.conlib() - r);
            b.ymax = b.ymax.max(party.conlib() + r);
        }

        let pivot = model.pivot();
        let snap_down = |v: f64, p: f64| (p + ((v - p) / step).floor() * step).max(POLICY_MIN);
        let snap_up = |v: f64, p: f64| (p + ((v - p) / step).ceil() * step).min(POLICY_MAX);
        Self::new(
            snap_down(b.xmin, pivot.x), snap_up(b.xmax, pivot.x),
            snap_down(b.ymin, pivot.y), snap_up(b.ymax, pivot.y),
        )
    }

    /// Finite, with `min <= max` on both axes.
    pub fn validate(&self) -> Result<()> {
        for (axis, min, max) in [(Axis::Economic, self.xmin, self.xmax), (Axis::Moral, self.ymin, self.ymax)] {
            if !(min.is_finite() && max.is_finite() && min <= max) {
                return Err(ValidationError::InvalidBounds { axis, min, max });
            }
        }
        Ok(())
    }

    pub fn to_rect(&self) -> geo::Rect<f64> {
        geo::Rect::new(
            geo::Coord { x: self.xmin, y: self.ymin },
            geo::Coord { x: self.xmax, y: self.ymax },
        )
    }
}
