use geo::Coord;
use serde::Serialize;

use crate::error::{Result, ValidationError};

use super::Bounds;

/// Tolerance for deciding whether `max` lands on the last step.
const STEP_EPS: f64 = 1e-9;

/// Largest number of points a single grid may hold.
pub const MAX_GRID_POINTS: usize = 50_000_000;

/// Regular sampling lattice over a bounding box.
///
/// Each axis is sampled at `min + i * step` for `i = 0..n`, with
/// `n = floor((max - min) / step) + 1`. The upper bound is included only when
/// it falls on a step; no irregular final step is added.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    bounds: Bounds,
    step: f64,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Grid {
    pub fn new(bounds: Bounds, step: f64) -> Result<Self> {
        Self::anchored(bounds, step, Coord { x: bounds.xmin, y: bounds.ymin })
    }

    /// Lattice of every `anchor + k * step` inside `bounds`.
    ///
    /// When `anchor` lies inside the box it is sampled exactly, with no
    /// accumulated rounding.
    pub fn anchored(bounds: Bounds, step: f64, anchor: Coord<f64>) -> Result<Self> {
        if !(step.is_finite() && step > 0.0) { return Err(ValidationError::InvalidStep { step }) }
        bounds.validate()?;

        let (x0, nx) = axis_range(bounds.xmin, bounds.xmax, anchor.x, step);
        let (y0, ny) = axis_range(bounds.ymin, bounds.ymax, anchor.y, step);
        if !(nx.is_finite() && ny.is_finite()) {
            return Err(ValidationError::GridTooLarge { points: nx * ny, max: MAX_GRID_POINTS });
        }
        let (nx, ny) = (nx.max(0.0), ny.max(0.0));
        let points = nx * ny;
        if points > MAX_GRID_POINTS as f64 {
            return Err(ValidationError::GridTooLarge { points, max: MAX_GRID_POINTS });
        }
        if points == 0.0 { return Err(ValidationError::EmptyGrid) }

        let axis = |origin: f64, first: f64, n: f64| -> Vec<f64> {
            (0..n as usize).map(|i| origin + (first + i as f64) * step).collect()
        };
        let xs = axis(anchor.x, x0, nx);
        let ys = axis(anchor.y, y0, ny);
        Ok(Self { bounds, step, xs, ys })
    }

    #[inline] pub fn bounds(&self) -> &Bounds { &self.bounds }

    #[inline] pub fn step(&self) -> f64 { self.step }

    /// Sample coordinates along x (economic axis).
    #[inline] pub fn xs(&self) -> &[f64] { &self.xs }

    /// Sample coordinates along y (moral axis).
    #[inline] pub fn ys(&self) -> &[f64] { &self.ys }

    #[inline] pub fn num_x(&self) -> usize { self.xs.len() }

    #[inline] pub fn num_y(&self) -> usize { self.ys.len() }

    /// Total number of grid points, `G = num_x * num_y`.
    #[inline] pub fn len(&self) -> usize { self.xs.len() * self.ys.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Points of row `row` (fixed y), left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Coord<f64>> + '_ {
        let y = self.ys[row];
        self.xs.iter().map(move |&x| Coord { x, y })
    }

    /// All points, row-major from `ymin` upward.
    pub fn points(&self) -> impl Iterator<Item = Coord<f64>> + '_ {
        (0..self.num_y()).flat_map(move |row| self.row(row))
    }
}

/// First lattice index at or above `min` and the number of indices up to `max`.
///
/// The count stays a float so oversized ranges can be rejected before allocation.
fn axis_range(min: f64, max: f64, anchor: f64, step: f64) -> (f64, f64) {
    let first = ((min - anchor) / step - STEP_EPS).ceil();
    let last = ((max - anchor) / step + STEP_EPS).floor();
    (first, last - first + 1.0)
}
