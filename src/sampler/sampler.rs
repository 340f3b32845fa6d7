use geo::Coord;
use rayon::prelude::*;
use rstar::RTree;
use serde::Serialize;
use tracing::info;

use crate::{
    error::Result,
    geom::Disk,
    grid::{Bounds, Grid},
    pivot::SpatialModel,
};

use super::CoalitionKey;

/// One sampled location and the parties that accept it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
    /// Parties whose closed indifference disk contains the point.
    pub key: CoalitionKey,
    /// Seat sum over `key`.
    pub seats: u32,
    /// `seats >= majority threshold`.
    pub majority: bool,
}

impl GridPoint {
    #[inline] pub fn coord(&self) -> Coord<f64> { Coord { x: self.x, y: self.y } }

    /// Whether party `idx` covers this point.
    #[inline] pub fn is_member(&self, idx: usize) -> bool { self.key.contains(idx) }
}

/// Every grid point of one scan, in row-major grid order.
#[derive(Clone, Debug, Serialize)]
pub struct Sample {
    grid: Grid,
    majority_threshold: u32,
    points: Vec<GridPoint>,
}

impl Sample {
    #[inline] pub fn grid(&self) -> &Grid { &self.grid }

    #[inline] pub fn points(&self) -> &[GridPoint] { &self.points }

    /// `G`, the number of sampled points.
    #[inline] pub fn len(&self) -> usize { self.points.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.points.is_empty() }

    #[inline] pub fn majority_threshold(&self) -> u32 { self.majority_threshold }

    /// Number of points at which some majority coalition is acceptable to all its members.
    pub fn majority_points(&self) -> usize { self.points.iter().filter(|p| p.majority).count() }
}

/// Classifies grid points by the set of indifference disks covering them.
///
/// Disk lookup goes through an R-tree on disk envelopes; the final
/// membership decision is the exact closed-disk test.
pub struct OverlapSampler<'a> {
    model: &'a SpatialModel,
    rtree: RTree<Disk>,
}

impl<'a> OverlapSampler<'a> {
    pub fn new(model: &'a SpatialModel) -> Self {
        Self { model, rtree: RTree::bulk_load(model.disks()) }
    }

    /// Covering set, seat sum and majority flag at a single point.
    pub fn classify(&self, point: Coord<f64>) -> GridPoint {
        let key = CoalitionKey::new(
            self.rtree.locate_all_at_point(&[point.x, point.y]).map(Disk::idx)
        );
        let table = self.model.table();
        let seats = table.seats_of(key.members());

        GridPoint { x: point.x, y: point.y, key, seats, majority: seats >= table.majority_threshold() }
    }

    /// Build the grid for `bounds` at spacing `step` and scan it.
    pub fn scan(&self, bounds: Bounds, step: f64) -> Result<Sample> {
        Ok(self.sample(&Grid::new(bounds, step)?))
    }

    /// Scan every grid point, rows sharded across the rayon pool.
    ///
    /// Rows are concatenated in grid order, so the result is identical to
    /// `sample_sequential`.
    pub fn sample(&self, grid: &Grid) -> Sample {
        let points: Vec<GridPoint> = (0..grid.num_y())
            .into_par_iter()
            .flat_map_iter(|row| grid.row(row).map(|c| self.classify(c)))
            .collect();
        self.finish(grid, points)
    }

    /// Single-threaded scan.
    pub fn sample_sequential(&self, grid: &Grid) -> Sample {
        let points = grid.points().map(|c| self.classify(c)).collect();
        self.finish(grid, points)
    }

    fn finish(&self, grid: &Grid, points: Vec<GridPoint>) -> Sample {
        let sample = Sample {
            grid: grid.clone(),
            majority_threshold: self.model.table().majority_threshold(),
            points,
        };
        info!(
            num_x = grid.num_x(),
            num_y = grid.num_y(),
            step = grid.step(),
            majority_points = sample.majority_points(),
            "sampled grid"
        );
        sample
    }
}
