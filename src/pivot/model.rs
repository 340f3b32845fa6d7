use geo::Coord;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    error::{Result, ValidationError},
    geom::{distance, Disk},
    party::{Axis, Party, PartyTable},
};

use super::weighted_median;

/// Seat-weighted median position, computed independently per axis.
///
/// This is the axis-wise approximation of a bivariate weighted median, not a
/// geometric median; the two coordinates need not belong to any one party.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PivotPoint {
    pub x: f64,
    pub y: f64,
}

impl PivotPoint {
    /// Weighted medians of `lr` and `conlib`, each party counted `seats` times.
    pub fn compute(table: &PartyTable) -> Result<Self> {
        if table.is_empty() { return Err(ValidationError::EmptyTable) }

        let median = |axis: Axis| {
            weighted_median(table.parties().iter().map(|p| (p.position_on(axis), p.seats())))
                .ok_or(ValidationError::NoSeats)
        };

        Ok(Self { x: median(Axis::Economic)?, y: median(Axis::Moral)? })
    }

    #[inline]
    pub fn coord(&self) -> Coord<f64> { Coord { x: self.x, y: self.y } }

    #[inline]
    pub fn on(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Economic => self.x,
            Axis::Moral => self.y,
        }
    }
}

/// Parties together with the pivot point and every party's indifference radius.
#[derive(Clone, Debug)]
pub struct SpatialModel {
    table: PartyTable,
    pivot: PivotPoint,
    radii: Vec<f64>,
}

impl SpatialModel {
    /// Compute the pivot point and attach an indifference radius to each party.
    pub fn new(table: PartyTable) -> Result<Self> {
        let pivot = PivotPoint::compute(&table)?;
        let radii: Vec<f64> = table.parties().iter()
            .map(|party| distance(party.position(), pivot.coord()))
            .collect();

        info!(x = pivot.x, y = pivot.y, "pivot point");
        for (party, radius) in table.parties().iter().zip(&radii) {
            debug!(party = party.id(), radius, "indifference radius");
        }

        Ok(Self { table, pivot, radii })
    }

    #[inline] pub fn table(&self) -> &PartyTable { &self.table }

    #[inline] pub fn pivot(&self) -> PivotPoint { self.pivot }

    #[inline] pub fn radius(&self, idx: usize) -> f64 { self.radii[idx] }

    /// Parties paired with their indifference radius.
    pub fn parties_with_radii(&self) -> impl Iterator<Item = (&Party, f64)> + '_ {
        self.table.parties().iter().zip(self.radii.iter().copied())
    }

    /// Indifference disks in canonical party order.
    pub fn disks(&self) -> Vec<Disk> {
        self.parties_with_radii()
            .enumerate()
            .map(|(idx, (party, radius))| Disk::new(idx, party.position(), radius))
            .collect()
    }

    /// Party at or nearest the weighted median on `axis`.
    ///
    /// Only seated parties qualify; ties go to the earlier party.
    pub fn pivot_party(&self, axis: Axis) -> &Party {
        let target = self.pivot.on(axis);
        let gap = |p: &Party| (p.position_on(axis) - target).abs();

        let mut best: Option<&Party> = None;
        for party in self.table.parties().iter().filter(|p| p.seats() > 0) {
            match best {
                Some(b) if gap(b) <= gap(party) => {}
                _ => best = Some(party),
            }
        }
        // A model always holds at least one seated party.
        best.unwrap_or(&self.table.parties()[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::party::PartyRow;

    fn table(rows: &[(&str, f64, f64, i64)]) -> PartyTable {
        PartyTable::new(rows.iter().map(|&(id, lr, cl, s)| PartyRow::new(id, lr, cl, s))).unwrap()
    }

    #[test]
    fn axes_are_independent() {
        // x-median comes from B, y-median from C.
        let model = SpatialModel::new(table(&[
            ("A", -4.0, 5.0, 30),
            ("B", 1.0, -6.0, 40),
            ("C", 7.0, 2.0, 30),
        ])).unwrap();
        assert_eq!(model.pivot(), PivotPoint { x: 1.0, y: 2.0 });
        assert_eq!(model.pivot_party(Axis::Economic).id(), "B");
        assert_eq!(model.pivot_party(Axis::Moral).id(), "C");
    }

    #[test]
    fn radius_zero_only_at_pivot() {
        let model = SpatialModel::new(table(&[
            ("A", -1.0, -1.0, 10),
            ("B", 0.0, 0.0, 10),
            ("C", 1.0, 1.0, 10),
        ])).unwrap();
        assert_eq!(model.pivot().coord(), Coord { x: 0.0, y: 0.0 });
        assert_eq!(model.radius(1), 0.0);
        assert!(model.radius(0) > 0.0 && model.radius(2) > 0.0);
        assert_eq!(model.radius(0), 2f64.sqrt());
    }

    #[test]
    fn rejects_seatless_table() {
        let t = table(&[("A", 0.0, 0.0, 0), ("B", 1.0, 1.0, 0)]);
        assert_eq!(SpatialModel::new(t).unwrap_err(), ValidationError::NoSeats);
    }

    #[test]
    fn seatless_party_still_gets_radius() {
        let model = SpatialModel::new(table(&[
            ("A", 2.0, 2.0, 10),
            ("Z", -3.0, -2.0, 0),
        ])).unwrap();
        assert_eq!(model.pivot().coord(), Coord { x: 2.0, y: 2.0 });
        assert_eq!(model.radius(1), 41f64.sqrt());
        assert_eq!(model.pivot_party(Axis::Economic).id(), "A");
    }

    #[test]
    fn disks_follow_canonical_order() {
        let model = SpatialModel::new(table(&[("A", -2.0, 0.0, 5), ("B", 2.0, 0.0, 6)])).unwrap();
        let disks = model.disks();
        assert_eq!(disks.len(), 2);
        assert_eq!(disks[1].idx(), 1);
        assert_eq!(disks[1].radius(), 0.0);
        assert_eq!(disks[0].radius(), 4.0);
    }
}
