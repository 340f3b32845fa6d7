//! Plane geometry for indifference disks.

use std::f64::consts::TAU;

use geo::{Coord, LineString};
use rstar::{AABB, PointDistance, RTreeObject};

/// Slack added to disk envelopes so that the R-tree never drops a point
/// the exact closed-disk test would accept.
const ENVELOPE_SLACK: f64 = 1e-9;

/// Euclidean distance between two plane coordinates.
///
/// Radii and membership tests both go through this function, so a point at
/// exactly the pivot lies exactly on every disk boundary.
#[inline]
pub fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// A party's closed indifference disk, keyed by canonical party index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disk {
    idx: usize,
    center: Coord<f64>,
    radius: f64,
}

impl Disk {
    pub fn new(idx: usize, center: Coord<f64>, radius: f64) -> Self {
        Self { idx, center, radius }
    }

    /// Canonical index of the owning party.
    #[inline] pub fn idx(&self) -> usize { self.idx }

    #[inline] pub fn center(&self) -> Coord<f64> { self.center }

    #[inline] pub fn radius(&self) -> f64 { self.radius }

    /// Closed-disk membership: `radius >= distance(point, center)`.
    #[inline]
    pub fn contains(&self, point: Coord<f64>) -> bool {
        self.radius >= distance(point, self.center)
    }

    /// Closed polyline approximating the circle with `segments` chords.
    pub fn outline(&self, segments: usize) -> LineString<f64> {
        let segments = segments.max(3);
        (0..=segments)
            .map(|i| {
                let theta = TAU * (i % segments) as f64 / segments as f64;
                Coord {
                    x: self.center.x + self.radius * theta.cos(),
                    y: self.center.y + self.radius * theta.sin(),
                }
            })
            .collect()
    }
}

impl RTreeObject for Disk {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let r = self.radius + ENVELOPE_SLACK;
        AABB::from_corners(
            [self.center.x - r, self.center.y - r],
            [self.center.x + r, self.center.y + r],
        )
    }
}

impl PointDistance for Disk {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let d = (distance(Coord { x: point[0], y: point[1] }, self.center) - self.radius).max(0.0);
        d * d
    }

    fn contains_point(&self, point: &[f64; 2]) -> bool {
        self.contains(Coord { x: point[0], y: point[1] })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = Coord { x: 1.0, y: -2.0 };
        let b = Coord { x: 4.0, y: 2.0 };
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(distance(b, a), 5.0);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn closed_disk_boundary() {
        let disk = Disk::new(0, Coord { x: 0.0, y: 0.0 }, 5.0);
        assert!(disk.contains(Coord { x: 3.0, y: 4.0 }));
        assert!(disk.contains(Coord { x: 0.0, y: 0.0 }));
        assert!(!disk.contains(Coord { x: 3.0, y: 4.0 + 1e-9 }));
    }

    #[test]
    fn zero_radius_disk_contains_only_center() {
        let disk = Disk::new(0, Coord { x: 2.0, y: 2.0 }, 0.0);
        assert!(disk.contains(Coord { x: 2.0, y: 2.0 }));
        assert!(!disk.contains(Coord { x: 2.0, y: 2.0 + 1e-12 }));
    }

    #[test]
    fn outline_is_closed_ring_on_circle() {
        let disk = Disk::new(0, Coord { x: 1.0, y: 1.0 }, 2.0);
        let ring = disk.outline(16);
        assert_eq!(ring.0.len(), 17);
        assert_eq!(ring.0.first(), ring.0.last());
        for c in &ring.0 {
            assert!((distance(*c, disk.center()) - 2.0).abs() < 1e-12);
        }
    }
}
