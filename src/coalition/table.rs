use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::{party::PartyTable, sampler::{CoalitionKey, Sample}};

use super::CoalitionBucket;

/// Area share of every covering set, plus the ranking of majority coalitions.
///
/// Buckets are ordered by point count descending; equal counts fall back to
/// ascending `CoalitionKey` (lexicographic over canonical party indices).
#[derive(Clone, Debug, Serialize)]
pub struct CoalitionTable {
    total_points: usize,
    majority_threshold: u32,
    buckets: Vec<CoalitionBucket>,
}

impl CoalitionTable {
    /// Group `sample` by covering set and compute each group's area share.
    pub fn from_sample(sample: &Sample, table: &PartyTable) -> Self {
        let total_points = sample.len();

        let mut counts: BTreeMap<&CoalitionKey, usize> = BTreeMap::new();
        for point in sample.points() {
            *counts.entry(&point.key).or_default() += 1;
        }

        let mut buckets: Vec<CoalitionBucket> = counts.into_iter()
            .map(|(key, count)| CoalitionBucket::new(key.clone(), count, total_points, table))
            .collect();
        // Stable sort keeps the BTreeMap key order among equal counts.
        buckets.sort_by(|a, b| b.count.cmp(&a.count));

        for bucket in &buckets {
            debug!(label = %bucket.label, count = bucket.count, percent = bucket.percent, majority = bucket.majority, "bucket");
        }
        info!(
            buckets = buckets.len(),
            majority_buckets = buckets.iter().filter(|b| b.majority).count(),
            "aggregated coalitions"
        );

        Self { total_points, majority_threshold: table.majority_threshold(), buckets }
    }

    /// `G`, the number of grid points aggregated.
    #[inline] pub fn total_points(&self) -> usize { self.total_points }

    #[inline] pub fn majority_threshold(&self) -> u32 { self.majority_threshold }

    /// Every bucket, majority or not, including the empty covering set.
    #[inline] pub fn buckets(&self) -> &[CoalitionBucket] { &self.buckets }

    pub fn get(&self, key: &CoalitionKey) -> Option<&CoalitionBucket> {
        self.buckets.iter().find(|b| &b.key == key)
    }

    /// Majority coalitions, best area share first.
    pub fn ranked(&self) -> impl Iterator<Item = &CoalitionBucket> + '_ {
        self.buckets.iter().filter(|b| b.majority)
    }

    /// Ranked `(label, percent)` pairs.
    pub fn ranking(&self) -> Vec<(String, f64)> {
        self.ranked().map(|b| (b.label.clone(), b.percent)).collect()
    }

    /// Majority coalition with the largest area share.
    pub fn top(&self) -> Option<&CoalitionBucket> { self.ranked().next() }

    /// Second-ranked majority coalition.
    pub fn runner_up(&self) -> Option<&CoalitionBucket> { self.ranked().nth(1) }

    /// Sum of percent over all buckets; 100 up to floating-point rounding.
    pub fn total_percent(&self) -> f64 { self.buckets.iter().map(|b| b.percent).sum() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::{Bounds, Grid}, party::PartyRow, pivot::SpatialModel, sampler::OverlapSampler};

    fn model() -> SpatialModel {
        SpatialModel::new(PartyTable::new(vec![
            PartyRow::new("A", -4.0, 0.0, 35),
            PartyRow::new("B", 0.0, 1.0, 30),
            PartyRow::new("C", 4.0, 0.0, 35),
        ]).unwrap()).unwrap()
    }

    fn coalitions(model: &SpatialModel, step: f64) -> CoalitionTable {
        let sampler = OverlapSampler::new(model);
        let sample = sampler.sample(&Grid::new(Bounds::new(-8.0, 8.0, -5.0, 5.0), step).unwrap());
        CoalitionTable::from_sample(&sample, model.table())
    }

    #[test]
    fn shares_sum_to_one_hundred() {
        let t = coalitions(&model(), 0.25);
        assert!((t.total_percent() - 100.0).abs() < 1e-9);
        assert_eq!(t.buckets().iter().map(|b| b.count).sum::<usize>(), t.total_points());
    }

    #[test]
    fn majority_filter() {
        let t = coalitions(&model(), 0.25);
        for b in t.buckets() {
            assert_eq!(b.majority, b.seats >= t.majority_threshold());
        }
        assert!(t.ranked().all(|b| b.seats >= 51));
        assert!(t.get(&CoalitionKey::empty()).is_some_and(|b| !b.majority));
    }

    #[test]
    fn ranking_is_descending_with_key_tiebreak() {
        let t = coalitions(&model(), 0.25);
        let ranked: Vec<_> = t.ranked().collect();
        assert!(!ranked.is_empty());
        for pair in ranked.windows(2) {
            assert!(pair[0].count > pair[1].count || (pair[0].count == pair[1].count && pair[0].key < pair[1].key));
        }
        assert_eq!(t.top(), ranked.first().copied());
        assert_eq!(t.runner_up(), ranked.get(1).copied());
    }

    #[test]
    fn symmetric_wings_tie_and_break_by_key() {
        // A and C mirror each other around B, so A-B and B-C cover equal areas.
        let t = coalitions(&model(), 0.25);
        let ab = t.get(&CoalitionKey::new([0, 1])).unwrap();
        let bc = t.get(&CoalitionKey::new([1, 2])).unwrap();
        assert_eq!(ab.count, bc.count);
        let pos = |key: &CoalitionKey| t.ranked().position(|b| &b.key == key).unwrap();
        assert!(pos(&ab.key) < pos(&bc.key));
    }

    #[test]
    fn minimal_winning_flags() {
        let t = coalitions(&model(), 0.25);
        let ab = t.get(&CoalitionKey::new([0, 1])).unwrap();
        assert!(ab.majority && ab.minimal_winning);
        if let Some(all) = t.get(&CoalitionKey::new([0, 1, 2])) {
            assert!(all.majority && !all.minimal_winning);
        }
    }

    #[test]
    fn deterministic() {
        let m = model();
        assert_eq!(coalitions(&m, 0.5).ranking(), coalitions(&m, 0.5).ranking());
    }
}
