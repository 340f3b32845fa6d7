//! The full pipeline: parties → pivot → grid scan → coalition table.

use tracing::info;

use crate::{
    coalition::CoalitionTable,
    config::ModelConfig,
    error::{Result, ValidationError},
    grid::{Bounds, Grid},
    party::PartyTable,
    pivot::SpatialModel,
    sampler::{OverlapSampler, Sample},
};

/// Results of one complete run.
#[derive(Clone, Debug)]
pub struct Analysis {
    model: SpatialModel,
    sample: Sample,
    coalitions: CoalitionTable,
}

impl Analysis {
    /// Run every stage on `table`; aborts on the first validation error.
    pub fn run(table: PartyTable, config: &ModelConfig) -> Result<Self> {
        let step = config.step;
        if !(step.is_finite() && step > 0.0) { return Err(ValidationError::InvalidStep { step }) }

        let table = config.apply(table)?;
        info!(parties = table.len(), total_seats = table.total_seats(), majority = table.majority_threshold(), "running analysis");

        let model = SpatialModel::new(table)?;
        let grid = match config.bounds {
            Some(bounds) => Grid::new(bounds, step)?,
            None => Grid::anchored(Bounds::covering(&model, step), step, model.pivot().coord())?,
        };

        let sample = OverlapSampler::new(&model).sample(&grid);
        let coalitions = CoalitionTable::from_sample(&sample, model.table());

        Ok(Self { model, sample, coalitions })
    }

    #[inline] pub fn model(&self) -> &SpatialModel { &self.model }

    #[inline] pub fn table(&self) -> &PartyTable { self.model.table() }

    #[inline] pub fn sample(&self) -> &Sample { &self.sample }

    #[inline] pub fn coalitions(&self) -> &CoalitionTable { &self.coalitions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::party::PartyRow;

    fn table() -> PartyTable {
        PartyTable::new(vec![
            PartyRow::new("A", -3.0, 2.0, 45),
            PartyRow::new("B", 1.0, -1.0, 25),
            PartyRow::new("C", 5.0, 3.0, 30),
        ]).unwrap()
    }

    #[test]
    fn default_bounds_cover_every_disk() {
        let analysis = Analysis::run(table(), &ModelConfig { step: 0.5, ..Default::default() }).unwrap();
        let b = *analysis.sample().grid().bounds();
        for (party, r) in analysis.model().parties_with_radii() {
            assert!(b.xmin <= (party.lr() - r).max(-10.0) && b.xmax >= (party.lr() + r).min(10.0));
            assert!(b.ymin <= (party.conlib() - r).max(-10.0) && b.ymax >= (party.conlib() + r).min(10.0));
        }
    }

    #[test]
    fn default_grid_samples_the_pivot() {
        let analysis = Analysis::run(table(), &ModelConfig { step: 0.3, ..Default::default() }).unwrap();
        let pivot = analysis.model().pivot().coord();
        assert!(analysis.sample().grid().points().any(|c| c == pivot));
    }

    #[test]
    fn lone_party_off_lattice_wins_at_its_position() {
        let table = PartyTable::new(vec![PartyRow::new("A", 0.05, 0.05, 10)]).unwrap();
        let analysis = Analysis::run(table, &ModelConfig::default()).unwrap();
        assert_eq!(analysis.sample().len(), 1);

        let top = analysis.coalitions().top().unwrap();
        assert_eq!(top.label, "A (10)");
        assert_eq!(top.percent, 100.0);
    }

    #[test]
    fn config_is_applied() {
        let cfg = ModelConfig { step: 0.5, majority: Some(71), ..Default::default() };
        let analysis = Analysis::run(table(), &cfg).unwrap();
        assert_eq!(analysis.table().majority_threshold(), 71);
        assert!(analysis.coalitions().ranked().all(|b| b.seats >= 71));

        let cfg = ModelConfig { legislature_size: Some(120), ..Default::default() };
        assert!(matches!(Analysis::run(table(), &cfg), Err(ValidationError::SeatTotalMismatch { .. })));
    }

    #[test]
    fn invalid_step_aborts() {
        let cfg = ModelConfig { step: -0.1, ..Default::default() };
        assert_eq!(Analysis::run(table(), &cfg).unwrap_err(), ValidationError::InvalidStep { step: -0.1 });
    }

    #[test]
    fn explicit_bounds_are_used() {
        let cfg = ModelConfig { step: 1.0, bounds: Some(Bounds::new(-2.0, 2.0, -1.0, 1.0)), ..Default::default() };
        let analysis = Analysis::run(table(), &cfg).unwrap();
        assert_eq!(analysis.sample().len(), 15);
        assert_eq!(analysis.coalitions().total_points(), 15);
    }
}
