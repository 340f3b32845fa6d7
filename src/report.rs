//! Summary report and narrative text.

use serde::Serialize;

use crate::{
    analysis::Analysis,
    coalition::CoalitionTable,
    grid::Bounds,
    party::Axis,
    pivot::PivotPoint,
};

#[derive(Clone, Debug, Serialize)]
pub struct PartySummary {
    pub id: String,
    pub lr: f64,
    pub conlib: f64,
    pub seats: u32,
    pub radius: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct GridSummary {
    pub bounds: Bounds,
    pub step: f64,
    pub num_x: usize,
    pub num_y: usize,
    pub points: usize,
    pub majority_points: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct RankedCoalition {
    pub rank: usize,
    pub label: String,
    pub parties: Vec<String>,
    pub seats: u32,
    pub percent: f64,
    pub minimal_winning: bool,
}

/// Everything a reader needs to reproduce the headline numbers.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub parties: Vec<PartySummary>,
    pub pivot: PivotPoint,
    pub economic_pivot_party: String,
    pub moral_pivot_party: String,
    pub total_seats: u32,
    pub majority_threshold: u32,
    pub grid: GridSummary,
    pub ranking: Vec<RankedCoalition>,
    pub narrative: String,
}

impl Report {
    pub fn new(analysis: &Analysis) -> Self {
        let model = analysis.model();
        let table = analysis.table();
        let grid = analysis.sample().grid();

        Self {
            parties: model.parties_with_radii()
                .map(|(p, radius)| PartySummary {
                    id: p.id().to_string(),
                    lr: p.lr(),
                    conlib: p.conlib(),
                    seats: p.seats(),
                    radius,
                })
                .collect(),
            pivot: model.pivot(),
            economic_pivot_party: model.pivot_party(Axis::Economic).id().to_string(),
            moral_pivot_party: model.pivot_party(Axis::Moral).id().to_string(),
            total_seats: table.total_seats(),
            majority_threshold: table.majority_threshold(),
            grid: GridSummary {
                bounds: *grid.bounds(),
                step: grid.step(),
                num_x: grid.num_x(),
                num_y: grid.num_y(),
                points: analysis.sample().len(),
                majority_points: analysis.sample().majority_points(),
            },
            ranking: analysis.coalitions().ranked()
                .enumerate()
                .map(|(i, b)| RankedCoalition {
                    rank: i + 1,
                    label: b.label.clone(),
                    parties: b.parties.clone(),
                    seats: b.seats,
                    percent: b.percent,
                    minimal_winning: b.minimal_winning,
                })
                .collect(),
            narrative: narrative(analysis.coalitions()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Headline sentences naming the top two majority coalitions.
pub fn narrative(coalitions: &CoalitionTable) -> String {
    let Some(top) = coalitions.top() else {
        return "No majority coalition is acceptable to all of its members anywhere in the sampled policy space.".to_string();
    };

    let mut text = format!(
        "The most viable majority coalition is {}, acceptable to all of its members over {:.1}% of the sampled policy space.",
        top.label, top.percent,
    );
    match coalitions.runner_up() {
        Some(second) => text.push_str(&format!(
            " The runner-up is {}, covering {:.1}%.",
            second.label, second.percent,
        )),
        None => text.push_str(" No other majority coalition covers any sampled point."),
    }
    text
}
