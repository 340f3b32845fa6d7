#![doc = "Coalesce: a spatial model of multiparty coalition formation"]
mod analysis;
mod coalition;
mod config;
mod error;
mod geom;
mod grid;
mod io;
mod party;
mod pivot;
mod plot;
mod report;
mod sampler;

#[doc(inline)]
pub use analysis::Analysis;

#[doc(inline)]
pub use coalition::{CoalitionBucket, CoalitionTable};

#[doc(inline)]
pub use config::{ModelConfig, DEFAULT_STEP};

#[doc(inline)]
pub use error::{Result, ValidationError};

#[doc(inline)]
pub use geom::{distance, Disk};

#[doc(inline)]
pub use grid::{Bounds, Grid, MAX_GRID_POINTS};

#[doc(inline)]
pub use party::{Axis, Party, PartyRow, PartyTable, POLICY_MAX, POLICY_MIN};

#[doc(inline)]
pub use pivot::{PivotPoint, SpatialModel};

#[doc(inline)]
pub use report::{narrative, GridSummary, PartySummary, RankedCoalition, Report};

#[doc(inline)]
pub use sampler::{CoalitionKey, GridPoint, OverlapSampler, Sample};
