mod median;
mod model;

pub(crate) use median::weighted_median;
pub use model::{PivotPoint, SpatialModel};
