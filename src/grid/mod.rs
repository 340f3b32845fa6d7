mod bounds;
mod grid;

pub use bounds::Bounds;
pub use grid::{Grid, MAX_GRID_POINTS};
