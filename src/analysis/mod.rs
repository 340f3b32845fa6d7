mod analysis;
mod io;

pub use analysis::Analysis;
