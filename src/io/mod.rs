//! IO module for format-specific reading and writing operations.
//!
//! # Format Modules
//!
//! - `csv` - CSV format for party tables, coalition tables and grid points
//! - `svg` - SVG format for plot export
//!
//! TOML config loading lives on `ModelConfig`; JSON reports on `Report`.

pub(crate) mod csv;
pub(crate) mod svg;
