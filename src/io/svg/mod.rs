//! SVG format writing operations for plot export.

mod color;
mod proj;
mod writer;

pub(crate) use color::*;
pub(crate) use proj::*;
pub(crate) use writer::*;
