use std::io::Write;

use anyhow::Result;
use geo::{Coord, CoordsIter, LineString, Rect};

/// Maps policy coordinates into SVG pixels (Y down) with a uniform scale.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Projection {
    view: Rect<f64>,
    margin: f64,
    scale: f64,
}

impl Projection {
    /// Fit `view` into `width` pixels, leaving `margin` on every side.
    pub(crate) fn fit(view: Rect<f64>, width: f64, margin: f64) -> Self {
        let span = view.width().max(view.height()).max(f64::EPSILON);
        Self { view, margin, scale: (width - 2.0 * margin) / span }
    }

    #[inline] pub(crate) fn scale(&self) -> f64 { self.scale }

    #[inline] pub(crate) fn view(&self) -> &Rect<f64> { &self.view }

    pub(crate) fn width(&self) -> f64 { self.view.width() * self.scale + 2.0 * self.margin }

    pub(crate) fn height(&self) -> f64 { self.view.height() * self.scale + 2.0 * self.margin }

    #[inline]
    pub(crate) fn project(&self, coord: &Coord<f64>) -> (f64, f64) {
        let x = self.margin + (coord.x - self.view.min().x) * self.scale;
        let y = self.margin + (self.view.max().y - coord.y) * self.scale;
        (x, y)
    }
}

/// Compact SVG path string for a closed ring: "M x,y L x,y ... Z".
pub(crate) fn ring_to_path(ring: &LineString<f64>, proj: &Projection) -> String {
    let mut out = String::new();

    let mut coords = ring.coords_iter().map(|coord| proj.project(&coord));
    if let Some((x, y)) = coords.next() {
        out.push_str(&format!("M{x:.2},{y:.2}"));
        for (x, y) in coords {
            out.push_str(&format!(" L{x:.2},{y:.2}"));
        }
        out.push('Z');
    }

    out
}

/// Draw a line between two policy coordinates.
pub(crate) fn draw_line(writer: &mut dyn Write, class: &str, a: Coord<f64>, b: Coord<f64>, proj: &Projection) -> Result<()> {
    let (x1, y1) = proj.project(&a);
    let (x2, y2) = proj.project(&b);
    writeln!(writer, r#"<line class="{class}" x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}"/>"#)?;
    Ok(())
}
