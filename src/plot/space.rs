use std::io::Write;

use anyhow::Result;
use geo::Coord;

use crate::{analysis::Analysis, io::svg::{self, Projection}};

use super::{draw_axes, draw_disks, draw_title, view, MARGIN, WIDTH};

/// Pivot crosshair half-length in pixels.
const CROSS: f64 = 9.0;

pub(super) fn render(analysis: &Analysis, writer: &mut dyn Write) -> Result<()> {
    let view = view(analysis);
    let proj = Projection::fit(view, WIDTH, MARGIN);
    let model = analysis.model();

    svg::write_svg_header(writer, proj.width(), proj.height(), Some(&view))?;
    draw_title(writer, "Indifference circles and pivot point")?;
    draw_axes(writer, &proj)?;
    draw_disks(writer, &model.disks(), &proj)?;

    for (idx, (party, radius)) in model.parties_with_radii().enumerate() {
        let (x, y) = proj.project(&party.position());
        let color = svg::golden_angle_color(idx);
        writeln!(
            writer,
            r#"<circle class="party" cx="{x:.2}" cy="{y:.2}" r="5" style="fill:{color}"><title>{} lr={} conlib={} seats={} radius={radius:.3}</title></circle>"#,
            svg::escape(party.id()), party.lr(), party.conlib(), party.seats(),
        )?;
        writeln!(
            writer,
            r#"<text x="{:.2}" y="{:.2}">{} ({})</text>"#,
            x + 7.0, y - 7.0, svg::escape(party.id()), party.seats(),
        )?;
    }

    let pivot = model.pivot();
    let (px, py) = proj.project(&Coord { x: pivot.x, y: pivot.y });
    writeln!(writer, r#"<g class="pivot"><title>pivot ({:.3}, {:.3})</title>"#, pivot.x, pivot.y)?;
    writeln!(writer, r#"<line x1="{:.2}" y1="{py:.2}" x2="{:.2}" y2="{py:.2}"/>"#, px - CROSS, px + CROSS)?;
    writeln!(writer, r#"<line x1="{px:.2}" y1="{:.2}" x2="{px:.2}" y2="{:.2}"/>"#, py - CROSS, py + CROSS)?;
    writeln!(writer, r#"<circle cx="{px:.2}" cy="{py:.2}" r="{:.1}"/>"#, CROSS / 2.0)?;
    writeln!(writer, "</g>")?;

    svg::write_svg_footer(writer)
}
