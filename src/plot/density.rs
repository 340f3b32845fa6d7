use std::io::Write;

use anyhow::Result;

use crate::{analysis::Analysis, io::svg::{self, Projection}};

use super::{draw_axes, draw_disks, draw_title, view, MARGIN, WIDTH};

pub(super) fn render(analysis: &Analysis, writer: &mut dyn Write) -> Result<()> {
    let view = view(analysis);
    let proj = Projection::fit(view, WIDTH, MARGIN);
    let sample = analysis.sample();
    let table = analysis.table();

    svg::write_svg_header(writer, proj.width(), proj.height(), Some(&view))?;
    draw_title(writer, "Majority coverage of the policy space")?;

    // One cell per grid point, centred on it; uncovered points stay blank.
    let side = sample.grid().step() * proj.scale();
    writeln!(writer, r#"<g class="cell">"#)?;
    for point in sample.points().iter().filter(|p| !p.key.is_empty()) {
        let (x, y) = proj.project(&point.coord());
        let fill = if point.majority {
            svg::seat_color(point.seats, sample.majority_threshold(), table.total_seats()).to_string()
        } else {
            svg::MINORITY_FILL.to_string()
        };
        writeln!(
            writer,
            r#"<rect x="{:.2}" y="{:.2}" width="{side:.2}" height="{side:.2}" style="fill:{fill}"/>"#,
            x - side / 2.0, y - side / 2.0,
        )?;
    }
    writeln!(writer, "</g>")?;

    draw_axes(writer, &proj)?;
    draw_disks(writer, &analysis.model().disks(), &proj)?;

    svg::write_svg_footer(writer)
}
