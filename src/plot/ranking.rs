use std::io::Write;

use anyhow::Result;

use crate::{analysis::Analysis, io::svg};

use super::{draw_title, MARGIN, WIDTH};

const ROW_HEIGHT: f64 = 26.0;
const BAR_HEIGHT: f64 = 18.0;
const LABEL_WIDTH: f64 = 220.0;
const VALUE_WIDTH: f64 = 60.0;

pub(super) fn render(analysis: &Analysis, writer: &mut dyn Write) -> Result<()> {
    let ranked: Vec<_> = analysis.coalitions().ranked().collect();
    let rows = ranked.len().max(1) as f64;
    let height = 2.0 * MARGIN + ROW_HEIGHT * rows;

    svg::write_svg_header(writer, WIDTH, height, None)?;
    draw_title(writer, "Majority coalitions by share of policy space")?;

    if ranked.is_empty() {
        writeln!(writer, r#"<text x="{MARGIN}" y="{:.0}">No majority coalition covers any sampled point.</text>"#, MARGIN + ROW_HEIGHT / 2.0)?;
        return svg::write_svg_footer(writer);
    }

    let max = ranked.iter().map(|b| b.percent).fold(0.0, f64::max).max(f64::EPSILON);
    let bar_span = WIDTH - 2.0 * MARGIN - LABEL_WIDTH - VALUE_WIDTH;

    for (i, bucket) in ranked.iter().enumerate() {
        let top = MARGIN + i as f64 * ROW_HEIGHT;
        let text_y = top + BAR_HEIGHT / 2.0 + 4.0;
        let bar_x = MARGIN + LABEL_WIDTH;
        let bar_w = bar_span * bucket.percent / max;

        writeln!(writer, r#"<text x="{:.2}" y="{text_y:.2}" text-anchor="end">{}</text>"#, bar_x - 8.0, svg::escape(&bucket.label))?;
        writeln!(writer, r#"<rect class="bar" x="{bar_x:.2}" y="{top:.2}" width="{bar_w:.2}" height="{BAR_HEIGHT}"/>"#)?;
        writeln!(writer, r#"<text x="{:.2}" y="{text_y:.2}">{:.1}%</text>"#, bar_x + bar_w + 6.0, bucket.percent)?;
    }

    svg::write_svg_footer(writer)
}
