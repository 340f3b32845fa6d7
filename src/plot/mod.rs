//! SVG plots of a finished analysis.

mod density;
mod ranking;
mod space;

use std::{io::Write, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use geo::Rect;

use crate::{
    analysis::Analysis,
    geom::Disk,
    grid::Bounds,
    io::svg::{self, Projection, SvgStringWriter, SvgWriter},
};

/// Default SVG width in pixels.
const WIDTH: f64 = 800.0;

/// Default SVG margin in pixels.
const MARGIN: f64 = 40.0;

/// Chords used to approximate each indifference circle.
const CIRCLE_SEGMENTS: usize = 96;

type Render = fn(&Analysis, &mut dyn Write) -> Result<()>;

impl Analysis {
    /// Parties, indifference circles and the pivot point.
    pub fn space_svg(&self, path: &Path) -> Result<()> { write_file(self, path, space::render) }

    /// Grid points shaded by majority seat sum, with circles overlaid.
    pub fn density_svg(&self, path: &Path) -> Result<()> { write_file(self, path, density::render) }

    /// Bar chart of ranked majority coalitions.
    pub fn ranking_svg(&self, path: &Path) -> Result<()> { write_file(self, path, ranking::render) }

    pub fn space_svg_string(&self) -> Result<String> { write_string(self, space::render) }

    pub fn density_svg_string(&self) -> Result<String> { write_string(self, density::render) }

    pub fn ranking_svg_string(&self) -> Result<String> { write_string(self, ranking::render) }

    /// Write `space.svg`, `density.svg` and `ranking.svg` into `dir`.
    pub fn write_plots(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("[plot] Failed to create {}", dir.display()))?;

        let plots: [(&str, Render); 3] = [
            ("space.svg", space::render),
            ("density.svg", density::render),
            ("ranking.svg", ranking::render),
        ];
        plots.into_iter()
            .map(|(name, render)| {
                let path = dir.join(name);
                write_file(self, &path, render)?;
                Ok(path)
            })
            .collect()
    }
}

fn write_file(analysis: &Analysis, path: &Path, render: Render) -> Result<()> {
    let mut writer = SvgWriter::new(path)?;
    render(analysis, &mut writer)?;
    writer.flush()
        .with_context(|| format!("[plot] Failed to flush {}", path.display()))
}

fn write_string(analysis: &Analysis, render: Render) -> Result<String> {
    let mut writer = SvgStringWriter::new();
    render(analysis, &mut writer)?;
    writer.into_string()
}

/// Visible region: the policy space, grown to include the sampled box.
fn view(analysis: &Analysis) -> Rect<f64> {
    let space = Bounds::policy_space();
    let grid = analysis.sample().grid().bounds();
    Bounds::new(
        space.xmin.min(grid.xmin),
        space.xmax.max(grid.xmax),
        space.ymin.min(grid.ymin),
        space.ymax.max(grid.ymax),
    ).to_rect()
}

/// Indifference circles, one colour per party.
fn draw_disks(writer: &mut dyn Write, disks: &[Disk], proj: &Projection) -> Result<()> {
    for disk in disks {
        let color = svg::golden_angle_color(disk.idx());
        if disk.radius() > 0.0 {
            writeln!(
                writer,
                r#"<path class="disk" style="stroke:{color};fill:{color}" d="{}"/>"#,
                svg::ring_to_path(&disk.outline(CIRCLE_SEGMENTS), proj),
            )?;
        }
    }
    Ok(())
}

/// Policy-space frame, zero axes and axis captions.
fn draw_axes(writer: &mut dyn Write, proj: &Projection) -> Result<()> {
    use geo::Coord;

    let view = *proj.view();
    let (x0, y0) = proj.project(&Coord { x: view.min().x, y: view.max().y });
    let (x1, y1) = proj.project(&Coord { x: view.max().x, y: view.min().y });
    writeln!(writer, r#"<rect class="frame" x="{x0:.2}" y="{y0:.2}" width="{:.2}" height="{:.2}"/>"#, x1 - x0, y1 - y0)?;

    if view.min().x <= 0.0 && view.max().x >= 0.0 {
        svg::draw_line(writer, "axis", Coord { x: 0.0, y: view.min().y }, Coord { x: 0.0, y: view.max().y }, proj)?;
    }
    if view.min().y <= 0.0 && view.max().y >= 0.0 {
        svg::draw_line(writer, "axis", Coord { x: view.min().x, y: 0.0 }, Coord { x: view.max().x, y: 0.0 }, proj)?;
    }

    writeln!(writer, r#"<text x="{:.2}" y="{:.2}" text-anchor="middle">economic (lr)</text>"#, (x0 + x1) / 2.0, y1 + 24.0)?;
    writeln!(
        writer,
        r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" transform="rotate(-90 {x:.2} {y:.2})">moral (conlib)</text>"#,
        x = x0 - 16.0,
        y = (y0 + y1) / 2.0,
    )?;
    Ok(())
}

fn draw_title(writer: &mut dyn Write, title: &str) -> Result<()> {
    writeln!(writer, r#"<text class="title" x="{MARGIN}" y="{:.0}">{}</text>"#, MARGIN / 2.0 + 4.0, svg::escape(title))?;
    Ok(())
}
