//! SVG writing operations.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};

pub(crate) struct SvgWriter {
    writer: BufWriter<File>
}

/// In-memory SVG writer.
pub(crate) struct SvgStringWriter {
    buffer: Vec<u8>
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.writer.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.writer.flush() }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> { self.writer.write_all(buf) }
}

impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

impl SvgStringWriter {
    pub(crate) fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub(crate) fn into_string(self) -> Result<String> {
        String::from_utf8(self.buffer)
            .context("[io::svg] SVG output is not valid UTF-8")
    }
}

impl SvgWriter {
    /// Create a new SVG writer to a file path
    pub(crate) fn new(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("[io::svg] Failed to create {}", path.display()))?;

        Ok(Self { writer: BufWriter::new(file) })
    }
}

/// Write the XML declaration, opening <svg> tag, white background and shared styles.
pub(crate) fn write_svg_header<W: Write + ?Sized>(writer: &mut W, width: f64, height: f64, view: Option<&geo::Rect>) -> Result<()> {
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    match view {
        Some(bounds) => writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg"
        width="{width:.0}" height="{height:.0}"
        viewBox="0 0 {width:.0} {height:.0}"
        data-x-min="{x_min}" data-x-max="{x_max}"
        data-y-min="{y_min}" data-y-max="{y_max}">"##,
            x_min = bounds.min().x,
            x_max = bounds.max().x,
            y_min = bounds.min().y,
            y_max = bounds.max().y,
        )?,
        None => writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg"
        width="{width:.0}" height="{height:.0}"
        viewBox="0 0 {width:.0} {height:.0}">"##)?,
    }
    writeln!(writer, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
    write_svg_styles(writer)
}

fn write_svg_styles<W: Write + ?Sized>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    .frame {{ fill: none; stroke: #9ca3af; stroke-width: 1; }}
    .axis {{ stroke: #6b7280; stroke-width: 0.8; stroke-dasharray: 4 3; }}
    .disk {{ stroke-width: 1.6; fill-opacity: 0.08; }}
    .party {{ stroke: #111827; stroke-width: 0.8; }}
    .pivot {{ stroke: #111827; stroke-width: 1.4; fill: none; }}
    .cell {{ shape-rendering: crispEdges; }}
    .bar {{ fill: #2563eb; }}
    text {{ font-family: sans-serif; font-size: 12px; fill: #111827; }}
    .title {{ font-size: 15px; font-weight: bold; }}
</style>
</defs>"##)?;
    Ok(())
}

/// Write the closing </svg> tag.
pub(crate) fn write_svg_footer<W: Write + ?Sized>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}

/// Escape text content for XML.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"A&B <"x">"#), "A&amp;B &lt;&quot;x&quot;&gt;");
    }

    #[test]
    fn header_and_footer() {
        let mut w = SvgStringWriter::new();
        write_svg_header(&mut w, 200.0, 100.0, None).unwrap();
        write_svg_footer(&mut w).unwrap();
        let svg = w.into_string().unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 200 100""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
