//! Minimal SVG document writer.
//!
//! The document is a single `<svg>` element carrying the canvas size and a
//! style declaration, followed by one `<polygon>` line per emitted cell.
//! Coordinates use the shortest round-trip `f64` formatting so adjacent
//! polygons share bit-identical edges.

use std::io::{self, Write};

use isosvg_core::{RenderConfig, ScreenPoint};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const STROKE_COLOR: &str = "grey";
const STROKE_WIDTH: f64 = 0.7;

pub struct SvgWriter<W: Write> {
    writer: W,
}

impl<W: Write> SvgWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_header(&mut self, config: &RenderConfig) -> io::Result<()> {
        writeln!(
            self.writer,
            "<svg xmlns=\"{}\" style=\"stroke: {}; fill: {}; stroke-width: {}\" width=\"{}\" height=\"{}\">",
            SVG_NAMESPACE,
            STROKE_COLOR,
            config.color(),
            STROKE_WIDTH,
            config.width(),
            config.height()
        )
    }

    /// Write a closed polygon through the given points, in order.
    pub fn write_polygon(&mut self, points: &[ScreenPoint]) -> io::Result<()> {
        self.writer.write_all(b"<polygon points=\"")?;
        for (n, p) in points.iter().enumerate() {
            if n > 0 {
                self.writer.write_all(b" ")?;
            }
            write!(self.writer, "{},{}", p.x, p.y)?;
        }
        self.writer.write_all(b"\"/>\n")
    }

    pub fn write_footer(&mut self) -> io::Result<()> {
        self.writer.write_all(b"</svg>\n")?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
