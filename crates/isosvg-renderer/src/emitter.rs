use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;

use isosvg_core::surface::ripple;
use isosvg_core::{GridCoordinate, Projector, RenderConfig, Sampler, ScreenPoint};

use crate::svg::SvgWriter;

// ── Errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

// ── Cell traversal ────────────────────────────────────────────────────

/// Corner offsets of a cell relative to its lowest grid coordinate. The
/// order fixes the vertex winding of emitted polygons.
const CORNER_OFFSETS: [(u32, u32); 4] = [(1, 0), (0, 0), (0, 1), (1, 1)];

/// A cell whose four corners all projected to valid screen points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub cell: GridCoordinate,
    pub corners: [ScreenPoint; 4],
}

/// Iterator over the emitted cells of a render, in row-major order
/// (`i` outer, `j` inner). Cells with any invalid corner are skipped.
pub struct VisibleCells<'c, F> {
    sampler: Sampler<'c, F>,
    projector: Projector,
    resolution: usize,
    next: usize,
}

impl<'c, F> VisibleCells<'c, F>
where
    F: Fn(f64, f64) -> f64,
{
    fn cell_quad(&self, cell: GridCoordinate) -> Option<Quad> {
        let corners = CORNER_OFFSETS.map(|(di, dj)| {
            let sample = self.sampler.sample(cell.offset(di, dj));
            self.projector.project(&sample)
        });
        corners
            .iter()
            .all(ScreenPoint::is_valid)
            .then_some(Quad { cell, corners })
    }
}

impl<'c, F> Iterator for VisibleCells<'c, F>
where
    F: Fn(f64, f64) -> f64,
{
    type Item = Quad;

    fn next(&mut self) -> Option<Quad> {
        let total = self.resolution * self.resolution;
        while self.next < total {
            let i = (self.next / self.resolution) as u32;
            let j = (self.next % self.resolution) as u32;
            self.next += 1;
            if let Some(quad) = self.cell_quad(GridCoordinate::new(i, j)) {
                return Some(quad);
            }
        }
        None
    }
}

/// Walk every cell of the grid once, yielding the cells to draw.
pub fn visible_cells<F>(config: &RenderConfig, height: F) -> VisibleCells<'_, F>
where
    F: Fn(f64, f64) -> f64,
{
    VisibleCells {
        sampler: Sampler::new(config, height),
        projector: Projector::new(config),
        resolution: config.grid_resolution() as usize,
        next: 0,
    }
}

// ── Rendering ─────────────────────────────────────────────────────────

/// Cell counts for one finished render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    pub candidates: usize,
    pub emitted: usize,
    pub skipped: usize,
}

impl RenderStats {
    pub fn new(candidates: usize, emitted: usize) -> Self {
        Self {
            candidates,
            emitted,
            skipped: candidates - emitted,
        }
    }
}

/// Render the default ripple surface as an SVG document into `sink`.
pub fn render<W: Write>(config: &RenderConfig, sink: W) -> Result<RenderStats, RenderError> {
    render_with(config, ripple, sink)
}

/// Render the surface `height` as an SVG document into `sink`.
///
/// A write failure aborts the render at once and is returned; cells skipped
/// for non-finite heights are not errors.
pub fn render_with<W, F>(config: &RenderConfig, height: F, sink: W) -> Result<RenderStats, RenderError>
where
    W: Write,
    F: Fn(f64, f64) -> f64,
{
    let mut svg = SvgWriter::new(sink);
    svg.write_header(config)?;

    let mut emitted = 0;
    for quad in visible_cells(config, height) {
        svg.write_polygon(&quad.corners)?;
        emitted += 1;
    }

    svg.write_footer()?;

    let stats = RenderStats::new(config.cell_count(), emitted);
    log::debug!(
        "Rendered {}x{} surface: {} polygons, {} cells skipped",
        config.width(),
        config.height(),
        stats.emitted,
        stats.skipped
    );
    Ok(stats)
}
