use serde::{Deserialize, Serialize};

use isosvg_core::RenderConfig;

use crate::emitter::{visible_cells, Quad, RenderError, RenderStats};

/// One emitted cell, ready for a client-side canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPolygon {
    /// Grid indices `[i, j]` of the cell.
    pub cell: [u32; 2],
    /// Flat array of vertices: [x0, y0, x1, y1, ...]
    pub vertices: Vec<f64>,
}

impl From<&Quad> for RenderPolygon {
    fn from(quad: &Quad) -> Self {
        Self {
            cell: [quad.cell.i, quad.cell.j],
            vertices: quad.corners.iter().flat_map(|p| [p.x, p.y]).collect(),
        }
    }
}

/// Complete render frame: canvas metadata plus every emitted polygon in
/// emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceFrame {
    pub width: u32,
    pub height: u32,
    pub color: String,
    pub candidates: usize,
    pub polygons: Vec<RenderPolygon>,
}

impl SurfaceFrame {
    pub fn collect<F>(config: &RenderConfig, height: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        let polygons: Vec<RenderPolygon> = visible_cells(config, height)
            .map(|quad| RenderPolygon::from(&quad))
            .collect();
        Self {
            width: config.width(),
            height: config.height(),
            color: config.color().to_string(),
            candidates: config.cell_count(),
            polygons,
        }
    }

    pub fn stats(&self) -> RenderStats {
        RenderStats::new(self.candidates, self.polygons.len())
    }

    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string(self)?)
    }
}
