//! # isosvg Renderer
//!
//! Walks the sample grid cell by cell, projects each cell's corners, and
//! emits the cells whose four corners are all valid.
//!
//! Output is either an SVG document streamed to any `io::Write` sink, or a
//! JSON-serializable `SurfaceFrame` for clients that draw the polygons
//! themselves.

pub mod emitter;
pub mod render_data;
pub mod svg;

pub use emitter::{render, render_with, visible_cells, Quad, RenderError, RenderStats, VisibleCells};
pub use render_data::{RenderPolygon, SurfaceFrame};
pub use svg::SvgWriter;
