//! # isosvg Core
//!
//! Render configuration, height-field sampling, and the fixed isometric
//! projection used to turn a surface `z = f(x, y)` into screen-space points.
//!
//! The renderer crate drives these pieces cell by cell; nothing here keeps
//! state between renders.

pub mod config;
pub mod geometry;
pub mod projector;
pub mod sampler;
pub mod surface;

pub use config::{ConfigError, RenderConfig, RenderDefaults, RenderParams, Tilt};
pub use geometry::{GridCoordinate, SamplePoint, ScreenPoint};
pub use projector::Projector;
pub use sampler::Sampler;
pub use surface::{HeightFn, Surface};
