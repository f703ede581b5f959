use crate::config::{RenderConfig, Z_SCALE_FACTOR};
use crate::geometry::{SamplePoint, ScreenPoint};

/// Fixed isometric projection from world space onto the canvas.
///
/// x and y are rotated by the configured tilt and scaled so the axis range
/// spans half the canvas width; z is scaled by a fraction of the canvas
/// height and subtracted, so higher points move toward the top.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    center_x: f64,
    center_y: f64,
    /// Pixels per x or y unit.
    xy_scale: f64,
    /// Pixels per z unit.
    z_scale: f64,
    sin: f64,
    cos: f64,
}

impl Projector {
    pub fn new(config: &RenderConfig) -> Self {
        let width = config.width() as f64;
        let height = config.height() as f64;
        let half_range = config.axis_half_range();
        let xy_scale = if half_range > 0.0 {
            width / 2.0 / half_range
        } else {
            0.0
        };
        Self {
            center_x: width / 2.0,
            center_y: height / 2.0,
            xy_scale,
            z_scale: height * Z_SCALE_FACTOR,
            sin: config.tilt().sin,
            cos: config.tilt().cos,
        }
    }

    pub fn xy_scale(&self) -> f64 {
        self.xy_scale
    }

    pub fn z_scale(&self) -> f64 {
        self.z_scale
    }

    pub fn project(&self, p: &SamplePoint) -> ScreenPoint {
        if !p.is_valid() {
            return ScreenPoint::invalid();
        }
        ScreenPoint::new(
            self.center_x + (p.x - p.y) * self.cos * self.xy_scale,
            self.center_y + (p.x + p.y) * self.sin * self.xy_scale - p.z * self.z_scale,
        )
    }
}
