use serde::{Deserialize, Serialize};

/// A lattice point on the sample grid, each index in `[0, grid_resolution]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoordinate {
    pub i: u32,
    pub j: u32,
}

impl GridCoordinate {
    pub fn new(i: u32, j: u32) -> Self {
        Self { i, j }
    }

    pub fn offset(&self, di: u32, dj: u32) -> Self {
        Self {
            i: self.i + di,
            j: self.j + dj,
        }
    }
}

/// A sampled point of the height field in world (axis) units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// False when `z` is NaN or infinite.
    pub valid: bool,
}

impl SamplePoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            valid: z.is_finite(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// A projected point in canvas pixels. Screen y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub valid: bool,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, valid: true }
    }

    /// Placeholder for a corner whose height could not be evaluated.
    pub fn invalid() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            valid: false,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}
