use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canvas width used when a request omits or garbles it.
pub const DEFAULT_WIDTH: u32 = 600;
/// Canvas height used when a request omits or garbles it.
pub const DEFAULT_HEIGHT: u32 = 320;
/// Fill color used when a request omits or garbles it.
pub const DEFAULT_COLOR: &str = "blue";

/// Number of cells along each grid axis.
pub const GRID_RESOLUTION: u32 = 100;
/// World coordinates span `-AXIS_HALF_RANGE..=AXIS_HALF_RANGE` on both axes.
pub const AXIS_HALF_RANGE: f64 = 30.0;
/// Isometric tilt of the x and y axes.
pub const TILT_DEGREES: f64 = 30.0;
/// Pixels per z unit, as a fraction of the canvas height.
pub const Z_SCALE_FACTOR: f64 = 0.4;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Canvas width must be positive")]
    ZeroWidth,

    #[error("Canvas height must be positive")]
    ZeroHeight,

    #[error("Invalid fill color '{0}'")]
    InvalidColor(String),

    #[error("Unknown surface '{0}'")]
    UnknownSurface(String),
}

/// Sine and cosine of the projection tilt, computed once per configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub radians: f64,
    pub sin: f64,
    pub cos: f64,
}

impl Tilt {
    pub fn from_degrees(degrees: f64) -> Self {
        let radians = degrees.to_radians();
        Self {
            radians,
            sin: radians.sin(),
            cos: radians.cos(),
        }
    }

    pub fn isometric() -> Self {
        Self::from_degrees(TILT_DEGREES)
    }
}

/// Fallback values for per-request render parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderDefaults {
    pub width: u32,
    pub height: u32,
    pub color: String,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl RenderDefaults {
    /// Check that these defaults would build a valid `RenderConfig`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        RenderConfig::new(self.width, self.height, &self.color).map(|_| ())
    }
}

/// Raw, unvalidated render parameters as they arrive from a query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderParams {
    pub width: Option<String>,
    pub height: Option<String>,
    pub color: Option<String>,
    pub surface: Option<String>,
}

impl RenderParams {
    /// Collect recognised keys from decoded `key=value` pairs.
    /// The first occurrence of a key wins; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "width" => &mut params.width,
                "height" => &mut params.height,
                "color" => &mut params.color,
                "surface" => &mut params.surface,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.as_ref().to_string());
            }
        }
        params
    }
}

/// Immutable settings for a single render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    width: u32,
    height: u32,
    color: String,
    grid_resolution: u32,
    axis_half_range: f64,
    tilt: Tilt,
}

impl RenderConfig {
    pub fn new(width: u32, height: u32, color: &str) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if !is_valid_color(color) {
            return Err(ConfigError::InvalidColor(color.to_string()));
        }
        Ok(Self {
            width,
            height,
            color: color.to_string(),
            grid_resolution: GRID_RESOLUTION,
            axis_half_range: AXIS_HALF_RANGE,
            tilt: Tilt::isometric(),
        })
    }

    /// Build a configuration from request parameters. Each field that is
    /// missing, unparsable, or non-positive falls back to `defaults`
    /// independently. Never fails.
    pub fn resolve(params: &RenderParams, defaults: &RenderDefaults) -> Self {
        let width = parse_dimension("width", params.width.as_deref(), defaults.width);
        let height = parse_dimension("height", params.height.as_deref(), defaults.height);
        let color = match params.color.as_deref() {
            None | Some("") => defaults.color.as_str(),
            Some(c) if is_valid_color(c) => c,
            Some(c) => {
                log::warn!("Rejected color '{}', using '{}'", c, defaults.color);
                defaults.color.as_str()
            }
        };

        Self::new(width, height, color).unwrap_or_else(|err| {
            log::warn!("Invalid render defaults ({}), using built-in defaults", err);
            Self::default()
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn grid_resolution(&self) -> u32 {
        self.grid_resolution
    }

    pub fn axis_half_range(&self) -> f64 {
        self.axis_half_range
    }

    pub fn tilt(&self) -> &Tilt {
        &self.tilt
    }

    /// Total number of cells walked by a render.
    pub fn cell_count(&self) -> usize {
        let n = self.grid_resolution as usize;
        n * n
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            color: DEFAULT_COLOR.to_string(),
            grid_resolution: GRID_RESOLUTION,
            axis_half_range: AXIS_HALF_RANGE,
            tilt: Tilt::isometric(),
        }
    }
}

fn parse_dimension(name: &str, raw: Option<&str>, default: u32) -> u32 {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return default;
    };
    match raw.parse::<u32>() {
        Ok(value) if value > 0 => value,
        _ => {
            log::warn!("Ignoring {}='{}', using {}", name, raw, default);
            default
        }
    }
}

/// A color token is embedded verbatim in an SVG style attribute, so only
/// characters that cannot terminate the attribute are accepted.
fn is_valid_color(color: &str) -> bool {
    !color.is_empty()
        && color
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' '))
}
