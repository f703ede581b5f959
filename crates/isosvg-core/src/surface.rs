use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// A height function `z = f(x, y)` over world coordinates.
pub type HeightFn = fn(f64, f64) -> f64;

/// Damped radial wave `sin(r) / r`. Evaluates to NaN at the origin.
pub fn ripple(x: f64, y: f64) -> f64 {
    let r = x.hypot(y);
    r.sin() / r
}

pub fn egg_box(x: f64, y: f64) -> f64 {
    x.sin() * y.sin()
}

pub fn moguls(x: f64, y: f64) -> f64 {
    x.cos() + y.cos()
}

pub fn saddle(x: f64, y: f64) -> f64 {
    x * x - y * y
}

/// The built-in surfaces selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    #[default]
    Ripple,
    EggBox,
    Moguls,
    Saddle,
}

impl Surface {
    pub const ALL: [Surface; 4] = [
        Surface::Ripple,
        Surface::EggBox,
        Surface::Moguls,
        Surface::Saddle,
    ];

    pub fn height_fn(self) -> HeightFn {
        match self {
            Surface::Ripple => ripple,
            Surface::EggBox => egg_box,
            Surface::Moguls => moguls,
            Surface::Saddle => saddle,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Surface::Ripple => "ripple",
            Surface::EggBox => "eggbox",
            Surface::Moguls => "moguls",
            Surface::Saddle => "saddle",
        }
    }

    /// Resolve an optional request token, defaulting to `Ripple` when the
    /// token is absent or unknown.
    pub fn resolve(token: Option<&str>) -> Self {
        match token.filter(|t| !t.is_empty()) {
            None => Surface::default(),
            Some(t) => t.parse().unwrap_or_else(|err| {
                log::warn!("{}, using {}", err, Surface::default());
                Surface::default()
            }),
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Surface {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Surface::ALL
            .into_iter()
            .find(|surface| surface.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownSurface(s.to_string()))
    }
}
