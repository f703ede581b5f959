use crate::config::RenderConfig;
use crate::geometry::{GridCoordinate, SamplePoint};

/// Evaluates a height function at grid lattice points.
///
/// The height function is any `Fn(f64, f64) -> f64`; swapping it changes the
/// plotted surface without touching the sampling rules.
pub struct Sampler<'c, F> {
    config: &'c RenderConfig,
    height: F,
}

impl<'c, F> Sampler<'c, F>
where
    F: Fn(f64, f64) -> f64,
{
    pub fn new(config: &'c RenderConfig, height: F) -> Self {
        Self { config, height }
    }

    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    /// Map a grid index onto `[-axis_half_range, +axis_half_range]`.
    pub fn world_axis(&self, index: u32) -> f64 {
        let n = self.config.grid_resolution() as f64;
        self.config.axis_half_range() * (2.0 * index as f64 / n - 1.0)
    }

    pub fn sample(&self, at: GridCoordinate) -> SamplePoint {
        let x = self.world_axis(at.i);
        let y = self.world_axis(at.j);
        SamplePoint::new(x, y, (self.height)(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::ripple;

    #[test]
    fn test_world_range_endpoints() {
        let cfg = RenderConfig::default();
        let sampler = Sampler::new(&cfg, ripple);
        let first = sampler.sample(GridCoordinate::new(0, 0));
        assert_eq!((first.x, first.y), (-30.0, -30.0));
        let last = sampler.sample(GridCoordinate::new(100, 100));
        assert_eq!((last.x, last.y), (30.0, 30.0));
        assert_eq!(sampler.world_axis(50), 0.0);
    }

    #[test]
    fn test_world_coordinates_stay_in_range() {
        let cfg = RenderConfig::default();
        let sampler = Sampler::new(&cfg, |_, _| 0.0);
        let half = cfg.axis_half_range();
        for i in 0..=cfg.grid_resolution() {
            let x = sampler.world_axis(i);
            assert!((-half..=half).contains(&x), "index {} mapped to {}", i, x);
        }
    }

    #[test]
    fn test_ripple_invalid_only_at_origin() {
        let cfg = RenderConfig::default();
        let sampler = Sampler::new(&cfg, ripple);
        let n = cfg.grid_resolution();
        let mut invalid = Vec::new();
        for i in 0..=n {
            for j in 0..=n {
                let at = GridCoordinate::new(i, j);
                if !sampler.sample(at).is_valid() {
                    invalid.push(at);
                }
            }
        }
        assert_eq!(invalid, vec![GridCoordinate::new(50, 50)]);
    }

    #[test]
    fn test_custom_height_function() {
        let cfg = RenderConfig::default();
        let sampler = Sampler::new(&cfg, |x, y| x + y);
        let p = sampler.sample(GridCoordinate::new(100, 50));
        assert!((p.z - 30.0).abs() < 1e-12);
        assert!(p.is_valid());
    }
}
