//! Angular and radial arithmetic for the radar layout.
//!
//! Quadrant `i` of `Q` owns the sector `[i * 360/Q, (i + 1) * 360/Q)` degrees.
//! Category `j` owns the radial band `[j, j + 1)`. Nothing here knows about
//! drawing; every value is a pure function of indices and counts, except
//! [`RadialJitter::random_radius`] which draws from the supplied RNG.

use crate::utils::error::{RadarError, Result};
use crate::utils::validation::validate_range;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadrantGeometry {
    sector_width: f64,
}

impl QuadrantGeometry {
    pub fn new(quadrants: usize) -> Result<Self> {
        if quadrants == 0 {
            return Err(RadarError::ConfigError {
                message: "quadrant count must be at least 1".to_string(),
            });
        }

        Ok(Self {
            sector_width: 360.0 / quadrants as f64,
        })
    }

    /// 每個 quadrant 的角度寬度 (度)
    pub fn sector_width(&self) -> f64 {
        self.sector_width
    }

    /// quadrant `i - 1` 與 `i` 之間的邊界 (弧度)
    pub fn start_angle(&self, quadrant: usize) -> f64 {
        (self.sector_width * quadrant as f64).to_radians()
    }

    /// quadrant 標籤的位置 (弧度)
    pub fn center_angle(&self, quadrant: usize) -> f64 {
        (self.sector_width * (quadrant as f64 + 0.5)).to_radians()
    }

    /// 把 sector 切成 `count + 1` 等份，第 `index` 個 technology 放在第 `index + 1` 條分隔線上，
    /// 所以永遠不會落在 sector 邊界上。
    pub fn technology_angle(&self, quadrant: usize, index: usize, count: usize) -> f64 {
        debug_assert!(index < count, "technology index {index} out of {count}");
        let inner = self.sector_width / (count as f64 + 1.0);
        self.start_angle(quadrant) + (inner * (index as f64 + 1.0)).to_radians()
    }
}

/// Jitter bounds inside a category's unit-width band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialJitter {
    min_offset: f64,
    max_offset: f64,
}

impl Default for RadialJitter {
    fn default() -> Self {
        Self {
            min_offset: 0.2,
            max_offset: 0.8,
        }
    }
}

impl RadialJitter {
    pub fn new(min_offset: f64, max_offset: f64) -> Result<Self> {
        validate_range("min_radius", min_offset, 0.0, 1.0)?;
        validate_range("max_radius", max_offset, 0.0, 1.0)?;
        if min_offset > max_offset {
            return Err(RadarError::InvalidConfigValueError {
                field: "min_radius".to_string(),
                value: min_offset.to_string(),
                reason: format!("must not exceed max_radius ({})", max_offset),
            });
        }

        Ok(Self {
            min_offset,
            max_offset,
        })
    }

    pub fn min_offset(&self) -> f64 {
        self.min_offset
    }

    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    /// 在 `[category + min, category + max]` 之間均勻取樣
    pub fn random_radius<R: Rng>(&self, category: usize, rng: &mut R) -> f64 {
        let base = category as f64;
        rng.random_range(base + self.min_offset..=base + self.max_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_zero_quadrants_is_a_config_error() {
        assert!(matches!(
            QuadrantGeometry::new(0),
            Err(RadarError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_sectors_tile_the_circle() {
        for q in 1..=12 {
            let geometry = QuadrantGeometry::new(q).unwrap();
            let total: f64 = (0..q).map(|_| geometry.sector_width()).sum();
            assert!((total - 360.0).abs() < EPSILON, "Q={q}: {total}");
            assert!(
                (geometry.start_angle(q) - std::f64::consts::TAU).abs() < EPSILON,
                "Q={q}"
            );
        }
    }

    #[test]
    fn test_center_is_inside_its_sector() {
        for q in 1..=12 {
            let geometry = QuadrantGeometry::new(q).unwrap();
            for i in 0..q {
                let center = geometry.center_angle(i);
                assert!(geometry.start_angle(i) < center);
                assert!(center < geometry.start_angle(i + 1));
            }
        }
    }

    #[test]
    fn test_four_quadrant_angles() {
        let geometry = QuadrantGeometry::new(4).unwrap();
        assert_eq!(geometry.sector_width(), 90.0);
        assert!((geometry.start_angle(1) - std::f64::consts::FRAC_PI_2).abs() < EPSILON);
        assert!((geometry.center_angle(0) - std::f64::consts::FRAC_PI_4).abs() < EPSILON);
        // 單一 technology 放在 sector 正中間
        assert!((geometry.technology_angle(2, 0, 1) - geometry.center_angle(2)).abs() < EPSILON);
    }

    #[test]
    fn test_technology_angles_stay_inside_and_increase() {
        for q in 1..=6 {
            let geometry = QuadrantGeometry::new(q).unwrap();
            for i in 0..q {
                let start = geometry.start_angle(i);
                let end = start + geometry.sector_width().to_radians();
                for n in 1..=15 {
                    let mut previous = start;
                    for k in 0..n {
                        let angle = geometry.technology_angle(i, k, n);
                        assert!(angle > start && angle < end, "Q={q} i={i} k={k} N={n}");
                        assert!(angle > previous);
                        previous = angle;
                    }
                }
            }
        }
    }

    #[test]
    fn test_random_radius_stays_in_band_interior() {
        let jitter = RadialJitter::default();
        let mut rng = StdRng::seed_from_u64(7);
        for category in 0..5 {
            for _ in 0..1000 {
                let radius = jitter.random_radius(category, &mut rng);
                let base = category as f64;
                assert!(radius >= base + 0.2 && radius <= base + 0.8, "{radius}");
            }
        }
    }

    #[test]
    fn test_seeded_jitter_is_reproducible() {
        let jitter = RadialJitter::default();
        let a = jitter.random_radius(1, &mut StdRng::seed_from_u64(42));
        let b = jitter.random_radius(1, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_jitter_bounds_validation() {
        assert!(RadialJitter::new(0.1, 0.9).is_ok());
        assert!(RadialJitter::new(0.5, 0.5).is_ok());
        assert!(RadialJitter::new(0.9, 0.1).is_err());
        assert!(RadialJitter::new(-0.1, 0.5).is_err());
        assert!(RadialJitter::new(0.2, 1.5).is_err());
    }
}
