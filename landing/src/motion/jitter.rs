//! Floating decorations behind the hero, scattered from a seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingCircle {
    /// Diameter in px.
    pub size: f64,
    pub top_pct: f64,
    pub left_pct: f64,
    /// Horizontal drift at the top of the float, px.
    pub drift_x: f64,
    /// Seconds per float cycle.
    pub duration: f64,
    /// Seconds before the first cycle.
    pub delay: f64,
}

impl FloatingCircle {
    pub fn style(&self) -> String {
        format!(
            "width:{size:.1}px;height:{size:.1}px;top:{top:.2}%;left:{left:.2}%;\
--drift-x:{drift:.2}px;animation-duration:{duration:.2}s;animation-delay:{delay:.2}s;",
            size = self.size,
            top = self.top_pct,
            left = self.left_pct,
            drift = self.drift_x,
            duration = self.duration,
            delay = self.delay,
        )
    }
}

/// `count` circles drawn from `seed`. The same seed always yields the same
/// layout.
pub fn scatter(seed: u64, count: usize) -> Vec<FloatingCircle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| FloatingCircle {
            size: rng.random_range(50.0..150.0),
            top_pct: rng.random_range(0.0..100.0),
            left_pct: rng.random_range(0.0..100.0),
            drift_x: rng.random_range(-10.0..10.0),
            duration: rng.random_range(4.0..8.0),
            delay: rng.random_range(0.0..2.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(scatter(42, 6), scatter(42, 6));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(scatter(1, 6), scatter(2, 6));
    }

    #[test]
    fn values_stay_in_bounds() {
        for circle in scatter(7, 200) {
            assert!((50.0..150.0).contains(&circle.size));
            assert!((0.0..100.0).contains(&circle.top_pct));
            assert!((0.0..100.0).contains(&circle.left_pct));
            assert!((-10.0..10.0).contains(&circle.drift_x));
            assert!((4.0..8.0).contains(&circle.duration));
            assert!((0.0..2.0).contains(&circle.delay));
        }
    }

    #[test]
    fn count_is_respected() {
        assert_eq!(scatter(0, 0).len(), 0);
        assert_eq!(scatter(0, 6).len(), 6);
    }

    #[test]
    fn style_carries_custom_properties() {
        let circle = FloatingCircle {
            size: 80.0,
            top_pct: 12.5,
            left_pct: 40.0,
            drift_x: -3.0,
            duration: 5.0,
            delay: 0.5,
        };
        assert_eq!(
            circle.style(),
            "width:80.0px;height:80.0px;top:12.50%;left:40.00%;\
--drift-x:-3.00px;animation-duration:5.00s;animation-delay:0.50s;"
        );
    }
}
