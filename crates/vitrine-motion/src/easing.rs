//! Pure easing functions for enter/exit tweens
//!
//! Maps input progress in [0, 1] to eased output in [0, 1].

// Re-export EasingType from core
pub use vitrine_core::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseOutQuad => power_ease_out(t, 2),
            EasingType::EaseInQuad => t * t,
            EasingType::EaseInOutQuad => quad_ease_in_out(t),
            EasingType::EaseOutCubic => power_ease_out(t, 3),
            EasingType::EaseOutQuint => power_ease_out(t, 5),
            EasingType::EaseOutExpo => exponential_ease_out(t),
        }
    }
}

/// Power ease-out: f(t) = 1 - (1-t)^n
#[inline]
fn power_ease_out(t: f64, n: i32) -> f64 {
    1.0 - (1.0 - t).powi(n)
}

/// Quadratic ease-in-out: accelerate for the first half, decelerate after
#[inline]
fn quad_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
pub(crate) fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_boundaries() {
        for easing in EasingType::ALL {
            assert!((easing.apply(0.0) - 0.0).abs() < 0.001, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in EasingType::ALL {
            let mut prev = 0.0;
            for i in 0..=10 {
                let t = i as f64 / 10.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_in_and_out_curves_bend_opposite_ways() {
        assert!(EasingType::EaseOutQuad.apply(0.5) > 0.5);
        assert!(EasingType::EaseInQuad.apply(0.5) < 0.5);
        assert!((EasingType::EaseInOutQuad.apply(0.5) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert_eq!(EasingType::Linear.apply(-1.0), 0.0);
        assert_eq!(EasingType::Linear.apply(2.0), 1.0);
    }
}
