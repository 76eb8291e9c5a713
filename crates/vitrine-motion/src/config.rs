//! Per-controller configuration
//!
//! Site-wide defaults live in `vitrine_core::MotionConfig`; the types here
//! are the immutable per-attachment values seeded from it.

use std::time::Duration;

pub use vitrine_core::{EasingType, MotionConfig};

use crate::props::AnimationKind;

/// Extension trait for MotionConfig with utility methods
pub trait MotionConfigExt {
    /// Quiet period used to coalesce visibility changes
    fn debounce(&self) -> Duration;

    /// Animation config for `kind` seeded from these defaults
    fn animation(&self, kind: AnimationKind) -> AnimationConfig;

    /// Observation options seeded from these defaults
    fn observation(&self) -> ObservationOptions;
}

impl MotionConfigExt for MotionConfig {
    #[inline]
    fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    fn animation(&self, kind: AnimationKind) -> AnimationConfig {
        AnimationConfig {
            kind,
            duration: self.duration_secs,
            stagger_interval: self.stagger_secs,
            travel_distance: self.travel_distance,
            scale_factor: self.scale_factor,
            easing: self.easing,
        }
    }

    fn observation(&self) -> ObservationOptions {
        ObservationOptions {
            visibility_threshold: self.visibility_threshold,
            root_margin: self.root_margin.clone(),
            ..ObservationOptions::default()
        }
    }
}

/// What to animate and how
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    pub kind: AnimationKind,
    /// Enter duration in seconds
    pub duration: f64,
    /// Delay between consecutive children in seconds (stagger groups only)
    pub stagger_interval: f64,
    /// Travel distance in pixels
    pub travel_distance: f64,
    pub scale_factor: f64,
    pub easing: EasingType,
}

impl AnimationConfig {
    pub fn new(kind: AnimationKind) -> Self {
        MotionConfig::default().animation(kind)
    }

    pub fn with_duration(mut self, secs: f64) -> Self {
        self.duration = secs;
        self
    }

    pub fn with_stagger_interval(mut self, secs: f64) -> Self {
        self.stagger_interval = secs;
        self
    }

    pub fn with_travel_distance(mut self, px: f64) -> Self {
        self.travel_distance = px;
        self
    }

    pub fn with_easing(mut self, easing: EasingType) -> Self {
        self.easing = easing;
        self
    }
}

/// When the controller considers its element visible
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationOptions {
    /// Fraction of the element that must be visible
    pub visibility_threshold: f64,
    /// Viewport edge bias, CSS margin syntax
    pub root_margin: String,
    /// Play the enter transition once and never exit or replay
    pub once: bool,
    /// Seconds to wait before each enter transition starts
    pub start_delay: f64,
}

impl Default for ObservationOptions {
    fn default() -> Self {
        let motion = MotionConfig::default();
        Self {
            visibility_threshold: motion.visibility_threshold,
            root_margin: motion.root_margin,
            once: false,
            start_delay: 0.0,
        }
    }
}

impl ObservationOptions {
    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }

    pub fn with_start_delay(mut self, secs: f64) -> Self {
        self.start_delay = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_animation_config() {
        let config = AnimationConfig::new(AnimationKind::FadeUp);
        assert!((config.duration - 0.7).abs() < f64::EPSILON);
        assert!((config.stagger_interval - 0.06).abs() < f64::EPSILON);
        assert_eq!(config.travel_distance, 40.0);
        assert!((config.scale_factor - 0.97).abs() < f64::EPSILON);
        assert_eq!(config.easing, EasingType::EaseOutQuad);
    }

    #[test]
    fn test_default_observation() {
        let options = ObservationOptions::default();
        assert!((options.visibility_threshold - 0.2).abs() < f64::EPSILON);
        assert_eq!(options.root_margin, "0px 0px -80px 0px");
        assert!(!options.once);
        assert_eq!(options.start_delay, 0.0);
    }

    #[test]
    fn test_seeded_from_motion_config() {
        let motion = MotionConfig {
            debounce_ms: 60,
            duration_secs: 1.0,
            ..Default::default()
        };
        assert_eq!(motion.debounce(), Duration::from_millis(60));
        assert_eq!(motion.animation(AnimationKind::Scale).duration, 1.0);
        assert_eq!(motion.observation().root_margin, motion.root_margin);
    }
}
