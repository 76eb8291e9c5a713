//! Scroll-linked parallax offset

/// Share of the centre distance turned into vertical offset
const PARALLAX_FACTOR: f64 = 0.08;
/// Scroll movement below this many pixels is ignored
const MIN_SCROLL_DELTA: f64 = 1.0;

/// Computes a vertical offset for an element from its distance to the
/// viewport centre
#[derive(Debug, Clone)]
pub struct ParallaxTracker {
    speed: f64,
    reduced_motion: bool,
    last_scroll: Option<f64>,
}

impl Default for ParallaxTracker {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl ParallaxTracker {
    pub fn new(speed: f64) -> Self {
        Self {
            speed,
            reduced_motion: false,
            last_scroll: None,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// While reduced motion is active every update is skipped
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// Offset in pixels to apply, or `None` when nothing should change
    ///
    /// The first update always yields an offset. After that the scroll
    /// position has to move at least one pixel from the last applied one.
    pub fn update(
        &mut self,
        scroll_y: f64,
        element_top: f64,
        element_height: f64,
        viewport_height: f64,
    ) -> Option<f64> {
        if self.reduced_motion {
            return None;
        }
        if let Some(last) = self.last_scroll {
            if (scroll_y - last).abs() < MIN_SCROLL_DELTA {
                return None;
            }
        }
        self.last_scroll = Some(scroll_y);

        let element_center = element_top + element_height / 2.0;
        let viewport_center = viewport_height / 2.0;
        Some((element_center - viewport_center) * self.speed * PARALLAX_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_from_centre_distance() {
        let mut tracker = ParallaxTracker::default();
        // centre at 600, viewport centre at 400
        let offset = tracker.update(0.0, 500.0, 200.0, 800.0).unwrap();
        assert!((offset - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_element_above_centre_moves_up() {
        let mut tracker = ParallaxTracker::new(1.0);
        let offset = tracker.update(0.0, 0.0, 100.0, 800.0).unwrap();
        assert!((offset - -28.0).abs() < 1e-9);
    }

    #[test]
    fn test_sub_pixel_scroll_is_ignored() {
        let mut tracker = ParallaxTracker::default();
        assert!(tracker.update(100.0, 500.0, 200.0, 800.0).is_some());
        assert!(tracker.update(100.6, 499.4, 200.0, 800.0).is_none());
        assert!(tracker.update(101.0, 499.0, 200.0, 800.0).is_some());
    }

    #[test]
    fn test_reduced_motion_skips_updates() {
        let mut tracker = ParallaxTracker::default();
        tracker.set_reduced_motion(true);
        assert!(tracker.update(0.0, 500.0, 200.0, 800.0).is_none());

        tracker.set_reduced_motion(false);
        assert!(tracker.update(0.0, 500.0, 200.0, 800.0).is_some());
    }
}
