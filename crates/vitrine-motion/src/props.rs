//! Visual property records and the closed set of animation kinds

use crate::stagger::StaggerOrigin;
use crate::timing::lerp;

/// Animatable visual properties of one element
///
/// `x`/`y` are translations in pixels, `scale` is a uniform factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualProps {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl VisualProps {
    /// Fully visible, untransformed
    pub const VISIBLE: VisualProps = VisualProps {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    const fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::VISIBLE
        }
    }

    /// Interpolate every property towards `to`
    pub fn lerp(&self, to: &VisualProps, t: f64) -> VisualProps {
        VisualProps {
            opacity: lerp(self.opacity, to.opacity, t),
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            scale: lerp(self.scale, to.scale, t),
        }
    }

    /// Approximate equality, for assertions on interpolated values
    pub fn approx_eq(&self, other: &VisualProps, epsilon: f64) -> bool {
        (self.opacity - other.opacity).abs() <= epsilon
            && (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.scale - other.scale).abs() <= epsilon
    }
}

impl Default for VisualProps {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Exit tweens travel this share of the configured distance
const EXIT_DISTANCE_FACTOR: f64 = 0.3;
/// The `scale` kind starts this much below its scale factor
const SCALE_START_OFFSET: f64 = 0.05;

/// Which animation a controller plays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationKind {
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    Scale,
    /// Children of the element matching `child_selector` animate one after
    /// another, starting from `origin`
    StaggerGroup {
        child_selector: String,
        origin: StaggerOrigin,
    },
}

impl AnimationKind {
    pub fn stagger(child_selector: impl Into<String>) -> Self {
        AnimationKind::StaggerGroup {
            child_selector: child_selector.into(),
            origin: StaggerOrigin::Start,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, AnimationKind::StaggerGroup { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnimationKind::FadeUp => "fade-up",
            AnimationKind::FadeDown => "fade-down",
            AnimationKind::FadeLeft => "fade-left",
            AnimationKind::FadeRight => "fade-right",
            AnimationKind::Scale => "scale",
            AnimationKind::StaggerGroup { .. } => "stagger-group",
        }
    }

    /// Hidden properties applied before the first paint
    pub fn initial(&self, distance: f64, scale_factor: f64) -> VisualProps {
        let hidden = VisualProps::hidden();
        match self {
            AnimationKind::FadeUp => VisualProps { y: distance, ..hidden },
            AnimationKind::FadeDown => VisualProps { y: -distance, ..hidden },
            AnimationKind::FadeLeft => VisualProps { x: -distance, ..hidden },
            AnimationKind::FadeRight => VisualProps { x: distance, ..hidden },
            AnimationKind::Scale => VisualProps {
                scale: scale_factor - SCALE_START_OFFSET,
                ..hidden
            },
            AnimationKind::StaggerGroup { .. } => VisualProps {
                y: distance * 0.5,
                ..hidden
            },
        }
    }

    /// Properties every enter transition ends at
    pub fn visible(&self) -> VisualProps {
        VisualProps::VISIBLE
    }

    /// Properties an exit transition ends at
    pub fn exit(&self, distance: f64, scale_factor: f64) -> VisualProps {
        let exit_distance = distance * EXIT_DISTANCE_FACTOR;
        let hidden = VisualProps::hidden();
        match self {
            AnimationKind::FadeUp => VisualProps { y: exit_distance, ..hidden },
            AnimationKind::FadeDown => VisualProps { y: -exit_distance, ..hidden },
            AnimationKind::FadeLeft => VisualProps { x: -exit_distance, ..hidden },
            AnimationKind::FadeRight => VisualProps { x: exit_distance, ..hidden },
            AnimationKind::Scale => VisualProps {
                scale: scale_factor,
                ..hidden
            },
            AnimationKind::StaggerGroup { .. } => VisualProps {
                y: exit_distance * 0.5,
                ..hidden
            },
        }
    }

    /// Exit duration as a share of the enter duration
    pub fn exit_duration_factor(&self) -> f64 {
        if self.is_group() {
            0.35
        } else {
            0.4
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_props_per_kind() {
        let up = AnimationKind::FadeUp.initial(40.0, 0.97);
        assert_eq!(up, VisualProps { opacity: 0.0, x: 0.0, y: 40.0, scale: 1.0 });

        let left = AnimationKind::FadeLeft.initial(40.0, 0.97);
        assert_eq!(left.x, -40.0);

        let scale = AnimationKind::Scale.initial(40.0, 0.97);
        assert!((scale.scale - 0.92).abs() < 1e-9);

        let group = AnimationKind::stagger(".card").initial(40.0, 0.97);
        assert_eq!(group.y, 20.0);
    }

    #[test]
    fn test_exit_is_shorter_than_entry() {
        for kind in [
            AnimationKind::FadeUp,
            AnimationKind::FadeDown,
            AnimationKind::FadeLeft,
            AnimationKind::FadeRight,
        ] {
            let initial = kind.initial(40.0, 0.97);
            let exit = kind.exit(40.0, 0.97);
            let travel = |p: VisualProps| p.x.abs() + p.y.abs();
            assert!((travel(exit) - 12.0).abs() < 1e-9, "{}", kind.name());
            assert!(travel(exit) < travel(initial));
            assert_eq!(exit.opacity, 0.0);
        }
        assert!((AnimationKind::stagger(".c").exit(40.0, 0.97).y - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_exit_duration_factor() {
        assert_eq!(AnimationKind::FadeUp.exit_duration_factor(), 0.4);
        assert_eq!(AnimationKind::stagger(".c").exit_duration_factor(), 0.35);
    }

    #[test]
    fn test_lerp_halfway() {
        let from = AnimationKind::FadeUp.initial(40.0, 0.97);
        let mid = from.lerp(&VisualProps::VISIBLE, 0.5);
        assert!(mid.approx_eq(&VisualProps { opacity: 0.5, x: 0.0, y: 20.0, scale: 1.0 }, 1e-9));
    }
}
