//! Stagger distribution: per-child start offsets for grouped tweens

/// Which child of a group leads a staggered tween
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StaggerOrigin {
    /// First child leads
    #[default]
    Start,
    /// Innermost children lead, outer ones follow symmetrically
    Center,
    /// Last child leads
    End,
}

impl StaggerOrigin {
    /// Position of the origin within a group of `count` children
    fn position(self, count: usize) -> f64 {
        let last = count.saturating_sub(1) as f64;
        match self {
            StaggerOrigin::Start => 0.0,
            StaggerOrigin::Center => last / 2.0,
            StaggerOrigin::End => last,
        }
    }
}

/// Start offset in seconds of each of `count` children, in source order
///
/// A child's offset is its distance from the origin times `interval`, so
/// children at equal distance start together.
pub fn stagger_offsets(count: usize, interval: f64, origin: StaggerOrigin) -> Vec<f64> {
    let o = origin.position(count);
    (0..count)
        .map(|i| (i as f64 - o).abs() * interval)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_offsets(actual: Vec<f64>, expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_start_leads_with_first_child() {
        assert_offsets(stagger_offsets(4, 0.1, StaggerOrigin::Start), &[0.0, 0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_end_leads_with_last_child() {
        assert_offsets(stagger_offsets(4, 0.1, StaggerOrigin::End), &[0.3, 0.2, 0.1, 0.0]);
    }

    #[test]
    fn test_center_odd_and_even() {
        assert_offsets(stagger_offsets(5, 0.1, StaggerOrigin::Center), &[0.2, 0.1, 0.0, 0.1, 0.2]);
        assert_offsets(stagger_offsets(4, 0.1, StaggerOrigin::Center), &[0.15, 0.05, 0.05, 0.15]);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(stagger_offsets(0, 0.1, StaggerOrigin::Center).is_empty());
        assert_offsets(stagger_offsets(1, 0.1, StaggerOrigin::End), &[0.0]);
    }
}
