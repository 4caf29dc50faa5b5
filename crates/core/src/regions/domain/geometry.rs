use crate::shared::constants::MIN_SIZE;
use crate::shared::region::Region;

/// `min(max(value, min), max)`. Unlike `f64::clamp` this never panics;
/// a NaN `value` resolves to `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Returns a copy of `region` with its rectangle forced inside the unit square.
///
/// Position is resolved first so that the size bounds can use the corrected
/// corner: `x, y ∈ [0, 1 - MIN_SIZE]`, then `width ∈ [MIN_SIZE, 1 - x]` and
/// `height ∈ [MIN_SIZE, 1 - y]`.
pub fn clamp_region(region: &Region) -> Region {
    let x = clamp(region.x, 0.0, 1.0 - MIN_SIZE);
    let y = clamp(region.y, 0.0, 1.0 - MIN_SIZE);
    let width = clamp(region.width, MIN_SIZE, 1.0 - x);
    let height = clamp(region.height, MIN_SIZE, 1.0 - y);
    Region {
        x,
        y,
        width,
        height,
        ..region.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn region(x: f64, y: f64, width: f64, height: f64) -> Region {
        Region {
            id: "r".into(),
            x,
            y,
            width,
            height,
            label: "1-1".into(),
            color: "#22d3ee".into(),
            page_index: 3,
            start: Some(8.0),
        }
    }

    // ── clamp ────────────────────────────────────────────────────────

    #[rstest]
    #[case::inside(0.5, 0.0, 1.0, 0.5)]
    #[case::below(-2.0, 0.0, 1.0, 0.0)]
    #[case::above(3.0, 0.0, 1.0, 1.0)]
    #[case::nan(f64::NAN, 0.2, 1.0, 0.2)]
    fn test_clamp(#[case] value: f64, #[case] min: f64, #[case] max: f64, #[case] expected: f64) {
        assert_relative_eq!(clamp(value, min, max), expected);
    }

    // ── clamp_region ─────────────────────────────────────────────────

    #[test]
    fn test_in_bounds_region_unchanged() {
        let r = region(0.1, 0.2, 0.5, 0.3);
        assert_eq!(clamp_region(&r), r);
    }

    #[test]
    fn test_negative_position_moves_to_origin() {
        let r = clamp_region(&region(-0.3, -1.0, 0.5, 0.5));
        assert_relative_eq!(r.x, 0.0);
        assert_relative_eq!(r.y, 0.0);
        assert_relative_eq!(r.width, 0.5);
        assert_relative_eq!(r.height, 0.5);
    }

    #[test]
    fn test_overflowing_width_trimmed_to_edge() {
        // x stays at 0.7, so width can be at most 0.3
        let r = clamp_region(&region(0.7, 0.0, 0.6, 0.2));
        assert_relative_eq!(r.x, 0.7);
        assert_relative_eq!(r.width, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_position_resolved_before_size() {
        // x = 1.5 clamps to 0.96, leaving exactly MIN_SIZE for the width
        let r = clamp_region(&region(1.5, 2.0, 0.8, 0.8));
        assert_relative_eq!(r.x, 1.0 - MIN_SIZE);
        assert_relative_eq!(r.y, 1.0 - MIN_SIZE);
        assert_relative_eq!(r.width, MIN_SIZE, epsilon = 1e-12);
        assert_relative_eq!(r.height, MIN_SIZE, epsilon = 1e-12);
    }

    #[test]
    fn test_tiny_region_grows_to_min_size() {
        let r = clamp_region(&region(0.2, 0.2, 0.001, 0.0));
        assert_relative_eq!(r.width, MIN_SIZE);
        assert_relative_eq!(r.height, MIN_SIZE);
    }

    #[test]
    fn test_non_geometry_fields_preserved() {
        let input = region(-1.0, -1.0, 5.0, 5.0);
        let r = clamp_region(&input);
        assert_eq!(r.id, input.id);
        assert_eq!(r.label, input.label);
        assert_eq!(r.color, input.color);
        assert_eq!(r.page_index, 3);
        assert_eq!(r.start, Some(8.0));
    }

    #[test]
    fn test_input_not_mutated() {
        let input = region(2.0, 2.0, 2.0, 2.0);
        let _ = clamp_region(&input);
        assert_relative_eq!(input.x, 2.0);
    }

    // ── Invariants ───────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_clamped_region_is_in_bounds(
            x in -10.0f64..10.0,
            y in -10.0f64..10.0,
            w in -10.0f64..10.0,
            h in -10.0f64..10.0,
        ) {
            let r = clamp_region(&region(x, y, w, h));
            prop_assert!(r.x >= 0.0);
            prop_assert!(r.y >= 0.0);
            prop_assert!(r.width >= MIN_SIZE);
            prop_assert!(r.height >= MIN_SIZE);
            prop_assert!(r.x + r.width <= 1.0 + 1e-12);
            prop_assert!(r.y + r.height <= 1.0 + 1e-12);
        }

        #[test]
        fn prop_clamp_is_idempotent(
            x in -10.0f64..10.0,
            y in -10.0f64..10.0,
            w in -10.0f64..10.0,
            h in -10.0f64..10.0,
        ) {
            let once = clamp_region(&region(x, y, w, h));
            let twice = clamp_region(&once);
            prop_assert_eq!(once, twice);
        }
    }
}
