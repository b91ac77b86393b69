//! Property-based tests for dwell selection
//!
//! Validates selector invariants:
//! - The timer stays within [0, selection_time] and the fraction within [0, 1]
//! - Feeding "no hit, no time" never changes anything
//! - Clock-face segment i is filled exactly when the fraction reaches i/12
//!
//! These properties must hold for any sequence of frames.

use gazeselect_core::InteractionConfig;
use gazeselect_ui3d::{
    components::clock_face::tick_for, ClockFace, DwellSelector, FocusAnimator, TickMark,
    SEGMENT_COUNT,
};
use glam::Vec3;
use proptest::prelude::*;

fn frames() -> impl Strategy<Value = Vec<(bool, f32)>> {
    prop::collection::vec((any::<bool>(), 0.0f32..1.5), 0..200)
}

proptest! {
    /// Property: timer and fraction stay in range for any input sequence
    #[test]
    fn timer_stays_clamped(
        selection_time in 0.1f32..5.0,
        inputs in frames(),
    ) {
        let mut selector = DwellSelector::with_selection_time(selection_time);
        for (hitting, dt) in inputs {
            selector.update(hitting, dt);
            prop_assert!(selector.timer() >= 0.0);
            prop_assert!(selector.timer() <= selection_time);
            let fraction = selector.fraction_complete();
            prop_assert!((0.0..=1.0).contains(&fraction), "fraction {} out of range", fraction);
        }
    }

    /// Property: (no hit, dt = 0) is a no-op in every reachable state
    #[test]
    fn idle_frames_are_idempotent(inputs in frames(), repeats in 1usize..20) {
        let mut selector = DwellSelector::default();
        for (hitting, dt) in inputs {
            selector.update(hitting, dt);
        }
        // A zero-length miss snaps an idle timer to zero once but never changes state
        let state = selector.state();
        prop_assert_eq!(selector.update(false, 0.0), None);
        prop_assert_eq!(selector.state(), state);
        let timer = selector.timer();
        let ticks = *selector.clock_face().ticks();

        for _ in 0..repeats {
            prop_assert_eq!(selector.update(false, 0.0), None);
            prop_assert_eq!(selector.state(), state);
            prop_assert_eq!(selector.timer(), timer);
            prop_assert_eq!(*selector.clock_face().ticks(), ticks);
        }
    }

    /// Property: segment i is filled iff fraction >= i/12
    #[test]
    fn segments_fill_monotonically(fraction in -0.5f32..1.5) {
        let mut face = ClockFace::default();
        face.update(fraction);
        for segment in 1..=SEGMENT_COUNT {
            let expected = fraction >= segment as f32 / 12.0;
            prop_assert_eq!(face.is_filled(segment), expected);
            prop_assert_eq!(face.tick(segment), Some(tick_for(fraction, segment)));
        }
        // Filled segments always form a prefix
        let ticks = face.ticks();
        let filled = face.filled_count();
        prop_assert!(ticks[..filled].iter().all(|t| *t == TickMark::Filled));
        prop_assert!(ticks[filled..].iter().all(|t| *t == TickMark::Empty));
    }

    /// Property: a focus animator never leaves the segment between its poses
    #[test]
    fn focus_moves_between_poses(dts in prop::collection::vec(0.0f32..0.5, 1..300)) {
        let rest = Vec3::ZERO;
        let focus = Vec3::new(0.0, 0.0, 5.0);
        let mut animator = FocusAnimator::new(rest, focus, &InteractionConfig::default());
        let mut position = rest;
        animator.select();
        for dt in dts {
            animator.update(dt, &mut position);
            prop_assert!(position.z >= -1e-4 && position.z <= 5.0 + 1e-4);
            prop_assert!(animator.hold_timer() <= 2.5);
        }
    }
}
