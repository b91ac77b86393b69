//! End-to-end timing scenarios for the dwell selector and focus animator.

use gazeselect_core::InteractionConfig;
use gazeselect_testkit::{record_frames, run_frame_test, FrameTestConfig};
use gazeselect_ui3d::{DwellSelector, DwellState, DwellTransition, FocusAnimator, FocusState};
use glam::Vec3;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct DwellSnapshot {
    state: DwellState,
    filled: usize,
    just_selected: bool,
}

fn golden(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join(format!("{name}.json"))
}

#[test]
fn dwell_fill_and_drain_matches_golden() {
    let config = FrameTestConfig {
        name: "dwell_fill_and_drain".into(),
        frames: 8,
        dt: 0.5,
        snapshot_path: golden("dwell_fill_and_drain"),
    };
    run_frame_test(
        config,
        DwellSelector::default(),
        |tick, dt, selector| {
            selector.update(tick.0 < 4, dt);
        },
        |_, selector| DwellSnapshot {
            state: selector.state(),
            filled: selector.clock_face().filled_count(),
            just_selected: selector.just_selected(),
        },
    )
    .expect("dwell snapshot matches");
}

#[test]
fn scenario_a_four_half_seconds_select() {
    let mut selector = DwellSelector::new(&InteractionConfig::default());
    let transitions: Vec<_> = (0..4).filter_map(|_| selector.update(true, 0.5)).collect();
    assert_eq!(transitions, vec![DwellTransition::Selected]);
    assert_eq!(selector.timer(), 2.0);
    assert_eq!(selector.fraction_complete(), 1.0);
}

#[test]
fn scenario_b_single_long_miss_deselects() {
    let mut selector = DwellSelector::default();
    for _ in 0..4 {
        selector.update(true, 0.5);
    }
    assert_eq!(selector.state(), DwellState::Selected);
    assert_eq!(selector.update(false, 2.5), Some(DwellTransition::Deselected));
    assert_eq!(selector.timer(), 0.0);
}

#[test]
fn round_trip_idle_selected_idle() {
    let mut selector = DwellSelector::default();
    let mut elapsed = 0.0;
    while elapsed < selector.selection_time() {
        selector.update(true, 0.1);
        elapsed += 0.1;
    }
    selector.update(true, 0.1);
    assert_eq!(selector.state(), DwellState::Selected);

    let mut elapsed = 0.0;
    while elapsed < selector.selection_time() {
        selector.update(false, 0.1);
        elapsed += 0.1;
    }
    selector.update(false, 0.1);
    assert_eq!(selector.state(), DwellState::Idle);
}

#[derive(Debug, Serialize, Clone, Copy)]
struct FocusSnapshot {
    state: FocusState,
    z: f32,
    hold: f32,
}

struct Animated {
    animator: FocusAnimator,
    position: Vec3,
}

#[test]
fn scenario_c_focus_hold_and_return() {
    let mut state = Animated {
        animator: FocusAnimator::new(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 5.0),
            &InteractionConfig::default(),
        ),
        position: Vec3::ZERO,
    };
    state.animator.select();

    let config = FrameTestConfig {
        name: "focus_cycle".into(),
        frames: 120,
        dt: 0.05,
        snapshot_path: PathBuf::new(),
    };
    let report = record_frames(
        &config,
        &mut state,
        |_, dt, s| s.animator.update(dt, &mut s.position),
        |_, s| FocusSnapshot {
            state: s.animator.state(),
            z: s.position.z,
            hold: s.animator.hold_timer(),
        },
    );
    let frames: Vec<FocusSnapshot> = report.frames.iter().map(|f| f.snapshot).collect();

    // Hold never accrues before arrival
    let arrived = frames
        .iter()
        .position(|f| (f.z - 5.0).abs() < 0.01)
        .expect("reaches focus pose");
    assert!(frames[..=arrived].iter().all(|f| f.hold == 0.0));
    assert!(frames[..=arrived].iter().skip(1).all(|f| f.state == FocusState::Focus));

    // Returns to rest once the hold reaches 2.5s, then heads back toward the origin
    let back = frames
        .iter()
        .position(|f| f.state == FocusState::Rest && f.z > 4.0)
        .expect("returns to rest");
    assert!(back > arrived);
    assert!(frames[back].hold >= 2.5 - 1e-4);
    let hold_frames = back - arrived;
    assert!((50..=52).contains(&hold_frames), "held for {hold_frames} frames");
    assert!(frames.last().unwrap().z < frames[back].z);
}

#[test]
fn retrigger_in_focus_resets_hold_only() {
    let mut animator = FocusAnimator::new(Vec3::ZERO, Vec3::Z, &InteractionConfig::default());
    let mut position = Vec3::ZERO;
    animator.select();
    animator.update(0.5, &mut position);
    animator.update(0.5, &mut position);
    animator.update(0.5, &mut position);
    assert_eq!(animator.hold_timer(), 1.0);

    animator.select();
    animator.update(0.0, &mut position);
    assert_eq!(animator.state(), FocusState::Focus);
    assert_eq!(animator.hold_timer(), 0.0);
    assert_eq!(position, Vec3::Z);
}
