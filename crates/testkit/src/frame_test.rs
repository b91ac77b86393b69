//! Frame-stepping harness for deterministic snapshot tests.
//!
//! A frame test steps some state with a fixed `dt` for a set number of frames
//! and snapshots selected fields after every step. The resulting report is
//! compared against a golden JSON file on disk (or updated when
//! `GAZESELECT_UPDATE_SNAPSHOTS=1` is set).

use crate::snapshot::assert_json_snapshot;
use anyhow::Result;
use gazeselect_core::FrameTick;
use serde::Serialize;
use std::path::PathBuf;

/// Configuration for a frame test.
#[derive(Debug, Clone)]
pub struct FrameTestConfig {
    /// Human-readable name (written into the snapshot report).
    pub name: String,
    /// Number of frames to step (report includes the initial snapshot at frame 0).
    pub frames: u64,
    /// Seconds per frame.
    pub dt: f32,
    /// Path to the golden JSON file.
    pub snapshot_path: PathBuf,
}

/// Single snapshot captured at a given frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot<S> {
    /// Frame number.
    pub frame: u64,
    /// Snapshot payload.
    pub snapshot: S,
}

/// Full set of snapshots for one frame test.
#[derive(Debug, Clone, Serialize)]
pub struct FrameTestReport<S> {
    /// Test name.
    pub name: String,
    /// Seconds per frame.
    pub dt: f32,
    /// Snapshots, initial state first.
    pub frames: Vec<FrameSnapshot<S>>,
}

/// Step `state` and collect a snapshot per frame without touching disk.
///
/// Captures the initial snapshot at frame 0, then steps `config.frames` times,
/// capturing a snapshot after each step (so the report holds `frames + 1`
/// entries).
pub fn record_frames<State, Snapshot, StepFn, SnapFn>(
    config: &FrameTestConfig,
    state: &mut State,
    mut step: StepFn,
    mut snapshot: SnapFn,
) -> FrameTestReport<Snapshot>
where
    StepFn: FnMut(FrameTick, f32, &mut State),
    SnapFn: FnMut(FrameTick, &State) -> Snapshot,
{
    let mut frames = Vec::with_capacity(config.frames as usize + 1);

    let mut tick = FrameTick::ZERO;
    frames.push(FrameSnapshot {
        frame: tick.0,
        snapshot: snapshot(tick, &*state),
    });

    for _ in 0..config.frames {
        step(tick, config.dt, &mut *state);
        tick = tick.advance(1);
        frames.push(FrameSnapshot {
            frame: tick.0,
            snapshot: snapshot(tick, &*state),
        });
    }

    FrameTestReport {
        name: config.name.clone(),
        dt: config.dt,
        frames,
    }
}

/// Run a frame test and assert (or update) the snapshot at `config.snapshot_path`.
pub fn run_frame_test<State, Snapshot, StepFn, SnapFn>(
    config: FrameTestConfig,
    mut state: State,
    step: StepFn,
    snapshot: SnapFn,
) -> Result<()>
where
    Snapshot: Serialize,
    StepFn: FnMut(FrameTick, f32, &mut State),
    SnapFn: FnMut(FrameTick, &State) -> Snapshot,
{
    let report = record_frames(&config, &mut state, step, snapshot);
    assert_json_snapshot(config.snapshot_path, &report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_initial_plus_each_step() {
        let config = FrameTestConfig {
            name: "counter".into(),
            frames: 3,
            dt: 0.5,
            snapshot_path: PathBuf::new(),
        };
        let mut elapsed = 0.0f32;
        let report = record_frames(&config, &mut elapsed, |_, dt, t| *t += dt, |_, t| *t);
        let values: Vec<f32> = report.frames.iter().map(|f| f.snapshot).collect();
        assert_eq!(values, vec![0.0, 0.5, 1.0, 1.5]);
        assert_eq!(report.frames.last().unwrap().frame, 3);
    }
}
