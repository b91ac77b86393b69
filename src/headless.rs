use crate::config::SceneConfig;
use crate::scripted_gaze::ScriptedGazePlayer;
use anyhow::{Context, Result};
use gazeselect_camera::ViewerPose;
use gazeselect_core::FrameTick;
use gazeselect_physics::ColliderSet;
use gazeselect_testkit::{EventRecord, JsonlSink};
use gazeselect_ui3d::{
    DwellTransition, FocusState, GazeProbe, InteractionManager, Panel3D, ProbeMode,
    UIElementHandle,
};
use glam::Vec3;
use std::path::PathBuf;
use tracing::info;

pub struct HeadlessConfig {
    pub scene: SceneConfig,
    pub script: Option<PathBuf>,
    pub frames: u64,
    pub dt: f32,
    pub events: Option<PathBuf>,
    pub report_only: bool,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub selections: usize,
    pub deselections: usize,
    pub focus_triggers: usize,
    pub focus_arrivals: usize,
    pub returns_to_rest: usize,
    pub script_finished: bool,
}

pub fn run(cfg: HeadlessConfig) -> Result<RunSummary> {
    let mut scene = ColliderSet::new();
    let probe_mode = if cfg.report_only {
        ProbeMode::ReportOnly
    } else {
        ProbeMode::CursorDriving
    };
    let mut manager = InteractionManager::new(cfg.scene.interaction)?
        .with_probe(GazeProbe::new(probe_mode));

    let mut panel_handles = Vec::new();
    for spec in &cfg.scene.panels {
        let panel = Panel3D::new(
            Vec3::from_array(spec.position),
            Vec3::from_array(spec.focus_marker),
            (spec.size[0], spec.size[1]),
            manager.config(),
        );
        let collider = scene.insert(panel.bounds());
        let (handle, _) = manager.add_selectable_panel(panel.with_collider(collider))?;
        panel_handles.push(handle);
    }
    if cfg.scene.cursor {
        let cursor = cfg.scene.cursor_style.build(manager.config());
        manager.set_cursor(cursor);
    }

    let mut player = match &cfg.script {
        Some(path) => ScriptedGazePlayer::from_path(path)
            .with_context(|| format!("failed to load gaze script {}", path.display()))?,
        None => {
            let targets: Vec<Vec3> = cfg
                .scene
                .panels
                .iter()
                .map(|p| Vec3::from_array(p.position))
                .collect();
            let dwell = manager.config().selection_time + manager.config().forward_time;
            let away = cfg.scene.viewer_position() + Vec3::new(0.0, 0.0, -10.0);
            ScriptedGazePlayer::tour(&targets, dwell, away)?
        }
    };

    let mut sink = cfg.events.as_ref().map(JsonlSink::create).transpose()?;

    info!(
        panels = panel_handles.len(),
        frames = cfg.frames,
        dt = cfg.dt,
        "starting headless gaze run"
    );

    let mut pose = ViewerPose::new(cfg.scene.viewer_position());
    let mut focus: Vec<FocusState> = vec![FocusState::Rest; panel_handles.len()];
    let mut arrived = vec![false; panel_handles.len()];
    let mut summary = RunSummary::default();
    let mut time = 0.0f32;

    for _ in 0..cfg.frames {
        let target = player.advance(cfg.dt);
        pose.look_at(target);

        let report = manager.frame(cfg.dt, &pose, &scene);
        manager.sync_colliders(&mut scene);
        time += cfg.dt;

        let mut log = |kind: &str, handle: UIElementHandle| -> Result<()> {
            info!(tick = report.tick.0, time, kind, handle, "interaction event");
            if let Some(sink) = sink.as_mut() {
                sink.write(&EventRecord {
                    tick: report.tick,
                    time,
                    kind,
                    handle,
                })?;
            }
            Ok(())
        };

        for event in &report.events {
            match event.transition {
                DwellTransition::Selected => {
                    summary.selections += 1;
                    log("Selected", event.selector)?;
                }
                DwellTransition::Deselected => {
                    summary.deselections += 1;
                    log("Deselected", event.selector)?;
                }
            }
        }
        for &handle in &report.triggered {
            summary.focus_triggers += 1;
            log("FocusTriggered", handle)?;
        }
        for (index, &handle) in panel_handles.iter().enumerate() {
            let Some(panel) = manager.panel(handle) else {
                continue;
            };
            let state = panel.focus_state();
            let at_focus = state == FocusState::Focus && panel.is_settled();
            if at_focus && !arrived[index] {
                summary.focus_arrivals += 1;
                log("ArrivedAtFocus", handle)?;
            }
            if focus[index] == FocusState::Focus && state == FocusState::Rest {
                summary.returns_to_rest += 1;
                log("ReturnedToRest", handle)?;
            }
            arrived[index] = at_focus;
            focus[index] = state;
        }

        summary.frames += 1;
    }

    if let Some(sink) = sink.as_mut() {
        sink.flush()?;
    }
    summary.script_finished = player.is_finished();

    debug_assert_eq!(manager.tick(), FrameTick(summary.frames));
    Ok(summary)
}
