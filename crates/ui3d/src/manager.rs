//! Interaction Manager - runs the gaze interaction loop once per frame
//!
//! Order within a frame is fixed: gaze probe, then every dwell selector, then
//! routing of selection edges, then every panel. A panel therefore starts
//! moving in the same frame its selector completes. A report-only probe skips
//! the selectors and routing; panels still finish any motion in flight.

use crate::components::{Cursor3D, Panel3D};
use crate::interaction::{
    DwellSelector, DwellTransition, GazeHit, GazeProbe, ProbeMode, SelectionRouter,
};
use anyhow::{bail, Context, Result};
use gazeselect_camera::ViewerPose;
use gazeselect_core::{FrameTick, InteractionConfig};
use gazeselect_physics::{ColliderId, ColliderSet, RayCast};
use glam::Vec3;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Handle to a UI element for updates/removal
pub type UIElementHandle = u64;

/// Which gaze results count as "hitting" for a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitFilter {
    /// Any solid hit.
    Any,
    /// Only hits on this collider.
    Collider(ColliderId),
}

impl HitFilter {
    /// Whether `hit` satisfies the filter.
    pub fn matches(&self, hit: &GazeHit) -> bool {
        match self {
            HitFilter::Any => hit.is_hit(),
            HitFilter::Collider(id) => hit.collider() == Some(*id),
        }
    }
}

/// A managed dwell selector
struct SelectableElement {
    selector: DwellSelector,
    watch: HitFilter,
}

/// A selector changed state this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionEvent {
    /// Selector (or cursor) handle.
    pub selector: UIElementHandle,
    /// Edge taken.
    pub transition: DwellTransition,
}

/// Everything that happened in one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    /// Frame index.
    pub tick: FrameTick,
    /// Gaze result.
    pub hit: GazeHit,
    /// Selector transitions, cursor first then ascending handle order.
    pub events: Vec<SelectionEvent>,
    /// Panels that received a focus trigger.
    pub triggered: Vec<UIElementHandle>,
}

impl FrameReport {
    /// Handles of selectors that completed a selection this frame.
    pub fn selected(&self) -> impl Iterator<Item = UIElementHandle> + '_ {
        self.events
            .iter()
            .filter(|e| e.transition == DwellTransition::Selected)
            .map(|e| e.selector)
    }
}

/// Owns the gaze probe, cursor, selectors, panels and their routing
pub struct InteractionManager {
    config: InteractionConfig,
    probe: GazeProbe,
    cursor: Option<(UIElementHandle, Cursor3D)>,
    selectables: BTreeMap<UIElementHandle, SelectableElement>,
    panels: BTreeMap<UIElementHandle, Panel3D>,
    router: SelectionRouter,
    tick: FrameTick,
    next_handle: u64,
}

impl InteractionManager {
    /// Create a manager. Fails if `config` does not validate.
    pub fn new(config: InteractionConfig) -> Result<Self> {
        config
            .validate()
            .context("invalid interaction config")?;
        info!(
            selection_time = config.selection_time,
            forward_time = config.forward_time,
            "interaction manager ready"
        );

        Ok(Self {
            config,
            probe: GazeProbe::default(),
            cursor: None,
            selectables: BTreeMap::new(),
            panels: BTreeMap::new(),
            router: SelectionRouter::new(),
            tick: FrameTick::ZERO,
            next_handle: 1,
        })
    }

    /// Builder: Set gaze probe
    pub fn with_probe(mut self, probe: GazeProbe) -> Self {
        self.probe = probe;
        self
    }

    /// Timing configuration in use.
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Gaze probe in use.
    pub fn probe(&self) -> &GazeProbe {
        &self.probe
    }

    /// Frames run so far.
    pub fn tick(&self) -> FrameTick {
        self.tick
    }

    fn alloc_handle(&mut self) -> UIElementHandle {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }

    // === Cursor ===

    /// Install a gaze cursor, replacing any previous one.
    pub fn set_cursor(&mut self, cursor: Cursor3D) -> UIElementHandle {
        if let Some((old, _)) = self.cursor.take() {
            self.router.forget(old);
        }
        let handle = self.alloc_handle();
        self.cursor = Some((handle, cursor));
        handle
    }

    /// Install a default cursor for this manager's config.
    pub fn enable_cursor(&mut self) -> UIElementHandle {
        let cursor = Cursor3D::new(&self.config);
        self.set_cursor(cursor)
    }

    /// The cursor, if installed.
    pub fn cursor(&self) -> Option<&Cursor3D> {
        self.cursor.as_ref().map(|(_, c)| c)
    }

    /// The cursor, if installed.
    pub fn cursor_mut(&mut self) -> Option<&mut Cursor3D> {
        self.cursor.as_mut().map(|(_, c)| c)
    }

    // === Selectors ===

    /// Add a dwell selector fed by gaze hits matching `watch`.
    pub fn add_selector(&mut self, watch: HitFilter) -> UIElementHandle {
        let handle = self.alloc_handle();
        self.selectables.insert(
            handle,
            SelectableElement {
                selector: DwellSelector::new(&self.config),
                watch,
            },
        );
        handle
    }

    /// Selector by handle. Also resolves the cursor's handle.
    pub fn selector(&self, handle: UIElementHandle) -> Option<&DwellSelector> {
        match &self.cursor {
            Some((h, cursor)) if *h == handle => Some(&cursor.selector),
            _ => self.selectables.get(&handle).map(|e| &e.selector),
        }
    }

    /// Selector by handle. Also resolves the cursor's handle.
    pub fn selector_mut(&mut self, handle: UIElementHandle) -> Option<&mut DwellSelector> {
        match &mut self.cursor {
            Some((h, cursor)) if *h == handle => Some(&mut cursor.selector),
            _ => self.selectables.get_mut(&handle).map(|e| &mut e.selector),
        }
    }

    // === Panels ===

    /// Add a panel.
    pub fn add_panel(&mut self, panel: Panel3D) -> UIElementHandle {
        let handle = self.alloc_handle();
        self.panels.insert(handle, panel);
        handle
    }

    /// Add a panel plus a selector watching its collider, bound to it.
    /// Returns `(panel, selector)`.
    pub fn add_selectable_panel(
        &mut self,
        panel: Panel3D,
    ) -> Result<(UIElementHandle, UIElementHandle)> {
        let Some(collider) = panel.collider else {
            bail!("selectable panel needs a collider");
        };
        let panel = self.add_panel(panel);
        let selector = self.add_selector(HitFilter::Collider(collider));
        self.bind(selector, panel)?;
        Ok((panel, selector))
    }

    /// Panel by handle.
    pub fn panel(&self, handle: UIElementHandle) -> Option<&Panel3D> {
        self.panels.get(&handle)
    }

    /// Panel by handle.
    pub fn panel_mut(&mut self, handle: UIElementHandle) -> Option<&mut Panel3D> {
        self.panels.get_mut(&handle)
    }

    /// Iterate panels in handle order.
    pub fn panels(&self) -> impl Iterator<Item = (UIElementHandle, &Panel3D)> {
        self.panels.iter().map(|(h, p)| (*h, p))
    }

    // === Routing ===

    /// Route completions of `selector` (a selector or the cursor) to `panel`.
    pub fn bind(&mut self, selector: UIElementHandle, panel: UIElementHandle) -> Result<()> {
        if self.selector(selector).is_none() {
            bail!("unknown selector handle {selector}");
        }
        if !self.panels.contains_key(&panel) {
            bail!("unknown panel handle {panel}");
        }
        self.router.bind(selector, panel);
        Ok(())
    }

    /// Routing table.
    pub fn router(&self) -> &SelectionRouter {
        &self.router
    }

    /// Remove any element by handle. Returns true if something was removed.
    pub fn remove(&mut self, handle: UIElementHandle) -> bool {
        let removed = if matches!(self.cursor, Some((h, _)) if h == handle) {
            self.cursor = None;
            true
        } else {
            self.selectables.remove(&handle).is_some() || self.panels.remove(&handle).is_some()
        };
        if removed {
            self.router.forget(handle);
        }
        removed
    }

    /// Get the number of managed elements
    pub fn element_count(&self) -> usize {
        self.selectables.len() + self.panels.len() + usize::from(self.cursor.is_some())
    }

    // === Frame ===

    /// Run one frame of the interaction loop.
    pub fn frame(&mut self, dt: f32, pose: &ViewerPose, scene: &impl RayCast) -> FrameReport {
        let (origin, direction) = pose.gaze_ray();
        let hit = self.probe.cast(origin, direction, scene);

        let mut events = Vec::new();
        let mut triggered = Vec::new();

        if self.probe.mode == ProbeMode::CursorDriving {
            self.drive_selectors(origin, direction, &hit, dt, &mut events);
            self.route(&events, &mut triggered);
        }

        for panel in self.panels.values_mut() {
            panel.update(dt);
        }

        let report = FrameReport {
            tick: self.tick,
            hit,
            events,
            triggered,
        };
        self.tick = self.tick.advance(1);
        report
    }

    fn drive_selectors(
        &mut self,
        origin: Vec3,
        direction: Vec3,
        hit: &GazeHit,
        dt: f32,
        events: &mut Vec<SelectionEvent>,
    ) {
        if let Some((handle, cursor)) = self.cursor.as_mut() {
            if let Some(transition) = cursor.follow(origin, direction, hit, dt) {
                events.push(SelectionEvent {
                    selector: *handle,
                    transition,
                });
            }
        }

        for (handle, element) in self.selectables.iter_mut() {
            let hitting = element.watch.matches(hit);
            if let Some(transition) = element.selector.update(hitting, dt) {
                events.push(SelectionEvent {
                    selector: *handle,
                    transition,
                });
            }
        }
    }

    fn route(&mut self, events: &[SelectionEvent], triggered: &mut Vec<UIElementHandle>) {
        for event in events
            .iter()
            .filter(|e| e.transition == DwellTransition::Selected)
        {
            for target in self.router.targets(event.selector) {
                if let Some(panel) = self.panels.get_mut(&target) {
                    debug!(selector = event.selector, panel = target, "selection routed");
                    panel.select();
                    triggered.push(target);
                }
            }
        }
    }

    /// Write moved panel bounds back into the scene's colliders.
    pub fn sync_colliders(&self, scene: &mut ColliderSet) {
        for panel in self.panels.values() {
            if let Some(id) = panel.collider {
                scene.set_bounds(id, panel.bounds());
            }
        }
    }
}
