//! Focus animation - move a selected object to its focus pose, hold, return.

use gazeselect_core::{sanitize_dt, InteractionConfig};
use glam::Vec3;
use serde::Serialize;
use tracing::debug;

/// Where an animated object is heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FocusState {
    /// Heading to (or sitting at) the rest pose.
    Rest,
    /// Heading to (or holding at) the focus pose.
    Focus,
}

/// Rest and focus positions, captured once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosePair {
    /// Initial position of the object.
    pub rest: Vec3,
    /// Position of the focus marker.
    pub focus: Vec3,
}

/// Two-state mover driven by a one-shot selection trigger.
///
/// The hold timer only runs once the object is within `distance_fuzz` of the
/// focus pose, so slow approaches do not eat into the hold.
#[derive(Debug, Clone)]
pub struct FocusAnimator {
    poses: PosePair,
    state: FocusState,
    hold_timer: f32,
    pending_select: bool,
    forward_time: f32,
    movement_speed: f32,
    distance_fuzz: f32,
}

impl FocusAnimator {
    /// Capture `rest` (the object's current position) and `focus_marker`.
    pub fn new(rest: Vec3, focus_marker: Vec3, config: &InteractionConfig) -> Self {
        Self {
            poses: PosePair {
                rest,
                focus: focus_marker,
            },
            state: FocusState::Rest,
            hold_timer: 0.0,
            pending_select: false,
            forward_time: config.forward_time,
            movement_speed: config.movement_speed,
            distance_fuzz: config.distance_fuzz,
        }
    }

    /// Raise the one-shot trigger. Consumed by the next [`update`](Self::update).
    pub fn select(&mut self) {
        self.pending_select = true;
    }

    /// Whether a trigger is waiting to be consumed.
    pub fn is_select_pending(&self) -> bool {
        self.pending_select
    }

    /// Advance one frame, moving `position` toward the current target.
    pub fn update(&mut self, dt: f32, position: &mut Vec3) {
        let dt = sanitize_dt(dt);

        if std::mem::take(&mut self.pending_select) {
            if self.state != FocusState::Focus {
                debug!("focus animator entering focus");
            }
            self.hold_timer = 0.0;
            self.state = FocusState::Focus;
        }

        let target = self.target();
        if position.distance(target) >= self.distance_fuzz {
            let t = (self.movement_speed * dt).clamp(0.0, 1.0);
            *position = position.lerp(target, t);
        } else if self.state == FocusState::Focus {
            self.hold_timer = (self.hold_timer + dt).min(self.forward_time);
            if self.hold_timer >= self.forward_time {
                debug!(hold = self.hold_timer, "focus hold elapsed, returning to rest");
                self.state = FocusState::Rest;
            }
        }
    }

    /// Position for the current state.
    pub fn target(&self) -> Vec3 {
        match self.state {
            FocusState::Rest => self.poses.rest,
            FocusState::Focus => self.poses.focus,
        }
    }

    /// Current state.
    pub fn state(&self) -> FocusState {
        self.state
    }

    /// Seconds spent at the focus pose since the last trigger.
    pub fn hold_timer(&self) -> f32 {
        self.hold_timer
    }

    /// Captured poses.
    pub fn poses(&self) -> PosePair {
        self.poses
    }

    /// Whether `position` is within the arrival epsilon of where the next
    /// update will steer it. A pending trigger counts as already heading to focus.
    pub fn has_arrived(&self, position: Vec3) -> bool {
        let destination = if self.pending_select {
            self.poses.focus
        } else {
            self.target()
        };
        position.distance(destination) < self.distance_fuzz
    }
}
