//! 3D Panel Component - a gaze-selectable window that slides into focus

use super::UIComponent;
use crate::interaction::{FocusAnimator, FocusState};
use gazeselect_core::InteractionConfig;
use gazeselect_physics::{Aabb, ColliderId};
use glam::Vec3;

/// Default panel thickness used for its collider
const PANEL_DEPTH: f32 = 0.05;

/// 3D Panel - a window that moves to a focus marker when selected
#[derive(Debug, Clone)]
pub struct Panel3D {
    /// Current world position (center of the panel)
    pub position: Vec3,

    /// Panel size (width, height)
    pub size: (f32, f32),

    /// Whether the panel is visible
    pub visible: bool,

    /// Scene collider that stands in for this panel, if any
    pub collider: Option<ColliderId>,

    animator: FocusAnimator,
}

impl Panel3D {
    /// Create a panel resting at `position` that focuses at `focus_marker`.
    pub fn new(
        position: Vec3,
        focus_marker: Vec3,
        size: (f32, f32),
        config: &InteractionConfig,
    ) -> Self {
        Self {
            position,
            size,
            visible: true,
            collider: None,
            animator: FocusAnimator::new(position, focus_marker, config),
        }
    }

    /// Builder: Set scene collider
    pub fn with_collider(mut self, collider: ColliderId) -> Self {
        self.collider = Some(collider);
        self
    }

    /// Trigger the focus animation on the next update.
    pub fn select(&mut self) {
        self.animator.select();
    }

    /// Advance the focus animation one frame.
    pub fn update(&mut self, dt: f32) {
        self.animator.update(dt, &mut self.position);
    }

    /// Current focus state.
    pub fn focus_state(&self) -> FocusState {
        self.animator.state()
    }

    /// Whether the panel has reached the pose its animation is steering toward.
    pub fn is_settled(&self) -> bool {
        self.animator.has_arrived(self.position)
    }

    /// Focus animation driving this panel.
    pub fn animator(&self) -> &FocusAnimator {
        &self.animator
    }

    /// Get panel bounds (for raycasting)
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.position, Vec3::new(self.size.0, self.size.1, PANEL_DEPTH))
    }
}

impl UIComponent for Panel3D {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
