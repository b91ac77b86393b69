//! Gaze cursor - sits where the gaze lands and shows dwell progress

use super::{TickColors, UIComponent};
use crate::interaction::{DwellSelector, DwellTransition, GazeHit};
use gazeselect_core::InteractionConfig;
use glam::Vec3;

/// Cursor indicator driven by the gaze probe.
#[derive(Debug, Clone)]
pub struct Cursor3D {
    /// Current world position
    pub position: Vec3,

    /// Dwell timer and clock face
    pub selector: DwellSelector,

    /// Distance along the gaze ray to park the cursor when nothing is hit
    pub rest_distance: f32,

    /// Pull-back toward the viewer from the hit surface, avoids z-fighting
    pub surface_offset: f32,
}

impl Cursor3D {
    /// Create a cursor with an idle selector.
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            selector: DwellSelector::new(config),
            rest_distance: 2.0,
            surface_offset: 0.01,
        }
    }

    /// Builder: Set miss distance
    pub fn with_rest_distance(mut self, distance: f32) -> Self {
        self.rest_distance = distance;
        self
    }

    /// Builder: Set surface offset
    pub fn with_surface_offset(mut self, offset: f32) -> Self {
        self.surface_offset = offset;
        self
    }

    /// Builder: Set clock face colors
    pub fn with_tick_colors(mut self, colors: TickColors) -> Self {
        self.selector = self.selector.with_tick_colors(colors);
        self
    }

    /// Move onto this frame's gaze result and feed its hit flag to the selector.
    pub fn follow(
        &mut self,
        origin: Vec3,
        direction: Vec3,
        hit: &GazeHit,
        dt: f32,
    ) -> Option<DwellTransition> {
        let dir = direction.normalize_or_zero();
        self.position = match hit.point() {
            Some(point) => point - dir * self.surface_offset,
            None => origin + dir * self.rest_distance,
        };
        self.selector.update(hit.is_hit(), dt)
    }
}

impl UIComponent for Cursor3D {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn is_visible(&self) -> bool {
        self.selector.is_visible()
    }

    fn set_visible(&mut self, visible: bool) {
        self.selector.set_visible(visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::DwellState;
    use gazeselect_physics::ColliderId;

    fn hit_at(z: f32) -> GazeHit {
        GazeHit::Hit {
            point: Vec3::new(0.0, 0.0, z),
            distance: z,
            collider: ColliderId(0),
        }
    }

    #[test]
    fn cursor_sits_on_hit_point() {
        let mut cursor = Cursor3D::new(&InteractionConfig::default()).with_surface_offset(0.0);
        cursor.follow(Vec3::ZERO, Vec3::Z, &hit_at(4.0), 0.1);
        assert_eq!(cursor.position(), Vec3::new(0.0, 0.0, 4.0));
    }

    #[test]
    fn cursor_parks_on_miss() {
        let mut cursor = Cursor3D::new(&InteractionConfig::default()).with_rest_distance(3.0);
        cursor.follow(Vec3::ZERO, Vec3::Z * 10.0, &GazeHit::Miss, 0.1);
        assert_eq!(cursor.position(), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn hidden_cursor_still_selects() {
        let mut cursor = Cursor3D::new(&InteractionConfig::default());
        cursor.set_visible(false);
        let mut transitions = Vec::new();
        for _ in 0..4 {
            transitions.extend(cursor.follow(Vec3::ZERO, Vec3::Z, &hit_at(4.0), 0.5));
        }
        assert_eq!(transitions, vec![DwellTransition::Selected]);
        assert_eq!(cursor.selector.state(), DwellState::Selected);
        assert!(!cursor.is_visible());
    }
}
