//! Gaze raycasting - one ray per frame from the viewer's eyes into the scene

use gazeselect_camera::ViewerPose;
use gazeselect_physics::{ColliderId, RayCast};
use glam::Vec3;
use serde::Serialize;
use tracing::trace;

/// Default reach of the gaze ray in world units.
pub const DEFAULT_MAX_DISTANCE: f32 = 100.0;

/// Result of one frame's gaze ray. Not kept across frames.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum GazeHit {
    /// Nothing solid along the ray.
    #[default]
    Miss,
    /// The ray struck a collider.
    Hit {
        /// World-space impact point.
        point: Vec3,
        /// Distance from the eye to `point`.
        distance: f32,
        /// Collider that was struck.
        collider: ColliderId,
    },
}

impl GazeHit {
    /// Whether anything was hit.
    pub fn is_hit(&self) -> bool {
        matches!(self, GazeHit::Hit { .. })
    }

    /// Impact point, if any.
    pub fn point(&self) -> Option<Vec3> {
        match self {
            GazeHit::Hit { point, .. } => Some(*point),
            GazeHit::Miss => None,
        }
    }

    /// Collider struck, if any.
    pub fn collider(&self) -> Option<ColliderId> {
        match self {
            GazeHit::Hit { collider, .. } => Some(*collider),
            GazeHit::Miss => None,
        }
    }
}

/// What the probe does with its result besides returning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeMode {
    /// Log hit/no-hit every frame; drive nothing.
    ReportOnly,
    /// Feed a cursor and its dwell selector.
    #[default]
    CursorDriving,
}

/// Casts the viewer's gaze ray once per frame.
#[derive(Debug, Clone, Copy)]
pub struct GazeProbe {
    /// Output mode
    pub mode: ProbeMode,
    /// Ray reach in world units
    pub max_distance: f32,
}

impl Default for GazeProbe {
    fn default() -> Self {
        Self {
            mode: ProbeMode::default(),
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl GazeProbe {
    /// Create a probe in the given mode.
    pub fn new(mode: ProbeMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Builder: Set ray reach
    pub fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Cast from an explicit origin and direction.
    pub fn cast(&self, origin: Vec3, direction: Vec3, scene: &impl RayCast) -> GazeHit {
        let hit = match scene.cast_ray(origin, direction, self.max_distance) {
            Some(hit) => GazeHit::Hit {
                point: hit.point,
                distance: hit.distance,
                collider: hit.collider,
            },
            None => GazeHit::Miss,
        };

        if self.mode == ProbeMode::ReportOnly {
            match hit {
                GazeHit::Hit { collider, .. } => {
                    trace!(collider = collider.0, "gaze hit")
                }
                GazeHit::Miss => trace!("gaze miss"),
            }
        }

        hit
    }

    /// Cast along the viewer's gaze.
    pub fn cast_from(&self, pose: &ViewerPose, scene: &impl RayCast) -> GazeHit {
        let (origin, direction) = pose.gaze_ray();
        self.cast(origin, direction, scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gazeselect_physics::{Aabb, ColliderSet};

    fn scene() -> (ColliderSet, ColliderId) {
        let mut set = ColliderSet::new();
        let id = set.insert(Aabb::from_center_size(
            Vec3::new(0.0, 1.6, 5.0),
            Vec3::new(2.0, 1.0, 0.1),
        ));
        (set, id)
    }

    #[test]
    fn straight_ahead_hits_panel() {
        let (set, id) = scene();
        let probe = GazeProbe::default();
        let hit = probe.cast_from(&ViewerPose::default(), &set);
        assert!(hit.is_hit());
        assert_eq!(hit.collider(), Some(id));
        let point = hit.point().unwrap();
        assert!((point.z - 4.95).abs() < 0.001);
    }

    #[test]
    fn looking_away_misses() {
        let (set, _) = scene();
        let probe = GazeProbe::new(ProbeMode::ReportOnly);
        let pose = ViewerPose::looking_at(Vec3::new(0.0, 1.6, 0.0), Vec3::new(0.0, 1.6, -5.0));
        let hit = probe.cast_from(&pose, &set);
        assert_eq!(hit, GazeHit::Miss);
        assert_eq!(hit.point(), None);
        assert_eq!(hit.collider(), None);
    }

    #[test]
    fn reach_limits_hits() {
        let (set, _) = scene();
        let probe = GazeProbe::default().with_max_distance(2.0);
        assert!(!probe.cast_from(&ViewerPose::default(), &set).is_hit());
    }
}
