#![warn(missing_docs)]
//! Viewer pose for head-mounted gaze rays.
//!
//! The headset tracking system owns the real pose; this type is the shape the
//! interaction layer consumes it in: a position plus yaw/pitch, from which the
//! gaze ray is derived.

use glam::Vec3;

/// Pitch is kept just shy of vertical so `forward` never aligns with world up.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Head pose: eye position and look orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Horizontal rotation in radians (around Y axis).
    pub yaw: f32,
    /// Vertical rotation in radians (around local X axis).
    pub pitch: f32,
}

impl Default for ViewerPose {
    fn default() -> Self {
        // Looking down +Z from standing eye height
        Self {
            position: Vec3::new(0.0, 1.6, 0.0),
            yaw: std::f32::consts::FRAC_PI_2,
            pitch: 0.0,
        }
    }
}

impl ViewerPose {
    /// Create a pose at `position` using the default orientation.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a pose at `position` looking at `target`.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let mut pose = Self::new(position);
        pose.look_at(target);
        pose
    }

    /// Get the forward direction vector (where the viewer is looking).
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Gaze ray as `(origin, direction)`, direction normalized.
    pub fn gaze_ray(&self) -> (Vec3, Vec3) {
        (self.position, self.forward())
    }

    /// Turn to face `target`. Leaves the pose unchanged if `target` is the
    /// eye position.
    pub fn look_at(&mut self, target: Vec3) {
        let Some(dir) = (target - self.position).try_normalize() else {
            return;
        };
        self.yaw = dir.z.atan2(dir.x).rem_euclid(std::f32::consts::TAU);
        self.pitch = dir.y.clamp(-1.0, 1.0).asin().clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pose_looks_down_positive_z() {
        let pose = ViewerPose::default();
        let forward = pose.forward();
        assert!(forward.x.abs() < 0.01);
        assert!(forward.y.abs() < 0.01);
        assert!((forward.z - 1.0).abs() < 0.01);
    }

    #[test]
    fn look_at_points_gaze_at_target() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let target = Vec3::new(-4.0, 5.0, 9.0);
        let pose = ViewerPose::looking_at(eye, target);
        let (origin, dir) = pose.gaze_ray();
        assert_eq!(origin, eye);
        assert!((dir - (target - eye).normalize()).length() < 0.001);
    }

    #[test]
    fn look_at_self_is_ignored() {
        let mut pose = ViewerPose::default();
        let before = pose;
        pose.look_at(pose.position);
        assert_eq!(pose, before);
    }

    #[test]
    fn looking_straight_up_clamps_pitch() {
        let pose = ViewerPose::looking_at(Vec3::ZERO, Vec3::Y * 5.0);
        assert!(pose.pitch < std::f32::consts::FRAC_PI_2);
        assert!(pose.pitch > 1.5);
        assert!(pose.forward().is_finite());
    }
}
