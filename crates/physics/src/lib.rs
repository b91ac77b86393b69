#![warn(missing_docs)]
//! Physics primitives (AABB, ray queries).
//!
//! The interaction crates only ever ask one question of the scene: "what does
//! a ray from here, in this direction, hit first?". [`RayCast`] is that
//! question; [`ColliderSet`] is a small box-only answer to it.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Identifier of a collider inside a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColliderId(pub u32);

/// Axis-aligned bounding box used for ray queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB ensuring min <= max per axis.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(min.cmple(max).all());
        Self { min, max }
    }

    /// Create an AABB from center position and full size.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full extent of the box on each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Slab test against a ray. Returns the distance along `direction` to the
    /// first surface, or the exit distance when the origin is inside.
    pub fn ray_intersection(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let inv_dir = direction.recip();

        let t1 = (self.min - origin) * inv_dir;
        let t2 = (self.max - origin) * inv_dir;

        let tmin = t1.min(t2).max_element();
        let tmax = t1.max(t2).min_element();

        // Whole box behind the origin
        if tmax < 0.0 || tmin > tmax || tmin.is_nan() || tmax.is_nan() {
            return None;
        }

        Some(if tmin < 0.0 { tmax } else { tmin })
    }
}

/// First intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Collider that was hit.
    pub collider: ColliderId,
    /// World-space impact point.
    pub point: Vec3,
    /// Distance from the ray origin to `point`.
    pub distance: f32,
}

/// Collision query service supplied by the host scene.
pub trait RayCast {
    /// Cast a ray and report the closest solid hit within `max_distance`.
    ///
    /// `direction` does not need to be normalized; distances are reported in
    /// world units along the normalized direction.
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit>;
}

/// A single box collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Collider id.
    pub id: ColliderId,
    /// World-space bounds.
    pub bounds: Aabb,
    /// Non-solid colliders are ignored by ray queries.
    pub solid: bool,
}

/// Flat list of box colliders answering [`RayCast`] queries.
#[derive(Debug, Clone, Default)]
pub struct ColliderSet {
    colliders: Vec<Collider>,
    next_id: u32,
}

impl ColliderSet {
    /// Create an empty collider set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a solid collider and return its id.
    pub fn insert(&mut self, bounds: Aabb) -> ColliderId {
        let id = ColliderId(self.next_id);
        self.next_id += 1;
        self.colliders.push(Collider {
            id,
            bounds,
            solid: true,
        });
        id
    }

    /// Remove a collider. Returns true if it existed.
    pub fn remove(&mut self, id: ColliderId) -> bool {
        let before = self.colliders.len();
        self.colliders.retain(|c| c.id != id);
        self.colliders.len() != before
    }

    /// Look up a collider by id.
    pub fn get(&self, id: ColliderId) -> Option<&Collider> {
        self.colliders.iter().find(|c| c.id == id)
    }

    /// Replace the bounds of an existing collider.
    pub fn set_bounds(&mut self, id: ColliderId, bounds: Aabb) -> bool {
        match self.colliders.iter_mut().find(|c| c.id == id) {
            Some(collider) => {
                collider.bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// Toggle whether a collider blocks rays.
    pub fn set_solid(&mut self, id: ColliderId, solid: bool) -> bool {
        match self.colliders.iter_mut().find(|c| c.id == id) {
            Some(collider) => {
                collider.solid = solid;
                true
            }
            None => false,
        }
    }

    /// Number of colliders.
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Returns true when the set holds no colliders.
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}

impl RayCast for ColliderSet {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        let dir = direction.try_normalize()?;

        let mut closest: Option<RayHit> = None;
        for collider in self.colliders.iter().filter(|c| c.solid) {
            let Some(distance) = collider.bounds.ray_intersection(origin, dir) else {
                continue;
            };
            if distance > max_distance {
                continue;
            }
            if closest.map_or(true, |hit| distance < hit.distance) {
                closest = Some(RayHit {
                    collider: collider.id,
                    point: origin + dir * distance,
                    distance,
                });
            }
        }
        closest
    }
}
