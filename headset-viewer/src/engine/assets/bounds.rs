use bevy::math::Affine3A;
use bevy::prelude::*;
use bevy::render::primitives::Aabb;

/// Axis-aligned box in a single coordinate space.
/// Built from mesh AABBs and merged across a model subtree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds3 {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_aabb(aabb: &Aabb) -> Self {
        let center = Vec3::from(aabb.center);
        let half = Vec3::from(aabb.half_extents);
        Self::new(center - half, center + half)
    }

    /// Center point, the pivot the model is moved onto.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn union(&self, other: &Bounds3) -> Bounds3 {
        Bounds3 {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    /// Box enclosing this box after an affine transform.
    /// Rotations grow the box, as any world-space AABB of a rotated mesh does.
    pub fn transformed(&self, affine: &Affine3A) -> Bounds3 {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for corner in self.corners() {
            let p = affine.transform_point3(corner);
            min = min.min(p);
            max = max.max(p);
        }
        Bounds3 { min, max }
    }
}

/// Merge an iterator of boxes, `None` when it is empty.
pub fn merge_bounds(parts: impl IntoIterator<Item = Bounds3>) -> Option<Bounds3> {
    parts.into_iter().reduce(|acc, b| acc.union(&b))
}
