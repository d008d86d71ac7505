//! Axis-aligned bounding boxes

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Axis-aligned box described by its min and max corners.
///
/// Used both for the running bounds of raw vertex data and for the target
/// volume geometry is rescaled into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// A box containing nothing. Extending it by any point yields that point.
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    /// Create a box from its corners
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Bounds of a set of points, `EMPTY` if there are none
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut bounds = Self::EMPTY;
        for point in points {
            bounds.extend(point);
        }
        bounds
    }

    /// Grow the box to include `point`
    pub fn extend(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// True until at least one point has been added
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// Whether `point` lies inside the box, with `epsilon` slack on every side
    pub fn contains(&self, point: Vec4, epsilon: f32) -> bool {
        let p = point.truncate();
        p.cmpge(self.min - Vec3::splat(epsilon)).all()
            && p.cmple(self.max + Vec3::splat(epsilon)).all()
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}
