//! The triangle handed to the renderer

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// A single renderable triangle.
///
/// Vertices are homogeneous points with `w == 1`. The winding is fixed: the
/// normal is always `normalize((v2 - v0) x (v1 - v0))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub v0: Vec4,
    pub v1: Vec4,
    pub v2: Vec4,
    /// Unit-length outward normal, derived from the vertices
    pub normal: Vec3,
    /// Base color. Nominally 0.0 to 1.0, but authored scenes may go above 1.0
    pub color: Vec3,
    /// Reflectance multiplier, (1, 1, 1) is neutral
    pub gloss: Vec3,
}

impl Triangle {
    /// Neutral gloss used when a source provides none
    pub const NEUTRAL_GLOSS: Vec3 = Vec3::ONE;

    /// Create a triangle and derive its normal
    pub fn new(v0: Vec4, v1: Vec4, v2: Vec4, color: Vec3, gloss: Vec3) -> Self {
        let mut triangle = Self {
            v0,
            v1,
            v2,
            normal: Vec3::ZERO,
            color,
            gloss,
        };
        triangle.compute_normal();
        triangle
    }

    /// Create a triangle with neutral gloss
    pub fn with_color(v0: Vec4, v1: Vec4, v2: Vec4, color: Vec3) -> Self {
        Self::new(v0, v1, v2, color, Self::NEUTRAL_GLOSS)
    }

    /// Recompute the normal from the current vertices.
    ///
    /// Zero-area triangles get a zero normal.
    pub fn compute_normal(&mut self) {
        let e1 = (self.v1 - self.v0).truncate();
        let e2 = (self.v2 - self.v0).truncate();
        self.normal = e2.cross(e1).normalize_or_zero();
    }

    /// The three vertices in winding order
    pub fn vertices(&self) -> [Vec4; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Apply a point transform to every vertex, pin `w` to 1 and rederive the
    /// normal from the transformed positions.
    ///
    /// Normals are never pushed through the transform itself: a reflection
    /// or non-uniform scale would leave them wrong.
    pub fn map_vertices(&mut self, f: impl Fn(Vec4) -> Vec4) {
        self.v0 = f(self.v0).truncate().extend(1.0);
        self.v1 = f(self.v1).truncate().extend(1.0);
        self.v2 = f(self.v2).truncate().extend(1.0);
        self.compute_normal();
    }
}
