//! Lumen Core - Geometry types shared by the Lumen mesh pipeline
//!
//! This crate provides the canonical output representation and the math
//! every ingestion path converges on:
//! - Triangle entity with its derived outward normal
//! - Axis-aligned bounds accumulated while reading vertices
//! - Affine rescaling of points into a target volume

pub mod bounds;
pub mod normalize;
pub mod triangle;

pub use bounds::Aabb;
pub use glam::{Vec2, Vec3, Vec4};
pub use normalize::{rescale, to_unit_cube, REFERENCE_BOUNDS, REFERENCE_SIZE, UNIT_CUBE};
pub use triangle::Triangle;
