//! Rescaling geometry into a target volume

use glam::{Vec3, Vec4};

use crate::bounds::Aabb;

/// Edge length of the authored reference room
pub const REFERENCE_SIZE: f32 = 555.0;

/// Coordinate range the reference scene is authored in
pub const REFERENCE_BOUNDS: Aabb = Aabb::new(Vec3::ZERO, Vec3::splat(REFERENCE_SIZE));

/// The `[-1, 1]^3` volume the renderer expects
pub const UNIT_CUBE: Aabb = Aabb::new(Vec3::NEG_ONE, Vec3::ONE);

/// Map `point` from the `from` box into the `to` box, axis by axis.
///
/// Per axis this is `(b - a) * (x - min) / (max - min) + a`, evaluated as a
/// blend so `from.min` lands exactly on `to.min` and `from.max` exactly on
/// `to.max`. A flat axis in `from` produces NaN on that axis. The result
/// always has `w == 1`.
pub fn rescale(point: Vec4, from: &Aabb, to: &Aabb) -> Vec4 {
    let t = (point.truncate() - from.min) / (from.max - from.min);
    let scaled = to.min * (Vec3::ONE - t) + to.max * t;
    scaled.extend(1.0)
}

/// Map a point of the reference room into the unit cube, flipping x and y
/// to match the renderer's handedness.
pub fn to_unit_cube(point: Vec4) -> Vec4 {
    let p = rescale(point, &REFERENCE_BOUNDS, &UNIT_CUBE);
    Vec4::new(-p.x, -p.y, p.z, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_bounds() -> Aabb {
        Aabb::new(Vec3::new(-12.5, 3.0, 0.1), Vec3::new(40.0, 17.25, 9.9))
    }

    fn target() -> Aabb {
        Aabb::new(Vec3::new(-0.3, -7.0, 2.0), Vec3::new(0.9, 5.0, 11.0))
    }

    #[test]
    fn test_min_maps_to_target_min() {
        let from = raw_bounds();
        let to = target();
        let p = rescale(from.min.extend(1.0), &from, &to);
        assert_eq!(p.truncate(), to.min);
        assert_eq!(p.w, 1.0);
    }

    #[test]
    fn test_max_maps_to_target_max() {
        let from = raw_bounds();
        let to = target();
        let p = rescale(from.max.extend(1.0), &from, &to);
        assert_eq!(p.truncate(), to.max);
        assert_eq!(p.w, 1.0);
    }

    #[test]
    fn test_midpoint_maps_to_midpoint() {
        let from = raw_bounds();
        let to = target();
        let mid = (from.min + from.max) * 0.5;
        let p = rescale(mid.extend(1.0), &from, &to);
        assert!((p.truncate() - (to.min + to.max) * 0.5).length() < 1e-4);
    }

    #[test]
    fn test_w_is_reset() {
        let from = raw_bounds();
        let p = rescale(Vec4::new(0.0, 4.0, 1.0, 0.25), &from, &target());
        assert_eq!(p.w, 1.0);
    }

    #[test]
    fn test_degenerate_axis_does_not_panic() {
        let from = Aabb::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(2.0, 1.0, 2.0));
        let p = rescale(Vec4::new(1.0, 1.0, 1.0, 1.0), &from, &UNIT_CUBE);
        assert_eq!(p.x, 0.0);
        assert!(p.y.is_nan());
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn test_unit_cube_flips_x_and_y() {
        let origin = to_unit_cube(Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(origin, Vec4::new(1.0, 1.0, -1.0, 1.0));

        let corner = to_unit_cube(Vec4::new(REFERENCE_SIZE, REFERENCE_SIZE, REFERENCE_SIZE, 1.0));
        assert_eq!(corner, Vec4::new(-1.0, -1.0, 1.0, 1.0));
    }
}
