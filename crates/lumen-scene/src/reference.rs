//! The built-in reference scene: a five-sided room holding a short and a tall
//! block.
//!
//! Geometry is authored in the `[0, 555]^3` room space and then mapped into
//! the `[-1, 1]^3` volume with x and y flipped. Triangle order, vertex
//! coordinates and color assignment are fixed; reference renders and tests
//! index into the list.

use glam::{Vec3, Vec4};
use lumen_core::{to_unit_cube, Triangle, REFERENCE_SIZE};
use tracing::debug;

use crate::palette::{self, Gloss};

/// Number of triangles [`load_reference_scene`] produces
pub const REFERENCE_TRIANGLE_COUNT: usize = 32;

/// Floor footprint (x, z) of the short block and its height
const SHORT_BLOCK: ([[f32; 2]; 4], f32) = (
    [[290.0, 114.0], [130.0, 65.0], [240.0, 272.0], [82.0, 225.0]],
    165.0,
);

/// Floor footprint (x, z) of the tall block and its height
const TALL_BLOCK: ([[f32; 2]; 4], f32) = (
    [[423.0, 247.0], [265.0, 296.0], [472.0, 406.0], [314.0, 456.0]],
    330.0,
);

/// Corner labels of a four-sided footprint and its raised copy.
///
/// `a..d` lie on the floor, `e..h` sit directly above them in the same
/// order.
#[derive(Clone, Copy)]
struct Corners {
    a: Vec4,
    b: Vec4,
    c: Vec4,
    d: Vec4,
    e: Vec4,
    f: Vec4,
    g: Vec4,
    h: Vec4,
}

impl Corners {
    /// Raise a floor footprint by `height`
    fn extrude(footprint: [[f32; 2]; 4], height: f32) -> Self {
        let floor = |[x, z]: [f32; 2]| Vec4::new(x, 0.0, z, 1.0);
        let raised = |[x, z]: [f32; 2]| Vec4::new(x, height, z, 1.0);
        let [a, b, c, d] = footprint;
        Self {
            a: floor(a),
            b: floor(b),
            c: floor(c),
            d: floor(d),
            e: raised(a),
            f: raised(b),
            g: raised(c),
            h: raised(d),
        }
    }
}

/// Appends triangles sharing one surface look
struct Painter<'a> {
    triangles: &'a mut Vec<Triangle>,
    color: Vec3,
    gloss: Vec3,
}

impl Painter<'_> {
    fn tri(&mut self, v0: Vec4, v1: Vec4, v2: Vec4) -> &mut Self {
        self.triangles
            .push(Triangle::new(v0, v1, v2, self.color, self.gloss));
        self
    }
}

fn paint(triangles: &mut Vec<Triangle>, color: Vec3, gloss: Gloss) -> Painter<'_> {
    Painter {
        triangles,
        color,
        gloss: gloss.value(),
    }
}

/// The room: floor, left wall, right wall, ceiling, back wall. The open
/// side faces the camera. Normals point into the room.
fn room(triangles: &mut Vec<Triangle>) {
    let l = REFERENCE_SIZE;
    let k = Corners::extrude([[l, 0.0], [0.0, 0.0], [l, l], [0.0, l]], l);
    let Corners { a, b, c, d, e, f, g, h } = k;

    // Floor
    paint(triangles, palette::GREEN, Gloss::Medium).tri(c, b, a).tri(c, d, b);
    // Left wall
    paint(triangles, palette::PURPLE, Gloss::High).tri(a, e, c).tri(c, e, g);
    // Right wall
    paint(triangles, palette::YELLOW, Gloss::Low).tri(f, b, d).tri(h, f, d);
    // Ceiling
    paint(triangles, palette::CYAN, Gloss::Normal).tri(e, f, g).tri(f, h, g);
    // Back wall
    paint(triangles, palette::WHITE, Gloss::Medium).tri(g, d, c).tri(g, h, d);
}

/// Four sides and the top of a block, normals pointing out of it.
fn block(triangles: &mut Vec<Triangle>, k: Corners, color: Vec3, gloss: Gloss) {
    let Corners { a, b, c, d, e, f, g, h } = k;
    paint(triangles, color, gloss)
        // Front
        .tri(e, b, a)
        .tri(e, f, b)
        // Side facing the right wall
        .tri(f, d, b)
        .tri(f, h, d)
        // Back
        .tri(h, c, d)
        .tri(h, g, c)
        // Side facing the left wall
        .tri(g, e, c)
        .tri(e, a, c)
        // Top
        .tri(g, f, e)
        .tri(g, h, f);
}

/// Underside of a block, normals pointing down.
fn block_base(triangles: &mut Vec<Triangle>, k: Corners, color: Vec3, gloss: Gloss) {
    let Corners { a, b, c, d, .. } = k;
    paint(triangles, color, gloss).tri(a, b, c).tri(b, d, c);
}

/// Build the reference scene, already mapped into `[-1, 1]^3`.
pub fn load_reference_scene() -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(REFERENCE_TRIANGLE_COUNT);

    room(&mut triangles);

    let short = Corners::extrude(SHORT_BLOCK.0, SHORT_BLOCK.1);
    block(&mut triangles, short, palette::RED, Gloss::Medium);

    let tall = Corners::extrude(TALL_BLOCK.0, TALL_BLOCK.1);
    block(&mut triangles, tall, palette::BLUE, Gloss::High);
    block_base(&mut triangles, tall, palette::BLUE, Gloss::High);

    for triangle in &mut triangles {
        triangle.map_vertices(to_unit_cube);
    }

    debug!("Reference scene built with {} triangles", triangles.len());
    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(v: Vec4) -> Vec4 {
        to_unit_cube(v)
    }

    fn centroid(tri: &Triangle) -> Vec3 {
        (tri.v0.truncate() + tri.v1.truncate() + tri.v2.truncate()) / 3.0
    }

    fn block_center((footprint, height): ([[f32; 2]; 4], f32)) -> Vec3 {
        let k = Corners::extrude(footprint, height);
        let sum = k.a + k.b + k.c + k.d + k.e + k.f + k.g + k.h;
        unit(sum / 8.0).truncate()
    }

    #[test]
    fn test_triangle_count() {
        assert_eq!(load_reference_scene().len(), REFERENCE_TRIANGLE_COUNT);
    }

    #[test]
    fn test_vertices_inside_unit_cube() {
        for tri in load_reference_scene() {
            for v in tri.vertices() {
                assert!(v.x >= -1.0 && v.x <= 1.0, "{v:?}");
                assert!(v.y >= -1.0 && v.y <= 1.0, "{v:?}");
                assert!(v.z >= -1.0 && v.z <= 1.0, "{v:?}");
                assert_eq!(v.w, 1.0);
            }
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        for tri in load_reference_scene() {
            assert!((tri.normal.length() - 1.0).abs() < 1e-5, "{:?}", tri.normal);
        }
    }

    #[test]
    fn test_first_triangle_is_floor() {
        let scene = load_reference_scene();
        let floor = scene[0];
        let l = REFERENCE_SIZE;
        assert_eq!(floor.v0, unit(Vec4::new(l, 0.0, l, 1.0)));
        assert_eq!(floor.v1, unit(Vec4::new(0.0, 0.0, 0.0, 1.0)));
        assert_eq!(floor.v2, unit(Vec4::new(l, 0.0, 0.0, 1.0)));
        assert_eq!(floor.color, palette::GREEN);
        assert_eq!(floor.gloss, Vec3::splat(1.2));
        // Floor sits at y = +1 after the flip and faces into the room
        assert_eq!(floor.v0.y, 1.0);
        assert!((floor.normal - Vec3::NEG_Y).length() < 1e-6);
    }

    #[test]
    fn test_surface_assignment() {
        let scene = load_reference_scene();
        let expect = |range: std::ops::Range<usize>, color: Vec3, gloss: Gloss| {
            for tri in &scene[range] {
                assert_eq!(tri.color, color);
                assert_eq!(tri.gloss, gloss.value());
            }
        };
        expect(0..2, palette::GREEN, Gloss::Medium);
        expect(2..4, palette::PURPLE, Gloss::High);
        expect(4..6, palette::YELLOW, Gloss::Low);
        expect(6..8, palette::CYAN, Gloss::Normal);
        expect(8..10, palette::WHITE, Gloss::Medium);
        expect(10..20, palette::RED, Gloss::Medium);
        expect(20..32, palette::BLUE, Gloss::High);
    }

    #[test]
    fn test_room_faces_point_inward() {
        for tri in &load_reference_scene()[..10] {
            assert!(tri.normal.dot(centroid(tri)) < 0.0, "{:?}", tri);
        }
    }

    #[test]
    fn test_block_faces_point_outward() {
        let scene = load_reference_scene();
        let short = block_center(SHORT_BLOCK);
        let tall = block_center(TALL_BLOCK);
        for tri in &scene[10..20] {
            assert!(tri.normal.dot(centroid(tri) - short) > 0.0, "{:?}", tri);
        }
        for tri in &scene[20..32] {
            assert!(tri.normal.dot(centroid(tri) - tall) > 0.0, "{:?}", tri);
        }
    }

    #[test]
    fn test_scene_is_reproducible() {
        assert_eq!(load_reference_scene(), load_reference_scene());
    }
}
