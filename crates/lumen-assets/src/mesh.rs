use std::io::BufRead;

use glam::{Vec2, Vec3, Vec4};
use lumen_core::{rescale, Aabb, Triangle};
use tracing::{debug, warn};

use crate::face::{parse_face, FaceTriangle, IndexTriple};
use crate::sampler::TextureSampler;
use crate::texture::TextureSource;

/// Mesh data accumulated while scanning a file, before it becomes triangles.
///
/// Indices are kept 1-based as authored. The whole structure is consumed by
/// [`RawMesh::into_triangles`].
#[derive(Debug, Clone, Default)]
pub struct RawMesh {
    /// Vertex positions, already converted to renderer axes
    pub vertices: Vec<Vec4>,
    pub tex_coords: Vec<Vec3>,
    pub faces: Vec<FaceTriangle>,
    /// Running bounds of `vertices`
    pub bounds: Aabb,
    /// Number of `f` records read, including ones that produced nothing
    pub face_records: usize,
}

impl RawMesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self {
            bounds: Aabb::EMPTY,
            ..Default::default()
        }
    }

    /// Scan a whole stream. Only read errors fail; unknown or malformed
    /// records are dropped. Bytes that are not UTF-8 are replaced, so they
    /// only affect the record they appear in.
    pub fn parse<R: BufRead>(mut reader: R) -> std::io::Result<Self> {
        let mut mesh = Self::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            mesh.push_line(String::from_utf8_lossy(&buf).trim_end());
        }
        Ok(mesh)
    }

    /// Consume a single line of the file.
    ///
    /// The first token selects the record: `v` (position), `vt` (texture
    /// coordinate) or `f` (face). Any other record is ignored along with
    /// the rest of its line.
    pub fn push_line(&mut self, line: &str) {
        let line = line.trim_start();
        let (tag, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match tag {
            "v" => {
                let [x, y, z] = read_floats(rest);
                self.push_vertex(Vec3::new(x, y, z));
            }
            "vt" => {
                let [u, v, w] = read_floats(rest);
                self.tex_coords.push(Vec3::new(u, v, w));
            }
            "f" => {
                self.face_records += 1;
                self.faces.extend(parse_face(rest));
            }
            _ => {}
        }
    }

    /// Add a vertex as authored. X and Z are negated to move from the file's
    /// axes to the renderer's.
    pub fn push_vertex(&mut self, authored: Vec3) {
        let position = Vec3::new(-authored.x, authored.y, -authored.z);
        self.bounds.extend(position);
        self.vertices.push(position.extend(1.0));
    }

    /// Vertex for a 1-based reference, if it is in range
    pub fn vertex(&self, index: i32) -> Option<Vec4> {
        let slot = usize::try_from(index).ok()?.checked_sub(1)?;
        self.vertices.get(slot).copied()
    }

    /// Texture coordinate for a 1-based reference, if it is in range
    pub fn tex_coord(&self, index: i32) -> Option<Vec3> {
        let slot = usize::try_from(index).ok()?.checked_sub(1)?;
        self.tex_coords.get(slot).copied()
    }

    /// Texture lookup position for a face.
    ///
    /// Only the first corner is consulted: its attribute index (1-based)
    /// picks the texture coordinate. Without any texture coordinates in the
    /// file, or when the face has no usable attribute reference, that same
    /// corner's position wrapped into the unit range stands in for a UV.
    fn face_uv(&self, face: &FaceTriangle, first_corner: Vec4) -> Vec2 {
        let authored = face
            .attributes
            .filter(|_| !self.tex_coords.is_empty())
            .and_then(|attributes| self.tex_coord(attributes[0]));

        match authored {
            Some(tex_coord) => tex_coord.truncate(),
            None => Vec2::new(first_corner.x % 1.0, first_corner.y % 1.0),
        }
    }

    fn corners(&self, indices: IndexTriple) -> Option<[Vec4; 3]> {
        Some([
            self.vertex(indices[0])?,
            self.vertex(indices[1])?,
            self.vertex(indices[2])?,
        ])
    }

    /// Build one triangle per face, colored from `sampler` and rescaled from
    /// the raw bounds into `target`.
    ///
    /// Faces that reference a vertex that does not exist are skipped. Returns
    /// the triangles and the number of faces skipped.
    pub fn into_triangles<T: TextureSource>(
        self,
        sampler: &TextureSampler<T>,
        target: &Aabb,
    ) -> (Vec<Triangle>, usize) {
        let mut triangles = Vec::with_capacity(self.faces.len());
        let mut skipped = 0;

        for face in &self.faces {
            let Some([a, b, c]) = self.corners(face.indices) else {
                debug!("Skipping face with out-of-range indices {:?}", face.indices);
                skipped += 1;
                continue;
            };

            let color = sampler.sample(self.face_uv(face, a));

            triangles.push(Triangle::with_color(
                rescale(a, &self.bounds, target),
                rescale(b, &self.bounds, target),
                rescale(c, &self.bounds, target),
                color,
            ));
        }

        if skipped > 0 {
            warn!(
                "Skipped {} of {} faces referencing missing vertices",
                skipped,
                self.faces.len()
            );
        }

        (triangles, skipped)
    }
}

/// First three floats of a record, missing or malformed values read as 0.
fn read_floats(rest: &str) -> [f32; 3] {
    let mut values = [0.0; 3];
    for (value, token) in values.iter_mut().zip(rest.split_whitespace()) {
        *value = token.parse().unwrap_or(0.0);
    }
    values
}
