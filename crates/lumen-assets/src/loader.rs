use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use lumen_core::{Aabb, Triangle};
use tracing::{debug, info};

use crate::error::AssetError;
use crate::mesh::RawMesh;
use crate::sampler::TextureSampler;
use crate::texture::{load_texture, TextureSource};

/// Counters describing one mesh load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadStats {
    pub vertices: usize,
    pub tex_coords: usize,
    /// `f` records read, including ones that produced no triangles
    pub face_records: usize,
    pub triangles: usize,
    /// Triangles dropped for referencing vertices that do not exist
    pub skipped: usize,
    /// Bounds of the raw vertex positions, before rescaling
    pub raw_bounds: Aabb,
}

/// Load a mesh file, color it from the texture at `texture_path`, and rescale
/// it into `target`.
///
/// Fails only if the mesh or texture cannot be read; malformed records in
/// the mesh are skipped.
pub fn load_mesh(
    path: &Path,
    texture_path: &Path,
    target: Aabb,
) -> Result<Vec<Triangle>, AssetError> {
    load_mesh_with_stats(path, texture_path, target).map(|(triangles, _)| triangles)
}

/// Same as [`load_mesh`], also returning counters for the load.
pub fn load_mesh_with_stats(
    path: &Path,
    texture_path: &Path,
    target: Aabb,
) -> Result<(Vec<Triangle>, LoadStats), AssetError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AssetError::NotFound(path.to_path_buf()),
        _ => AssetError::Io(path.to_path_buf(), e),
    })?;

    let sampler = TextureSampler::new(load_texture(texture_path)?)?;
    debug!(
        "Texture '{}' is {}x{}",
        texture_path.display(),
        sampler.source().width(),
        sampler.source().height()
    );

    let (triangles, stats) = load_mesh_from_reader(BufReader::new(file), &sampler, target)
        .map_err(|e| AssetError::Io(path.to_path_buf(), e))?;

    info!(
        "Mesh '{}': {} vertices, {} faces -> {} triangles",
        path.display(),
        stats.vertices,
        stats.face_records,
        stats.triangles
    );

    Ok((triangles, stats))
}

/// Load a mesh from any buffered reader with an already prepared sampler.
pub fn load_mesh_from_reader<R: BufRead, T: TextureSource>(
    reader: R,
    sampler: &TextureSampler<T>,
    target: Aabb,
) -> std::io::Result<(Vec<Triangle>, LoadStats)> {
    let mesh = RawMesh::parse(reader)?;

    let vertices = mesh.vertices.len();
    let tex_coords = mesh.tex_coords.len();
    let face_records = mesh.face_records;
    let raw_bounds = mesh.bounds;

    let (triangles, skipped) = mesh.into_triangles(sampler, &target);

    let stats = LoadStats {
        vertices,
        tex_coords,
        face_records,
        triangles: triangles.len(),
        skipped,
        raw_bounds,
    };
    debug!("Load stats: {:?}", stats);

    Ok((triangles, stats))
}
