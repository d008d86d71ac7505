//! Lumen Assets - Mesh and texture ingestion
//!
//! Reads externally authored meshes in a line-oriented vertex/face text
//! format, colors each face from a sampled texture, and rescales the result
//! into a caller-chosen volume as a flat list of [`Triangle`]s.
//!
//! [`Triangle`]: lumen_core::Triangle

mod error;
mod face;
mod loader;
mod mesh;
mod sampler;
mod texture;

pub use error::AssetError;
pub use face::{
    parse_face, FaceEncoding, FaceTriangle, IndexTriple, MAX_PLAIN_VERTICES, MIN_PLAIN_VERTICES,
};
pub use loader::{load_mesh, load_mesh_from_reader, load_mesh_with_stats, LoadStats};
pub use mesh::RawMesh;
pub use sampler::{TextureSampler, GUARD_BAND, WRAP_OFFSET};
pub use texture::{load_texture, TextureAsset, TextureFormat, TextureSource};
