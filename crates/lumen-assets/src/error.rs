use std::path::PathBuf;

/// Errors that can occur while loading a mesh or its texture.
///
/// Malformed records inside a mesh file are not errors; they are skipped.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(PathBuf),

    #[error("I/O error loading '{0}': {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to load image '{0}': {1}")]
    ImageLoadFailed(PathBuf, String),

    #[error("texture is {width}x{height}, both sides must exceed the {guard} px guard band")]
    TextureTooSmall { width: u32, height: u32, guard: u32 },
}
