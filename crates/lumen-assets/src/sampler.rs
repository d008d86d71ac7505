use glam::{Vec2, Vec3};

use crate::error::AssetError;
use crate::texture::TextureSource;

/// Pixel offset added to every coordinate before wrapping.
pub const WRAP_OFFSET: f32 = 300.0;

/// Border, in pixels, that wrapped coordinates never reach.
pub const GUARD_BAND: u32 = 100;

/// Deterministic color lookup over an unbounded 2D coordinate space.
///
/// Coordinates are scaled to pixels, offset, and wrapped into
/// `[0, dimension - GUARD_BAND)`, so the outer band of the image is never
/// sampled.
pub struct TextureSampler<T> {
    source: T,
}

impl<T: TextureSource> TextureSampler<T> {
    /// Wrap a texture. Both sides must be larger than the guard band or the
    /// wrap range would be empty.
    pub fn new(source: T) -> Result<Self, AssetError> {
        let (width, height) = (source.width(), source.height());
        if width <= GUARD_BAND || height <= GUARD_BAND {
            return Err(AssetError::TextureTooSmall {
                width,
                height,
                guard: GUARD_BAND,
            });
        }
        Ok(Self { source })
    }

    /// The wrapped texture
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Pixel coordinates `uv` resolves to
    pub fn pixel_coords(&self, uv: Vec2) -> (u32, u32) {
        let width = self.source.width() as f32;
        let height = self.source.height() as f32;

        let x = ((uv.x * width).abs() + WRAP_OFFSET) % (width - GUARD_BAND as f32);
        let y = ((uv.y * height).abs() + WRAP_OFFSET) % (height - GUARD_BAND as f32);

        // NaN and infinite inputs saturate to pixel 0
        (x as u32, y as u32)
    }

    /// Color at `uv`, channels normalized to 0.0 to 1.0
    pub fn sample(&self, uv: Vec2) -> Vec3 {
        let (x, y) = self.pixel_coords(uv);
        self.source.texel(x, y) / 255.0
    }
}
