use std::path::Path;

use glam::Vec3;
use image::{DynamicImage, RgbImage, RgbaImage};

use crate::error::AssetError;

/// Read access to decoded texture pixels.
///
/// This is the seam to the image decoder: the mesh loader only ever asks for
/// the dimensions and individual texels.
pub trait TextureSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// RGB channels of the texel at `(x, y)`, each in 0.0 to 255.0.
    /// Coordinates are expected to be in range.
    fn texel(&self, x: u32, y: u32) -> Vec3;
}

/// Pixel format of a loaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    Rgba8,
    Rgb8,
}

impl TextureFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            TextureFormat::Rgba8 => 4,
            TextureFormat::Rgb8 => 3,
        }
    }
}

/// A loaded texture asset with raw pixel data.
#[derive(Debug, Clone)]
pub struct TextureAsset {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub format: TextureFormat,
}

impl TextureAsset {
    /// Wrap an in-memory RGBA image
    pub fn from_rgba(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            data: image.into_raw(),
            format: TextureFormat::Rgba8,
        }
    }

    /// Wrap an in-memory RGB image
    pub fn from_rgb(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            data: image.into_raw(),
            format: TextureFormat::Rgb8,
        }
    }
}

impl TextureSource for TextureAsset {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn texel(&self, x: u32, y: u32) -> Vec3 {
        let bpp = self.format.bytes_per_pixel();
        let offset = (y as usize * self.width as usize + x as usize) * bpp;
        match self.data.get(offset..offset + 3) {
            Some(rgb) => Vec3::new(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32),
            None => Vec3::ZERO,
        }
    }
}

/// Load an image file as a TextureAsset.
///
/// 8-bit RGB images keep their three-channel layout; everything else is
/// converted to RGBA8.
pub fn load_texture(path: &Path) -> Result<TextureAsset, AssetError> {
    if !path.exists() {
        return Err(AssetError::NotFound(path.to_path_buf()));
    }

    let img = image::open(path)
        .map_err(|e| AssetError::ImageLoadFailed(path.to_path_buf(), e.to_string()))?;

    Ok(match img {
        DynamicImage::ImageRgb8(rgb) => TextureAsset::from_rgb(rgb),
        other => TextureAsset::from_rgba(other.to_rgba8()),
    })
}
