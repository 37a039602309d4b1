//! Image utilities
//! keeps us from having to use specific bevy types in the physics engine,
//! the presentation layer decides when to turn this into a texture

use bevy::{
    math::Rect,
    render::{
        render_resource::{Extent3d, TextureDimension, TextureFormat},
        texture::Image,
    },
};

/// One resolved RGBA8 pixel
pub type Rgba = [u8; 4];

/// Representing a raw RGBA image
/// Game engine agnostic, full ownership, no lifetimes, not a component
#[derive(Clone, Debug, PartialEq)]
pub struct RawImage {
    pub bounds: Rect,
    pub pixels: Vec<u8>,
}

/// Create an empty image
impl Default for RawImage {
    fn default() -> Self {
        Self {
            bounds: Rect::new(0.0, 0.0, 0.0, 0.0),
            pixels: Vec::new(),
        }
    }
}

impl RawImage {
    /// Copy a row-major RGBA8 buffer into an owned image
    pub fn from_rgba(width: usize, height: usize, pixels: &[Rgba]) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            bounds: Rect::new(0.0, 0.0, width as f32, height as f32),
            pixels: bytemuck::cast_slice(pixels).to_vec(),
        }
    }

    pub fn width(&self) -> usize {
        self.bounds.width() as usize
    }

    pub fn height(&self) -> usize {
        self.bounds.height() as usize
    }

    /// Convert to a bevy image
    /// Load this into an asset server to get a texture like the following
    /// ```ignore
    /// let image: RawImage = sandbox.grid().to_raw_image();
    /// let image_handle: Handle<Image> = images.add(image.to_bevy_image());
    /// ```
    pub fn to_bevy_image(self) -> Image {
        let size = Extent3d {
            width: self.bounds.width() as u32,
            height: self.bounds.height() as u32,
            depth_or_array_layers: 1,
        };

        Image::new(
            size,
            TextureDimension::D2,
            self.pixels,
            TextureFormat::Rgba8UnormSrgb,
        )
    }
}
