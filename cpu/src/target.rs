use crate::config::ColorWrites;
use crate::error::DrawError;
use triangle_shaders::glam::Vec4;

/// RGBA colour attachment, row-major with the origin at the top-left pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderTarget {
    width: u32,
    height: u32,
    pixels: Vec<Vec4>,
}

impl RenderTarget {
    pub fn new(width: u32, height: u32) -> Result<Self, DrawError> {
        if width == 0 || height == 0 {
            return Err(DrawError::EmptyTarget { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![Vec4::ZERO; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Vec4] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Vec4) {
        self.pixels.fill(color);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Vec4> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Replaces the channels selected by `mask`, the others keep their value.
    /// Writes outside the target are dropped.
    pub fn write(&mut self, x: u32, y: u32, color: Vec4, mask: ColorWrites) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let dst = &mut self.pixels[i];
        if mask.contains(ColorWrites::RED) {
            dst.x = color.x;
        }
        if mask.contains(ColorWrites::GREEN) {
            dst.y = color.y;
        }
        if mask.contains(ColorWrites::BLUE) {
            dst.z = color.z;
        }
        if mask.contains(ColorWrites::ALPHA) {
            dst.w = color.w;
        }
    }

    /// Number of pixels that differ from `background`.
    pub fn count_not(&self, background: Vec4) -> usize {
        self.pixels.iter().filter(|p| **p != background).count()
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }
}
