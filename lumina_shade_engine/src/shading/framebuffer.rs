/// Framebuffer — flat RGB float store the shading executor writes into.
///
/// Row-major, three channels per pixel. Allocated lazily by the first
/// render at the configured resolution; cleared to black on creation.

/// Number of channels per pixel (RGB).
pub const CHANNELS: usize = 3;

/// 2D floating-point pixel store.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl Framebuffer {
    /// Allocate a zeroed width x height x 3 buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width as usize * height as usize * CHANNELS],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The three channels of one pixel.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> &[f32] {
        let i = self.offset(x, y);
        &self.data[i..i + CHANNELS]
    }

    /// Write the three channels of one pixel.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [f32; 3]) {
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&rgb);
    }

    /// All pixel data, row-major.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable pixel data, row-major.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Raw byte view of the pixel data (for blitting/export).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of bounds", x, y);
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

#[cfg(test)]
#[path = "framebuffer_tests.rs"]
mod tests;
