//! Grayscale raster storage.
//!
//! Pixels are stored in a flat buffer in row-major order, one byte per
//! pixel, indexed as `pixels[y * width + x]`. The origin is the top-left
//! corner; `x` is the column and `y` is the row.

use serde::{Deserialize, Serialize};

/// A single-channel image with 8-bit intensity values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrayImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Intensity data in row-major order (1 byte per pixel).
    /// Length should be width * height.
    pub pixels: Vec<u8>,
}

impl GrayImage {
    /// Create a new GrayImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width * height) as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a black (all zero) image of the given dimensions.
    pub fn zeroed(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize)],
        }
    }

    /// Get the intensity at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height, "Pixel out of range");
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the intensity at column `x`, row `y`.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        debug_assert!(x < self.width && y < self.height, "Pixel out of range");
        self.pixels[(y * self.width + x) as usize] = value;
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_image_creation() {
        let img = GrayImage::new(100, 50, vec![7u8; 100 * 50]);

        assert_eq!(img.width, 100);
        assert_eq!(img.height, 50);
        assert_eq!(img.pixel_count(), 5000);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_gray_image_empty() {
        let img = GrayImage::new(0, 0, vec![]);
        assert!(img.is_empty());
    }

    #[test]
    fn test_zeroed_is_black() {
        let img = GrayImage::zeroed(8, 4);
        assert_eq!(img.pixels.len(), 32);
        assert!(img.pixels.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut img = GrayImage::zeroed(5, 3);
        img.set(4, 2, 200);
        img.set(0, 0, 17);

        assert_eq!(img.get(4, 2), 200);
        assert_eq!(img.get(0, 0), 17);
        // Row-major layout: (x=4, y=2) is the last byte.
        assert_eq!(img.pixels[14], 200);
    }
}
