//! Synchronized RGB-D frames

use glam::Vec3;
use image::{ImageBuffer, Luma, Rgb32FImage};

/// Depth map in meters (raw pixel value divided by the depth scaling)
pub type DepthImage = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Color image with channels in the raw 0-255 range, stored as `f32`
pub type ColorImage = Rgb32FImage;

/// A single associated frame
#[derive(Debug, Clone)]
pub struct RgbdFrame {
    /// 1-based frame number (reader index + 1)
    pub index: usize,
    /// Color frame timestamp in seconds
    pub timestamp: f64,
    /// Camera position
    pub translation: Vec3,
    /// Camera orientation (quaternion: x, y, z, w)
    pub rotation: [f32; 4],
    /// Depth map
    pub depth: DepthImage,
    /// Color image
    pub color: ColorImage,
}

impl RgbdFrame {
    /// Get color image dimensions (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.color.dimensions()
    }

    /// Depth value in meters at pixel (x, y), if inside the depth map
    pub fn depth_at(&self, x: u32, y: u32) -> Option<f32> {
        self.depth.get_pixel_checked(x, y).map(|p| p.0[0])
    }
}
