//! Single-threaded render loop and image buffer.

use glint_core::Color;

use crate::{Camera, Scene};

/// Render output: a pixel-indexed color buffer, top row first.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to 8-bit RGB bytes by clamping to [0, 1] and rounding.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.push((color.x.clamp(0.0, 1.0) * 255.0).round() as u8);
            bytes.push((color.y.clamp(0.0, 1.0) * 255.0).round() as u8);
            bytes.push((color.z.clamp(0.0, 1.0) * 255.0).round() as u8);
        }
        bytes
    }
}

/// Trace every pixel of the camera's image.
///
/// Each pixel runs a level-0 scan for the nearest primitive, then one
/// shaded intersect at level 1 on the winner. Pixels whose primary ray
/// misses everything keep the black background.
pub fn render(scene: &Scene, camera: &Camera) -> ImageBuffer {
    let size = camera.image_size;
    let mut image = ImageBuffer::new(size, size);

    let total = size as u64 * size as u64;
    let progress_step = (total / 100).max(1);
    let mut traced: u64 = 0;

    for i in 0..size {
        for j in 0..size {
            let ray = camera.primary_ray(i, j);
            if let Some((index, _)) = scene.nearest_hit(&ray) {
                let (_, color) = scene.primitives[index].intersect(scene, &ray, 1);
                image.set(i, j, color);
            }
            traced += 1;
            if traced % progress_step == 0 {
                log::debug!("traced {traced}/{total} pixels");
            }
        }
    }

    image
}
