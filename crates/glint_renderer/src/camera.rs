//! Camera for primary-ray generation.

use glint_math::{DVec3, Ray};

/// Pinhole camera over a square image.
///
/// The view plane is a `window`-sized square placed along `look` at the
/// distance that realizes `fov_y`. Primary rays run from the eye through
/// pixel centers; pixel `(0, 0)` is the top-left corner, `i` walks right
/// along `right` and `j` walks down against `up`.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: DVec3,
    pub look: DVec3,
    pub right: DVec3,
    pub up: DVec3,

    /// Vertical field of view in degrees.
    pub fov_y: f64,

    /// View-plane side length in world units.
    pub window: f64,

    /// Output image side length in pixels.
    pub image_size: u32,
}

impl Camera {
    /// Build a camera at `eye` looking toward `target`, with `vup`
    /// fixing the vertical.
    pub fn look_at(eye: DVec3, target: DVec3, vup: DVec3) -> Self {
        let look = (target - eye).normalize_or_zero();
        let right = look.cross(vup).normalize_or_zero();
        let up = right.cross(look);
        Self {
            eye,
            look,
            right,
            up,
            fov_y: 80.0,
            window: 500.0,
            image_size: 768,
        }
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, fov_y: f64) -> Self {
        self.fov_y = fov_y;
        self
    }

    /// Set the output resolution.
    pub fn with_resolution(mut self, image_size: u32) -> Self {
        self.image_size = image_size;
        self
    }

    fn pixel_step(&self) -> f64 {
        self.window / self.image_size as f64
    }

    /// Center of the top-left pixel on the view plane.
    fn top_left(&self) -> DVec3 {
        let plane_distance = (self.window / 2.0) / (self.fov_y.to_radians() / 2.0).tan();
        let half = self.window / 2.0;
        let step = self.pixel_step();
        self.eye + self.look * plane_distance - self.right * half + self.up * half
            + self.right * (0.5 * step)
            - self.up * (0.5 * step)
    }

    /// Primary ray through the center of pixel `(i, j)`.
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        let step = self.pixel_step();
        let pixel = self.top_left() + self.right * (i as f64 * step) - self.up * (j as f64 * step);
        Ray::from_points(self.eye, pixel)
    }
}
