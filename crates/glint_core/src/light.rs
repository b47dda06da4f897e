//! Point and spot light sources.

use glint_math::{DVec3, Ray};

use crate::material::Color;

/// A point light: a position and an RGB intensity.
///
/// Intensity does not fall off with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: DVec3,
    pub color: Color,
}

impl PointLight {
    /// Create a new point light.
    pub fn new(position: DVec3, color: Color) -> Self {
        Self { position, color }
    }
}

/// A spot light: a point light restricted to a cone.
///
/// The cone is tested against rays cast *from* the light *toward* a
/// surface point; `direction` does not have to be normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub light: PointLight,
    pub direction: DVec3,

    /// Cone half-angle in degrees.
    pub cutoff: f64,
}

impl SpotLight {
    /// Create a new spot light around `light`.
    pub fn new(light: PointLight, direction: DVec3, cutoff: f64) -> Self {
        Self {
            light,
            direction,
            cutoff,
        }
    }

    /// Angle in degrees between a ray's direction and the spot direction.
    ///
    /// Returns 180 when either vector has zero length, keeping such rays
    /// outside every cone.
    pub fn angle_to(&self, ray: &Ray) -> f64 {
        let dir_len = self.direction.length();
        let ray_len = ray.direction().length();
        if dir_len > 0.0 && ray_len > 0.0 {
            let cos = self.direction.dot(ray.direction()) / (dir_len * ray_len);
            cos.acos().to_degrees()
        } else {
            180.0
        }
    }

    /// Whether a ray from the light toward a surface point lies within
    /// the cone. The cutoff is inclusive.
    pub fn contains(&self, ray: &Ray) -> bool {
        self.angle_to(ray) <= self.cutoff
    }
}
