//! Sphere primitive.

use glint_core::{Color, Material};
use glint_math::{DVec3, Ray};

use crate::shading::{shade, SurfacePoint};
use crate::{Scene, NO_HIT};

/// A sphere with a center and radius.
pub struct Sphere {
    center: DVec3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: DVec3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Ray intersection via the projection/perpendicular decomposition.
    ///
    /// The ray origin is translated into sphere-local space; the closest
    /// approach must lie ahead of the origin and within the radius. An
    /// origin strictly inside the sphere reports the far root, one
    /// strictly outside the near root, and an origin exactly on the
    /// surface falls through to the smaller of the two.
    pub fn intersect(&self, scene: &Scene, ray: &Ray, level: u32) -> (f64, Color) {
        let mut color = Color::ZERO;

        let local = ray.origin() - self.center;
        let projection = -ray.direction().dot(local);
        if projection < 0.0 {
            // Closest approach is behind the ray origin
            return (NO_HIT, color);
        }

        let center_sq = local.length_squared();
        let radius_sq = self.radius * self.radius;
        let perpendicular_sq = center_sq - projection * projection;
        if perpendicular_sq > radius_sq {
            return (NO_HIT, color);
        }

        let half_chord = (radius_sq - perpendicular_sq).sqrt();
        let t_far = projection + half_chord;
        let t_near = projection - half_chord;

        let t = if center_sq < radius_sq {
            t_far
        } else if center_sq > radius_sq {
            t_near
        } else {
            // Origin exactly on the surface
            t_far.min(t_near)
        };

        if level == 0 {
            return (t, color);
        }

        let point = ray.at(t);
        let normal = (point - self.center).normalize_or_zero();
        let mut surface = SurfacePoint {
            point,
            normal,
            albedo: self.material.color,
            material: &self.material,
            plane_sided: false,
        };
        shade(scene, ray, &mut surface, level, &mut color);
        (t, color)
    }
}
