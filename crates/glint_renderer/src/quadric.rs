//! General quadric surface with an optional axis-aligned clip box.

use glint_core::{Color, Material};
use glint_math::{DVec3, Ray};

use crate::shading::{shade, SurfacePoint};
use crate::{Scene, NO_HIT};

/// A quadric surface `Ax^2 + By^2 + Cz^2 + Dxy + Eyz + Fxz + Gx + Hy +
/// Iz + J = 0`, optionally clipped to an axis-aligned box anchored at
/// `clip_origin`. An extent component of zero leaves that axis
/// unbounded.
pub struct Quadric {
    coeffs: [f64; 10],
    clip_origin: DVec3,
    clip_extent: DVec3,
    material: Material,
}

impl Quadric {
    /// Create a new quadric.
    pub fn new(coeffs: [f64; 10], clip_origin: DVec3, clip_extent: DVec3, material: Material) -> Self {
        Self {
            coeffs,
            clip_origin,
            clip_extent,
            material,
        }
    }

    /// Quadratic `at^2 + bt + c = 0` obtained by substituting the ray
    /// into the surface equation. The ray origin is taken relative to
    /// the clip origin; the clip test and the normal stay in world
    /// coordinates.
    fn ray_quadratic(&self, origin: DVec3, dir: DVec3) -> (f64, f64, f64) {
        let [qa, qb, qc, qd, qe, qf, qg, qh, qi, qj] = self.coeffs;

        let a = qa * dir.x * dir.x
            + qb * dir.y * dir.y
            + qc * dir.z * dir.z
            + qd * dir.x * dir.y
            + qe * dir.y * dir.z
            + qf * dir.x * dir.z;

        let b = 2.0 * qa * origin.x * dir.x
            + 2.0 * qb * origin.y * dir.y
            + 2.0 * qc * origin.z * dir.z
            + qd * (dir.x * origin.y + origin.x * dir.y)
            + qe * (dir.y * origin.z + origin.y * dir.z)
            + qf * (dir.z * origin.x + origin.z * dir.x)
            + qg * dir.x
            + qh * dir.y
            + qi * dir.z;

        let c = qa * origin.x * origin.x
            + qb * origin.y * origin.y
            + qc * origin.z * origin.z
            + qd * origin.x * origin.y
            + qe * origin.y * origin.z
            + qf * origin.x * origin.z
            + qg * origin.x
            + qh * origin.y
            + qi * origin.z
            + qj;

        (a, b, c)
    }

    /// Whether a point lies inside the clip box on every axis with a
    /// nonzero extent.
    fn in_clip_box(&self, point: DVec3) -> bool {
        let lo = self.clip_origin;
        let extent = self.clip_extent;
        if extent.x != 0.0 && (point.x < lo.x || point.x > lo.x + extent.x) {
            return false;
        }
        if extent.y != 0.0 && (point.y < lo.y || point.y > lo.y + extent.y) {
            return false;
        }
        if extent.z != 0.0 && (point.z < lo.z || point.z > lo.z + extent.z) {
            return false;
        }
        true
    }

    /// Surface gradient at `point`, normalized.
    fn normal_at(&self, point: DVec3) -> DVec3 {
        let [qa, qb, qc, qd, qe, qf, qg, qh, qi, _] = self.coeffs;
        DVec3::new(
            2.0 * qa * point.x + qd * point.y + qf * point.z + qg,
            2.0 * qb * point.y + qd * point.x + qe * point.z + qh,
            2.0 * qc * point.z + qe * point.y + qf * point.x + qi,
        )
        .normalize_or_zero()
    }

    pub fn intersect(&self, scene: &Scene, ray: &Ray, level: u32) -> (f64, Color) {
        let mut color = self.material.ambient_color(self.material.color);

        let local_origin = ray.origin() - self.clip_origin;
        let (a, b, c) = self.ray_quadratic(local_origin, ray.direction());

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return (NO_HIT, color);
        }
        let root = discriminant.sqrt();
        let t1 = (-b + root) / (2.0 * a);
        let t2 = (-b - root) / (2.0 * a);

        // Smallest positive root whose hit point survives the clip box
        let mut t = NO_HIT;
        let mut hit = DVec3::ZERO;
        if t1 > 0.0 {
            let point = ray.at(t1);
            if self.in_clip_box(point) {
                hit = point;
                t = t1;
            }
        }
        if t2 > 0.0 {
            let point = ray.at(t2);
            if self.in_clip_box(point) && t2 <= t {
                hit = point;
                t = t2;
            }
        }

        if level == 0 || !t.is_finite() {
            return (t, color);
        }

        let normal = self.normal_at(hit);
        let mut surface = SurfacePoint {
            point: hit,
            normal,
            albedo: self.material.color,
            material: &self.material,
            plane_sided: false,
        };
        shade(scene, ray, &mut surface, level, &mut color);
        (t, color)
    }
}
