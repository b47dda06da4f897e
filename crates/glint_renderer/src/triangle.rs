//! Triangle primitive.
//!
//! Intersection solves the 3x3 system built from two edge vectors and
//! the negated ray direction with Cramer's rule.

use glint_core::{Color, Material};
use glint_math::{DMat3, DVec3, Ray};

use crate::shading::{shade, SurfacePoint};
use crate::{Scene, NO_HIT};

/// A triangle over three vertices. The normal is derived from the edge
/// vectors at intersection time; its orientation follows the vertex
/// order and is not forced outward.
pub struct Triangle {
    a: DVec3,
    b: DVec3,
    c: DVec3,
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(a: DVec3, b: DVec3, c: DVec3, material: Material) -> Self {
        Self { a, b, c, material }
    }

    pub fn intersect(&self, scene: &Scene, ray: &Ray, level: u32) -> (f64, Color) {
        // The ambient term is produced even when the ray misses; level-0
        // callers discard it either way.
        let mut color = self.material.ambient_color(self.material.color);

        let edge_a = self.a - self.b;
        let edge_c = self.c - self.b;
        let neg_dir = -ray.direction();
        let rhs = ray.origin() - self.b;

        let det = DMat3::from_cols(edge_a, edge_c, neg_dir).determinant();
        if det == 0.0 {
            // Ray parallel to the triangle plane
            return (NO_HIT, color);
        }

        let k1 = DMat3::from_cols(rhs, edge_c, neg_dir).determinant() / det;
        let k2 = DMat3::from_cols(edge_a, rhs, neg_dir).determinant() / det;
        let t = DMat3::from_cols(edge_a, edge_c, rhs).determinant() / det;

        // Strictly positive weights: rays through a vertex or an edge of
        // the triangle do not count as hits.
        if !(k1 > 0.0 && k2 > 0.0 && k1 + k2 <= 1.0) {
            return (NO_HIT, color);
        }

        if level == 0 {
            return (t, color);
        }

        let point = ray.at(t);
        let normal = edge_a.cross(edge_c).normalize_or_zero();
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
