//! The closed set of renderable primitives.

use glint_core::Color;
use glint_math::Ray;

use crate::{Floor, Quadric, Scene, Sphere, Triangle};

/// A renderable, intersectable shape with a material.
///
/// The set is closed on purpose: the shading algorithm is identical
/// across variants and only the geometry differs, so dispatch is a
/// single match rather than an open trait.
pub enum Primitive {
    Sphere(Sphere),
    Triangle(Triangle),
    Quadric(Quadric),
    Floor(Floor),
}

impl Primitive {
    /// Intersect `ray` with this primitive.
    ///
    /// Returns the hit distance (`NO_HIT` when the ray misses) and a
    /// color. At `level == 0` no shading runs and only the distance is
    /// meaningful; at `level >= 1` the color is the recursively shaded
    /// result, with `level` counting the bounces already taken.
    pub fn intersect(&self, scene: &Scene, ray: &Ray, level: u32) -> (f64, Color) {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(scene, ray, level),
            Primitive::Triangle(triangle) => triangle.intersect(scene, ray, level),
            Primitive::Quadric(quadric) => quadric.intersect(scene, ray, level),
            Primitive::Floor(floor) => floor.intersect(scene, ray, level),
        }
    }
}
