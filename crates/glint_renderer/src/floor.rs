//! Bounded checkered floor in the z = 0 plane.

use glint_core::{texture, Color, Material};
use glint_math::{DVec3, Ray};

use crate::shading::{shade, SurfacePoint};
use crate::{Scene, NO_HIT};

/// A square floor centered on the origin, tiled with a checkerboard or a
/// per-tile repeating texture.
///
/// The plane is one-sided: the normal faces whichever side the ray
/// origin is on, and while shading, any light positioned below the plane
/// additionally forces the normal downward (see `SurfacePoint`).
pub struct Floor {
    origin: DVec3,
    width: f64,
    tile: f64,
    material: Material,
}

impl Floor {
    /// Floor of total width `width` with square tiles of side `tile`.
    pub fn new(width: f64, tile: f64) -> Self {
        Self {
            origin: DVec3::new(-width / 2.0, -width / 2.0, 0.0),
            width,
            tile,
            material: Material::new(Color::ONE, [0.4, 0.2, 0.2, 0.2], 0.5),
        }
    }

    /// Strict bounds test against the floor square.
    fn in_bounds(&self, point: DVec3) -> bool {
        point.y > self.origin.y
            && point.y < self.origin.y + self.width
            && point.x > self.origin.x
            && point.x < self.origin.x + self.width
    }

    /// Checkerboard or texture color for the tile under `point`.
    fn tile_color(&self, scene: &Scene, point: DVec3) -> Color {
        let offset_x = point.x - self.origin.x;
        let offset_y = point.y - self.origin.y;

        if scene.texture.is_some() {
            // Each tile repeats the full texture
            let u = offset_x.rem_euclid(self.tile) / self.tile;
            let v = offset_y.rem_euclid(self.tile) / self.tile;
            texture::sample(scene.texture.as_deref(), u, v)
        } else {
            let tile_x = (offset_x / self.tile) as i64;
            let tile_y = (offset_y / self.tile) as i64;
            if (tile_x + tile_y) % 2 == 0 {
                Color::ONE
            } else {
                Color::ZERO
            }
        }
    }

    pub fn intersect(&self, scene: &Scene, ray: &Ray, level: u32) -> (f64, Color) {
        let mut color = Color::ZERO;

        let mut normal = DVec3::Z;
        if ray.origin().z < 0.0 {
            normal = -normal;
        }

        let denominator = normal.dot(ray.direction());
        if denominator == 0.0 {
            return (NO_HIT, color);
        }
        let t = -ray.origin().dot(normal) / denominator;
        if t < 0.0 {
            return (NO_HIT, color);
        }

        let point = ray.at(t);
        if !self.in_bounds(point) {
            return (NO_HIT, color);
        }
        if level == 0 {
            return (t, color);
        }

        let albedo = self.tile_color(scene, point);
        let mut surface = SurfacePoint {
            point,
            normal,
            albedo,
            material: &self.material,
            plane_sided: true,
        };
        shade(scene, ray, &mut surface, level, &mut color);
        (t, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{PointLight, Texture};
    use std::sync::Arc;

    fn floor_scene() -> Scene {
        let mut scene = Scene::new(0);
        scene.add_floor(100.0, 10.0);
        scene
    }

    fn intersect_floor(scene: &Scene, ray: &Ray, level: u32) -> (f64, Color) {
        scene.primitives[0].intersect(scene, ray, level)
    }

    #[test]
    fn test_hit_from_above() {
        let scene = floor_scene();
        let ray = Ray::new(DVec3::new(5.0, 5.0, 10.0), -DVec3::Z);
        let (t, _) = intersect_floor(&scene, &ray, 0);
        assert!((t - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_outside_the_square_misses() {
        let scene = floor_scene();
        let ray = Ray::new(DVec3::new(500.0, 0.0, 10.0), -DVec3::Z);
        let (t, _) = intersect_floor(&scene, &ray, 0);
        assert_eq!(t, NO_HIT);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let scene = floor_scene();
        let ray = Ray::new(DVec3::new(0.0, 0.0, 10.0), DVec3::X);
        let (t, _) = intersect_floor(&scene, &ray, 0);
        assert_eq!(t, NO_HIT);
    }

    #[test]
    fn test_hit_from_below_flips_the_plane_normal() {
        let scene = floor_scene();
        // With the normal flipped to -z the plane equation still crosses
        // at the same distance from below.
        let ray = Ray::new(DVec3::new(5.0, 5.0, -10.0), DVec3::Z);
        let (t, _) = intersect_floor(&scene, &ray, 0);
        assert!((t - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_checkerboard_parity_alternates_between_tiles() {
        // No lights: the shaded color is the pure ambient term, which
        // exposes the tile sample (0.4 * tile).
        let scene = floor_scene();

        // Tile indices count from the corner at (-50, -50): the point
        // (5, 5) sits in tile (5, 5), even parity, white.
        let white_ray = Ray::new(DVec3::new(5.0, 5.0, 10.0), -DVec3::Z);
        let (_, white) = intersect_floor(&scene, &white_ray, 1);
        assert!((white.x - 0.4).abs() < 1e-9);

        // One tile over: odd parity, black.
        let black_ray = Ray::new(DVec3::new(15.0, 5.0, 10.0), -DVec3::Z);
        let (_, black) = intersect_floor(&scene, &black_ray, 1);
        assert_eq!(black, Color::ZERO);
    }

    #[test]
    fn test_texture_repeats_per_tile() {
        let mut scene = floor_scene();
        // 1x1 red texture: every tile samples solid red.
        scene.texture = Some(Arc::new(Texture::new(1, 1, 3, vec![255, 0, 0])));

        let ray = Ray::new(DVec3::new(15.0, 5.0, 10.0), -DVec3::Z);
        let (_, color) = intersect_floor(&scene, &ray, 1);
        assert!((color.x - 0.4).abs() < 1e-9);
        assert_eq!(color.y, 0.0);
        assert_eq!(color.z, 0.0);
    }

    #[test]
    fn test_light_below_plane_forces_normal_down() {
        // Viewer above, light below the plane. The per-light pass forces
        // the normal to -z, so the below-plane light shines on the
        // "visible" side and adds diffuse light despite the viewer being
        // on the other side. This test pins the quirk; renders depend on
        // it staying put.
        let mut scene = floor_scene();
        scene
            .point_lights
            .push(PointLight::new(DVec3::new(5.0, 5.0, -30.0), Color::ONE));

        let ray = Ray::new(DVec3::new(5.0, 5.0, 10.0), -DVec3::Z);
        let (_, color) = intersect_floor(&scene, &ray, 1);

        // Pure ambient would be 0.4; the forced normal lets the light
        // through, so the shade is strictly brighter.
        assert!(color.x > 0.4 + 1e-6, "expected the below-plane light to contribute, got {color:?}");
    }
}
