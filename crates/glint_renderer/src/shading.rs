//! The shading, shadow, and reflection engine shared by every primitive.
//!
//! Every variant calls [`shade`] from its `intersect` at level >= 1 with
//! its own hit point, normal, and surface color; the algorithm itself is
//! identical across shapes.

use glint_core::{Color, Material, PointLight};
use glint_math::{DVec3, Ray};

use crate::{Scene, EPSILON};

/// Everything the engine needs about a surface hit.
pub struct SurfacePoint<'a> {
    pub point: DVec3,
    pub normal: DVec3,

    /// Surface color at the hit. The floor substitutes its per-tile
    /// sample; other shapes pass their material color.
    pub albedo: Color,

    pub material: &'a Material,

    /// Horizontal-plane surfaces force the normal to point down while
    /// processing any light positioned below the plane (z < 0); the
    /// change persists for the rest of the shade. Only the floor sets
    /// this.
    pub plane_sided: bool,
}

/// Shade a surface hit.
///
/// Writes the ambient term, accumulates Lambert diffuse and Phong
/// specular per visible light (visibility decided by a shadow ray from
/// the light to the point), then blends one mirror bounce while `level`
/// is under the scene's recursion limit. Channels are clamped to 1 after
/// each contribution.
pub fn shade(
    scene: &Scene,
    ray: &Ray,
    surface: &mut SurfacePoint<'_>,
    level: u32,
    color: &mut Color,
) {
    *color = surface.material.ambient_color(surface.albedo);

    for light in candidate_lights(scene, surface.point) {
        if surface.plane_sided && light.position.z < 0.0 {
            surface.normal.z = -1.0;
        }

        let light_ray = Ray::from_points(light.position, surface.point);
        let Some((_, t_nearest)) = scene.nearest_hit(&light_ray) else {
            continue;
        };

        // The nearest thing the shadow ray meets is normally the shading
        // point itself; the light is blocked only when something sits
        // strictly closer to it.
        let blocker_distance = (light_ray.at(t_nearest) - light.position).length();
        let point_distance = (surface.point - light.position).length();
        if blocker_distance >= point_distance - EPSILON {
            apply_light(ray, &light_ray, surface, &light, color);
        }
    }

    if level >= scene.recursion_limit {
        return;
    }
    reflect_bounce(scene, ray, surface, level, color);
}

/// All point lights, plus every spot light whose cone contains the ray
/// from the light toward `point`.
fn candidate_lights(scene: &Scene, point: DVec3) -> Vec<PointLight> {
    let mut lights = scene.point_lights.clone();
    for spot in &scene.spot_lights {
        let toward = Ray::from_points(spot.light.position, point);
        if spot.contains(&toward) {
            lights.push(spot.light);
        }
    }
    lights
}

/// Lambert diffuse plus Phong specular for one visible light.
fn apply_light(
    view: &Ray,
    light_ray: &Ray,
    surface: &SurfacePoint<'_>,
    light: &PointLight,
    color: &mut Color,
) {
    let material = surface.material;

    let cos_theta = surface.normal.dot(light_ray.direction());
    let lambert = -cos_theta;

    let mirrored =
        (light_ray.direction() - 2.0 * cos_theta * surface.normal).normalize_or_zero();
    let phong = -mirrored.dot(view.direction());

    let diffuse = material.diffuse * lambert.max(0.0);
    let specular = material.specular * phong.max(0.0).powf(material.shine);

    *color += surface.albedo * light.color * diffuse;
    *color += surface.albedo * light.color * specular;
    clamp_channels(color);
}

/// Mirror the view ray off the surface and blend the bounced color.
fn reflect_bounce(
    scene: &Scene,
    ray: &Ray,
    surface: &SurfacePoint<'_>,
    level: u32,
    color: &mut Color,
) {
    let cos = surface.normal.dot(ray.direction());
    let direction = (ray.direction() - 2.0 * cos * surface.normal).normalize_or_zero();

    // Step one unit along the reflected direction so the bounce does not
    // re-hit the surface it just left.
    let bounced = Ray::new(surface.point + direction, direction);

    let mut bounce_color = Color::ZERO;
    if let Some((index, _)) = scene.nearest_hit(&bounced) {
        let (_, shaded) = scene.primitives[index].intersect(scene, &bounced, level + 1);
        bounce_color = shaded;
    }

    *color += bounce_color * surface.material.reflection;
    clamp_channels(color);
}

/// Clamp each channel to at most 1.
fn clamp_channels(color: &mut Color) {
    color.x = color.x.min(1.0);
    color.y = color.y.min(1.0);
    color.z = color.z.min(1.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Primitive, Sphere};
    use glint_core::Material;

    fn matte(color: Color) -> Material {
        Material::new(color, [0.2, 0.5, 0.2, 0.0], 10.0)
    }

    fn mirror(color: Color) -> Material {
        Material::new(color, [0.1, 0.1, 0.1, 0.7], 20.0)
    }

    /// Scene: a matte sphere at the origin lit by one light on +z.
    fn lit_sphere_scene(limit: u32) -> Scene {
        let mut scene = Scene::new(limit);
        scene.primitives.push(Primitive::Sphere(Sphere::new(
            DVec3::ZERO,
            5.0,
            matte(Color::ONE),
        )));
        scene
            .point_lights
            .push(PointLight::new(DVec3::new(0.0, 0.0, 50.0), Color::ONE));
        scene
    }

    fn shade_front_of_sphere(scene: &Scene) -> Color {
        let ray = Ray::new(DVec3::new(0.0, 0.0, 30.0), -DVec3::Z);
        let (t, color) = scene.primitives[0].intersect(scene, &ray, 1);
        assert!((t - 25.0).abs() < 1e-9);
        color
    }

    #[test]
    fn test_ambient_written_with_no_lights() {
        let mut scene = lit_sphere_scene(0);
        scene.point_lights.clear();
        let color = shade_front_of_sphere(&scene);
        // Only the ambient term remains: 1.0 * 0.2 per channel
        assert!((color.x - 0.2).abs() < 1e-9);
        assert_eq!(color.x, color.y);
        assert_eq!(color.y, color.z);
    }

    #[test]
    fn test_lit_point_is_brighter_than_ambient() {
        let scene = lit_sphere_scene(0);
        let color = shade_front_of_sphere(&scene);
        assert!(color.x > 0.2 + 0.1, "diffuse term missing: {color:?}");
    }

    #[test]
    fn test_occluder_blocks_the_light() {
        let mut scene = lit_sphere_scene(0);
        let lit = shade_front_of_sphere(&scene);

        // A small sphere strictly between the light and the shading point
        scene.primitives.push(Primitive::Sphere(Sphere::new(
            DVec3::new(0.0, 0.0, 20.0),
            2.0,
            matte(Color::ONE),
        )));
        let shadowed = shade_front_of_sphere(&scene);

        assert!((shadowed.x - 0.2).abs() < 1e-9, "expected pure ambient");
        assert!(lit.x > shadowed.x);
    }

    #[test]
    fn test_spotlight_contributes_only_inside_its_cone() {
        let mut scene = lit_sphere_scene(0);
        scene.point_lights.clear();

        // A spotlight above the sphere, aimed straight down: in cone
        let overhead = PointLight::new(DVec3::new(0.0, 0.0, 50.0), Color::ONE);
        scene.spot_lights.push(glint_core::SpotLight::new(
            overhead,
            DVec3::new(0.0, 0.0, -1.0),
            30.0,
        ));
        let lit = shade_front_of_sphere(&scene);
        assert!(lit.x > 0.2);

        // Aim it sideways: the shading point leaves the cone
        scene.spot_lights[0].direction = DVec3::X;
        let dark = shade_front_of_sphere(&scene);
        assert!((dark.x - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_no_reflection_at_depth_zero() {
        // Two mirror spheres facing each other; with a zero recursion
        // limit the shade must be direct lighting only.
        let mut scene = Scene::new(0);
        scene.primitives.push(Primitive::Sphere(Sphere::new(
            DVec3::ZERO,
            5.0,
            mirror(Color::ONE),
        )));
        scene.primitives.push(Primitive::Sphere(Sphere::new(
            DVec3::new(0.0, 0.0, 40.0),
            5.0,
            mirror(Color::ONE),
        )));
        scene
            .point_lights
            .push(PointLight::new(DVec3::new(0.0, 30.0, 20.0), Color::ONE));

        let ray = Ray::new(DVec3::new(0.0, 0.0, 20.0), -DVec3::Z);
        let (_, direct_only) = scene.primitives[0].intersect(&scene, &ray, 1);

        let mut deeper = scene;
        deeper.recursion_limit = 3;
        let (_, with_bounces) = deeper.primitives[0].intersect(&deeper, &ray, 1);

        // The mirrored sphere adds light once bounces are allowed
        assert!(with_bounces.length() > direct_only.length());
    }

    #[test]
    fn test_reflection_chain_terminates_at_the_limit() {
        // Mirror box: two spheres reflecting each other forever unless
        // the level guard stops the recursion.
        let mut scene = Scene::new(4);
        scene.primitives.push(Primitive::Sphere(Sphere::new(
            DVec3::ZERO,
            5.0,
            mirror(Color::ONE),
        )));
        scene.primitives.push(Primitive::Sphere(Sphere::new(
            DVec3::new(0.0, 0.0, 40.0),
            5.0,
            mirror(Color::ONE),
        )));

        let ray = Ray::new(DVec3::new(0.0, 0.0, 20.0), -DVec3::Z);
        // Terminating at all proves the depth guard works.
        let (t, _) = scene.primitives[0].intersect(&scene, &ray, 1);
        assert!(t.is_finite());
    }

    #[test]
    fn test_channels_saturate_at_one() {
        let mut scene = lit_sphere_scene(0);
        // An absurdly bright light cannot push any channel past 1.
        scene.point_lights[0].color = Color::splat(1000.0);
        let color = shade_front_of_sphere(&scene);
        assert!(color.x <= 1.0 && color.y <= 1.0 && color.z <= 1.0);
        assert_eq!(color.x, 1.0);
    }
}
