//! Scene state shared by every intersection and shading call.

use std::sync::Arc;

use glint_core::{PointLight, SceneDesc, ShapeDesc, SpotLight, Texture};
use glint_math::Ray;

use crate::{Floor, Primitive, Quadric, Sphere, Triangle, EPSILON, NO_HIT};

/// Read-only scene state: primitives in insertion order, lights, the
/// reflection depth limit, and the optional floor texture.
///
/// A `Scene` is built once before rendering and passed by reference into
/// every intersection and shading call; nothing mutates it during a
/// render pass.
pub struct Scene {
    pub primitives: Vec<Primitive>,
    pub point_lights: Vec<PointLight>,
    pub spot_lights: Vec<SpotLight>,

    /// Maximum number of reflection bounces.
    pub recursion_limit: u32,

    /// Floor texture; `None` renders the checkerboard.
    pub texture: Option<Arc<Texture>>,
}

impl Scene {
    /// Create an empty scene with the given reflection depth limit.
    pub fn new(recursion_limit: u32) -> Self {
        Self {
            primitives: Vec::new(),
            point_lights: Vec::new(),
            spot_lights: Vec::new(),
            recursion_limit,
            texture: None,
        }
    }

    /// Build a scene from a parsed description.
    ///
    /// The floor and its texture are not part of the file format; callers
    /// add them afterwards.
    pub fn from_desc(desc: &SceneDesc) -> Self {
        let mut scene = Scene::new(desc.recursion_depth);
        for object in &desc.objects {
            let primitive = match object.shape {
                ShapeDesc::Sphere { center, radius } => {
                    Primitive::Sphere(Sphere::new(center, radius, object.material))
                }
                ShapeDesc::Triangle { a, b, c } => {
                    Primitive::Triangle(Triangle::new(a, b, c, object.material))
                }
                ShapeDesc::General {
                    coeffs,
                    clip_origin,
                    clip_extent,
                } => Primitive::Quadric(Quadric::new(
                    coeffs,
                    clip_origin,
                    clip_extent,
                    object.material,
                )),
            };
            scene.primitives.push(primitive);
        }
        scene.point_lights = desc.point_lights.clone();
        scene.spot_lights = desc.spot_lights.clone();
        scene
    }

    /// Add the standard floor to the scene.
    pub fn add_floor(&mut self, width: f64, tile: f64) {
        self.primitives.push(Primitive::Floor(Floor::new(width, tile)));
    }

    /// Nearest positive-distance hit along `ray` as `(index, distance)`.
    ///
    /// Linear scan over every primitive with level-0 intersects.
    /// Distances at or below `EPSILON` are ignored so a surface does not
    /// occlude itself.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<(usize, f64)> {
        let mut nearest = None;
        let mut t_min = NO_HIT;
        for (index, primitive) in self.primitives.iter().enumerate() {
            let (t, _) = primitive.intersect(self, ray, 0);
            if t > EPSILON && t < t_min {
                t_min = t;
                nearest = Some((index, t));
            }
        }
        nearest
    }
}
