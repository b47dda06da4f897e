//! Scene description records produced by the loader.
//!
//! These are plain data: the renderer turns them into its own primitive
//! representation. Keeping the description separate lets the loader stay
//! renderer-agnostic.

use glint_math::DVec3;

use crate::light::{PointLight, SpotLight};
use crate::material::Material;

/// Geometry record for one primitive in a scene file.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeDesc {
    Sphere {
        center: DVec3,
        radius: f64,
    },
    Triangle {
        a: DVec3,
        b: DVec3,
        c: DVec3,
    },
    /// Quadric surface `Ax^2 + By^2 + Cz^2 + Dxy + Eyz + Fxz + Gx + Hy +
    /// Iz + J = 0` clipped to an axis-aligned box. An extent component of
    /// zero leaves that axis unbounded.
    General {
        coeffs: [f64; 10],
        clip_origin: DVec3,
        clip_extent: DVec3,
    },
}

/// One primitive record: geometry plus its material.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDesc {
    pub shape: ShapeDesc,
    pub material: Material,
}

/// A parsed scene file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneDesc {
    /// Maximum number of reflection bounces.
    pub recursion_depth: u32,

    /// Output image side length in pixels (images are square).
    pub image_size: u32,

    pub objects: Vec<ObjectDesc>,
    pub point_lights: Vec<PointLight>,
    pub spot_lights: Vec<SpotLight>,
}
