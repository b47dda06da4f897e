//! Glint Renderer - recursive Whitted ray tracing on the CPU.
//!
//! The scene is a flat list of primitives (sphere, triangle, quadric,
//! floor) scanned linearly for the nearest hit. The winning primitive
//! shades with Phong lighting, casting a shadow ray toward every light,
//! then spawns one mirror bounce per level until the scene's recursion
//! limit is reached.

mod camera;
mod floor;
mod primitive;
mod quadric;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod triangle;

pub use camera::Camera;
pub use floor::Floor;
pub use primitive::Primitive;
pub use quadric::Quadric;
pub use renderer::{render, ImageBuffer};
pub use scene::Scene;
pub use shading::{shade, SurfacePoint};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export common math and core types
pub use glint_core::{Color, Material, PointLight, SpotLight};
pub use glint_math::{DVec3, Ray};

/// Tolerance applied to every occlusion and root-validity comparison.
pub const EPSILON: f64 = 1e-6;

/// Sentinel distance meaning "no intersection".
pub const NO_HIT: f64 = f64::INFINITY;
