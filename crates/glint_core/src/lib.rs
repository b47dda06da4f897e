//! Glint Core - materials, lights, textures, and the scene description.
//!
//! This crate provides:
//!
//! - **Surface data**: `Material` and the `Color` alias
//! - **Lights**: `PointLight` and `SpotLight`
//! - **Textures**: `Texture` sampling with checkerboard fallback
//! - **Scene description**: `SceneDesc` records and the text-file loader
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let desc = load_scene("scene.txt")?;
//! println!("loaded {} objects, {} point lights",
//!     desc.objects.len(),
//!     desc.point_lights.len());
//! ```

pub mod light;
pub mod loader;
pub mod material;
pub mod scene;
pub mod texture;

// Re-export commonly used types
pub use light::{PointLight, SpotLight};
pub use loader::{load_scene, parse_scene, SceneError};
pub use material::{Color, Material};
pub use scene::{ObjectDesc, SceneDesc, ShapeDesc};
pub use texture::{Texture, TextureError};
