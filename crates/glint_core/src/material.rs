//! Surface material parameters shared by every primitive.

use glint_math::DVec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = DVec3;

/// Phong material: a base color plus ambient/diffuse/specular/reflection
/// weights and a shininess exponent.
///
/// The four weights conventionally sum to at most 1, though nothing
/// enforces it. `shine` must be non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base surface color (RGB, 0-1)
    pub color: Color,

    /// Ambient weight
    pub ambient: f64,

    /// Diffuse (Lambert) weight
    pub diffuse: f64,

    /// Specular (Phong) weight
    pub specular: f64,

    /// Mirror-reflection weight
    pub reflection: f64,

    /// Phong shininess exponent
    pub shine: f64,
}

impl Material {
    /// Create a material from a color, the four lighting weights in
    /// ambient/diffuse/specular/reflection order, and a shininess.
    pub fn new(color: Color, weights: [f64; 4], shine: f64) -> Self {
        Self {
            color,
            ambient: weights[0],
            diffuse: weights[1],
            specular: weights[2],
            reflection: weights[3],
            shine,
        }
    }

    /// Ambient term for a surface color.
    ///
    /// Primitives with per-point coloring (the floor) pass the local
    /// surface color rather than `self.color`.
    pub fn ambient_color(&self, albedo: Color) -> Color {
        albedo * self.ambient
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::ZERO,
            ambient: 0.0,
            diffuse: 0.0,
            specular: 0.0,
            reflection: 0.0,
            shine: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_from_weights() {
        let m = Material::new(Color::new(1.0, 0.5, 0.25), [0.4, 0.3, 0.2, 0.1], 10.0);
        assert_eq!(m.ambient, 0.4);
        assert_eq!(m.diffuse, 0.3);
        assert_eq!(m.specular, 0.2);
        assert_eq!(m.reflection, 0.1);
        assert_eq!(m.shine, 10.0);
    }

    #[test]
    fn test_ambient_color_uses_given_albedo() {
        let m = Material::new(Color::ONE, [0.5, 0.0, 0.0, 0.0], 1.0);
        let tile = Color::new(0.0, 1.0, 0.0);
        assert_eq!(m.ambient_color(tile), Color::new(0.0, 0.5, 0.0));
    }
}
