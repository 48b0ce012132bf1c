//! Surface material parameters.

use glam::Vec3;
use serde::Deserialize;

/// Color type alias (linear RGB, components conventionally 0-1)
pub type Color = Vec3;

/// Phong material with a four-channel albedo.
///
/// The albedo entries weight the diffuse, specular, reflected and
/// refracted contributions in that order. They are free-form weights,
/// not physical reflectances, and need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Index of refraction (1.0 = air, 1.5 = glass)
    pub refractive_index: f32,
    /// Weights for diffuse, specular, reflection, refraction
    pub albedo: [f32; 4],
    /// Diffuse color (linear RGB)
    pub diffuse_color: Color,
    /// Phong shininess exponent
    pub specular_exponent: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            refractive_index: 1.0,
            albedo: [1.0, 0.0, 0.0, 0.0],
            diffuse_color: Color::ZERO,
            specular_exponent: 0.0,
        }
    }
}

impl Material {
    /// Create a matte material: diffuse only, no highlights or secondary rays.
    pub fn matte(diffuse_color: Color) -> Self {
        Self {
            diffuse_color,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_default_is_opaque() {
        let m = Material::default();
        assert_eq!(m.refractive_index, 1.0);
        assert_eq!(m.albedo[2], 0.0);
        assert_eq!(m.albedo[3], 0.0);
    }

    #[test]
    fn test_material_from_json() {
        let m: Material = serde_json::from_str(
            r#"{
                "refractive_index": 1.5,
                "albedo": [0.0, 0.5, 0.1, 0.8],
                "diffuse_color": [0.6, 0.7, 0.8],
                "specular_exponent": 50.0
            }"#,
        )
        .unwrap();
        assert_eq!(m.refractive_index, 1.5);
        assert_eq!(m.albedo, [0.0, 0.5, 0.1, 0.8]);
        assert_eq!(m.diffuse_color, Color::new(0.6, 0.7, 0.8));
    }
}
