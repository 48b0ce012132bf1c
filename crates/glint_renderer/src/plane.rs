//! Bounded checkerboard ground plane.

use glam::Vec3;
use glint_math::Ray;
use serde::Deserialize;

use crate::{Color, Material};

/// Horizontal ground plane at `y = height`, bounded in x and z, rendered
/// with two alternating tints selected by hit-point parity.
///
/// The plane's material acts as a template: its diffuse color is replaced
/// by the checker tint at each hit.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CheckerPlane {
    /// Plane height along y
    pub height: f32,
    /// Half-extent along x
    pub half_width: f32,
    /// Near edge of the visible strip (larger z)
    pub z_near: f32,
    /// Far edge of the visible strip (smaller z)
    pub z_far: f32,
    /// Tint for odd-parity cells
    pub tint_odd: Color,
    /// Tint for even-parity cells
    pub tint_even: Color,
    /// Brightness applied to both tints, keeping the floor dimmer than
    /// full-intensity sphere materials
    pub brightness: f32,
    /// Template material for checker hits
    pub material: Material,
}

impl Default for CheckerPlane {
    fn default() -> Self {
        Self {
            height: -4.0,
            half_width: 10.0,
            z_near: -10.0,
            z_far: -30.0,
            tint_odd: Color::ONE,
            tint_even: Color::new(1.0, 0.7, 0.3),
            brightness: 0.3,
            material: Material::default(),
        }
    }
}

impl CheckerPlane {
    /// Intersection distance along the ray, if the ray crosses the plane
    /// inside the bounded strip.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let dir = ray.direction();
        // Near-parallel rays are skipped entirely.
        if dir.y.abs() <= 1e-3 {
            return None;
        }
        let t = -(ray.origin().y - self.height) / dir.y;
        if t <= 0.0 {
            return None;
        }
        let pt = ray.at(t);
        if pt.x.abs() < self.half_width && pt.z < self.z_near && pt.z > self.z_far {
            Some(t)
        } else {
            None
        }
    }

    /// Checker tint at a hit point, selected by the parity of scaled,
    /// offset x/z coordinates.
    pub fn color_at(&self, point: Vec3) -> Color {
        let parity = ((0.5 * point.x + 1000.0) as i32 + (0.5 * point.z) as i32) & 1;
        let tint = if parity == 1 {
            self.tint_odd
        } else {
            self.tint_even
        };
        tint * self.brightness
    }

    /// Material reported for a hit at `point`: the template with its
    /// diffuse color replaced by the checker tint.
    pub fn material_at(&self, point: Vec3) -> Material {
        let mut material = self.material;
        material.diffuse_color = self.color_at(point);
        material
    }
}
