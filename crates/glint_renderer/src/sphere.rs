//! Sphere primitive for ray tracing.

use glam::Vec3;
use glint_math::Ray;
use serde::Deserialize;

use crate::Material;

/// A sphere primitive.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Nearest positive intersection distance along the ray, if any.
    ///
    /// Geometric form: project the origin-to-center vector onto the ray
    /// direction, reject when the perpendicular distance exceeds the
    /// radius, and fall back to the far root when the near root lies
    /// behind the origin (ray starts inside the sphere).
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let l = self.center - ray.origin();
        let tca = l.dot(ray.direction());
        let d2 = l.dot(l) - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }
        let thc = (r2 - d2).sqrt();
        let mut t0 = tca - thc;
        if t0 < 0.0 {
            t0 = tca + thc;
        }
        if t0 < 0.0 {
            return None;
        }
        Some(t0)
    }

    /// Outward unit normal at a point on the sphere's surface.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}
