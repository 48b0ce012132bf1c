//! Pinhole camera: pixel coordinates to primary rays.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use glint_math::Ray;

/// Camera fixed at the world origin, looking down -Z.
///
/// Maps pixel centers to normalized device coordinates with a vertical
/// field of view and aspect-ratio correction.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in radians
    vfov: f32,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            width: 1200,
            height: 800,
            vfov: FRAC_PI_2,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the vertical field of view in radians.
    pub fn with_vfov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self
    }

    /// Unit primary ray through the center of pixel (i, j).
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        let w = self.width as f32;
        let h = self.height as f32;
        let half_height = (self.vfov / 2.0).tan();

        let x = (2.0 * (i as f32 + 0.5) / w - 1.0) * half_height * w / h;
        let y = -(2.0 * (j as f32 + 0.5) / h - 1.0) * half_height;

        Ray::new(Vec3::ZERO, Vec3::new(x, y, -1.0).normalize())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pixel_looks_down_negative_z() {
        let camera = Camera::new().with_resolution(100, 100);
        let ray = camera.primary_ray(49, 49);
        // Half a pixel off exact center; direction is still almost -Z.
        assert!(ray.direction().z < -0.99);
        assert!((ray.direction().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_image_axes_orientation() {
        let camera = Camera::new().with_resolution(100, 100);
        // Top-left pixel: up and to the left.
        let ray = camera.primary_ray(0, 0);
        assert!(ray.direction().x < 0.0);
        assert!(ray.direction().y > 0.0);

        // Bottom-right pixel: down and to the right.
        let ray = camera.primary_ray(99, 99);
        assert!(ray.direction().x > 0.0);
        assert!(ray.direction().y < 0.0);
    }

    #[test]
    fn test_aspect_ratio_widens_x() {
        let camera = Camera::new().with_resolution(200, 100);
        let left = camera.primary_ray(0, 49);
        let top = camera.primary_ray(99, 0);
        // Twice as wide as tall: the horizontal extent doubles.
        assert!(left.direction().x.abs() > top.direction().y.abs());
    }
}
