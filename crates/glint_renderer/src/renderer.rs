//! Framebuffer, tone mapping and the parallel render loop.

use rayon::prelude::*;

use crate::tracer::cast_ray;
use crate::{Camera, Color, Scene};

/// Framebuffer of linear-light colors, row-major, top-to-bottom.
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Tone-map and quantize into a row-major RGB8 buffer, top-to-bottom,
    /// left-to-right. This buffer is the renderer's output contract; image
    /// encoding is the caller's job.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

/// Tone-map a linear-light color: when any channel exceeds 1.0, scale all
/// three by the same factor so the maximum is exactly 1.0. Channel ratios
/// (hue) are preserved.
pub fn tone_map(color: Color) -> Color {
    let max = color.max_element();
    if max > 1.0 {
        color * (1.0 / max)
    } else {
        color
    }
}

/// Tone-map and quantize a color to 8 bits per channel (truncating).
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let c = tone_map(color);
    [
        (c.x * 255.0) as u8,
        (c.y * 255.0) as u8,
        (c.z * 255.0) as u8,
    ]
}

/// Render the scene: one primary ray per pixel.
///
/// Pixel work is read-only with respect to the scene and each row is an
/// independent slice of the framebuffer, so rows render in parallel with
/// no synchronization.
pub fn render(camera: &Camera, scene: &Scene) -> Framebuffer {
    let mut image = Framebuffer::new(camera.width, camera.height);
    let width = camera.width;

    log::info!(
        "Rendering {}x{} ({} spheres, {} lights)",
        camera.width,
        camera.height,
        scene.spheres.len(),
        scene.lights.len(),
    );
    let start = std::time::Instant::now();

    image
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(j, row)| {
            for (i, pixel) in row.iter_mut().enumerate() {
                let ray = camera.primary_ray(i as u32, j as u32);
                *pixel = cast_ray(&ray, scene, 0);
            }
        });

    log::info!("Rendered in {:.3?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Light, Material, Sphere, Vec3};

    #[test]
    fn test_tone_map_preserves_ratios() {
        let mapped = tone_map(Color::new(2.0, 1.0, 0.5));
        assert_eq!(mapped.max_element(), 1.0);
        assert!((mapped - Color::new(1.0, 0.5, 0.25)).length() < 1e-6);
    }

    #[test]
    fn test_tone_map_leaves_in_range_colors_alone() {
        let color = Color::new(0.2, 0.7, 0.8);
        assert_eq!(tone_map(color), color);
    }

    #[test]
    fn test_quantize_truncates() {
        assert_eq!(color_to_rgb8(Color::new(1.0, 0.0, 0.5)), [255, 0, 127]);
    }

    #[test]
    fn test_empty_scene_fills_background() {
        // No spheres, no lights, plane disabled: every pixel is the
        // quantized background color.
        let scene = Scene::new();
        let camera = Camera::new().with_resolution(8, 6);
        let image = render(&camera, &scene);

        let expected = color_to_rgb8(scene.background);
        let bytes = image.to_rgb8();
        assert_eq!(bytes.len(), 8 * 6 * 3);
        for pixel in bytes.chunks(3) {
            assert_eq!(pixel, &expected[..]);
        }
    }

    #[test]
    fn test_lit_sphere_is_brighter_at_center_than_at_edge() {
        // One matte sphere on the camera axis, one light above the scene.
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, -16.0),
            4.0,
            Material {
                albedo: [0.9, 0.1, 0.0, 0.0],
                diffuse_color: Color::new(0.4, 0.4, 0.3),
                specular_exponent: 50.0,
                ..Default::default()
            },
        ));
        scene.add_light(Light::new(Vec3::new(0.0, 30.0, 0.0), 1.5));

        let camera = Camera::new().with_resolution(200, 200);
        let image = render(&camera, &scene);

        let luminance = |c: Color| {
            let [r, g, b] = color_to_rgb8(c);
            r as u32 + g as u32 + b as u32
        };

        // Pixel (125, 100) grazes the sphere's silhouette edge; make sure
        // it still hits the sphere rather than the background.
        let center = image.get(100, 100);
        let edge = image.get(125, 100);
        assert_ne!(edge, scene.background);
        assert!(luminance(center) > luminance(edge));
    }
}
