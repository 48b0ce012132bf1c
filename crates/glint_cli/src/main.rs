//! glint - Whitted-style ray tracer.
//!
//! Usage: `glint [scene.json] [output.png]`
//!
//! With no scene file a built-in demo scene is rendered: four spheres
//! (ivory, glass, red rubber, mirror), three point lights and the
//! checkerboard floor.

use anyhow::{Context, Result};
use glint_renderer::{
    render, Camera, CheckerPlane, Color, Framebuffer, Light, Material, Scene, Sphere, Vec3,
};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let scene_path = args.next();
    let output = args.next().unwrap_or_else(|| "out.png".to_string());

    let scene = match &scene_path {
        Some(path) => Scene::from_file(path)
            .with_context(|| format!("failed to load scene from {path}"))?,
        None => demo_scene(),
    };

    let camera = Camera::new();
    let image = render(&camera, &scene);

    save_png(&image, &output).with_context(|| format!("failed to write {output}"))?;
    log::info!("Wrote {output}");
    Ok(())
}

/// Encode the framebuffer's RGB8 output as a PNG file.
///
/// Encoding failure is the one reportable error of a render; it is
/// surfaced to the caller rather than recovered here.
fn save_png(image: &Framebuffer, path: &str) -> Result<()> {
    let rgb = image.to_rgb8();
    let buffer = image::RgbImage::from_raw(image.width, image.height, rgb)
        .context("framebuffer size mismatch")?;
    buffer.save(path)?;
    Ok(())
}

fn demo_scene() -> Scene {
    let ivory = Material {
        refractive_index: 1.0,
        albedo: [0.6, 0.3, 0.1, 0.0],
        diffuse_color: Color::new(0.4, 0.4, 0.3),
        specular_exponent: 50.0,
    };
    let glass = Material {
        refractive_index: 1.5,
        albedo: [0.0, 0.5, 0.1, 0.8],
        diffuse_color: Color::new(0.6, 0.7, 0.8),
        specular_exponent: 50.0,
    };
    let red_rubber = Material {
        refractive_index: 1.0,
        albedo: [0.9, 0.1, 0.0, 0.0],
        diffuse_color: Color::new(0.3, 0.1, 0.1),
        specular_exponent: 10.0,
    };
    let mirror = Material {
        refractive_index: 1.0,
        albedo: [0.0, 10.0, 0.8, 0.0],
        diffuse_color: Color::ONE,
        specular_exponent: 1425.0,
    };

    let mut scene = Scene::new();
    scene.plane = Some(CheckerPlane::default());

    scene.add_sphere(Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, ivory));
    scene.add_sphere(Sphere::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, glass));
    scene.add_sphere(Sphere::new(Vec3::new(1.5, -0.5, -18.0), 3.0, red_rubber));
    scene.add_sphere(Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, mirror));

    scene.add_light(Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5));
    scene.add_light(Light::new(Vec3::new(30.0, 50.0, -25.0), 1.8));
    scene.add_light(Light::new(Vec3::new(30.0, 20.0, 30.0), 1.7));

    scene
}
