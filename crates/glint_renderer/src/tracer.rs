//! Recursive ray caster: the shading core.
//!
//! Combines closest-hit intersection, shadow probes and the
//! reflection/refraction recursion into a single linear-light color
//! per ray.

use glam::Vec3;
use glint_math::{optics, Interval, Ray};

use crate::{Color, Scene, MAX_RENDER_DISTANCE};

/// Deepest recursion level; the primary ray is level 0. The depth
/// counter is the sole termination guarantee, so two facing mirrors
/// still terminate.
pub const MAX_DEPTH: u32 = 4;

/// Offset applied to secondary-ray origins along the normal to avoid
/// immediate self-intersection (shadow acne).
const SURFACE_BIAS: f32 = 1e-3;

/// Nudge a secondary ray's origin off the surface, on the side of the
/// normal that the ray travels toward.
#[inline]
fn offset_origin(point: Vec3, normal: Vec3, direction: Vec3) -> Vec3 {
    if direction.dot(normal) < 0.0 {
        point - normal * SURFACE_BIAS
    } else {
        point + normal * SURFACE_BIAS
    }
}

/// Compute the linear-light color carried by a ray.
///
/// The returned color is unbounded; tone mapping happens later in the
/// renderer.
pub fn cast_ray(ray: &Ray, scene: &Scene, depth: u32) -> Color {
    if depth > MAX_DEPTH {
        return scene.background;
    }
    let range = Interval::new(0.0, MAX_RENDER_DISTANCE);
    let hit = match scene.intersect(ray, range) {
        Some(hit) => hit,
        None => return scene.background,
    };

    let dir = ray.direction();
    let normal = hit.normal;
    let material = hit.material;

    let reflect_dir = optics::reflect(dir, normal).normalize();
    let reflect_ray = Ray::new(offset_origin(hit.point, normal, reflect_dir), reflect_dir);
    let reflect_color = cast_ray(&reflect_ray, scene, depth + 1);

    let refract_dir = optics::refract(dir, normal, material.refractive_index).normalize_or_zero();
    let refract_color = if refract_dir != Vec3::ZERO {
        let refract_ray = Ray::new(offset_origin(hit.point, normal, refract_dir), refract_dir);
        cast_ray(&refract_ray, scene, depth + 1)
    } else {
        // Total internal reflection: no transmitted ray exists and the
        // refraction term contributes nothing.
        Color::ZERO
    };

    let mut diffuse_intensity = 0.0;
    let mut specular_intensity = 0.0;
    for light in &scene.lights {
        let to_light = light.position - hit.point;
        let light_distance = to_light.length();
        let light_dir = to_light / light_distance;

        // Occluded when anything sits strictly between the surface and
        // the light.
        let shadow_ray = Ray::new(offset_origin(hit.point, normal, light_dir), light_dir);
        let shadow_range = Interval::new(0.0, light_distance.min(MAX_RENDER_DISTANCE));
        if scene.intersect(&shadow_ray, shadow_range).is_some() {
            continue;
        }

        diffuse_intensity += light.intensity * light_dir.dot(normal).max(0.0);
        // Phong variant: plain reflect of the negated light direction,
        // not the Blinn-Phong half vector.
        specular_intensity += light.intensity
            * (-optics::reflect(-light_dir, normal))
                .dot(dir)
                .max(0.0)
                .powf(material.specular_exponent);
    }

    material.diffuse_color * diffuse_intensity * material.albedo[0]
        + Color::ONE * specular_intensity * material.albedo[1]
        + reflect_color * material.albedo[2]
        + refract_color * material.albedo[3]
}
