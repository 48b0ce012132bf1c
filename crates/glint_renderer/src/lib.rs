//! Glint renderer - Whitted-style recursive ray tracing.
//!
//! Direct illumination with shadow probes, plus recursive specular
//! reflection and refraction, over a scene of spheres, point lights and
//! one checker-patterned ground plane. The renderer's output contract is
//! a row-major 8-bit RGB framebuffer; image encoding is the caller's job.

mod camera;
mod material;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod tracer;

pub use camera::Camera;
pub use material::{Color, Material};
pub use plane::CheckerPlane;
pub use renderer::{render, Framebuffer};
pub use scene::{HitRecord, Light, Scene, SceneError, MAX_RENDER_DISTANCE};
pub use sphere::Sphere;
pub use tracer::{cast_ray, MAX_DEPTH};

/// Re-export math types from glint_math
pub use glint_math::{optics, Interval, Ray, Vec3};
