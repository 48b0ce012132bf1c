//! Scene model and closest-hit intersection.

use std::fs;
use std::path::Path;

use glam::Vec3;
use glint_math::{Interval, Ray};
use serde::Deserialize;
use thiserror::Error;

use crate::{CheckerPlane, Color, Material, Sphere};

/// Hits farther than this count as misses; rays that get past it escape
/// to the background.
pub const MAX_RENDER_DISTANCE: f32 = 1000.0;

/// Point light. Intensity carries no distance falloff; attenuation comes
/// only from occlusion.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// Record of the closest ray-surface intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit surface normal
    pub normal: Vec3,
    /// Material at the intersection, copied from the primitive
    pub material: Material,
    /// Parameter t where the intersection occurs
    pub t: f32,
}

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A renderable scene: spheres, point lights, an optional checkerboard
/// ground plane and a background color.
///
/// Read-only during rendering; nothing is created, mutated or destroyed
/// mid-render.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    pub plane: Option<CheckerPlane>,
    /// Color returned for rays that hit nothing
    pub background: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            spheres: Vec::new(),
            lights: Vec::new(),
            plane: None,
            background: Color::new(0.2, 0.7, 0.8),
        }
    }
}

impl Scene {
    /// Create a new empty scene with the default background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere to the scene.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Add a point light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Parse a scene from its JSON description.
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a scene description from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let text = fs::read_to_string(path)?;
        let scene = Self::from_json(&text)?;
        log::info!(
            "Loaded scene: {} spheres, {} lights, plane {}",
            scene.spheres.len(),
            scene.lights.len(),
            if scene.plane.is_some() { "on" } else { "off" },
        );
        Ok(scene)
    }

    /// Find the closest intersection along the ray with t inside `range`.
    ///
    /// Spheres are scanned linearly (scenes are small), then the plane is
    /// kept if it is closer than the nearest sphere hit.
    pub fn intersect(&self, ray: &Ray, range: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_t = range.max;

        for sphere in &self.spheres {
            if let Some(t) = sphere.intersect(ray) {
                if range.surrounds(t) && t < closest_t {
                    closest_t = t;
                    let point = ray.at(t);
                    closest = Some(HitRecord {
                        point,
                        normal: sphere.normal_at(point),
                        material: sphere.material,
                        t,
                    });
                }
            }
        }

        if let Some(plane) = &self.plane {
            if let Some(t) = plane.intersect(ray) {
                if range.surrounds(t) && t < closest_t {
                    let point = ray.at(t);
                    closest = Some(HitRecord {
                        point,
                        normal: Vec3::Y,
                        material: plane.material_at(point),
                        t,
                    });
                }
            }
        }

        closest
    }
}
