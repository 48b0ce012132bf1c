// Re-export glam for convenience
pub use glam::*;

pub mod optics;

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;
