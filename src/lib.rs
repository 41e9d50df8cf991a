//! SDF Marcher - 2D sphere tracing over a smooth-blended distance field
//!
//! Core modules:
//! - `scene`: Primitives, the smooth-min scene field, normal estimation
//! - `trace`: Sphere tracing loop, step observers, ray fans
//! - `settings`: Marching bounds and step ceiling, loadable from JSON
//! - `error`: Failure kinds surfaced by field queries and traces

pub mod error;
pub mod scene;
pub mod settings;
pub mod trace;

pub use error::MarchError;
pub use scene::{Primitive, Scene, estimate_normal, smooth_min};
pub use settings::MarchSettings;
pub use trace::{
    NoopObserver, Ray, StepObserver, StepRecorder, TraceOutcome, TraceResult, fan_directions,
    march, march_fan,
};

use glam::Vec2;

/// Marching configuration constants
pub mod consts {
    /// Field value at or below which a ray counts as touching the surface
    pub const MIN_DIST: f32 = 1.0;
    /// Field value at or above which a ray has escaped the scene
    pub const MAX_DIST: f32 = 3600.0;

    /// Smooth-min blend radius used between neighbouring primitives
    pub const BLEND_RADIUS: f32 = 1.0;
    /// Forward-difference offset for normal estimation
    pub const NORMAL_EPSILON: f32 = 0.01;

    /// Angular spacing between rays of a full fan (radians)
    pub const FAN_ANGLE_STEP: f32 = 0.01;

    /// Canvas extent the showcase scene is laid out for
    pub const CANVAS_WIDTH: f32 = 600.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
}

/// Unit vector pointing at `theta` radians
#[inline]
pub fn direction_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Euclidean distance between two points
#[inline]
pub fn euclidean_distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_direction_from_angle_is_unit() {
        for i in 0..16 {
            let dir = direction_from_angle(i as f32 * PI / 8.0);
            assert!((dir.length() - 1.0).abs() < 1e-6);
        }
        let east = direction_from_angle(0.0);
        assert!((east - Vec2::X).length() < 1e-6);
    }

    #[test]
    fn test_euclidean_distance() {
        assert_eq!(euclidean_distance(Vec2::ZERO, Vec2::new(3.0, 4.0)), 5.0);
    }
}
