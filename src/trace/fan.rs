//! Full 360° ray fans around one origin

use glam::Vec2;
use std::f32::consts::TAU;

use super::march::{Ray, TraceResult, march};
use super::observer::NoopObserver;
use crate::scene::Scene;
use crate::{MarchError, MarchSettings, direction_from_angle};

/// Unit directions at angles `0, step, 2*step, ...` strictly below a full turn
pub fn fan_directions(step: f32) -> impl Iterator<Item = Vec2> {
    let count = if step > 0.0 && step.is_finite() {
        (TAU / step).ceil() as usize
    } else {
        0
    };
    (0..count)
        .map(move |i| i as f32 * step)
        .filter(|theta| *theta < TAU)
        .map(direction_from_angle)
}

/// Trace one ray per fan direction from `origin`, in angle order
///
/// Fan rays only mark where they land, so normals are never estimated here
/// regardless of `settings.want_normal`.
pub fn march_fan(
    scene: &Scene,
    origin: Vec2,
    settings: &MarchSettings,
) -> Result<Vec<TraceResult>, MarchError> {
    settings.validate()?;
    let settings = settings.clone().without_normal();
    let results = fan_directions(settings.fan_step)
        .map(|direction| march(scene, Ray::new(origin, direction), &settings, &mut NoopObserver))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "Fan from {}: {} rays, {} hits",
        origin,
        results.len(),
        results.iter().filter(|r| r.is_hit()).count()
    );
    Ok(results)
}
