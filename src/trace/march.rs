//! Sphere tracing
//!
//! A ray advances by the scene field value at its current point, which is
//! always a safe jump. It stops once the jump collapses to `min_dist` (the
//! surface) or grows to `max_dist` (nothing left to hit).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::observer::StepObserver;
use crate::scene::{Scene, estimate_normal};
use crate::{MarchError, MarchSettings};

/// Ray origin and direction
///
/// The direction is expected to be unit length. It is not normalised here:
/// travel distance accumulates in the direction's own scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec2,
    pub direction: Vec2,
}

impl Ray {
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self { origin, direction }
    }

    /// Ray from `origin` aimed at `target` (e.g. the pointer)
    ///
    /// Returns `None` when the two points coincide.
    pub fn towards(origin: Vec2, target: Vec2) -> Option<Self> {
        (target - origin)
            .try_normalize()
            .map(|direction| Self { origin, direction })
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec2 {
        self.origin + self.direction * t
    }
}

/// How a march ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceOutcome {
    /// Final step was within `min_dist` of the surface
    Hit,
    /// Final step reached `max_dist`
    Escaped,
}

/// Result of one march
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceResult {
    /// Sum of every step length, including the terminal one
    pub travel_distance: f32,
    /// Field value sampled on the terminal step
    pub hit_distance: f32,
    /// Ray position after the terminal step
    pub hit_point: Vec2,
    /// Outward surface normal at `hit_point`, when requested
    pub normal: Option<Vec2>,
    pub steps: usize,
    pub outcome: TraceOutcome,
}

impl TraceResult {
    pub fn is_hit(&self) -> bool {
        self.outcome == TraceOutcome::Hit
    }
}

/// March `ray` through `scene` until it touches the surface or escapes
///
/// `observer` is called with the sample point and field value of every step
/// before the ray advances.
pub fn march<O>(
    scene: &Scene,
    ray: Ray,
    settings: &MarchSettings,
    observer: &mut O,
) -> Result<TraceResult, MarchError>
where
    O: StepObserver + ?Sized,
{
    settings.validate_bounds()?;
    let ceiling = settings.step_ceiling();

    let mut point = ray.origin;
    let mut travel = 0.0;
    let mut steps = 0;

    let (hit_distance, outcome) = loop {
        if steps == ceiling {
            log::warn!(
                "March from {} along {} gave up after {} steps",
                ray.origin,
                ray.direction,
                steps
            );
            return Err(MarchError::NonTerminatingMarch {
                steps,
                point,
                travel,
            });
        }

        let d = scene.distance(point)?;
        travel += d;
        steps += 1;
        log::trace!("step {steps}: point={point} d={d}");
        observer.on_step(point, d);
        point += ray.direction * d;

        if d <= settings.min_dist {
            break (d, TraceOutcome::Hit);
        }
        if d >= settings.max_dist {
            break (d, TraceOutcome::Escaped);
        }
    };

    let normal = if settings.want_normal {
        Some(estimate_normal(scene, point)?)
    } else {
        None
    };

    log::debug!(
        "March from {} ended {:?} after {} steps, travel={}",
        ray.origin,
        outcome,
        steps,
        travel
    );

    Ok(TraceResult {
        travel_distance: travel,
        hit_distance,
        hit_point: point,
        normal,
        steps,
        outcome,
    })
}
