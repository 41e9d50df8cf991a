//! Per-step observation of a march
//!
//! Observers see each sample point and its field value (the radius of the
//! classic step circle) before the ray advances. They cannot influence the
//! march.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Receives every step of a march
pub trait StepObserver {
    fn on_step(&mut self, point: Vec2, radius: f32);
}

impl<F> StepObserver for F
where
    F: FnMut(Vec2, f32),
{
    #[inline]
    fn on_step(&mut self, point: Vec2, radius: f32) {
        self(point, radius)
    }
}

/// Ignores every step
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    #[inline]
    fn on_step(&mut self, _point: Vec2, _radius: f32) {}
}

/// One sphere-tracing step circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepCircle {
    pub center: Vec2,
    pub radius: f32,
}

/// Collects step circles for drawing after the trace
#[derive(Debug, Clone, Default)]
pub struct StepRecorder {
    pub circles: Vec<StepCircle>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

impl StepObserver for StepRecorder {
    fn on_step(&mut self, point: Vec2, radius: f32) {
        self.circles.push(StepCircle {
            center: point,
            radius,
        });
    }
}
