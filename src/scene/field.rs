//! Scene field: every primitive blended into one distance function
//!
//! Distances are folded strictly left to right in insertion order. The
//! polynomial smooth-min is not associative, so reordering three or more
//! overlapping primitives changes the blended silhouette.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::primitive::Primitive;
use crate::MarchError;
use crate::consts::BLEND_RADIUS;

/// Polynomial (cubic) smooth minimum
///
/// Never exceeds `min(a, b)` and equals it once `|a - b| >= k`.
/// A non-positive `k` disables blending.
#[inline]
pub fn smooth_min(a: f32, b: f32, k: f32) -> f32 {
    if k <= 0.0 {
        return a.min(b);
    }
    let h = (k - (a - b).abs()).max(0.0) / k;
    a.min(b) - h * h * h * k * (1.0 / 6.0)
}

fn default_blend_radius() -> f32 {
    BLEND_RADIUS
}

/// Ordered collection of primitives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
    /// Smooth-min blend radius between neighbouring fields
    #[serde(default = "default_blend_radius")]
    pub blend_radius: f32,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Scene {
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Self {
            primitives,
            blend_radius: BLEND_RADIUS,
        }
    }

    /// The two-circle, two-box layout the marcher is usually shown with
    pub fn showcase() -> Self {
        Self::new(vec![
            Primitive::circle(Vec2::new(300.0, 250.0), 100.0),
            Primitive::circle(Vec2::new(350.0, 350.0), 100.0),
            Primitive::rect(Vec2::new(200.0, 350.0), Vec2::new(200.0, 200.0)),
            Primitive::rect(Vec2::new(250.0, 100.0), Vec2::new(100.0, 100.0)),
        ])
    }

    pub fn with_blend_radius(mut self, k: f32) -> Self {
        self.blend_radius = k;
        self
    }

    /// Builder-style append
    pub fn with_added(mut self, primitive: Primitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Remove the primitive at `index`, preserving the order of the rest
    pub fn remove(&mut self, index: usize) -> Option<Primitive> {
        if index < self.primitives.len() {
            Some(self.primitives.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    /// Blended distance from `point` to the scene surface
    pub fn distance(&self, point: Vec2) -> Result<f32, MarchError> {
        let k = self.blend_radius;
        self.primitives
            .iter()
            .map(|p| p.distance(point))
            .reduce(|a, b| smooth_min(a, b, k))
            .ok_or(MarchError::EmptyScene)
    }

    /// Reject primitives with negative or non-finite extents
    pub fn validate(&self) -> Result<(), MarchError> {
        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Some(reason) = primitive.invalid_extent() {
                return Err(MarchError::InvalidPrimitive { index, reason });
            }
        }
        Ok(())
    }

    /// Parse and validate a scene description
    pub fn from_json(json: &str) -> Result<Self, MarchError> {
        let scene: Self = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn to_json(&self) -> Result<String, MarchError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a scene description from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MarchError> {
        let path = path.as_ref();
        let scene = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!(
            "Loaded scene with {} primitives from {}",
            scene.len(),
            path.display()
        );
        Ok(scene)
    }
}
