//! Distance primitives
//!
//! Each primitive reports the distance from an arbitrary point to its boundary.
//! Circles are signed (negative inside). Rectangles are unsigned outside and
//! flat zero inside: a ray starting inside one is already "on" the surface.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::euclidean_distance;

/// A shape in the scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Circle {
        center: Vec2,
        radius: f32,
    },
    /// Axis-aligned rectangle anchored at its top-left corner
    Rect {
        corner: Vec2,
        size: Vec2,
    },
}

impl Primitive {
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Primitive::Circle {
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn rect(corner: Vec2, size: Vec2) -> Self {
        Primitive::Rect {
            corner,
            size: size.max(Vec2::ZERO),
        }
    }

    /// Why this primitive's extents are unusable, if they are
    ///
    /// The constructors clamp, but deserialised primitives skip them.
    pub fn invalid_extent(&self) -> Option<String> {
        match *self {
            Primitive::Circle { radius, .. } if !(radius >= 0.0 && radius.is_finite()) => {
                Some(format!("circle radius must be non-negative, got {radius}"))
            }
            Primitive::Rect { size, .. } if !(size.cmpge(Vec2::ZERO).all() && size.is_finite()) => {
                Some(format!("rect size must be non-negative, got {size}"))
            }
            _ => None,
        }
    }

    /// Distance from `point` to the boundary
    #[inline]
    pub fn distance(&self, point: Vec2) -> f32 {
        match *self {
            Primitive::Circle { center, radius } => sd_circle(point, center, radius),
            Primitive::Rect { corner, size } => ud_rect(point, corner, size),
        }
    }

    /// Sample the boundary as a closed polyline (first point repeated last)
    pub fn outline(&self, segments: usize) -> Vec<Vec2> {
        match *self {
            Primitive::Circle { center, radius } => {
                let segments = segments.max(3);
                (0..=segments)
                    .map(|i| {
                        let theta = i as f32 / segments as f32 * TAU;
                        center + Vec2::new(theta.cos(), theta.sin()) * radius
                    })
                    .collect()
            }
            Primitive::Rect { corner, size } => vec![
                corner,
                corner + Vec2::new(size.x, 0.0),
                corner + size,
                corner + Vec2::new(0.0, size.y),
                corner,
            ],
        }
    }
}

/// Signed distance to a circle
#[inline]
pub fn sd_circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    euclidean_distance(p, center) - radius
}

/// Unsigned distance to an axis-aligned rectangle (zero inside)
#[inline]
pub fn ud_rect(p: Vec2, corner: Vec2, size: Vec2) -> f32 {
    let nearest = p.clamp(corner, corner + size);
    euclidean_distance(p, nearest)
}
