//! Error kinds for field queries and traces
//!
//! All operations are deterministic, so none of these are transient.

use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarchError {
    /// The scene field was queried with zero primitives
    #[error("scene has no primitives")]
    EmptyScene,
    /// The field gradient vanished, so no outward direction exists
    #[error("degenerate normal at {point}: field gradient is zero")]
    DegenerateNormal { point: Vec2 },
    /// Neither termination bound was met within the step ceiling
    #[error("march did not terminate within {steps} steps (at {point}, travelled {travel})")]
    NonTerminatingMarch { steps: usize, point: Vec2, travel: f32 },
    /// Marching bounds or fan spacing that cannot produce a trace
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    /// A scene description holding a primitive with a negative extent
    #[error("invalid primitive #{index}: {reason}")]
    InvalidPrimitive { index: usize, reason: String },
    /// Settings or scene JSON that failed to parse
    #[error("malformed description: {0}")]
    Json(#[from] serde_json::Error),
    /// Reading or writing a description file failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
