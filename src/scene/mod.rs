//! Implicit scene description
//!
//! Everything here is a pure function of immutable data:
//! - Primitives report their own boundary distance
//! - The scene folds them with a smooth minimum
//! - Normals come from finite differences of that field

pub mod field;
pub mod normal;
pub mod primitive;

pub use field::{Scene, smooth_min};
pub use normal::estimate_normal;
pub use primitive::{Primitive, sd_circle, ud_rect};
