//! Surface normals from forward finite differences of the scene field

use glam::Vec2;

use super::field::Scene;
use crate::MarchError;
use crate::consts::NORMAL_EPSILON;

/// Estimate the outward unit normal of the scene field at `point`
///
/// Samples the field three times: at `point`, one epsilon along +x and one
/// along +y. Fails with `DegenerateNormal` when the gradient vanishes, which
/// happens anywhere the field is flat (e.g. deep inside a rectangle).
pub fn estimate_normal(scene: &Scene, point: Vec2) -> Result<Vec2, MarchError> {
    let d0 = scene.distance(point)?;
    let gx = (scene.distance(point + Vec2::new(NORMAL_EPSILON, 0.0))? - d0) / NORMAL_EPSILON;
    let gy = (scene.distance(point + Vec2::new(0.0, NORMAL_EPSILON))? - d0) / NORMAL_EPSILON;

    Vec2::new(gx, gy)
        .try_normalize()
        .ok_or(MarchError::DegenerateNormal { point })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Primitive;
    use std::f32::consts::TAU;

    #[test]
    fn test_circle_normals_point_radially() {
        let center = Vec2::new(300.0, 300.0);
        let scene = Scene::new(vec![Primitive::circle(center, 50.0)]);

        for i in 0..24 {
            let theta = i as f32 / 24.0 * TAU;
            let radial = Vec2::new(theta.cos(), theta.sin());
            let p = center + radial * 50.5;
            let n = estimate_normal(&scene, p).unwrap();
            assert!((n.length() - 1.0).abs() < 1e-4);
            assert!(n.dot(radial) > 0.99, "angle {theta}: normal {n}");
        }
    }

    #[test]
    fn test_rect_face_normal() {
        let scene = Scene::new(vec![Primitive::rect(
            Vec2::new(100.0, 100.0),
            Vec2::new(50.0, 80.0),
        )]);
        // Just east of the right face
        let n = estimate_normal(&scene, Vec2::new(150.5, 140.0)).unwrap();
        assert!(n.dot(Vec2::X) > 0.99);
        // Just above the top face (y grows downward on the canvas)
        let n = estimate_normal(&scene, Vec2::new(125.0, 99.5)).unwrap();
        assert!(n.dot(Vec2::NEG_Y) > 0.99);
    }

    #[test]
    fn test_flat_interior_is_degenerate() {
        let scene = Scene::new(vec![Primitive::rect(Vec2::ZERO, Vec2::new(100.0, 100.0))]);
        let err = estimate_normal(&scene, Vec2::new(50.0, 50.0)).unwrap_err();
        assert!(matches!(err, MarchError::DegenerateNormal { point } if point == Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn test_empty_scene_propagates() {
        assert!(matches!(
            estimate_normal(&Scene::default(), Vec2::ZERO),
            Err(MarchError::EmptyScene)
        ));
    }
}
