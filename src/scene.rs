use crate::mat3::Mat3;
use crate::v2::Vec2;
use serde::Deserialize;

/// The pivot marker: where it sits and how big it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PivotParams {
    pub x: f32,
    pub y: f32,
    pub scale: Vec2,
}

impl Default for PivotParams {
    fn default() -> Self {
        Self {
            x: -0.3,
            y: 0.0,
            scale: Vec2::ONE,
        }
    }
}

impl PivotParams {
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// The face: its own scale and offset, plus a rotation about the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FaceParams {
    pub translation: Vec2,
    /// Radians.
    pub rotation: f32,
    pub scale: Vec2,
}

impl Default for FaceParams {
    fn default() -> Self {
        Self {
            translation: Vec2::new(0.3, 0.0),
            rotation: 0.0,
            scale: Vec2::ONE,
        }
    }
}

/// Everything a frame depends on. Owned by the caller and edited between frames.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SceneParams {
    pub pivot: PivotParams,
    pub face: FaceParams,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct FrameMatrices {
    pub pivot: Mat3,
    pub face: Mat3,
}

/// Marker: scale about its own origin, then move to the pivot position.
pub fn pivot_matrix(pivot: &PivotParams) -> Mat3 {
    Mat3::translation(pivot.position()) * Mat3::scale(pivot.scale)
}

/// Face: scale, translate, then swing around the pivot by `face.rotation`.
pub fn face_matrix(params: &SceneParams) -> Mat3 {
    let face = &params.face;
    Mat3::rotate_around_point(face.rotation, params.pivot.position())
        * Mat3::translation(face.translation)
        * Mat3::scale(face.scale)
}

pub fn compute_frame(params: &SceneParams) -> FrameMatrices {
    FrameMatrices {
        pivot: pivot_matrix(&params.pivot),
        face: face_matrix(params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{assert_mat3_near, assert_v2_near, scene, TOL};
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn default_frame_places_face_and_marker() {
        let frame = compute_frame(&SceneParams::default());
        assert_v2_near(frame.face.transform_point2(Vec2::ZERO), Vec2::new(0.3, 0.0), TOL);
        assert_v2_near(frame.pivot.transform_point2(Vec2::ZERO), Vec2::new(-0.3, 0.0), TOL);
    }

    #[test]
    fn pivot_marker_scales_about_its_center() {
        let mut params = SceneParams::default();
        params.pivot.scale = Vec2::new(2.0, 3.0);
        let m = pivot_matrix(&params.pivot);
        assert_v2_near(m.transform_point2(Vec2::new(0.03, 0.0)), Vec2::new(-0.24, 0.0), TOL);
        assert_v2_near(m.transform_point2(Vec2::new(0.0, 0.03)), Vec2::new(-0.3, 0.09), TOL);
    }

    #[test]
    fn face_swings_around_the_pivot() {
        // Face center starts 0.6 to the right of the pivot.
        let params = scene((-0.3, 0.0), (0.3, 0.0), FRAC_PI_2);
        let m = face_matrix(&params);
        assert_v2_near(m.transform_point2(Vec2::ZERO), Vec2::new(-0.3, 0.6), TOL);

        let params = scene((-0.3, 0.0), (0.3, 0.0), PI);
        let m = face_matrix(&params);
        assert_v2_near(m.transform_point2(Vec2::ZERO), Vec2::new(-0.9, 0.0), TOL);
    }

    #[test]
    fn face_distance_to_pivot_is_preserved() {
        let params = scene((0.1, -0.2), (0.5, 0.4), 2.3);
        let m = face_matrix(&params);
        let c = m.transform_point2(Vec2::ZERO);
        let d = ((c.x - 0.1).powi(2) + (c.y + 0.2).powi(2)).sqrt();
        let d0 = ((0.5_f32 - 0.1).powi(2) + (0.4_f32 + 0.2).powi(2)).sqrt();
        assert!((d - d0).abs() <= TOL, "d={d} d0={d0}");
    }

    #[test]
    fn zero_rotation_needs_no_special_case() {
        let mut params = scene((0.7, 0.2), (0.1, -0.4), 0.0);
        params.face.scale = Vec2::new(1.5, 0.5);
        let expected = Mat3::translation(params.face.translation) * Mat3::scale(params.face.scale);
        assert_mat3_near(&face_matrix(&params), &expected, TOL);
    }

    #[test]
    fn face_scale_applies_before_translation() {
        let mut params = scene((0.0, 0.0), (0.5, 0.0), 0.0);
        params.face.scale = Vec2::new(2.0, 2.0);
        let m = face_matrix(&params);
        assert_v2_near(m.transform_point2(Vec2::new(0.1, 0.1)), Vec2::new(0.7, 0.2), TOL);
    }
}
