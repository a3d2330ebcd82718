use crate::im::RGBAIm;
use crate::mat3::Mat3;
use crate::scene::SceneParams;
use crate::v2::Vec2;

pub const TOL: f32 = 1e-5;

pub fn assert_mat3_near(actual: &Mat3, expected: &Mat3, tol: f32) {
    assert!(
        actual.approx_eq(expected, tol),
        "matrices differ beyond {tol}:\n  actual   = {:?}\n  expected = {:?}",
        actual.as_cols_array(),
        expected.as_cols_array()
    );
}

pub fn assert_v2_near(actual: Vec2, expected: Vec2, tol: f32) {
    assert!(
        actual.approx_eq(expected, tol),
        "points differ beyond {tol}: actual = {actual:?}, expected = {expected:?}"
    );
}

/// Matrices whose elements are small dyadic fractions, so products are exact in f32.
pub fn dyadic_mats() -> Vec<Mat3> {
    vec![
        Mat3::from_cols_array([0.5, -1.0, 0.0, 2.0, 0.25, 0.0, -3.0, 1.5, 1.0]),
        Mat3::from_cols_array([1.0, 2.0, -0.5, 0.75, -1.25, 3.0, 0.0, 4.0, 2.0]),
        Mat3::from_cols_array([-2.0, 0.0, 1.0, 0.125, 1.0, -0.5, 1.0, 1.0, -1.0]),
        Mat3::translation(Vec2::new(0.5, -0.25)),
        Mat3::scale(Vec2::new(2.0, 0.5)),
    ]
}

pub fn scene(pivot: (f32, f32), translation: (f32, f32), rotation: f32) -> SceneParams {
    let mut params = SceneParams::default();
    params.pivot.x = pivot.0;
    params.pivot.y = pivot.1;
    params.face.translation = Vec2::new(translation.0, translation.1);
    params.face.rotation = rotation;
    params
}

pub fn rgba_at(im: &RGBAIm, x: usize, y: usize) -> [u8; 4] {
    let base = y * im.s + x * 4;
    [im.arr[base], im.arr[base + 1], im.arr[base + 2], im.arr[base + 3]]
}

/// Renders an image as ASCII, one char per pixel, using `legend` to name known colors.
pub fn rgba_to_ascii(im: &RGBAIm, legend: &[([u8; 4], char)]) -> String {
    let mut out = String::new();
    for y in 0..im.h {
        for x in 0..im.w {
            let px = rgba_at(im, x, y);
            let ch = legend
                .iter()
                .find(|(c, _)| *c == px)
                .map(|(_, ch)| *ch)
                .unwrap_or('?');
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
