// CPU stand-in for the GPU pipeline.
//
// The vertex stage multiplies each model-space vertex by the frame matrix, exactly like a
// shader doing `u_transform * vec3(pos, 1.0)`. The result is in clip space, `[-1, 1]` on
// both axes with +y up, which is then mapped onto the image with +y down.

use crate::im::RGBAIm;
use crate::mat3::Mat3;
use crate::mesh::{self, Mesh, Rgba8};
use crate::scene::{compute_frame, SceneParams};
use crate::v2::Vec2;

pub const BACKGROUND: Rgba8 = [242, 242, 242, 255];

/// Maps a clip-space point onto pixel coordinates of a `w` x `h` image.
#[inline]
pub fn clip_to_pixel(p: Vec2, w: f32, h: f32) -> Vec2 {
    Vec2::new((p.x + 1.0) * 0.5 * w, (1.0 - p.y) * 0.5 * h)
}

#[inline]
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Fills one pixel-space triangle, sampling at pixel centers. Either winding is accepted;
/// degenerate and non-finite triangles draw nothing.
pub fn fill_triangle(im: &mut RGBAIm, a: Vec2, b: Vec2, c: Vec2, color: Rgba8) {
    let area = edge(a, b, c);
    if area == 0.0 || !area.is_finite() {
        return;
    }
    let sign = area.signum();

    let min_x = a.x.min(b.x).min(c.x).floor().max(0.0) as usize;
    let min_y = a.y.min(b.y).min(c.y).floor().max(0.0) as usize;
    let max_x = (a.x.max(b.x).max(c.x).ceil().max(0.0) as usize).min(im.w);
    let max_y = (a.y.max(b.y).max(c.y).ceil().max(0.0) as usize).min(im.h);

    for y in min_y..max_y {
        for x in min_x..max_x {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let inside = edge(a, b, p) * sign >= 0.0
                && edge(b, c, p) * sign >= 0.0
                && edge(c, a, p) * sign >= 0.0;
            if inside {
                for ch in 0..4 {
                    unsafe {
                        *im.get_unchecked_mut(x, y, ch) = color[ch];
                    }
                }
            }
        }
    }
}

/// Runs every vertex of `mesh` through `xform` and rasterizes the resulting triangles.
pub fn draw_mesh(im: &mut RGBAIm, mesh: &Mesh, xform: &Mat3) {
    let (w, h) = (im.w as f32, im.h as f32);
    let to_px = |p: Vec2| clip_to_pixel(xform.transform_point2(p), w, h);
    for (a, b, c, color) in mesh.triangles() {
        fill_triangle(im, to_px(a), to_px(b), to_px(c), color);
    }
}

/// Draws one frame: background, pivot marker, then the face on top.
pub fn render_frame(params: &SceneParams, w: usize, h: usize) -> RGBAIm {
    let frame = compute_frame(params);
    log::debug!("render {w}x{h} pivot={:?} face={:?}", frame.pivot, frame.face);

    let mut im = RGBAIm::new(w, h);
    im.fill_px(BACKGROUND);
    draw_mesh(&mut im, &mesh::pivot_marker(), &frame.pivot);
    draw_mesh(&mut im, &mesh::smiley_face(), &frame.face);
    im
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{BLACK, GREY, YELLOW};
    use crate::test_helpers::{rgba_at, rgba_to_ascii, scene};
    use std::f32::consts::PI;

    fn unit_square(half: f32, color: Rgba8) -> Mesh {
        let mut m = Mesh::default();
        let (a, b) = (Vec2::new(-half, -half), Vec2::new(half, -half));
        let (c, d) = (Vec2::new(half, half), Vec2::new(-half, half));
        m.push_triangle(a, b, c, color);
        m.push_triangle(a, c, d, color);
        m
    }

    #[test]
    fn clip_corners_map_to_image_corners() {
        assert_eq!(clip_to_pixel(Vec2::new(-1.0, 1.0), 80.0, 60.0), Vec2::new(0.0, 0.0));
        assert_eq!(clip_to_pixel(Vec2::new(1.0, -1.0), 80.0, 60.0), Vec2::new(80.0, 60.0));
        assert_eq!(clip_to_pixel(Vec2::ZERO, 80.0, 60.0), Vec2::new(40.0, 30.0));
    }

    #[test]
    fn translated_square_lands_where_the_matrix_says() {
        let mut im = RGBAIm::new(8, 8);
        im.fill_px(BACKGROUND);
        let xform = Mat3::translation(Vec2::new(-0.25, 0.25));
        draw_mesh(&mut im, &unit_square(0.25, BLACK), &xform);

        let ascii = rgba_to_ascii(&im, &[(BACKGROUND, '.'), (BLACK, '#')]);
        let expected = "\
........
........
..##....
..##....
........
........
........
........
";
        assert_eq!(ascii, expected);
    }

    #[test]
    fn winding_does_not_matter() {
        let mut cw = RGBAIm::new(6, 6);
        let mut ccw = RGBAIm::new(6, 6);
        let (a, b, c) = (Vec2::new(0.0, 0.0), Vec2::new(6.0, 0.0), Vec2::new(0.0, 6.0));
        fill_triangle(&mut cw, a, b, c, YELLOW);
        fill_triangle(&mut ccw, a, c, b, YELLOW);
        assert_eq!(cw.arr, ccw.arr);
        assert_eq!(rgba_at(&cw, 0, 0), YELLOW);
        assert_eq!(rgba_at(&cw, 5, 5), [0, 0, 0, 0]);
    }

    #[test]
    fn degenerate_and_offscreen_triangles_are_skipped() {
        let mut im = RGBAIm::new(4, 4);
        let p = Vec2::new(1.0, 1.0);
        fill_triangle(&mut im, p, p, Vec2::new(3.0, 3.0), GREY);
        fill_triangle(&mut im, Vec2::new(-9.0, -9.0), Vec2::new(-5.0, -9.0), Vec2::new(-9.0, -5.0), GREY);
        fill_triangle(&mut im, Vec2::new(f32::NAN, 0.0), Vec2::new(4.0, 0.0), Vec2::new(0.0, 4.0), GREY);
        assert!(im.arr.iter().all(|&v| v == 0));
    }

    #[test]
    fn default_frame_shows_face_and_pivot() {
        let im = render_frame(&SceneParams::default(), 200, 100);
        assert_eq!(rgba_at(&im, 0, 0), BACKGROUND);
        // Face center at clip (0.3, 0), pivot at clip (-0.3, 0).
        assert_eq!(rgba_at(&im, 130, 50), YELLOW);
        assert_eq!(rgba_at(&im, 70, 50), GREY);
    }

    #[test]
    fn half_turn_moves_face_to_the_other_side_of_the_pivot() {
        // Face center at clip (0.3, 0) swings around (-0.3, 0) to (-0.9, 0).
        let im = render_frame(&scene((-0.3, 0.0), (0.3, 0.0), PI), 200, 100);
        assert_eq!(rgba_at(&im, 10, 50), YELLOW);
        assert_eq!(rgba_at(&im, 130, 50), BACKGROUND);
    }
}
