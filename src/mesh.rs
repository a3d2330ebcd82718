use crate::v2::Vec2;
use std::f32::consts::{PI, TAU};

pub type Rgba8 = [u8; 4];

pub const GREY: Rgba8 = [100, 100, 100, 255];
pub const YELLOW: Rgba8 = [255, 255, 0, 255];
pub const BLACK: Rgba8 = [0, 0, 0, 255];

/// A triangle list in model space. Every 3 consecutive vertices form one triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vec2>,
    pub colors: Vec<Rgba8>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba8) {
        self.positions.extend_from_slice(&[a, b, c]);
        self.colors.extend_from_slice(&[color; 3]);
    }

    pub fn append(&mut self, other: Mesh) {
        self.positions.extend(other.positions);
        self.colors.extend(other.colors);
    }

    /// Iterates `(a, b, c, color)` per triangle, taking the color of the first vertex.
    pub fn triangles(&self) -> impl Iterator<Item = (Vec2, Vec2, Vec2, Rgba8)> + '_ {
        self.positions
            .chunks_exact(3)
            .zip(self.colors.chunks_exact(3))
            .map(|(p, c)| (p[0], p[1], p[2], c[0]))
    }
}

/// A filled disc made of `segments` independent triangles sharing the center.
pub fn circle(center: Vec2, radius: f32, segments: usize, color: Rgba8) -> Mesh {
    let mut mesh = Mesh::default();
    for i in 0..segments {
        let a1 = (i as f32 / segments as f32) * TAU;
        let a2 = ((i + 1) as f32 / segments as f32) * TAU;
        let p1 = Vec2::new(center.x + a1.cos() * radius, center.y + a1.sin() * radius);
        let p2 = Vec2::new(center.x + a2.cos() * radius, center.y + a2.sin() * radius);
        mesh.push_triangle(center, p1, p2, color);
    }
    mesh
}

/// Small grey diamond centered on the origin, 0.06 across.
pub fn pivot_marker() -> Mesh {
    const R: f32 = 0.03;
    let top = Vec2::new(0.0, R);
    let left = Vec2::new(-R, 0.0);
    let right = Vec2::new(R, 0.0);
    let bottom = Vec2::new(0.0, -R);

    let mut mesh = Mesh::default();
    for (a, b) in [(top, left), (left, bottom), (bottom, right), (right, top)] {
        mesh.push_triangle(Vec2::ZERO, a, b, GREY);
    }
    mesh
}

const FACE_RADIUS: f32 = 0.4;
const FACE_SEGMENTS: usize = 30;
const MOUTH_SEGMENTS: usize = 10;
const MOUTH_RADIUS: f32 = 0.25;
const MOUTH_WIDTH: f32 = 0.05;
const MOUTH_SQUASH: f32 = 0.6;
const MOUTH_DROP: f32 = 0.05;

/// Yellow smiley face of radius 0.4 centered on the origin.
pub fn smiley_face() -> Mesh {
    let mut mesh = circle(Vec2::ZERO, FACE_RADIUS, FACE_SEGMENTS, YELLOW);

    // Eyes
    mesh.push_triangle(
        Vec2::new(-0.15, 0.15),
        Vec2::new(-0.2, 0.05),
        Vec2::new(-0.1, 0.05),
        BLACK,
    );
    mesh.push_triangle(
        Vec2::new(0.15, 0.15),
        Vec2::new(0.1, 0.05),
        Vec2::new(0.2, 0.05),
        BLACK,
    );

    mesh.append(mouth());
    mesh
}

/// Lower half-ring, squashed vertically, two triangles per segment.
fn mouth() -> Mesh {
    let arc = |angle: f32, radius: f32| {
        Vec2::new(
            angle.cos() * radius,
            angle.sin() * radius * MOUTH_SQUASH - MOUTH_DROP,
        )
    };

    let inner = MOUTH_RADIUS - MOUTH_WIDTH;
    let mut mesh = Mesh::default();
    for i in 0..MOUTH_SEGMENTS {
        let a1 = PI + (i as f32 / MOUTH_SEGMENTS as f32) * PI;
        let a2 = PI + ((i + 1) as f32 / MOUTH_SEGMENTS as f32) * PI;

        let o1 = arc(a1, MOUTH_RADIUS);
        let o2 = arc(a2, MOUTH_RADIUS);
        let i1 = arc(a1, inner);
        let i2 = arc(a2, inner);

        mesh.push_triangle(o1, o2, i1, BLACK);
        mesh.push_triangle(o2, i2, i1, BLACK);
    }
    mesh
}
