use crate::v2::Vec2;
use serde::Serialize;
use std::fmt;
use std::ops::Mul;

/// A 3x3 homogeneous matrix describing a 2D affine transform.
///
/// Storage is column-major: the element at row `r`, column `c` lives at `m[c * 3 + r]`.
/// This is the layout a `mat3` shader uniform expects, so [`Mat3::to_cols_array`] can be
/// uploaded as-is to a vertex stage computing `transformed = m * vec3(pos, 1.0)`.
///
/// Points are column vectors. `a * b` applied to a point performs `b` first, then `a`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Mat3 {
    m: [f32; 9],
}

impl Mat3 {
    pub const fn identity() -> Self {
        Self {
            m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        }
    }

    pub const fn from_cols_array(m: [f32; 9]) -> Self {
        Self { m }
    }

    /// Diagonal `(factors.x, factors.y, 1)`. Zero factors give a singular matrix.
    pub fn scale(factors: Vec2) -> Self {
        Self {
            m: [factors.x, 0.0, 0.0, 0.0, factors.y, 0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Identity with `offset` in the third column.
    pub fn translation(offset: Vec2) -> Self {
        Self {
            m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, offset.x, offset.y, 1.0],
        }
    }

    /// Rotation about the origin. Positive angles turn counter-clockwise with +y pointing up.
    pub fn rotation(angle_rad: f32) -> Self {
        let (s, c) = angle_rad.sin_cos();
        Self {
            m: [c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Matrix product `a * b`.
    ///
    /// `out[col*3 + row] = sum_k a[k*3 + row] * b[col*3 + k]`
    pub fn multiply(a: Mat3, b: Mat3) -> Mat3 {
        let a = &a.m;
        let b = &b.m;
        let mut out = [0.0_f32; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = a[row] * b[col * 3]
                    + a[3 + row] * b[col * 3 + 1]
                    + a[6 + row] * b[col * 3 + 2];
            }
        }
        Mat3 { m: out }
    }

    /// Rotates by `angle_rad` about `pivot` instead of the origin.
    ///
    /// A point is moved so the pivot sits on the origin, rotated, then moved back.
    pub fn rotate_around_point(angle_rad: f32, pivot: Vec2) -> Self {
        let to_origin = Mat3::translation(-pivot);
        let rotate = Mat3::rotation(angle_rad);
        let back = Mat3::translation(pivot);
        Mat3::multiply(back, Mat3::multiply(rotate, to_origin))
    }

    /// Applies this transform to a 2D point (implicitly using homogeneous `w=1`).
    #[inline]
    pub fn transform_point2(&self, p: Vec2) -> Vec2 {
        let m = &self.m;
        Vec2::new(
            m[0] * p.x + m[3] * p.y + m[6],
            m[1] * p.x + m[4] * p.y + m[7],
        )
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.m[col * 3 + row]
    }

    #[inline]
    pub fn as_cols_array(&self) -> &[f32; 9] {
        &self.m
    }

    #[inline]
    pub fn to_cols_array(self) -> [f32; 9] {
        self.m
    }

    /// Copies the column-major elements into the first 9 slots of `out`.
    ///
    /// Panics if `out` holds fewer than 9 elements.
    #[inline]
    pub fn write_cols_to(&self, out: &mut [f32]) {
        out[..9].copy_from_slice(&self.m);
    }

    /// Element-wise comparison. The tolerance grows with the magnitude of the elements.
    pub fn approx_eq(&self, other: &Mat3, tol: f32) -> bool {
        self.m.iter().zip(other.m.iter()).all(|(&a, &b)| {
            let scale = 1.0_f32.max(a.abs()).max(b.abs());
            (a - b).abs() <= tol * scale
        })
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Prints the matrix row by row, the way it is written on paper.
impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            writeln!(
                f,
                "[{:9.4} {:9.4} {:9.4} ]",
                self.at(row, 0),
                self.at(row, 1),
                self.at(row, 2)
            )?;
        }
        Ok(())
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    #[inline]
    fn mul(self, rhs: Mat3) -> Mat3 {
        Mat3::multiply(self, rhs)
    }
}
