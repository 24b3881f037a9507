//! 3x3 homogeneous matrix for 2-D affine transforms.
//!
//! # Convention
//!
//! Stored as three columns, the last of which carries translation:
//!
//! ```text
//! | x_axis.x  y_axis.x  t_axis.x |   | x |
//! | x_axis.y  y_axis.y  t_axis.y | * | y |
//! | x_axis.z  y_axis.z  t_axis.z |   | w |
//! ```
//!
//! `a * b` applies `b` first, then `a`.
use std::fmt;
use std::ops::Mul;

use crate::vector::{Vec2, Vec3};

/// A 3x3 matrix over column vectors.
///
/// Equality is exact per component; there is no tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    pub x_axis: Vec3,
    pub y_axis: Vec3,
    /// Translation column for affine matrices.
    pub t_axis: Vec3,
}

impl Mat3 {
    pub const ZERO: Self = Self::from_cols(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);

    pub const IDENTITY: Self = Self::from_cols(
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    );

    /// Builds a matrix from its columns. No affine bottom row is enforced.
    #[inline]
    pub const fn from_cols(x_axis: Vec3, y_axis: Vec3, t_axis: Vec3) -> Self {
        Self {
            x_axis,
            y_axis,
            t_axis,
        }
    }

    /// Builds a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self::from_cols(
            Vec3::new(rows[0][0], rows[1][0], rows[2][0]),
            Vec3::new(rows[0][1], rows[1][1], rows[2][1]),
            Vec3::new(rows[0][2], rows[1][2], rows[2][2]),
        )
    }

    #[inline]
    pub fn row0(&self) -> Vec3 {
        Vec3::new(self.x_axis.x, self.y_axis.x, self.t_axis.x)
    }

    #[inline]
    pub fn row1(&self) -> Vec3 {
        Vec3::new(self.x_axis.y, self.y_axis.y, self.t_axis.y)
    }

    #[inline]
    pub fn row2(&self) -> Vec3 {
        Vec3::new(self.x_axis.z, self.y_axis.z, self.t_axis.z)
    }

    /// Returns row `i`. Panics if `i > 2`.
    pub fn row(&self, i: usize) -> Vec3 {
        match i {
            0 => self.row0(),
            1 => self.row1(),
            2 => self.row2(),
            _ => panic!("row index {} out of range for Mat3", i),
        }
    }

    /// Returns column `i`. Panics if `i > 2`.
    pub fn col(&self, i: usize) -> Vec3 {
        match i {
            0 => self.x_axis,
            1 => self.y_axis,
            2 => self.t_axis,
            _ => panic!("column index {} out of range for Mat3", i),
        }
    }

    /// Translation by `(dx, dy)`.
    pub fn translation(dx: f32, dy: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.t_axis.x = dx;
        m.t_axis.y = dy;
        m
    }

    /// Non-uniform scale about the origin.
    pub fn scale(sx: f32, sy: f32) -> Self {
        let mut m = Self::ZERO;
        m.x_axis.x = sx;
        m.y_axis.y = sy;
        m.t_axis.z = 1.0;
        m
    }

    /// Counter-clockwise rotation about the origin. The angle is in degrees and
    /// is not range-reduced.
    ///
    /// Both basis columns are re-normalized after evaluation so accumulated
    /// trig error never leaves a slightly scaling rotation.
    pub fn rotation(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let mut m = Self::ZERO;
        m.x_axis = Vec3::new(cos, sin, 0.0).unitized();
        m.y_axis = Vec3::new(-sin, cos, 0.0).unitized();
        m.t_axis.z = 1.0;
        m
    }

    /// Shear with independent factors: `x' = x + ky * y`, `y' = y + kx * x`.
    pub fn shear(kx: f32, ky: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.x_axis.y = kx;
        m.y_axis.x = ky;
        m
    }

    /// Mirror across the y axis (`flip_x`) and/or the x axis (`flip_y`).
    pub fn reflection(flip_x: bool, flip_y: bool) -> Self {
        let mut m = Self::IDENTITY;
        if flip_x {
            m.x_axis.x = -1.0;
        }
        if flip_y {
            m.y_axis.y = -1.0;
        }
        m
    }

    /// Row-by-column product `self * rhs`.
    pub fn mul_mat(&self, rhs: &Self) -> Self {
        let (r0, r1, r2) = (self.row0(), self.row1(), self.row2());
        let column = |c: Vec3| Vec3::new(r0.dot(c), r1.dot(c), r2.dot(c));
        Self::from_cols(column(rhs.x_axis), column(rhs.y_axis), column(rhs.t_axis))
    }

    /// Multiplies a homogeneous vector by every row and drops the `w` result.
    #[inline]
    pub fn mul_vec3(&self, v: Vec3) -> Vec2 {
        Vec2::new(self.row0().dot(v), self.row1().dot(v))
    }

    /// Transforms a point (`w = 1`, translation applies).
    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        self.mul_vec3(p.extend(1.0))
    }

    /// Transforms a direction (`w = 0`, translation ignored).
    #[inline]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        self.mul_vec3(v.extend(0.0))
    }

    /// Exact per-component comparison, same as `==`.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Returns true if the bottom row is exactly `(0, 0, 1)`.
    pub fn is_affine(&self) -> bool {
        self.row2() == Vec3::new(0.0, 0.0, 1.0)
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Mat3 * Vec2, treated as a point
impl Mul<Vec2> for Mat3 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.transform_point(rhs)
    }
}

impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..3 {
            let r = self.row(i);
            writeln!(f, "[ {}, {}, {} ]", r.x, r.y, r.z)?;
        }
        Ok(())
    }
}

impl From<Mat3> for nalgebra::Matrix3<f32> {
    fn from(m: Mat3) -> Self {
        nalgebra::Matrix3::from_columns(&[
            nalgebra::Vector3::from(m.x_axis),
            nalgebra::Vector3::from(m.y_axis),
            nalgebra::Vector3::from(m.t_axis),
        ])
    }
}

impl From<nalgebra::Matrix3<f32>> for Mat3 {
    fn from(m: nalgebra::Matrix3<f32>) -> Self {
        Mat3::from_cols(
            m.column(0).into_owned().into(),
            m.column(1).into_owned().into(),
            m.column(2).into_owned().into(),
        )
    }
}
