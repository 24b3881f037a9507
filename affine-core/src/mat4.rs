//! 4x4 homogeneous matrix for 3-D transforms and orthographic projection.
//!
//! Same column convention as [`crate::Mat3`]: `w_axis` carries translation and
//! `a * b` applies `b` first.
use std::fmt;
use std::ops::Mul;

use crate::projection::OrthographicBounds;
use crate::vector::{Vec3, Vec4};

/// Principal axis selector for [`Mat4::rotation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A 4x4 matrix over column vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub x_axis: Vec4,
    pub y_axis: Vec4,
    pub z_axis: Vec4,
    pub w_axis: Vec4,
}

impl Mat4 {
    pub const ZERO: Self = Self::from_cols(Vec4::ZERO, Vec4::ZERO, Vec4::ZERO, Vec4::ZERO);

    pub const IDENTITY: Self = Self::from_cols(
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    );

    #[inline]
    pub const fn from_cols(x_axis: Vec4, y_axis: Vec4, z_axis: Vec4, w_axis: Vec4) -> Self {
        Self {
            x_axis,
            y_axis,
            z_axis,
            w_axis,
        }
    }

    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self::from_cols(
            Vec4::new(rows[0][0], rows[1][0], rows[2][0], rows[3][0]),
            Vec4::new(rows[0][1], rows[1][1], rows[2][1], rows[3][1]),
            Vec4::new(rows[0][2], rows[1][2], rows[2][2], rows[3][2]),
            Vec4::new(rows[0][3], rows[1][3], rows[2][3], rows[3][3]),
        )
    }

    /// Returns row `i`. Panics if `i > 3`.
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::new(self.x_axis[i], self.y_axis[i], self.z_axis[i], self.w_axis[i])
    }

    /// Returns column `i`. Panics if `i > 3`.
    pub fn col(&self, i: usize) -> Vec4 {
        match i {
            0 => self.x_axis,
            1 => self.y_axis,
            2 => self.z_axis,
            3 => self.w_axis,
            _ => panic!("column index {} out of range for Mat4", i),
        }
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.w_axis.x = x;
        m.w_axis.y = y;
        m.w_axis.z = z;
        m
    }

    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.x_axis.x = x;
        m.y_axis.y = y;
        m.z_axis.z = z;
        m
    }

    /// Rotation about a principal axis by `degrees`.
    ///
    /// Only the 2x2 block orthogonal to `axis` differs from identity.
    pub fn rotation(axis: Axis, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let mut m = Self::IDENTITY;
        match axis {
            Axis::X => {
                m.y_axis.y = cos;
                m.y_axis.z = sin;
                m.z_axis.y = -sin;
                m.z_axis.z = cos;
            }
            Axis::Y => {
                m.x_axis.x = cos;
                m.x_axis.z = -sin;
                m.z_axis.x = sin;
                m.z_axis.z = cos;
            }
            Axis::Z => {
                m.x_axis.x = cos;
                m.x_axis.y = sin;
                m.y_axis.x = -sin;
                m.y_axis.y = cos;
            }
        }
        m
    }

    /// The canonical orthographic matrix mapping `bounds` onto the `[-1, 1]`
    /// cube. Zero-width bounds divide by zero and yield Inf/NaN.
    pub fn orthographic_core(bounds: &OrthographicBounds) -> Self {
        let OrthographicBounds {
            near,
            far,
            left,
            right,
            top,
            bottom,
        } = *bounds;
        let (r_m_l, t_m_b, f_m_n) = (right - left, top - bottom, far - near);
        Self::from_cols(
            Vec4::new(2.0 / r_m_l, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 / t_m_b, 0.0, 0.0),
            Vec4::new(0.0, 0.0, -2.0 / f_m_n, 0.0),
            Vec4::new(
                -((right + left) / r_m_l),
                -((top + bottom) / t_m_b),
                -((far + near) / f_m_n),
                1.0,
            ),
        )
    }

    /// Orthographic projection placed by `position` and `orientation`
    /// (degrees about X, Y and Z):
    ///
    /// ```text
    /// T(position) * Rx * Ry * Rz * orthographic_core(bounds)
    /// ```
    pub fn orthographic(bounds: &OrthographicBounds, position: Vec3, orientation: Vec3) -> Self {
        Self::translation(position.x, position.y, position.z)
            * Self::rotation(Axis::X, orientation.x)
            * Self::rotation(Axis::Y, orientation.y)
            * Self::rotation(Axis::Z, orientation.z)
            * Self::orthographic_core(bounds)
    }

    /// Row-by-column product `self * rhs`.
    pub fn mul_mat(&self, rhs: &Self) -> Self {
        let rows = [self.row(0), self.row(1), self.row(2), self.row(3)];
        let column = |c: Vec4| {
            Vec4::new(rows[0].dot(c), rows[1].dot(c), rows[2].dot(c), rows[3].dot(c))
        };
        Self::from_cols(
            column(rhs.x_axis),
            column(rhs.y_axis),
            column(rhs.z_axis),
            column(rhs.w_axis),
        )
    }

    #[inline]
    pub fn mul_vec4(&self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }

    /// Transforms a point with `w = 1` and drops the resulting `w`.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.mul_vec4(p.extend(1.0)).truncate()
    }

    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    pub fn is_finite(&self) -> bool {
        self.x_axis.is_finite()
            && self.y_axis.is_finite()
            && self.z_axis.is_finite()
            && self.w_axis.is_finite()
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.mul_vec4(rhs)
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..4 {
            let r = self.row(i);
            writeln!(f, "[ {}, {}, {}, {} ]", r.x, r.y, r.z, r.w)?;
        }
        Ok(())
    }
}

impl From<Mat4> for nalgebra::Matrix4<f32> {
    fn from(m: Mat4) -> Self {
        nalgebra::Matrix4::from_columns(&[
            nalgebra::Vector4::from(m.x_axis),
            nalgebra::Vector4::from(m.y_axis),
            nalgebra::Vector4::from(m.z_axis),
            nalgebra::Vector4::from(m.w_axis),
        ])
    }
}

impl From<nalgebra::Matrix4<f32>> for Mat4 {
    fn from(m: nalgebra::Matrix4<f32>) -> Self {
        Mat4::from_cols(
            m.column(0).into_owned().into(),
            m.column(1).into_owned().into(),
            m.column(2).into_owned().into(),
            m.column(3).into_owned().into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Matrix4, Vector3};

    fn counting() -> Mat4 {
        Mat4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ])
    }

    #[test]
    fn test_rows_and_cols() {
        let m = counting();
        assert_eq!(m.row(0), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(m.row(3), Vec4::new(13.0, 14.0, 15.0, 16.0));
        assert_eq!(m.col(1), Vec4::new(2.0, 6.0, 10.0, 14.0));
        assert_eq!(m.w_axis, Vec4::new(4.0, 8.0, 12.0, 16.0));
    }

    #[test]
    fn test_identity_is_neutral() {
        let m = counting();
        assert_eq!(Mat4::IDENTITY * m, m);
        assert_eq!(m * Mat4::IDENTITY, m);
    }

    #[test]
    fn test_product_matches_nalgebra() {
        let a = counting();
        let b = Mat4::translation(1.0, -2.0, 3.0) * Mat4::scale(2.0, 3.0, 4.0);
        let expected = Matrix4::from(a) * Matrix4::from(b);
        assert_eq!(Matrix4::from(a * b), expected);
    }

    #[test]
    fn test_translation_and_scale() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Mat4::translation(1.0, 1.0, -1.0).transform_point(p), Vec3::new(2.0, 3.0, 2.0));
        assert_eq!(Mat4::scale(2.0, 3.0, 4.0).transform_point(p), Vec3::new(2.0, 6.0, 12.0));
        assert_eq!(
            Mat4::translation(5.0, 5.0, 5.0) * Vec4::new(1.0, 1.0, 1.0, 0.0),
            Vec4::new(1.0, 1.0, 1.0, 0.0)
        );
    }

    #[test]
    fn test_axis_rotations_match_nalgebra() {
        for (axis, unit) in [
            (Axis::X, Vector3::x()),
            (Axis::Y, Vector3::y()),
            (Axis::Z, Vector3::z()),
        ] {
            let degrees = 35.0f32;
            let ours: Matrix4<f32> = Mat4::rotation(axis, degrees).into();
            let reference = Matrix4::new_rotation(unit * degrees.to_radians());
            assert_relative_eq!(ours, reference, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_orthographic_core_matches_nalgebra() {
        let bounds = OrthographicBounds {
            near: 0.5,
            far: 50.0,
            left: -4.0,
            right: 2.0,
            top: 3.0,
            bottom: -1.0,
        };
        let ours: Matrix4<f32> = Mat4::orthographic_core(&bounds).into();
        let reference = Matrix4::new_orthographic(-4.0, 2.0, -1.0, 3.0, 0.5, 50.0);
        assert_relative_eq!(ours, reference, epsilon = 1e-6);
    }

    #[test]
    fn test_orthographic_symmetric_is_closed_form() {
        let bounds = OrthographicBounds {
            near: 0.1,
            far: 100.0,
            left: -1.0,
            right: 1.0,
            top: 1.0,
            bottom: -1.0,
        };
        let m = Mat4::orthographic(&bounds, Vec3::ZERO, Vec3::ZERO);
        let expected = Mat4::from_cols(
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, -2.0 / (100.0f32 - 0.1), 0.0),
            Vec4::new(0.0, 0.0, -((100.0f32 + 0.1) / (100.0f32 - 0.1)), 1.0),
        );
        assert_eq!(m, expected);
    }

    #[test]
    fn test_orthographic_composition_order() {
        let bounds = OrthographicBounds::default();
        let position = Vec3::new(1.0, 2.0, 3.0);
        let orientation = Vec3::new(10.0, 20.0, 30.0);
        let expected = Mat4::translation(1.0, 2.0, 3.0)
            * (Mat4::rotation(Axis::X, 10.0)
                * (Mat4::rotation(Axis::Y, 20.0)
                    * (Mat4::rotation(Axis::Z, 30.0) * Mat4::orthographic_core(&bounds))));
        let ours: Matrix4<f32> = Mat4::orthographic(&bounds, position, orientation).into();
        assert_relative_eq!(ours, Matrix4::from(expected), epsilon = 1e-5);
    }

    #[test]
    fn test_degenerate_bounds_are_not_finite() {
        let bounds = OrthographicBounds {
            left: 1.0,
            right: 1.0,
            ..OrthographicBounds::default()
        };
        assert!(!Mat4::orthographic_core(&bounds).is_finite());
    }

    #[test]
    fn test_display_has_four_rows() {
        assert_eq!(Mat4::IDENTITY.to_string().lines().count(), 4);
    }
}
