//! Fixed-size float vectors used as matrix columns and homogeneous points.
//!
//! Narrowing and widening between sizes is always explicit: [`Vec3::truncate`]
//! drops the trailing component and [`Vec2::extend`] appends one chosen by the
//! caller (`1.0` for a point, `0.0` for a direction that ignores translation).
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use crate::error::{Error, Result};

/// A 2-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// A 3-component vector. As a 2-D homogeneous point, `z` is the `w` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A 4-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Implements the elementwise operators, `dot`, `length` and `unitized` for a
/// vector type given its component names.
macro_rules! impl_vector_ops {
    ($ty:ident { $($c:ident),+ }) => {
        impl $ty {
            /// Sum of the elementwise products.
            #[inline]
            pub fn dot(self, rhs: Self) -> f32 {
                0.0 $(+ self.$c * rhs.$c)+
            }

            /// Euclidean norm.
            #[inline]
            pub fn length(self) -> f32 {
                self.dot(self).sqrt()
            }

            /// Returns this vector divided by its length.
            ///
            /// A zero-length vector produces NaN components; use
            /// [`Self::try_unitized`] when the input may be degenerate.
            #[inline]
            pub fn unitized(self) -> Self {
                self / self.length()
            }

            /// Like [`Self::unitized`], but rejects zero-length input.
            pub fn try_unitized(self) -> Result<Self> {
                let length = self.length();
                if length == 0.0 {
                    return Err(Error::ZeroLength);
                }
                Ok(self / length)
            }

            /// Componentwise product.
            #[inline]
            pub fn mul_elem(self, rhs: Self) -> Self {
                Self { $($c: self.$c * rhs.$c),+ }
            }

            /// Returns true if every component is finite.
            #[inline]
            pub fn is_finite(self) -> bool {
                true $(&& self.$c.is_finite())+
            }
        }

        impl Add for $ty {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($c: self.$c + rhs.$c),+ }
            }
        }

        impl Sub for $ty {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($c: self.$c - rhs.$c),+ }
            }
        }

        impl Neg for $ty {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($c: -self.$c),+ }
            }
        }

        impl Mul<f32> for $ty {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self {
                Self { $($c: self.$c * rhs),+ }
            }
        }

        impl Div<f32> for $ty {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f32) -> Self {
                Self { $($c: self.$c / rhs),+ }
            }
        }

        impl Index<usize> for $ty {
            type Output = f32;

            fn index(&self, i: usize) -> &f32 {
                let components = [$(&self.$c),+];
                match components.get(i) {
                    Some(c) => *c,
                    None => panic!(
                        "index {} out of range for {}",
                        i,
                        stringify!($ty)
                    ),
                }
            }
        }
    };
}

impl_vector_ops!(Vec2 { x, y });
impl_vector_ops!(Vec3 { x, y, z });
impl_vector_ops!(Vec4 { x, y, z, w });

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Widens to a [`Vec3`] with the given third component.
    #[inline]
    pub const fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// A 2-D point in homogeneous form, `(x, y, 1)`.
    #[inline]
    pub const fn point(x: f32, y: f32) -> Self {
        Self::new(x, y, 1.0)
    }

    /// Drops `z`.
    #[inline]
    pub const fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Widens to a [`Vec4`] with the given fourth component.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Drops `w`.
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<Vec2> for nalgebra::Vector2<f32> {
    fn from(v: Vec2) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

impl From<nalgebra::Vector2<f32>> for Vec2 {
    fn from(v: nalgebra::Vector2<f32>) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec3> for nalgebra::Vector3<f32> {
    fn from(v: Vec3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Vector3<f32>> for Vec3 {
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec4> for nalgebra::Vector4<f32> {
    fn from(v: Vec4) -> Self {
        nalgebra::Vector4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<nalgebra::Vector4<f32>> for Vec4 {
    fn from(v: nalgebra::Vector4<f32>) -> Self {
        Vec4::new(v.x, v.y, v.z, v.w)
    }
}
