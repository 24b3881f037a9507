//! Affine Core Library - Homogeneous transform matrices
//!
//! This library provides the stateless core for 2D TRS (translation, rotation,
//! scale) transforms over 3x3 matrices and 3D orthographic projection over
//! 4x4 matrices. Every matrix is recomputed from its parameters on request.

pub mod config;
pub mod error;
pub mod geometry;
pub mod mat3;
pub mod mat4;
pub mod projection;
pub mod transform;
pub mod trs;
pub mod vector;

// Re-export commonly used types
pub use config::Config;
pub use error::{BoundsAxis, Error, Result};
pub use geometry::{ApplyTransform, Point, PointGroup, ScaledPoint};
pub use mat3::Mat3;
pub use mat4::{Axis, Mat4};
pub use projection::{OrthographicBounds, ProjectionParams};
pub use transform::{apply, compose, Camera2D, WorldMatrix};
pub use trs::{Rotation, Scale, Translation, Trs};
pub use vector::{Vec2, Vec3, Vec4};
