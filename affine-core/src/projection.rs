//! Orthographic camera parameters and projection utilities
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BoundsAxis, Error, Result};
use crate::mat4::Mat4;
use crate::vector::Vec3;

/// The six planes of an orthographic view volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrthographicBounds {
    pub near: f32,
    pub far: f32,
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl OrthographicBounds {
    pub fn new(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Self {
            near,
            far,
            left,
            right,
            top,
            bottom,
        }
    }

    /// Symmetric bounds of the given half extents around the view axis
    pub fn symmetric(half_width: f32, half_height: f32, near: f32, far: f32) -> Self {
        Self::new(-half_width, half_width, -half_height, half_height, near, far)
    }

    /// Reject bound pairs of zero width, which would divide by zero
    pub fn validate(&self) -> Result<()> {
        let pairs = [
            (BoundsAxis::Horizontal, self.left, self.right),
            (BoundsAxis::Vertical, self.bottom, self.top),
            (BoundsAxis::Depth, self.near, self.far),
        ];
        for (axis, min, max) in pairs {
            if max == min {
                debug!(%axis, min, max, "rejecting degenerate orthographic bounds");
                return Err(Error::DegenerateBounds { axis, min, max });
            }
        }
        Ok(())
    }
}

impl Default for OrthographicBounds {
    fn default() -> Self {
        Self::symmetric(1.0, 1.0, 0.1, 100.0)
    }
}

/// Camera configuration for an orthographic projection.
///
/// Owned by the caller and read on every query; the matrix is rebuilt each
/// time rather than cached.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionParams {
    pub bounds: OrthographicBounds,
    pub position: Vec3,
    /// Degrees about the X, Y and Z axes
    pub orientation: Vec3,
}

impl ProjectionParams {
    pub fn new(bounds: OrthographicBounds) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// Create the projection matrix without validating the bounds
    pub fn matrix(&self) -> Mat4 {
        Mat4::orthographic(&self.bounds, self.position, self.orientation)
    }

    /// Create the projection matrix, failing on degenerate bounds
    pub fn try_matrix(&self) -> Result<Mat4> {
        self.bounds.validate()?;
        Ok(self.matrix())
    }

    /// Project a 3D point through the current parameters
    pub fn project(&self, point: Vec3) -> Vec3 {
        self.matrix().transform_point(point)
    }

    /// Move the camera by a delta
    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.position = self.position + Vec3::new(dx, dy, dz);
    }

    /// Rotate by delta amounts (in degrees)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.orientation = self.orientation + Vec3::new(dx, dy, dz);
    }
}
