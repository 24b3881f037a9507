//! Translation, rotation and scale parameter holders.
//!
//! Each holder is plain data mutated by its owner between frames and builds its
//! elementary [`Mat3`] on demand. Nothing is cached, so a matrix always reflects
//! the parameters at the moment it is requested.
use serde::{Deserialize, Serialize};

use crate::mat3::Mat3;
use crate::vector::Vec2;

/// Translation offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translation {
    pub offset: Vec2,
}

impl Translation {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            offset: Vec2::new(x, y),
        }
    }

    pub fn matrix(&self) -> Mat3 {
        Mat3::translation(self.offset.x, self.offset.y)
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.offset = self.offset + Vec2::new(dx, dy);
    }
}

/// Orientation in degrees.
///
/// Any value may be stored; it is read back wrapped into `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub fn new(degrees: f32) -> Self {
        Self { degrees }
    }

    /// The stored angle wrapped into `[0, 360)`.
    pub fn wrapped(&self) -> f32 {
        let wrapped = self.degrees.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    }

    pub fn matrix(&self) -> Mat3 {
        Mat3::rotation(self.wrapped())
    }

    /// Rotate by a delta (in degrees), keeping the stored angle wrapped
    pub fn rotate(&mut self, delta: f32) {
        self.degrees = Rotation::new(self.degrees + delta).wrapped();
    }
}

/// Per-axis scale factors, `(1, 1)` by default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scale {
    pub factors: Vec2,
}

impl Scale {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            factors: Vec2::new(x, y),
        }
    }

    pub fn uniform(s: f32) -> Self {
        Self::new(s, s)
    }

    pub fn matrix(&self) -> Mat3 {
        Mat3::scale(self.factors.x, self.factors.y)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self { factors: Vec2::ONE }
    }
}

/// A translation, rotation and scale triple owned by one transformable entity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Trs {
    pub translation: Translation,
    pub rotation: Rotation,
    pub scale: Scale,
}

impl Trs {
    pub fn new(translation: Translation, rotation: Rotation, scale: Scale) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// `Translation * Rotation * Scale`: scale is applied first, translation last.
    pub fn model_matrix(&self) -> Mat3 {
        self.translation.matrix() * self.rotation.matrix() * self.scale.matrix()
    }
}
