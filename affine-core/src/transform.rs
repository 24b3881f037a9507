//! Model/world composition for 2D points
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::mat3::Mat3;
use crate::trs::{Rotation, Scale, Translation, Trs};
use crate::vector::Vec2;

/// Source of the world (camera) matrix that model transforms are
/// pre-multiplied by.
///
/// Passed explicitly to the composer; there is no global camera.
pub trait WorldMatrix {
    fn world_matrix(&self) -> Mat3;
}

impl WorldMatrix for Mat3 {
    fn world_matrix(&self) -> Mat3 {
        *self
    }
}

/// Compose the full matrix for a TRS triple: `W * T * R * S` with a world
/// provider, `T * R * S` without
pub fn compose(trs: &Trs, world: Option<&dyn WorldMatrix>) -> Mat3 {
    let model = trs.model_matrix();
    match world {
        Some(world) => world.world_matrix() * model,
        None => model,
    }
}

/// Transform a reference position (as a point, `w = 1`)
pub fn apply(trs: &Trs, world: Option<&dyn WorldMatrix>, reference: Vec2) -> Vec2 {
    let transformed = compose(trs, world) * reference;
    trace!(
        ?reference,
        ?transformed,
        with_world = world.is_some(),
        "applied transform"
    );
    transformed
}

/// A 2D view whose world matrix pans, zooms and rotates everything it sees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera2D {
    pub position: Vec2,
    pub zoom: f32,
    /// Degrees
    pub rotation: f32,
}

impl Camera2D {
    pub fn new(position: Vec2, zoom: f32, rotation: f32) -> Self {
        Self {
            position,
            zoom,
            rotation,
        }
    }

    /// Move the camera by a delta
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.position = self.position + Vec2::new(dx, dy);
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 1.0, 0.0)
    }
}

impl WorldMatrix for Camera2D {
    /// `Translation(-position) * Scale(zoom) * Rotation(rotation)`
    fn world_matrix(&self) -> Mat3 {
        Translation::new(-self.position.x, -self.position.y).matrix()
            * Scale::uniform(self.zoom).matrix()
            * Rotation::new(self.rotation).matrix()
    }
}
