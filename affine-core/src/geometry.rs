//! Transformable point primitives
use tracing::trace;

use crate::transform::{apply, WorldMatrix};
use crate::trs::Trs;
use crate::vector::Vec2;

/// Something that recomputes its transformed state from a TRS triple.
///
/// The transformed state is always overwritten wholesale, so applying the same
/// parameters twice gives the same result.
pub trait ApplyTransform {
    fn apply_transform(&mut self, trs: &Trs, world: Option<&dyn WorldMatrix>);

    /// Capture the current transformed state as the new reference state
    fn rebase(&mut self);
}

/// A 2D point with a reference position and a transformed position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub reference: Vec2,
    pub transformed: Vec2,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        let reference = Vec2::new(x, y);
        Self {
            reference,
            transformed: reference,
        }
    }
}

impl ApplyTransform for Point {
    fn apply_transform(&mut self, trs: &Trs, world: Option<&dyn WorldMatrix>) {
        self.transformed = apply(trs, world, self.reference);
    }

    fn rebase(&mut self) {
        self.reference = self.transformed;
    }
}

/// A point that also carries a size, scaled by the TRS scale factors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledPoint {
    pub point: Point,
    pub reference_scale: Vec2,
    pub transformed_scale: Vec2,
}

impl ScaledPoint {
    pub fn new(position: Vec2, scale: Vec2) -> Self {
        Self {
            point: Point::new(position.x, position.y),
            reference_scale: scale,
            transformed_scale: scale,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.point.transformed
    }
}

impl ApplyTransform for ScaledPoint {
    fn apply_transform(&mut self, trs: &Trs, world: Option<&dyn WorldMatrix>) {
        self.point.apply_transform(trs, world);
        // Sizes are directions: translation and rotation do not apply
        self.transformed_scale = trs.scale.matrix().transform_vector(self.reference_scale);
    }

    fn rebase(&mut self) {
        self.point.rebase();
        self.reference_scale = self.transformed_scale;
    }
}

/// A set of points sharing one TRS triple
#[derive(Debug, Clone, Default)]
pub struct PointGroup<P> {
    pub trs: Trs,
    pub points: Vec<P>,
}

impl<P: ApplyTransform> PointGroup<P> {
    pub fn new(trs: Trs) -> Self {
        Self {
            trs,
            points: Vec::new(),
        }
    }

    pub fn with_points(trs: Trs, points: Vec<P>) -> Self {
        Self { trs, points }
    }

    pub fn add_point(&mut self, point: P) {
        self.points.push(point);
    }

    /// Recompute every point from the current parameters
    pub fn update(&mut self, world: Option<&dyn WorldMatrix>) {
        trace!(points = self.points.len(), trs = ?self.trs, "updating point group");
        for point in &mut self.points {
            point.apply_transform(&self.trs, world);
        }
    }

    /// Bake the current transformed state into the reference state
    pub fn rebase(&mut self) {
        for point in &mut self.points {
            point.rebase();
        }
    }
}
