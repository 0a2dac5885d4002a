use nalgebra::{Point3, Vector3};

use crate::geometry::rotation::RotationMatrix;

/// A point (or displacement) in 3D space.
///
/// Points are plain values: take a copy before mutating one that belongs to a card.
pub type Point3D = Point3<f64>;

/// The small set of point operations the projection pipeline is built from.
pub trait PointOps {
    /// Component-wise difference `self - other`, returned as a point.
    fn subtract(&self, other: &Point3D) -> Point3D;

    /// Rotate in place: `self = m * self`.
    fn rotate(&mut self, m: &RotationMatrix);

    /// Translate in place by the components of `by`.
    fn translate(&mut self, by: &Point3D);
}

impl PointOps for Point3D {
    fn subtract(&self, other: &Point3D) -> Point3D {
        Point3D::from(self.coords - other.coords)
    }

    fn rotate(&mut self, m: &RotationMatrix) {
        *self = m.apply(self);
    }

    fn translate(&mut self, by: &Point3D) {
        *self += Vector3::new(by.x, by.y, by.z);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/point.rs"]
mod tests;
