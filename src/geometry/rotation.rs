use nalgebra::{Matrix3, Rotation3};

use crate::geometry::point::Point3D;

/// Immutable 3×3 orientation applied to points by matrix-vector product.
///
/// Elemental rotations are written out explicitly so that the zero entries stay exactly zero; the
/// rasterizer compares projected x coordinates of vertical card edges for equality and relies on
/// a yaw-only rotation leaving `y` untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationMatrix(Rotation3<f64>);

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl RotationMatrix {
    /// No rotation.
    pub fn identity() -> Self {
        Self(Rotation3::identity())
    }

    /// Rotation by `angle` radians around the x axis (pitch).
    pub fn about_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows(Matrix3::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c))
    }

    /// Rotation by `angle` radians around the vertical y axis (yaw).
    pub fn about_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows(Matrix3::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c))
    }

    /// Rotation by `angle` radians around the z axis (roll).
    pub fn about_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows(Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0))
    }

    /// Yaw, then pitch, then roll. Zero angles are skipped so that a pure yaw stays exact.
    pub fn from_yaw_pitch_roll(yaw: f64, pitch: f64, roll: f64) -> Self {
        let mut m = Self::identity();
        if yaw != 0.0 {
            m = m.then(&Self::about_y(yaw));
        }
        if pitch != 0.0 {
            m = m.then(&Self::about_x(pitch));
        }
        if roll != 0.0 {
            m = m.then(&Self::about_z(roll));
        }
        m
    }

    /// The rotation that applies `self` first and `next` second.
    pub fn then(&self, next: &RotationMatrix) -> Self {
        Self(next.0 * self.0)
    }

    /// Rotate a point.
    pub fn apply(&self, p: &Point3D) -> Point3D {
        self.0 * p
    }

    /// Underlying row-major matrix.
    pub fn matrix(&self) -> &Matrix3<f64> {
        self.0.matrix()
    }

    fn from_rows(m: Matrix3<f64>) -> Self {
        Self(Rotation3::from_matrix_unchecked(m))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rotation.rs"]
mod tests;
