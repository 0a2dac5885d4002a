use crate::{
    foundation::core::SurfaceSize,
    geometry::{
        point::{Point3D, PointOps},
        rotation::RotationMatrix,
    },
};

/// How the square projection window is fitted into a non-square surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionFit {
    /// Window side is the longer surface edge; the shorter axis is cropped symmetrically.
    #[default]
    Cover,
    /// Window side is the shorter surface edge; the longer axis gets equal margins.
    Contain,
}

/// Square region of the surface that normalized coordinates `[-1, 1]` map onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionWindow {
    /// Edge length of the square window, in pixels.
    pub side: f64,
    /// Left edge of the window relative to the surface.
    pub x_offset: f64,
    /// Top edge of the window relative to the surface.
    pub y_offset: f64,
}

impl ProjectionWindow {
    /// Compute the centred window for a surface.
    pub fn fit(size: SurfaceSize, fit: ProjectionFit) -> Self {
        let (w, h) = (size.width_f64(), size.height_f64());
        let side = match fit {
            ProjectionFit::Cover => w.max(h),
            ProjectionFit::Contain => w.min(h),
        };
        Self {
            side,
            x_offset: (w - side) / 2.0,
            y_offset: (h - side) / 2.0,
        }
    }

    /// Map a normalized coordinate pair into surface pixels.
    pub fn to_surface(&self, x_ndc: f64, y_ndc: f64) -> (f64, f64) {
        (
            self.x_offset + scale(x_ndc, self.side),
            self.y_offset + scale(y_ndc, self.side),
        )
    }
}

fn scale(coord: f64, side: f64) -> f64 {
    (coord + 1.0) / 2.0 * side
}

/// Camera pose plus the viewer (eye) offset used as the perspective reference.
///
/// `viewer.z` acts as the focal distance and `viewer.x`/`viewer.y` as a lateral eye offset.
/// Geometry must stay strictly off the plane `camera z == 0`; projecting such a point divides by
/// zero and yields non-finite coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// World-space camera origin.
    pub camera_location: Point3D,
    /// Camera orientation.
    pub camera_rotation: RotationMatrix,
    /// Eye offset and focal distance.
    pub viewer: Point3D,
    /// Window fitting policy.
    pub fit: ProjectionFit,
}

impl Scene {
    /// Scene with the default [`ProjectionFit::Cover`] window.
    pub fn new(camera_location: Point3D, camera_rotation: RotationMatrix, viewer: Point3D) -> Self {
        Self {
            camera_location,
            camera_rotation,
            viewer,
            fit: ProjectionFit::Cover,
        }
    }

    /// Replace the window fitting policy.
    pub fn with_fit(mut self, fit: ProjectionFit) -> Self {
        self.fit = fit;
        self
    }

    /// Window used by [`Scene::project`] for a surface of the given size.
    pub fn window(&self, size: SurfaceSize) -> ProjectionWindow {
        ProjectionWindow::fit(size, self.fit)
    }

    /// Transform a world-space point into camera space.
    pub fn to_camera(&self, point: &Point3D) -> Point3D {
        let mut d = point.subtract(&self.camera_location);
        d.rotate(&self.camera_rotation);
        d
    }

    /// Project a world-space point to `(screen_x, screen_y, camera_depth)`.
    pub fn project(&self, point: &Point3D, size: SurfaceSize) -> Point3D {
        let d = self.to_camera(point);
        let e = &self.viewer;
        let x_ndc = (d.x - e.x) * e.z / d.z;
        let y_ndc = (d.y - e.y) * e.z / d.z;
        let (sx, sy) = self.window(size).to_surface(x_ndc, y_ndc);
        Point3D::new(sx, sy, d.z)
    }

    /// Distance of a camera-space depth behind the focal plane, measured along the viewing
    /// direction. The focal plane lies `|viewer.z|` in front of the camera; points nearer than it
    /// come out negative.
    pub fn focal_depth(&self, camera_z: f64) -> f64 {
        camera_z * self.viewer.z.signum() - self.viewer.z.abs()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/projection.rs"]
mod tests;
