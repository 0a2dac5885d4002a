pub(crate) mod hit;
pub(crate) mod picture;
pub(crate) mod rectangle;

use crate::{
    config::model::Configuration,
    foundation::{
        core::{Point, Rgba8, SurfaceSize},
        error::CardflowResult,
    },
    geometry::{
        point::{Point3D, PointOps},
        rotation::RotationMatrix,
    },
    render::surface::Surface,
    scene::projection::Scene,
    shape::{hit::RenderState, picture::Picture, rectangle::Rectangle},
};

/// Placement and outline of a planar card in world space.
///
/// `points` are in the card's local frame and their order is load-bearing: the rasterizer names
/// projected corners by index (see [`crate::CardCorners::from_rectangle_order`]).
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeGeometry {
    /// Local-frame corners.
    pub points: [Point3D; 4],
    /// World translation applied after rotation.
    pub location: Point3D,
    /// World orientation.
    pub rotation: RotationMatrix,
    /// Fill colour.
    pub color: Rgba8,
}

impl ShapeGeometry {
    /// Axis-aligned rectangle spanned by two opposite corners, lying in the plane `z = a.z`.
    pub fn rectangle(a: Point3D, b: Point3D, color: Rgba8) -> Self {
        Self {
            points: rectangle_points(a, b),
            location: Point3D::origin(),
            rotation: RotationMatrix::identity(),
            color,
        }
    }

    /// Replace the corners with the rectangle spanned by `a` and `b`.
    pub fn set_coordinates(&mut self, a: Point3D, b: Point3D) {
        self.points = rectangle_points(a, b);
    }

    /// Corners after the card's own rotation and translation.
    pub fn world_points(&self) -> [Point3D; 4] {
        self.points.map(|p| {
            let mut pt = p;
            pt.rotate(&self.rotation);
            pt.translate(&self.location);
            pt
        })
    }

    /// Project the world corners. Each projected corner carries its [`Scene::focal_depth`] as `z`,
    /// which is the depth used for shading.
    pub fn project(&self, scene: &Scene, size: SurfaceSize) -> [Point3D; 4] {
        self.world_points().map(|pt| {
            let mut proj = scene.project(&pt, size);
            proj.z = scene.focal_depth(proj.z);
            proj
        })
    }
}

fn rectangle_points(a: Point3D, b: Point3D) -> [Point3D; 4] {
    let (x1, x2) = (a.x.min(b.x), a.x.max(b.x));
    let (y1, y2) = (a.y.min(b.y), a.y.max(b.y));
    let z = a.z;
    [
        Point3D::new(x2, y2, z),
        Point3D::new(x1, y2, z),
        Point3D::new(x1, y1, z),
        Point3D::new(x2, y1, z),
    ]
}

/// Capability interface shared by every card kind.
pub trait Shape {
    /// Placement and outline.
    fn geometry(&self) -> &ShapeGeometry;

    /// Mutable placement, for the animation driver.
    fn geometry_mut(&mut self) -> &mut ShapeGeometry;

    /// Render cache from the last paint.
    fn render_state(&self) -> &RenderState;

    /// Project and draw the card. Clears the render cache when the card is not visible.
    fn paint(
        &mut self,
        surface: &mut dyn Surface,
        scene: &Scene,
        active: bool,
        config: &Configuration,
    ) -> CardflowResult<()>;

    /// Local-frame corners.
    fn points(&self) -> &[Point3D; 4] {
        &self.geometry().points
    }

    /// World translation.
    fn location(&self) -> &Point3D {
        &self.geometry().location
    }

    /// World orientation.
    fn rotation_matrix(&self) -> &RotationMatrix {
        &self.geometry().rotation
    }

    /// Whether a surface point lies inside the quad of the last paint.
    fn contains(&self, point: Point) -> bool {
        self.render_state().contains(point)
    }
}

/// Any card the frame pipeline can paint.
#[derive(Clone, Debug)]
pub enum Card {
    /// Flat colour card.
    Rectangle(Rectangle),
    /// Image-backed card.
    Picture(Picture),
}

impl Card {
    fn as_shape(&self) -> &dyn Shape {
        match self {
            Self::Rectangle(r) => r,
            Self::Picture(p) => p,
        }
    }

    fn as_shape_mut(&mut self) -> &mut dyn Shape {
        match self {
            Self::Rectangle(r) => r,
            Self::Picture(p) => p,
        }
    }
}

impl Shape for Card {
    fn geometry(&self) -> &ShapeGeometry {
        self.as_shape().geometry()
    }

    fn geometry_mut(&mut self) -> &mut ShapeGeometry {
        self.as_shape_mut().geometry_mut()
    }

    fn render_state(&self) -> &RenderState {
        self.as_shape().render_state()
    }

    fn paint(
        &mut self,
        surface: &mut dyn Surface,
        scene: &Scene,
        active: bool,
        config: &Configuration,
    ) -> CardflowResult<()> {
        self.as_shape_mut().paint(surface, scene, active, config)
    }
}

impl From<Rectangle> for Card {
    fn from(r: Rectangle) -> Self {
        Self::Rectangle(r)
    }
}

impl From<Picture> for Card {
    fn from(p: Picture) -> Self {
        Self::Picture(p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/mod.rs"]
mod tests;
