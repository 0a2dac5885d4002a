use crate::{foundation::core::Point, geometry::point::Point3D};

/// A card's screen-space quad in canonical order: top-left, top-right, bottom-right,
/// bottom-left of the card image (y grows downward). `z` carries the retained depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedQuad(pub [Point3D; 4]);

impl ProjectedQuad {
    /// Build a quad from 2D screen corners with zero depth.
    pub fn from_xy(corners: [(f64, f64); 4]) -> Self {
        Self(corners.map(|(x, y)| Point3D::new(x, y, 0.0)))
    }

    /// Corners in canonical order.
    pub fn corners(&self) -> &[Point3D; 4] {
        &self.0
    }

    /// Whether `point` lies strictly inside this quad. Only valid for convex quads.
    pub fn contains(&self, point: Point) -> bool {
        quad_contains(&self.0, point)
    }
}

/// Per-card render cache, replaced wholesale on every paint.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RenderState {
    /// Not painted yet, or culled on the last paint.
    #[default]
    Hidden,
    /// Painted on the last frame with this screen quad.
    Visible(ProjectedQuad),
}

impl RenderState {
    /// The cached quad, if the card was visible on its last paint.
    pub fn quad(&self) -> Option<&ProjectedQuad> {
        match self {
            Self::Hidden => None,
            Self::Visible(q) => Some(q),
        }
    }

    /// Hit-test against the cached quad; always false when hidden.
    pub fn contains(&self, point: Point) -> bool {
        self.quad().is_some_and(|q| q.contains(point))
    }
}

/// Half-plane test: every edge must put `point` on the same side as the first edge does.
pub(crate) fn quad_contains(corners: &[Point3D; 4], point: Point) -> bool {
    let n = corners.len();
    let side = edge_side(point, &corners[0], &corners[1]);
    (1..n).all(|i| edge_side(point, &corners[i], &corners[(i + 1) % n]) == side)
}

fn edge_side(point: Point, p1: &Point3D, p2: &Point3D) -> bool {
    let c = (point.y - p1.y) * (p2.x - p1.x) - (point.x - p1.x) * (p2.y - p1.y);
    c < 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/shape/hit.rs"]
mod tests;
