use crate::{
    config::model::Configuration,
    foundation::{
        core::{Point, Rgba8},
        error::CardflowResult,
        math::round_i64,
    },
    geometry::point::Point3D,
    render::{raster::CardCorners, surface::Surface},
    scene::projection::Scene,
    shape::{Shape, ShapeGeometry, hit::RenderState},
};

/// Flat, colour-filled card.
#[derive(Clone, Debug)]
pub struct Rectangle {
    geometry: ShapeGeometry,
    state: RenderState,
}

impl Rectangle {
    /// Rectangle spanned by two opposite corners.
    pub fn new(a: Point3D, b: Point3D, color: Rgba8) -> Self {
        Self {
            geometry: ShapeGeometry::rectangle(a, b, color),
            state: RenderState::Hidden,
        }
    }
}

impl Shape for Rectangle {
    fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    fn geometry_mut(&mut self) -> &mut ShapeGeometry {
        &mut self.geometry
    }

    fn render_state(&self) -> &RenderState {
        &self.state
    }

    /// Fills every pixel whose centre falls inside the projected quad.
    fn paint(
        &mut self,
        surface: &mut dyn Surface,
        scene: &Scene,
        _active: bool,
        _config: &Configuration,
    ) -> CardflowResult<()> {
        let size = surface.size();
        let corners = CardCorners::from_rectangle_order(&self.geometry.project(scene, size));
        if corners.is_off_surface(size) {
            self.state = RenderState::Hidden;
            return Ok(());
        }
        let quad = corners.quad();
        let pts = quad.corners();

        let min_x = pts.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = pts.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = pts.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = pts.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        if !(min_x.is_finite() && max_x.is_finite() && min_y.is_finite() && max_y.is_finite()) {
            self.state = RenderState::Hidden;
            return Ok(());
        }

        let x_lo = round_i64(min_x.floor()).max(0);
        let x_hi = round_i64(max_x.ceil()).min(i64::from(size.width));
        let y_lo = round_i64(min_y.floor()).max(0);
        let y_hi = round_i64(max_y.ceil()).min(i64::from(size.height));
        for y in y_lo..y_hi {
            for x in x_lo..x_hi {
                if quad.contains(Point::new(x as f64 + 0.5, y as f64 + 0.5)) {
                    surface.blend_pixel(x, y, self.geometry.color);
                }
            }
        }

        self.state = RenderState::Visible(quad);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/rectangle.rs"]
mod tests;
