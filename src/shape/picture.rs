use std::sync::Arc;

use image::RgbaImage;

use crate::{
    config::model::Configuration,
    foundation::{core::Rgba8, error::CardflowResult},
    geometry::point::Point3D,
    render::{
        raster::{CardCorners, CardLayout, rasterizer_for},
        surface::Surface,
    },
    scene::projection::Scene,
    shape::{Shape, ShapeGeometry, hit::RenderState},
};

/// Image-backed card.
///
/// The image is shared, so cloning a picture is cheap.
#[derive(Clone, Debug)]
pub struct Picture {
    geometry: ShapeGeometry,
    image: Arc<RgbaImage>,
    state: RenderState,
    label: Option<String>,
}

impl Picture {
    /// Picture whose corners match the image size in pixels, `(0, 0, 0)` to `(w, h, 0)`.
    pub fn new(image: impl Into<Arc<RgbaImage>>) -> Self {
        let image = image.into();
        let (w, h) = image.dimensions();
        Self {
            geometry: ShapeGeometry::rectangle(
                Point3D::origin(),
                Point3D::new(f64::from(w), f64::from(h), 0.0),
                Rgba8::BLACK,
            ),
            image,
            state: RenderState::Hidden,
            label: None,
        }
    }

    /// Attach a human-readable name, e.g. the source path.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Resize to `width x height` world units centred on the local origin.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.geometry.set_coordinates(
            Point3D::new(-width / 2.0, -height / 2.0, 0.0),
            Point3D::new(width / 2.0, height / 2.0, 0.0),
        );
        self
    }

    /// Source image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Source image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Source image.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Label given by [`Picture::with_label`].
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Shape for Picture {
    fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    fn geometry_mut(&mut self) -> &mut ShapeGeometry {
        &mut self.geometry
    }

    fn render_state(&self) -> &RenderState {
        &self.state
    }

    fn paint(
        &mut self,
        surface: &mut dyn Surface,
        scene: &Scene,
        active: bool,
        config: &Configuration,
    ) -> CardflowResult<()> {
        let size = surface.size();
        let corners = CardCorners::from_rectangle_order(&self.geometry.project(scene, size));
        if corners.is_off_surface(size) {
            tracing::trace!(label = ?self.label, "picture off surface");
            self.state = RenderState::Hidden;
            return Ok(());
        }

        let layout = match corners
            .check_vertical_edges()
            .and_then(|()| CardLayout::from_corners(&corners))
        {
            Ok(Some(layout)) => layout,
            Ok(None) => {
                self.state = RenderState::Hidden;
                return Ok(());
            }
            Err(err) => {
                self.state = RenderState::Hidden;
                return Err(err);
            }
        };

        self.state = RenderState::Visible(corners.quad());
        rasterizer_for(config.raster_strategy).paint(surface, &self.image, &layout, active, config);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/picture.rs"]
mod tests;
