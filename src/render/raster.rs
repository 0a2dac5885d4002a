//! Column-wise texture mapping of picture cards.
//!
//! A projected card is a trapezoid with vertical left and right edges. Each screen column between
//! those edges samples one source image column (nearest neighbour) and stretches it over a height
//! interpolated linearly between the two edges. The interpolation is affine, not projective, so
//! strongly turned cards show a slight texture drift compared to true perspective mapping.

use image::{
    RgbaImage,
    imageops::{self, FilterType},
};

use crate::{
    config::model::{Configuration, RasterStrategy},
    foundation::{
        core::{Rgba8, SurfaceSize},
        error::{CardflowError, CardflowResult},
        math::{lerp, round_i64, scale_u8},
    },
    geometry::point::Point3D,
    render::{
        composite::over,
        shading::{ShadingPolicy, depth_intensity},
        surface::{Surface, blit_over},
    },
    shape::hit::ProjectedQuad,
};

/// Largest intermediate raster edge; bigger cards are almost on the viewer plane.
pub(crate) const MAX_RASTER_DIM: i64 = 16_384;

/// Largest intermediate raster area in pixels (64 MiB of RGBA8).
pub(crate) const MAX_RASTER_AREA: i64 = 1 << 24;

/// Tolerance when checking that projected card edges are vertical.
const EDGE_X_TOLERANCE: f64 = 1e-6;

/// Projected card corners, named after the corners of the card image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardCorners {
    /// Image corner `(0, 0)`.
    pub top_left: Point3D,
    /// Image corner `(w, 0)`.
    pub top_right: Point3D,
    /// Image corner `(w, h)`.
    pub bottom_right: Point3D,
    /// Image corner `(0, h)`.
    pub bottom_left: Point3D,
}

impl CardCorners {
    /// Name the projected corners of a rectangle built by
    /// [`crate::ShapeGeometry::rectangle`], whose local corner order is
    /// `(max x, max y)`, `(min x, max y)`, `(min x, min y)`, `(max x, min y)`.
    pub fn from_rectangle_order(proj: &[Point3D; 4]) -> Self {
        Self {
            bottom_right: proj[0],
            bottom_left: proj[1],
            top_left: proj[2],
            top_right: proj[3],
        }
    }

    /// Canonical quad for hit-testing.
    pub fn quad(&self) -> ProjectedQuad {
        ProjectedQuad([
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ])
    }

    /// The card lies entirely left or entirely right of the surface.
    pub fn is_off_surface(&self, size: SurfaceSize) -> bool {
        self.bottom_right.x < 0.0 || self.bottom_left.x >= size.width_f64()
    }

    /// Both vertical card edges must stay vertical after projection; that only holds while the
    /// camera yaws and neither rolls nor pitches.
    pub fn check_vertical_edges(&self) -> CardflowResult<()> {
        let left = (self.top_left.x - self.bottom_left.x).abs();
        let right = (self.top_right.x - self.bottom_right.x).abs();
        if left > EDGE_X_TOLERANCE || right > EDGE_X_TOLERANCE {
            return Err(CardflowError::precondition(format!(
                "projected card edges are not vertical (left dx {left}, right dx {right}); \
                 only yaw camera rotation is supported"
            )));
        }
        Ok(())
    }
}

/// Screen-space layout of a visible card, ready for column rasterization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardLayout {
    /// Left edge in surface pixels.
    pub x0: f64,
    /// Top of the card's bounding box in surface pixels.
    pub y0: f64,
    /// Width in whole columns.
    pub width: i64,
    /// Height of the card plus the reflection area below it.
    pub height: i64,
    /// Vertical offset between the top corners.
    pub tilt: f64,
    /// The right edge starts higher than the left one.
    pub mirror: bool,
    /// Length of the left edge.
    pub height_left: f64,
    /// Length of the right edge.
    pub height_right: f64,
    /// Focal depth of the left edge; positive behind the focal plane.
    pub z_left: f64,
    /// Focal depth of the right edge; positive behind the focal plane.
    pub z_right: f64,
}

/// One destination column of a card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Column {
    /// Normalized position across the card, in `[0, 1)`.
    pub d: f64,
    /// Top of the column relative to [`CardLayout::y0`].
    pub top: f64,
    /// Column height.
    pub height: f64,
    /// Depth behind the focal plane, never negative.
    pub depth: f64,
}

impl CardLayout {
    /// Derive the layout, or `None` for a card with no area on screen.
    pub fn from_corners(c: &CardCorners) -> CardflowResult<Option<Self>> {
        let x0 = c.top_left.x;
        let x1 = c.top_right.x;
        let y0 = c.top_left.y.min(c.top_right.y);
        let y1 = c.bottom_left.y.max(c.bottom_right.y);

        let width = round_i64(x1 - x0);
        let height = round_i64(y1 - y0).saturating_mul(2);
        if width <= 0 || height <= 0 {
            return Ok(None);
        }
        if width > MAX_RASTER_DIM
            || height > MAX_RASTER_DIM
            || width.saturating_mul(height) > MAX_RASTER_AREA
        {
            return Err(CardflowError::precondition(format!(
                "card raster too large: {width}x{height} (max edge {MAX_RASTER_DIM}, \
                 max area {MAX_RASTER_AREA}); keep cards away from the viewer plane"
            )));
        }

        let tilt = c.top_right.y - c.top_left.y;
        Ok(Some(Self {
            x0,
            y0,
            width,
            height,
            tilt: tilt.abs(),
            mirror: tilt < 0.0,
            height_left: c.bottom_left.y - c.top_left.y,
            height_right: c.bottom_right.y - c.top_right.y,
            z_left: c.top_left.z,
            z_right: c.top_right.z,
        }))
    }

    /// Geometry of destination column `x`.
    pub fn column(&self, x: i64) -> Column {
        let d = x as f64 / self.width as f64;
        Column {
            d,
            top: self.tilt * if self.mirror { 1.0 - d } else { d },
            height: lerp(self.height_left, self.height_right, d),
            depth: lerp(self.z_left, self.z_right, d).max(0.0),
        }
    }

    /// Surface position of the layout's top-left pixel.
    pub fn origin(&self) -> (i64, i64) {
        (round_i64(self.x0), round_i64(self.y0))
    }
}

/// Paints one visible picture card onto a surface.
pub trait Rasterizer {
    /// Draw `image` into the area described by `layout`.
    fn paint(
        &self,
        surface: &mut dyn Surface,
        image: &RgbaImage,
        layout: &CardLayout,
        active: bool,
        config: &Configuration,
    );
}

/// Rasterizer for a configured strategy.
pub fn rasterizer_for(strategy: RasterStrategy) -> &'static dyn Rasterizer {
    static EXACT: ExactRasterizer = ExactRasterizer;
    static COLUMN_BLIT: ColumnBlitRasterizer = ColumnBlitRasterizer;
    match strategy {
        RasterStrategy::Exact => &EXACT,
        RasterStrategy::ColumnBlit => &COLUMN_BLIT,
    }
}

/// Clamp `v` into `[lo, hi]`, or `None` when the range is empty.
fn constrain(v: i64, lo: i64, hi: i64) -> Option<i64> {
    (lo <= hi).then(|| v.clamp(lo, hi))
}

/// Whether pixel `(x, y)` of a column spanning rows `ys..ym` lies within `border` of a card edge.
fn on_border(x: i64, y: i64, width: i64, ys: i64, ym: i64, border: i64) -> bool {
    x < border
        || x > (width - 1).saturating_sub(border)
        || y < ys.saturating_add(border)
        || y > (ym - 1).saturating_sub(border)
}

fn source_pixel(image: &RgbaImage, xo: i64, yo: i64) -> Rgba8 {
    let (w, h) = image.dimensions();
    let x = xo.clamp(0, i64::from(w) - 1) as u32;
    let y = yo.clamp(0, i64::from(h) - 1) as u32;
    Rgba8::from(*image.get_pixel(x, y))
}

/// Per-pixel rasterizer: shading, reflection and border are exact for every column.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactRasterizer;

impl ExactRasterizer {
    /// Render the card and its reflection into a fresh buffer of `layout.width x layout.height`.
    pub fn rasterize(
        &self,
        image: &RgbaImage,
        layout: &CardLayout,
        active: bool,
        config: &Configuration,
    ) -> RgbaImage {
        let mut pic = RgbaImage::new(layout.width as u32, layout.height as u32);
        let (img_w, img_h) = image.dimensions();
        if img_w == 0 || img_h == 0 {
            return pic;
        }
        let policy = ShadingPolicy::from_config(config);
        let border = config.active_shape_border_width;
        let w = layout.width;

        for x in 0..w {
            let col = layout.column(x);
            let xo = round_i64(col.d * f64::from(img_w));
            let intensity = depth_intensity(col.depth, config.darkening_factor);
            let ys = round_i64(col.top);
            let ym = round_i64(col.top + col.height);

            for yi in ys..ym {
                let y = yi as f64;
                let yr = (y - col.top) / col.height;
                let yo = round_i64(yr * f64::from(img_h));
                let mut px = policy.set_intensity(source_pixel(image, xo, yo), intensity);

                if config.reflection_opacity > 0.0 {
                    let ry = round_i64(
                        col.top + 2.0 * col.height
                            - (y - col.top)
                            - config.picture_reflection_overlap as f64,
                    );
                    if let Some(ry) = constrain(ry, ym, layout.height - 1) {
                        let faded = policy.set_intensity(px, yr * config.reflection_opacity);
                        pic.set_pixel(x, ry, faded);
                    }
                }

                if active && on_border(x, yi, w, ys, ym, border) {
                    px = if config.darken_border {
                        policy.set_intensity(config.active_shape_border_color, intensity)
                    } else {
                        config.active_shape_border_color
                    };
                }

                if let Some(yd) = constrain(yi, 0, ym - 1) {
                    pic.set_pixel(x, yd, px);
                }
            }
        }
        pic
    }
}

impl Rasterizer for ExactRasterizer {
    fn paint(
        &self,
        surface: &mut dyn Surface,
        image: &RgbaImage,
        layout: &CardLayout,
        active: bool,
        config: &Configuration,
    ) {
        let pic = self.rasterize(image, layout, active, config);
        let (ox, oy) = layout.origin();
        blit_over(surface, &pic, ox, oy);
    }
}

/// Coarse rasterizer: nearest-neighbour scaled copies of each source column, shaded by one flat
/// translucent overlay per card.
///
/// Shading uses the card's mean intensity instead of a per-column value and always fades towards
/// `background_color`; the reflection uses a flat `reflection_opacity / 2`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColumnBlitRasterizer;

impl ColumnBlitRasterizer {
    fn mean_intensity(layout: &CardLayout, config: &Configuration) -> f64 {
        let sum: f64 = (0..layout.width)
            .map(|x| depth_intensity(layout.column(x).depth, config.darkening_factor))
            .sum();
        sum / layout.width as f64
    }

    /// Source column `xo` resized to `span` rows.
    fn scaled_column(image: &RgbaImage, xo: i64, span: u32) -> RgbaImage {
        let (img_w, img_h) = image.dimensions();
        let xo = xo.clamp(0, i64::from(img_w) - 1) as u32;
        let column = imageops::crop_imm(image, xo, 0, 1, img_h).to_image();
        imageops::resize(&column, 1, span, FilterType::Nearest)
    }
}

impl Rasterizer for ColumnBlitRasterizer {
    fn paint(
        &self,
        surface: &mut dyn Surface,
        image: &RgbaImage,
        layout: &CardLayout,
        active: bool,
        config: &Configuration,
    ) {
        let (img_w, img_h) = image.dimensions();
        if img_w == 0 || img_h == 0 {
            return;
        }
        let (ox, oy) = layout.origin();
        let shade = 1.0 - Self::mean_intensity(layout, config);
        let overlay = config.background_color.with_alpha(scale_u8(255, shade));
        let border_px = over(config.active_shape_border_color, overlay);
        let reflection_alpha = config.reflection_opacity / 2.0;
        let border = config.active_shape_border_width;
        let overlap = config.picture_reflection_overlap;

        for x in 0..layout.width {
            let col = layout.column(x);
            let xo = round_i64(col.d * f64::from(img_w));
            let ys = round_i64(col.top);
            let ym = round_i64(col.top + col.height);
            if ym <= ys {
                continue;
            }
            let span = (ym - ys) as u32;
            let scaled = Self::scaled_column(image, xo, span);

            for (row, src) in (ys..ym).zip(scaled.pixels().map(|p| Rgba8::from(*p))) {
                // Overlay folded in before the single blend; `over` is associative.
                let px = if active && on_border(x, row, layout.width, ys, ym, border) {
                    border_px
                } else {
                    over(src, overlay)
                };
                surface.blend_pixel(ox + x, oy + row, px);

                if reflection_alpha > 0.0 {
                    let ry = (2 * ym - row).saturating_sub(overlap);
                    if ry >= ym && ry < layout.height {
                        let a = scale_u8(src.a, reflection_alpha);
                        surface.blend_pixel(ox + x, oy + ry, src.with_alpha(a));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
