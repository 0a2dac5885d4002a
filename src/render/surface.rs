use crate::{
    foundation::core::{Rgba8, SurfaceSize},
    render::composite::over,
};

/// Caller-owned pixel target that cards paint into.
///
/// Coordinates outside the surface are ignored by `set_pixel` and read as transparent.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Read one pixel.
    fn get_pixel(&self, x: i64, y: i64) -> Rgba8;

    /// Overwrite one pixel.
    fn set_pixel(&mut self, x: i64, y: i64, color: Rgba8);

    /// Surface dimensions.
    fn size(&self) -> SurfaceSize {
        SurfaceSize {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Source-over one pixel onto the surface.
    fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba8) {
        if !self.in_bounds(x, y) {
            return;
        }
        let dst = self.get_pixel(x, y);
        self.set_pixel(x, y, over(dst, color));
    }

    /// Overwrite every pixel with `color`.
    fn clear(&mut self, color: Rgba8) {
        for y in 0..i64::from(self.height()) {
            for x in 0..i64::from(self.width()) {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Whether `(x, y)` addresses a pixel of this surface.
    fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height())
    }
}

impl Surface for image::RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn get_pixel(&self, x: i64, y: i64) -> Rgba8 {
        match pixel_index(self, x, y) {
            Some((x, y)) => Rgba8::from(*image::RgbaImage::get_pixel(self, x, y)),
            None => Rgba8::TRANSPARENT,
        }
    }

    fn set_pixel(&mut self, x: i64, y: i64, color: Rgba8) {
        if let Some((x, y)) = pixel_index(self, x, y) {
            self.put_pixel(x, y, color.into());
        }
    }
}

fn pixel_index(img: &image::RgbaImage, x: i64, y: i64) -> Option<(u32, u32)> {
    let x = u32::try_from(x).ok()?;
    let y = u32::try_from(y).ok()?;
    let (w, h) = img.dimensions();
    (x < w && y < h).then_some((x, y))
}

/// Composite `src` onto `dst` with its top-left corner at `(x0, y0)`, clipping to `dst`.
pub fn blit_over<S: Surface + ?Sized>(dst: &mut S, src: &image::RgbaImage, x0: i64, y0: i64) {
    let (w, h) = src.dimensions();
    for sy in 0..h {
        for sx in 0..w {
            let px = Rgba8::from(*src.get_pixel(sx, sy));
            dst.blend_pixel(x0 + i64::from(sx), y0 + i64::from(sy), px);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
