use crate::{
    foundation::{
        core::Rgba8,
        error::{CardflowError, CardflowResult},
    },
    render::raster::MAX_RASTER_DIM,
};

/// Which rasterizer paints picture cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RasterStrategy {
    /// Per-pixel compositing into an intermediate buffer, blitted once.
    #[default]
    Exact,
    /// Scaled column blits plus one flat translucent shading overlay per card.
    ColumnBlit,
}

/// Tunables consumed by card painting.
///
/// Every field has a default, so partial JSON objects deserialize.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Surface clear colour; also the blend target of the opaque shading policy.
    pub background_color: Rgba8,
    /// Shade by scaling alpha instead of blending towards `background_color`.
    pub enable_alpha_transparency: bool,
    /// Intensity lost per unit of depth behind the focal plane.
    pub darkening_factor: f64,
    /// Opacity of the reflection where it touches the card, in `[0, 1]`. `0` disables it.
    pub reflection_opacity: f64,
    /// Pixels the reflection is pulled up under the card. `1` mirrors seamlessly, `0` leaves a
    /// one-pixel gap.
    pub picture_reflection_overlap: i64,
    /// Border colour of the active card.
    pub active_shape_border_color: Rgba8,
    /// Border thickness of the active card, in pixels.
    pub active_shape_border_width: i64,
    /// Apply depth shading to the border as well.
    pub darken_border: bool,
    /// Picture rasterizer.
    pub raster_strategy: RasterStrategy,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            background_color: Rgba8::BLACK,
            enable_alpha_transparency: false,
            darkening_factor: 0.5,
            reflection_opacity: 0.5,
            picture_reflection_overlap: 1,
            active_shape_border_color: Rgba8::opaque(255, 255, 0),
            active_shape_border_width: 3,
            darken_border: true,
            raster_strategy: RasterStrategy::Exact,
        }
    }
}

impl Configuration {
    /// Reject values the painters cannot use.
    pub fn validate(&self) -> CardflowResult<()> {
        if !self.darkening_factor.is_finite() || self.darkening_factor < 0.0 {
            return Err(CardflowError::validation(
                "darkening_factor must be finite and >= 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.reflection_opacity) {
            return Err(CardflowError::validation(
                "reflection_opacity must be in [0, 1]",
            ));
        }
        if !(0..=MAX_RASTER_DIM).contains(&self.picture_reflection_overlap) {
            return Err(CardflowError::validation(format!(
                "picture_reflection_overlap must be in [0, {MAX_RASTER_DIM}]"
            )));
        }
        if !(0..=MAX_RASTER_DIM).contains(&self.active_shape_border_width) {
            return Err(CardflowError::validation(format!(
                "active_shape_border_width must be in [0, {MAX_RASTER_DIM}]"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
