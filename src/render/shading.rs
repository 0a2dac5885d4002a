use crate::{
    config::model::Configuration,
    foundation::{
        core::Rgba8,
        math::{clamp01, scale_u8},
    },
};

/// How a pixel is faded by an intensity in `[0, 1]` (1 = untouched).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShadingPolicy {
    /// Scale the alpha channel and keep colour channels.
    ///
    /// Overlapping translucent cards are not composited correctly with this policy.
    AlphaChannel,
    /// Blend every channel towards a known solid background; the result is as opaque as the
    /// inputs. Wrong against anything but that background.
    OpaqueBlend {
        /// Colour that fully shaded pixels turn into.
        background: Rgba8,
    },
}

impl ShadingPolicy {
    /// Select the policy configured by `enable_alpha_transparency`.
    pub fn from_config(config: &Configuration) -> Self {
        if config.enable_alpha_transparency {
            Self::AlphaChannel
        } else {
            Self::OpaqueBlend {
                background: config.background_color,
            }
        }
    }

    /// Apply an intensity, where `1.0` returns `px` and `0.0` fully fades it.
    pub fn set_intensity(&self, px: Rgba8, intensity: f64) -> Rgba8 {
        let f = clamp01(intensity);
        match *self {
            Self::AlphaChannel => px.with_alpha(scale_u8(px.a, f)),
            Self::OpaqueBlend { background } => Rgba8::new(
                blend_channel(px.r, background.r, f),
                blend_channel(px.g, background.g, f),
                blend_channel(px.b, background.b, f),
                blend_channel(px.a, background.a, f),
            ),
        }
    }

    /// Apply a shading amount, where `0.0` returns `px` and `1.0` fully fades it.
    pub fn darken(&self, px: Rgba8, amount: f64) -> Rgba8 {
        self.set_intensity(px, 1.0 - clamp01(amount))
    }
}

fn blend_channel(a: u8, b: u8, f: f64) -> u8 {
    (f64::from(a) * f + f64::from(b) * (1.0 - f))
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Intensity of a card column at `depth` behind the focal plane.
pub fn depth_intensity(depth: f64, darkening_factor: f64) -> f64 {
    clamp01(1.0 - darkening_factor * depth.max(0.0))
}

#[cfg(test)]
#[path = "../../tests/unit/render/shading.rs"]
mod tests;
