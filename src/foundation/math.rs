/// Clamp scalar value to normalized range `[0, 1]`.
#[inline]
pub(crate) fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Round half away from zero and saturate into `i64`.
#[inline]
pub(crate) fn round_i64(x: f64) -> i64 {
    // `as` saturates and maps NaN to 0.
    x.round() as i64
}

/// Scale an 8-bit channel by a factor in `[0, 1]`, rounding to nearest.
#[inline]
pub(crate) fn scale_u8(v: u8, f: f64) -> u8 {
    (f64::from(v) * clamp01(f)).round() as u8
}

/// Product of two 8-bit channels normalized back to 8 bits, `x * y / 255` rounded to nearest.
#[inline]
pub(crate) fn mul_div255(x: u8, y: u8) -> u8 {
    // At most 255 * 255 + 127, and the quotient never exceeds 255.
    ((u32::from(x) * u32::from(y) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
