use crate::foundation::{core::Rgba8, math::mul_div255};

/// Source-over for straight-alpha pixels.
///
/// The blend itself runs in premultiplied space and the result is converted back, so partially
/// transparent results can lose a little colour precision. Opaque and fully transparent sources
/// are exact.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    match src.a {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let da = mul_div255(dst.a, 255 - src.a);

    let channel =
        |s: u8, d: u8| -> u16 { u16::from(mul_div255(s, src.a)) + u16::from(mul_div255(d, da)) };
    let out_a = u16::from(src.a) + u16::from(da);
    let premul = [
        channel(src.r, dst.r),
        channel(src.g, dst.g),
        channel(src.b, dst.b),
    ];

    let unpremul = |c: u16| -> u8 {
        let v = (u32::from(c) * 255 + u32::from(out_a) / 2) / u32::from(out_a);
        v.min(255) as u8
    };
    Rgba8::new(
        unpremul(premul[0]),
        unpremul(premul[1]),
        unpremul(premul[2]),
        out_a.min(255) as u8,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
