use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = Rgba8::new(10, 20, 30, 40);
    assert_eq!(over(dst, Rgba8::new(255, 255, 255, 0)), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let src = Rgba8::opaque(255, 0, 0);
    assert_eq!(over(Rgba8::BLACK, src), src);
}

#[test]
fn over_dst_transparent_keeps_src_colour() {
    let src = Rgba8::new(100, 110, 120, 200);
    let out = over(Rgba8::TRANSPARENT, src);
    assert_eq!(out.a, 200);
    for (o, s) in [(out.r, src.r), (out.g, src.g), (out.b, src.b)] {
        assert!(o.abs_diff(s) <= 1, "{o} vs {s}");
    }
}

#[test]
fn over_half_alpha_on_opaque_mixes() {
    let out = over(Rgba8::BLACK, Rgba8::new(255, 255, 255, 128));
    assert_eq!(out.a, 255);
    assert!(out.r.abs_diff(128) <= 1);
}
