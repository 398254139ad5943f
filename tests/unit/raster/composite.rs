use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = Rgba8Premul::from_straight_rgba(10, 20, 30, 40);
    assert_eq!(over(dst, Rgba8Premul::transparent()), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = Rgba8Premul::opaque(0, 0, 0);
    let src = Rgba8Premul::opaque(255, 0, 0);
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let src = Rgba8Premul {
        r: 100,
        g: 110,
        b: 120,
        a: 200,
    };
    assert_eq!(over(Rgba8Premul::transparent(), src), src);
}

#[test]
fn over_opaque_dst_stays_opaque() {
    let dst = Rgba8Premul::opaque(200, 200, 200);
    let src = Rgba8Premul::from_straight_rgba(0, 0, 0, 128);
    let out = over(dst, src);
    assert_eq!(out.a, 255);
    // 200 * 127 / 255, rounded.
    assert_eq!(out.r, 100);
}

#[test]
fn draw_over_rejects_mismatched_sizes() {
    let mut dst = Raster::new(4, 4);
    let layer = Raster::new(3, 4);
    assert!(draw_over(&mut dst, &layer).is_err());
}

#[test]
fn draw_over_only_touches_visible_layer_pixels() {
    let mut dst = Raster::new(2, 1);
    dst.fill(Rgba8Premul::opaque(1, 2, 3));
    let mut layer = Raster::new(2, 1);
    layer.set_pixel(1, 0, Rgba8Premul::opaque(9, 9, 9));

    draw_over(&mut dst, &layer).unwrap();
    assert_eq!(dst.pixel(0, 0), Some(Rgba8Premul::opaque(1, 2, 3)));
    assert_eq!(dst.pixel(1, 0), Some(Rgba8Premul::opaque(9, 9, 9)));
}
