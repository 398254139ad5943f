use super::*;

fn rgb(r: u8, g: u8, b: u8) -> Rgb8 {
    Rgb8 { r, g, b }
}

#[test]
fn out_of_domain_is_black() {
    assert_eq!(hsl_to_rgb(241, 0, 0), Rgb8::BLACK);
    assert_eq!(hsl_to_rgb(-1, 0, 0), Rgb8::BLACK);
    assert_eq!(hsl_to_rgb(0, 241, 120), Rgb8::BLACK);
    assert_eq!(hsl_to_rgb(0, 240, -5), Rgb8::BLACK);
    assert_eq!(hsl_to_rgb(120, 120, 241), Rgb8::BLACK);
}

#[test]
fn reference_values() {
    assert_eq!(hsl_to_rgb(0, 240, 120), rgb(254, 0, 0));
    assert_eq!(hsl_to_rgb(240, 240, 240), rgb(254, 224, 224));
    assert_eq!(hsl_to_rgb(40, 240, 120), rgb(254, 255, 0));
    assert_eq!(hsl_to_rgb(0, 0, 0), rgb(0, 0, 0));
}

#[test]
fn background_lightness_quantizes() {
    // Darkening divides before multiplying, so 255 and 256 both collapse to 2 * l.
    assert_eq!(hsl_to_rgb(120, 240, 50), rgb(0, 100, 100));
    assert_eq!(hsl_to_rgb(1, 240, 50), rgb(100, 0, 0));
    assert_eq!(hsl_to_rgb(46, 240, 50), rgb(100, 100, 0));
    assert_eq!(hsl_to_rgb(175, 240, 50), rgb(0, 0, 100));
}

#[test]
fn wave_lightness_values() {
    assert_eq!(hsl_to_rgb(60, 240, 170), rgb(255, 254, 84));
    assert_eq!(hsl_to_rgb(147, 240, 170), rgb(84, 255, 254));
    assert_eq!(hsl_to_rgb(230, 240, 170), rgb(254, 84, 255));
}

#[test]
fn zero_saturation_is_gray() {
    assert_eq!(hsl_to_rgb(100, 0, 200), rgb(200, 200, 200));
    assert_eq!(hsl_to_rgb(240, 0, 119), rgb(119, 119, 119));
}

#[test]
fn opaque_conversion_keeps_channels() {
    let px = rgb(10, 20, 30).to_opaque();
    assert_eq!(px.to_array(), [10, 20, 30, 255]);
}
